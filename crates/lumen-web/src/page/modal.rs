//! Project details modal, fed by each card's `data-project` JSON.

use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

use lumen_engine::ProjectInfo;

pub fn install(document: &Document) -> Result<(), JsValue> {
    let (Some(modal), Some(content)) = (
        document.get_element_by_id("projectModal"),
        document.get_element_by_id("modalContent"),
    ) else {
        log::debug!("modal: page has no #projectModal");
        return Ok(());
    };

    let buttons = document.query_selector_all(".project .view")?;
    for i in 0..buttons.length() {
        let Some(node) = buttons.get(i) else {
            continue;
        };
        let Ok(button) = node.dyn_into::<Element>() else {
            continue;
        };
        let modal = modal.clone();
        let content = content.clone();
        let origin = button.clone();
        EventListener::new(&button, "click", move |_| {
            if let Err(err) = open_for(&origin, &modal, &content) {
                log::warn!("modal: open failed: {:?}", err);
            }
        })
        .forget();
    }

    if let Some(close) = document.get_element_by_id("modalClose") {
        let modal = modal.clone();
        EventListener::new(&close, "click", move |_| hide(&modal)).forget();
    }

    // A click on the backdrop (the modal root itself) also closes.
    let backdrop = modal.clone();
    let modal_js: JsValue = modal.clone().into();
    EventListener::new(&modal, "click", move |event| {
        let Some(target) = event.target() else {
            return;
        };
        let target_js: JsValue = target.into();
        if target_js == modal_js {
            hide(&backdrop);
        }
    })
    .forget();

    Ok(())
}

fn open_for(button: &Element, modal: &Element, content: &Element) -> Result<(), JsValue> {
    let Some(card) = button.closest(".project")? else {
        return Ok(());
    };
    let Some(raw) = card.get_attribute("data-project") else {
        log::warn!("modal: card has no data-project attribute");
        return Ok(());
    };
    let info = match ProjectInfo::from_json(&raw) {
        Ok(info) => info,
        Err(err) => {
            log::warn!("modal: bad data-project JSON: {}", err);
            return Ok(());
        }
    };
    content.set_inner_html(&info.modal_html());
    modal.class_list().add_1("show")?;
    modal.set_attribute("aria-hidden", "false")?;
    Ok(())
}

fn hide(modal: &Element) {
    let _ = modal.class_list().remove_1("show");
    let _ = modal.set_attribute("aria-hidden", "true");
}
