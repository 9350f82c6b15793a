//! Navigation chrome: year stamp, resume link, page transition mask,
//! smooth anchor scrolling.

use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

/// Where the resume button points.
const RESUME_URL: &str = "https://example.com/Lashika_Resume.pdf";
/// Delay before the startup mask slides away.
const MASK_DISMISS_MS: u32 = 350;
/// How long the mask stays down during an anchor transition.
const MASK_TRANSITION_MS: u32 = 450;

pub fn install(document: &Document) -> Result<(), JsValue> {
    stamp_year(document);
    wire_resume_button(document);
    dismiss_mask_after_startup(document);
    wire_anchors(document)?;
    Ok(())
}

fn stamp_year(document: &Document) {
    if let Some(el) = document.get_element_by_id("year") {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}

fn wire_resume_button(document: &Document) {
    let Some(button) = document.get_element_by_id("resumeBtn") else {
        return;
    };
    EventListener::new(&button, "click", move |_| {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.open_with_url_and_target(RESUME_URL, "_blank") {
                log::warn!("nav: resume open failed: {:?}", err);
            }
        }
    })
    .forget();
}

/// Slide the transition mask away shortly after startup.
fn dismiss_mask_after_startup(document: &Document) {
    let Some(mask) = mask_element(document) else {
        return;
    };
    Timeout::new(MASK_DISMISS_MS, move || slide_mask(&mask, false)).forget();
}

fn mask_element(document: &Document) -> Option<HtmlElement> {
    document
        .get_element_by_id("pageMask")?
        .dyn_into::<HtmlElement>()
        .ok()
}

fn slide_mask(mask: &HtmlElement, shown: bool) {
    let transform = if shown {
        "translateY(0%)"
    } else {
        "translateY(-110%)"
    };
    let _ = mask.style().set_property("transform", transform);
}

/// Intercept in-page anchors: show the mask briefly and scroll smoothly
/// to the target section.
fn wire_anchors(document: &Document) -> Result<(), JsValue> {
    let anchors = document.query_selector_all(r##"a[href^="#"]"##)?;
    for i in 0..anchors.length() {
        let Some(node) = anchors.get(i) else {
            continue;
        };
        let Ok(anchor) = node.dyn_into::<Element>() else {
            continue;
        };
        let doc = document.clone();
        let link = anchor.clone();
        EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(href) = link.get_attribute("href") else {
                    return;
                };
                if href.len() <= 1 {
                    return;
                }
                event.prevent_default();

                if let Some(mask) = mask_element(&doc) {
                    slide_mask(&mask, true);
                    Timeout::new(MASK_TRANSITION_MS, move || slide_mask(&mask, false)).forget();
                }

                match doc.query_selector(&href) {
                    Ok(Some(target)) => {
                        let options = ScrollIntoViewOptions::new();
                        options.set_behavior(ScrollBehavior::Smooth);
                        options.set_block(ScrollLogicalPosition::Start);
                        target.scroll_into_view_with_scroll_into_view_options(&options);
                    }
                    Ok(None) => {}
                    Err(err) => log::debug!("nav: bad anchor target {}: {:?}", href, err),
                }
            },
        )
        .forget();
    }
    Ok(())
}
