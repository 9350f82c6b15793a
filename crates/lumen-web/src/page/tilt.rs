//! Pointer tilt on project cards.

use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, MouseEvent};

use lumen_engine::{tilt_for_pointer, TiltConfig};

/// Transition used while the pointer is over the card.
const HOVER_TRANSITION: &str = "transform 120ms linear";
/// Springy settle once the pointer leaves.
const RELEASE_TRANSITION: &str = "transform .6s cubic-bezier(.2,.9,.2,1)";

pub fn install(document: &Document) -> Result<(), JsValue> {
    let cards = document.query_selector_all(".tilt")?;
    if cards.length() == 0 {
        log::debug!("tilt: no cards on this page");
        return Ok(());
    }
    for i in 0..cards.length() {
        let Some(node) = cards.get(i) else {
            continue;
        };
        let Ok(card) = node.dyn_into::<HtmlElement>() else {
            continue;
        };
        attach(card);
    }
    Ok(())
}

fn attach(card: HtmlElement) {
    let config = TiltConfig::default();
    let target = card.clone();
    EventListener::new(&card, "pointermove", move |event| {
        let Some(e) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let rect = target.get_bounding_client_rect();
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        let px = ((e.client_x() as f64 - rect.left()) / rect.width()) as f32;
        let py = ((e.client_y() as f64 - rect.top()) / rect.height()) as f32;
        let transform = tilt_for_pointer(px, py, &config).css(&config);
        let style = target.style();
        let _ = style.set_property("transform", &transform);
        let _ = style.set_property("transition", HOVER_TRANSITION);
    })
    .forget();

    let target = card.clone();
    EventListener::new(&card, "pointerleave", move |_| {
        let style = target.style();
        let _ = style.set_property("transform", "");
        let _ = style.set_property("transition", RELEASE_TRANSITION);
    })
    .forget();
}
