//! Reveal-on-scroll: elements fade and rise into place the first time
//! they enter the viewport, then stop being observed.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

/// Selector set the page reveals.
const REVEAL_SELECTOR: &str =
    ".glass, .section-title, .project, .profile-card, .card, .timeline-list li";
const REVEAL_THRESHOLD: f64 = 0.12;

pub fn install(document: &Document) -> Result<(), JsValue> {
    let nodes = document.query_selector_all(REVEAL_SELECTOR)?;
    if nodes.length() == 0 {
        log::debug!("reveal: nothing to observe");
        return Ok(());
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(el) = target.dyn_ref::<HtmlElement>() {
                    let style = el.style();
                    let _ = style.set_property("opacity", "1");
                    let _ = style.set_property("transform", "none");
                }
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for i in 0..nodes.length() {
        let Some(node) = nodes.get(i) else {
            continue;
        };
        let Ok(el) = node.dyn_into::<Element>() else {
            continue;
        };
        if let Some(html) = el.dyn_ref::<HtmlElement>() {
            let style = html.style();
            let _ = style.set_property("opacity", "0");
            let _ = style.set_property("transform", "translateY(18px)");
        }
        observer.observe(&el);
    }
    Ok(())
}
