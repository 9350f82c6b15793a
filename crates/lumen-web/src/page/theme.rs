//! Theme toggling with a persisted preference.

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent};

use lumen_engine::content::theme::{self, Theme};

/// Apply the stored preference, wire the toggle button and the
/// Ctrl/Cmd+D shortcut.
pub fn install(document: &Document) {
    if let Some(Theme::Dark) = stored_theme() {
        apply(document, Theme::Dark);
    }

    match document.get_element_by_id("themeBtn") {
        Some(button) => {
            let doc = document.clone();
            EventListener::new(&button, "click", move |_| toggle(&doc)).forget();
        }
        None => log::debug!("theme: no #themeBtn on this page"),
    }

    if let Some(window) = web_sys::window() {
        let doc = document.clone();
        EventListener::new_with_options(
            &window,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(e) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if (e.ctrl_key() || e.meta_key()) && e.key().eq_ignore_ascii_case("d") {
                    e.prevent_default();
                    toggle(&doc);
                }
            },
        )
        .forget();
    }
}

/// Flip the theme, update the button label, persist the choice.
pub fn toggle(document: &Document) {
    let next = current(document).toggled();
    apply(document, next);
    store(next);
}

/// Current theme as reflected by the body class.
fn current(document: &Document) -> Theme {
    match document.body() {
        Some(body) if body.class_list().contains(theme::BODY_CLASS) => Theme::Dark,
        _ => Theme::Light,
    }
}

fn apply(document: &Document, choice: Theme) {
    if let Some(body) = document.body() {
        let classes = body.class_list();
        let result = if choice.is_dark() {
            classes.add_1(theme::BODY_CLASS)
        } else {
            classes.remove_1(theme::BODY_CLASS)
        };
        if let Err(err) = result {
            log::warn!("theme: body class toggle failed: {:?}", err);
        }
    }
    if let Some(button) = document.get_element_by_id("themeBtn") {
        button.set_text_content(Some(choice.button_label()));
    }
}

/// Stored preference, if any. Storage failures (private mode) read as
/// no preference.
fn stored_theme() -> Option<Theme> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let raw = storage.get_item(theme::STORAGE_KEY).ok()??;
    Some(Theme::from_stored(&raw))
}

fn store(choice: Theme) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(Some(storage)) = window.local_storage() {
        // Private-mode storage can refuse writes; the toggle still works.
        let _ = storage.set_item(theme::STORAGE_KEY, choice.as_str());
    }
}
