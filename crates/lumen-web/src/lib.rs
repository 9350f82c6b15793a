//! WASM bridge: wires the Lumen engine to the portfolio page.

pub mod canvas;
pub mod page;
pub mod runner;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use lumen_engine::{CursorTrail, FieldConfig, ParticleField, TrailConfig};

pub use runner::StageRunner;

/// Canvas behind the hero section.
const HERO_CANVAS_ID: &str = "heroCanvas";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Ok(());
    };

    page::theme::install(&document);
    page::typing::install(&document);
    if let Err(err) = page::nav::install(&document) {
        log::warn!("nav install failed: {:?}", err);
    }
    if let Err(err) = page::reveal::install(&document) {
        log::warn!("reveal install failed: {:?}", err);
    }
    if let Err(err) = page::meters::install(&document) {
        log::warn!("meters install failed: {:?}", err);
    }
    if let Err(err) = page::tilt::install(&document) {
        log::warn!("tilt install failed: {:?}", err);
    }
    if let Err(err) = page::modal::install(&document) {
        log::warn!("modal install failed: {:?}", err);
    }

    start_hero_field();
    start_cursor_trail(&document);

    log::info!("lumen: page wired");
    Ok(())
}

/// The hero particle field. A page without #heroCanvas simply never
/// starts the stage.
fn start_hero_field() {
    let seed = js_sys::Date::now() as u64;
    let field = ParticleField::new(FieldConfig::default(), seed);
    let _ = StageRunner::start(HERO_CANVAS_ID, field);
}

/// Cursor glow trail on a dynamically created full-viewport overlay.
fn start_cursor_trail(document: &web_sys::Document) {
    let overlay = match build_overlay_canvas(document) {
        Ok(canvas) => canvas,
        Err(err) => {
            log::warn!("trail: overlay canvas failed: {:?}", err);
            return;
        }
    };
    let trail = CursorTrail::new(TrailConfig::default());
    if let Some(stage) = StageRunner::start_on(overlay, trail) {
        StageRunner::follow_pointer(&stage);
    }
}

fn build_overlay_canvas(
    document: &web_sys::Document,
) -> Result<web_sys::HtmlCanvasElement, JsValue> {
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<web_sys::HtmlCanvasElement>()?;
    let style = canvas.style();
    style.set_property("position", "fixed")?;
    style.set_property("left", "0")?;
    style.set_property("top", "0")?;
    style.set_property("pointer-events", "none")?;
    style.set_property("z-index", "120")?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    body.append_child(&canvas)?;
    Ok(canvas)
}
