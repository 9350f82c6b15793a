//! Progress bars and circular meters, animated on first view.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use lumen_engine::{FrameClock, MeterSweep, RingGeometry};

const METER_SELECTOR: &str = ".prog-fill, .meter";
const METER_THRESHOLD: f64 = 0.3;
const SVG_NS: &str = "http://www.w3.org/2000/svg";
/// Gradient stops for the meter ring stroke.
const RING_STOPS: (&str, &str) = ("#66f0d4", "#7dd3fc");

pub fn install(document: &Document) -> Result<(), JsValue> {
    let nodes = document.query_selector_all(METER_SELECTOR)?;
    if nodes.length() == 0 {
        log::debug!("meters: nothing to animate");
        return Ok(());
    }

    let doc = document.clone();
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
                if target.class_list().contains("prog-fill") {
                    fill_progress_bar(&target);
                } else if target.class_list().contains("meter") {
                    if let Err(err) = start_meter(&doc, &target) {
                        log::warn!("meter: failed to build ring: {:?}", err);
                    }
                }
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(METER_THRESHOLD));
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
        observer.observe(&el);
    }
    Ok(())
}

/// Width animates through the page's CSS transition; we only set the
/// target percentage from `data-fill`.
fn fill_progress_bar(el: &Element) {
    let value = el.get_attribute("data-fill").unwrap_or_else(|| "60".into());
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property("width", &format!("{}%", value));
    }
}

/// Build the SVG ring inside the meter node and start its sweep.
fn start_meter(document: &Document, node: &Element) -> Result<(), JsValue> {
    let value = node
        .get_attribute("data-value")
        .and_then(|v| v.parse::<f32>().ok())
        .unwrap_or(0.6);
    let geometry = RingGeometry::default();
    let sweep = MeterSweep::new(value, geometry);
    let size = geometry.size;
    let circumference = geometry.circumference();

    let svg = document.create_element_ns(Some(SVG_NS), "svg")?;
    svg.set_attribute("width", &size.to_string())?;
    svg.set_attribute("height", &size.to_string())?;
    svg.set_attribute("viewBox", &format!("0 0 {} {}", size, size))?;

    let defs = document.create_element_ns(Some(SVG_NS), "defs")?;
    let gradient = document.create_element_ns(Some(SVG_NS), "linearGradient")?;
    gradient.set_attribute("id", "g")?;
    gradient.set_attribute("x1", "0%")?;
    gradient.set_attribute("y1", "0%")?;
    gradient.set_attribute("x2", "100%")?;
    gradient.set_attribute("y2", "0%")?;
    let stop1 = document.create_element_ns(Some(SVG_NS), "stop")?;
    stop1.set_attribute("offset", "0%")?;
    stop1.set_attribute("stop-color", RING_STOPS.0)?;
    let stop2 = document.create_element_ns(Some(SVG_NS), "stop")?;
    stop2.set_attribute("offset", "100%")?;
    stop2.set_attribute("stop-color", RING_STOPS.1)?;
    gradient.append_child(&stop1)?;
    gradient.append_child(&stop2)?;
    defs.append_child(&gradient)?;

    let bg = ring_circle(document, geometry)?;
    bg.set_attribute("stroke", "rgba(255,255,255,0.06)")?;

    let fg = ring_circle(document, geometry)?;
    fg.set_attribute("stroke", "url(#g)")?;
    fg.set_attribute("stroke-linecap", "round")?;
    fg.set_attribute(
        "transform",
        &format!("rotate(-90 {} {})", size / 2.0, size / 2.0),
    )?;
    fg.set_attribute(
        "stroke-dasharray",
        &format!("{} {}", circumference, circumference),
    )?;
    fg.set_attribute("stroke-dashoffset", &circumference.to_string())?;

    svg.append_child(&defs)?;
    svg.append_child(&bg)?;
    svg.append_child(&fg)?;
    node.set_inner_html("");
    node.append_child(&svg)?;

    animate_sweep(node.clone(), fg, sweep);
    Ok(())
}

fn ring_circle(document: &Document, geometry: RingGeometry) -> Result<Element, JsValue> {
    let circle = document.create_element_ns(Some(SVG_NS), "circle")?;
    circle.set_attribute("cx", &(geometry.size / 2.0).to_string())?;
    circle.set_attribute("cy", &(geometry.size / 2.0).to_string())?;
    circle.set_attribute("r", &geometry.radius().to_string())?;
    circle.set_attribute("stroke-width", &geometry.stroke.to_string())?;
    circle.set_attribute("fill", "none")?;
    Ok(circle)
}

struct SweepStage {
    meter: Element,
    ring: Element,
    sweep: MeterSweep,
    clock: FrameClock,
    frame: Option<AnimationFrame>,
}

/// Drive the dash offset with a short-lived frame loop that ends when
/// the sweep settles, then attach the percent label.
fn animate_sweep(meter: Element, ring: Element, sweep: MeterSweep) {
    let stage = Rc::new(RefCell::new(SweepStage {
        meter,
        ring,
        sweep,
        clock: FrameClock::new(),
        frame: None,
    }));
    schedule_sweep(&stage);
}

fn schedule_sweep(stage: &Rc<RefCell<SweepStage>>) {
    let shared = Rc::clone(stage);
    let handle = request_animation_frame(move |timestamp_ms| {
        let done = {
            let mut s = shared.borrow_mut();
            s.frame.take();
            let dt = s.clock.delta(timestamp_ms);
            let offset = s.sweep.tick(dt);
            let _ = s.ring.set_attribute("stroke-dashoffset", &offset.to_string());
            s.sweep.done()
        };
        if done {
            let s = shared.borrow();
            if let Err(err) = attach_label(&s.meter, &s.sweep) {
                log::warn!("meter: label failed: {:?}", err);
            }
        } else {
            schedule_sweep(&shared);
        }
    });
    stage.borrow_mut().frame = Some(handle);
}

/// Centered percent label added once the sweep settles.
fn attach_label(meter: &Element, sweep: &MeterSweep) -> Result<(), JsValue> {
    let Some(document) = meter.owner_document() else {
        return Ok(());
    };
    let label = document.create_element("div")?;
    if let Some(html) = label.dyn_ref::<HtmlElement>() {
        let style = html.style();
        let _ = style.set_property("position", "absolute");
        let _ = style.set_property("font-size", "13px");
        let _ = style.set_property("font-weight", "700");
        let _ = style.set_property("color", "var(--txt)");
        let _ = style.set_property("top", "40%");
        let _ = style.set_property("transform", "translateY(-50%)");
    }
    label.set_text_content(Some(&sweep.percent_label()));
    meter.append_child(&label)?;
    Ok(())
}
