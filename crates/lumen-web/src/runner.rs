use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use lumen_engine::{Effect, FrameClock, FrameSketch, InputEvent, InputQueue, StageConfig};

use crate::canvas;

/// Drives one canvas stage: owns the surface, the effect, and the
/// self-re-registering animation-frame loop.
///
/// The loop is single-flight: one stored frame handle, and the next
/// frame is requested only after the current tick has run to completion.
pub struct StageRunner<E: Effect> {
    surface: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    effect: E,
    config: StageConfig,
    input: InputQueue,
    clock: FrameClock,
    sketch: FrameSketch,
    frame: Option<AnimationFrame>,
}

impl<E: Effect + 'static> StageRunner<E> {
    /// Bind `effect` to the canvas with the given element id and start
    /// the perpetual frame loop. A missing canvas is the one recognized
    /// failure: the stage silently never starts.
    pub fn start(canvas_id: &str, effect: E) -> Option<Rc<RefCell<Self>>> {
        let document = web_sys::window()?.document()?;
        let surface = match document.get_element_by_id(canvas_id) {
            Some(el) => el.dyn_into::<HtmlCanvasElement>().ok()?,
            None => {
                log::warn!("stage '{}': canvas not found, not starting", canvas_id);
                return None;
            }
        };
        Self::start_on(surface, effect)
    }

    /// Start on a canvas element created by the caller (e.g. the trail
    /// overlay, which is not part of the page markup).
    pub fn start_on(surface: HtmlCanvasElement, effect: E) -> Option<Rc<RefCell<Self>>> {
        let ctx = surface
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        let config = effect.config();
        let runner = Rc::new(RefCell::new(Self {
            surface,
            ctx,
            effect,
            config,
            input: InputQueue::new(),
            clock: FrameClock::new(),
            sketch: FrameSketch::new(),
            frame: None,
        }));

        runner.borrow_mut().fit_to_viewport();
        Self::listen_for_resize(&runner);
        Self::schedule(&runner);
        Some(runner)
    }

    /// Forward window mousemove positions into this stage's input queue.
    pub fn follow_pointer(runner: &Rc<RefCell<Self>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let stage = Rc::clone(runner);
        EventListener::new(&window, "mousemove", move |event| {
            if let Some(e) = event.dyn_ref::<MouseEvent>() {
                stage.borrow_mut().input.push(InputEvent::PointerMove {
                    x: e.client_x() as f32,
                    y: e.client_y() as f32,
                });
            }
        })
        .forget();
    }

    /// Size the canvas from the viewport and let the effect rebuild.
    fn fit_to_viewport(&mut self) {
        let (vw, vh) = viewport_size();
        let width = vw;
        let height = vh * self.config.height_ratio as f64;
        self.surface.set_width(width as u32);
        self.surface.set_height(height as u32);
        self.effect.resize(width as f32, height as f32);
    }

    fn listen_for_resize(runner: &Rc<RefCell<Self>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let stage = Rc::clone(runner);
        EventListener::new(&window, "resize", move |_| {
            stage.borrow_mut().fit_to_viewport();
        })
        .forget();
    }

    /// Request the next animation frame. Re-registered after every tick.
    fn schedule(runner: &Rc<RefCell<Self>>) {
        let stage = Rc::clone(runner);
        let handle = request_animation_frame(move |timestamp_ms| {
            stage.borrow_mut().frame.take();
            stage.borrow_mut().tick(timestamp_ms);
            Self::schedule(&stage);
        });
        runner.borrow_mut().frame = Some(handle);
    }

    /// One frame: advance the effect, rebuild the sketch, replay it.
    fn tick(&mut self, timestamp_ms: f64) {
        let dt = self.clock.delta(timestamp_ms);
        self.effect.update(dt, &self.input);
        self.input.clear();

        let (w, h) = (self.surface.width() as f32, self.surface.height() as f32);
        self.sketch.begin(w, h);
        self.effect.render(&mut self.sketch);
        if let Err(err) = canvas::replay(&self.ctx, &self.sketch) {
            log::warn!("stage replay failed: {:?}", err);
        }
    }
}

/// Current viewport size in CSS pixels.
fn viewport_size() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w, h)
}
