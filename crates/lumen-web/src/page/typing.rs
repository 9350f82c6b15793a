//! Typing animation bound to the #typing element.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::render::{request_animation_frame, AnimationFrame};
use web_sys::{Document, Element};

use lumen_engine::{FrameClock, TypingConfig, TypingLoop};

/// Role phrases typed under the page title.
const ROLES: [&str; 5] = [
    "Founder & CEO",
    "AI Innovator",
    "Robotics Engineer",
    "ML Explorer",
    "Competitive Programmer",
];

struct TypingStage {
    element: Element,
    carousel: TypingLoop,
    clock: FrameClock,
    frame: Option<AnimationFrame>,
}

/// Bind the phrase carousel to #typing; an absent element skips the
/// feature.
pub fn install(document: &Document) {
    let Some(element) = document.get_element_by_id("typing") else {
        log::debug!("typing: no #typing on this page");
        return;
    };
    let phrases = ROLES.iter().map(|s| s.to_string()).collect();
    let stage = Rc::new(RefCell::new(TypingStage {
        element,
        carousel: TypingLoop::new(phrases, TypingConfig::default()),
        clock: FrameClock::new(),
        frame: None,
    }));
    schedule(&stage);
}

fn schedule(stage: &Rc<RefCell<TypingStage>>) {
    let shared = Rc::clone(stage);
    let handle = request_animation_frame(move |timestamp_ms| {
        {
            let mut s = shared.borrow_mut();
            s.frame.take();
            let dt = s.clock.delta(timestamp_ms);
            if s.carousel.tick(dt) {
                let text = s.carousel.text();
                s.element.set_text_content(Some(&text));
            }
        }
        schedule(&shared);
    });
    stage.borrow_mut().frame = Some(handle);
}
