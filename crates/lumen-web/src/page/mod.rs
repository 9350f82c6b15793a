//! One-shot DOM wiring for the page's peripheral features. Each installer
//! degrades silently when its elements are absent.

pub mod meters;
pub mod modal;
pub mod nav;
pub mod reveal;
pub mod theme;
pub mod tilt;
pub mod typing;
