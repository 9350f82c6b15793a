//! Page animation logic that is not tied to a canvas stage: easing
//! curves, the typing carousel, meter sweeps, and tilt math.

pub mod easing;
pub mod meter;
pub mod tilt;
pub mod typing;

pub use easing::{ease, lerp, Easing};
pub use meter::{MeterSweep, RingGeometry};
pub use tilt::{tilt_for_pointer, TiltConfig, TiltTransform};
pub use typing::{TypingConfig, TypingLoop};
