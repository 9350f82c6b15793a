pub mod animate;
pub mod api;
pub mod content;
pub mod core;
pub mod effects;
pub mod input;
pub mod render;

// Re-export key types at crate root for convenience
pub use animate::easing::{ease, lerp, Easing};
pub use animate::meter::{MeterSweep, RingGeometry};
pub use animate::tilt::{tilt_for_pointer, TiltConfig, TiltTransform};
pub use animate::typing::{TypingConfig, TypingLoop};
pub use api::effect::{Effect, StageConfig};
pub use content::project::{escape_html, ProjectInfo};
pub use content::theme::Theme;
pub use crate::core::rng::Rng;
pub use crate::core::time::FrameClock;
pub use effects::field::{FieldConfig, Particle, ParticleField};
pub use effects::trail::{CursorTrail, TrailConfig};
pub use input::{InputEvent, InputQueue};
pub use render::sketch::{DrawOp, FrameSketch, Rgba};
