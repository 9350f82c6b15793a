//! Canvas effects: animated subsystems rendered through a stage runner.

pub mod field;
pub mod trail;

pub use field::{FieldConfig, Particle, ParticleField};
pub use trail::{CursorTrail, TrailConfig};
