use crate::input::InputQueue;
use crate::render::sketch::FrameSketch;

/// Configuration for a canvas stage, provided by the effect.
#[derive(Debug, Clone)]
pub struct StageConfig {
    /// Portion of the viewport height the stage canvas covers (1.0 = full).
    pub height_ratio: f32,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self { height_ratio: 1.0 }
    }
}

/// The core contract every animated canvas subsystem fulfills.
///
/// The web runner owns one effect per stage and drives it once per display
/// refresh: `update` advances state, `render` records draw commands into
/// the frame sketch, and the runner replays the sketch onto the canvas.
pub trait Effect {
    /// Return stage configuration. Called once before the first frame.
    fn config(&self) -> StageConfig {
        StageConfig::default()
    }

    /// React to a new canvas pixel size. May rebuild internal state.
    fn resize(&mut self, width: f32, height: f32);

    /// Advance animation state by `dt_ms` milliseconds of frame time.
    fn update(&mut self, dt_ms: f32, input: &InputQueue);

    /// Record this frame's draw commands into the sketch.
    fn render(&self, sketch: &mut FrameSketch);
}
