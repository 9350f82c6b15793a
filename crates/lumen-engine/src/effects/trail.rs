//! Cursor glow trail: a short ribbon of fading circles following the
//! pointer on a full-viewport overlay canvas.

use std::collections::VecDeque;

use glam::Vec2;

use crate::api::effect::Effect;
use crate::input::{InputEvent, InputQueue};
use crate::render::sketch::{DrawOp, FrameSketch, Rgba};

/// Tuning constants for the cursor trail.
#[derive(Debug, Clone)]
pub struct TrailConfig {
    /// Maximum number of remembered pointer positions.
    pub max_points: usize,
    /// Radius of the newest circle; older ones shrink linearly to zero.
    pub max_radius: f32,
    /// Opacity of the newest circle.
    pub base_alpha: f32,
    /// Opacity lost across the length of the trail.
    pub alpha_falloff: f32,
    /// Trail hue.
    pub tint: Rgba,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            max_points: 16,
            max_radius: 18.0,
            base_alpha: 0.14,
            alpha_falloff: 0.12,
            tint: Rgba::new(125, 200, 255, 1.0),
        }
    }
}

/// Bounded deque of recent pointer positions, newest first.
pub struct CursorTrail {
    config: TrailConfig,
    points: VecDeque<Vec2>,
}

impl CursorTrail {
    pub fn new(config: TrailConfig) -> Self {
        let capacity = config.max_points;
        Self {
            config,
            points: VecDeque::with_capacity(capacity),
        }
    }

    /// Record a pointer position as the newest trail point.
    pub fn push(&mut self, pos: Vec2) {
        self.points.push_front(pos);
        while self.points.len() > self.config.max_points {
            self.points.pop_back();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate from the newest point to the oldest.
    pub fn iter(&self) -> impl Iterator<Item = &Vec2> {
        self.points.iter()
    }

    /// Circle radius for the point at `index` along the trail.
    fn radius_at(&self, index: usize) -> f32 {
        (1.0 - index as f32 / self.points.len() as f32) * self.config.max_radius
    }

    /// Circle opacity for the point at `index` along the trail.
    fn alpha_at(&self, index: usize) -> f32 {
        self.config.base_alpha
            - (index as f32 / self.points.len() as f32) * self.config.alpha_falloff
    }
}

impl Effect for CursorTrail {
    // Default stage config: full-viewport overlay.

    fn resize(&mut self, _width: f32, _height: f32) {}

    fn update(&mut self, _dt_ms: f32, input: &InputQueue) {
        for event in input.iter() {
            match event {
                InputEvent::PointerMove { x, y } => self.push(Vec2::new(*x, *y)),
            }
        }
    }

    fn render(&self, sketch: &mut FrameSketch) {
        for (i, p) in self.points.iter().enumerate() {
            sketch.push(DrawOp::Circle {
                center: *p,
                radius: self.radius_at(i),
                fill: self.config.tint.with_alpha(self.alpha_at(i)),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caps_at_max_points() {
        let mut trail = CursorTrail::new(TrailConfig::default());
        for i in 0..40 {
            trail.push(Vec2::new(i as f32, 0.0));
        }
        assert_eq!(trail.len(), 16);
    }

    #[test]
    fn newest_point_first() {
        let mut trail = CursorTrail::new(TrailConfig::default());
        trail.push(Vec2::new(1.0, 0.0));
        trail.push(Vec2::new(2.0, 0.0));
        assert_eq!(trail.iter().next().unwrap().x, 2.0);
    }

    #[test]
    fn circles_shrink_and_fade_along_trail() {
        let mut trail = CursorTrail::new(TrailConfig::default());
        for i in 0..16 {
            trail.push(Vec2::new(i as f32, i as f32));
        }
        let mut sketch = FrameSketch::new();
        sketch.begin(800.0, 600.0);
        trail.render(&mut sketch);
        assert_eq!(sketch.circle_count(), 16);

        let mut last_radius = f32::INFINITY;
        let mut last_alpha = f32::INFINITY;
        for op in sketch.ops() {
            if let DrawOp::Circle { radius, fill, .. } = op {
                assert!(*radius < last_radius, "radii must shrink");
                assert!(fill.a < last_alpha, "alphas must fade");
                last_radius = *radius;
                last_alpha = fill.a;
            }
        }
    }

    #[test]
    fn update_consumes_pointer_moves() {
        let mut trail = CursorTrail::new(TrailConfig::default());
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerMove { x: 5.0, y: 6.0 });
        input.push(InputEvent::PointerMove { x: 7.0, y: 8.0 });
        trail.update(16.7, &input);
        assert_eq!(trail.len(), 2);
        assert_eq!(*trail.iter().next().unwrap(), Vec2::new(7.0, 8.0));
    }
}
