//! The hero particle field: a drifting, loosely interconnected set of
//! points rendered behind the page header.
//!
//! Particle count is derived from canvas area; resize rebuilds the whole
//! field. Pairwise link computation is O(n²) per frame; n is bounded by
//! `area / density` and stays in the tens to low hundreds for typical
//! viewports.

use glam::Vec2;

use crate::api::effect::{Effect, StageConfig};
use crate::core::rng::Rng;
use crate::input::InputQueue;
use crate::render::sketch::{DrawOp, FrameSketch, Rgba};

/// Tuning constants for the particle field.
/// Defaults match the page's hero styling; all are overridable.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Canvas area in px² per particle; count = round(w * h / density).
    pub density: f32,
    /// How far past the canvas edge a particle may drift before reset.
    pub margin: f32,
    /// Min/max particle radius.
    pub radius_range: (f32, f32),
    /// Min/max horizontal drift per tick.
    pub vel_x_range: (f32, f32),
    /// Min/max vertical drift per tick.
    pub vel_y_range: (f32, f32),
    /// Min/max per-particle opacity.
    pub alpha_range: (f32, f32),
    /// Shared hue for particles and links.
    pub tint: Rgba,
    /// Maximum distance at which two particles are linked.
    pub link_distance: f32,
    /// Link opacity at the threshold distance.
    pub link_base_alpha: f32,
    /// Additional link opacity as distance approaches zero.
    pub link_alpha_scale: f32,
    /// Link stroke width.
    pub link_width: f32,
    /// Gradient stops painted behind the particles each frame.
    pub backdrop: (Rgba, Rgba),
    /// Portion of the viewport height the hero canvas covers.
    pub height_ratio: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            density: 90_000.0,
            margin: 20.0,
            radius_range: (0.6, 3.0),
            vel_x_range: (-0.25, 0.25),
            vel_y_range: (-0.15, 0.15),
            alpha_range: (0.06, 0.25),
            tint: Rgba::new(125, 200, 255, 1.0),
            link_distance: 110.0,
            link_base_alpha: 0.01,
            link_alpha_scale: 0.06,
            link_width: 0.6,
            backdrop: (Rgba::new(6, 18, 36, 0.35), Rgba::new(2, 8, 14, 0.55)),
            height_ratio: 0.9,
        }
    }
}

/// A single drifting point. Plain data; the field owns all behavior.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub alpha: f32,
}

impl Particle {
    /// Draw a fresh particle uniformly at random within the bounds.
    fn random(rng: &mut Rng, width: f32, height: f32, config: &FieldConfig) -> Self {
        Particle {
            pos: Vec2::new(rng.range(0.0, width), rng.range(0.0, height)),
            vel: Vec2::new(
                rng.range(config.vel_x_range.0, config.vel_x_range.1),
                rng.range(config.vel_y_range.0, config.vel_y_range.1),
            ),
            radius: rng.range(config.radius_range.0, config.radius_range.1),
            alpha: rng.range(config.alpha_range.0, config.alpha_range.1),
        }
    }
}

/// The live particle set for one canvas, stored as a flat arena.
pub struct ParticleField {
    config: FieldConfig,
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    rng: Rng,
}

impl ParticleField {
    pub fn new(config: FieldConfig, seed: u64) -> Self {
        Self {
            config,
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
            rng: Rng::new(seed),
        }
    }

    /// Particle count for a surface of the given size.
    pub fn count_for(width: f32, height: f32, density: f32) -> usize {
        (width * height / density).round() as usize
    }

    /// Link opacity for a pair at distance `d`, or None at or past the
    /// threshold. Linear falloff: `base + scale * (1 - d / link_distance)`.
    pub fn link_alpha(&self, d: f32) -> Option<f32> {
        if d < self.config.link_distance {
            Some(
                self.config.link_base_alpha
                    + self.config.link_alpha_scale * (1.0 - d / self.config.link_distance),
            )
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Iterate over all particles.
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Iterate over all particles mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
        self.particles.iter_mut()
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Advance every particle one tick. A particle more than `margin`
    /// outside the bounds is replaced with a fresh one inside the canvas.
    fn step_particles(&mut self) {
        let (w, h, m) = (self.width, self.height, self.config.margin);
        for i in 0..self.particles.len() {
            let mut p = self.particles[i];
            p.pos += p.vel;
            if p.pos.x < -m || p.pos.x > w + m || p.pos.y < -m || p.pos.y > h + m {
                p = Particle::random(&mut self.rng, w, h, &self.config);
            }
            self.particles[i] = p;
        }
    }
}

impl Effect for ParticleField {
    fn config(&self) -> StageConfig {
        StageConfig {
            height_ratio: self.config.height_ratio,
        }
    }

    /// Full reinitialization: the old field is discarded, count recomputed
    /// from the new area.
    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        let count = Self::count_for(width, height, self.config.density);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let p = Particle::random(&mut self.rng, width, height, &self.config);
            self.particles.push(p);
        }
        log::debug!("particle field: {}x{} -> {} particles", width, height, count);
    }

    fn update(&mut self, _dt_ms: f32, _input: &InputQueue) {
        // Velocity is expressed in pixels per tick, not per millisecond.
        self.step_particles();
    }

    fn render(&self, sketch: &mut FrameSketch) {
        let (start, end) = self.config.backdrop;
        sketch.push(DrawOp::Backdrop { start, end });

        for p in &self.particles {
            sketch.push(DrawOp::Circle {
                center: p.pos,
                radius: p.radius,
                fill: self.config.tint.with_alpha(p.alpha),
            });
        }

        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a = &self.particles[i];
                let b = &self.particles[j];
                let d = a.pos.distance(b.pos);
                if let Some(alpha) = self.link_alpha(d) {
                    sketch.push(DrawOp::Line {
                        from: a.pos,
                        to: b.pos,
                        width: self.config.link_width,
                        stroke: self.config.tint.with_alpha(alpha),
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> ParticleField {
        ParticleField::new(FieldConfig::default(), 42)
    }

    #[test]
    fn count_follows_area() {
        // 1000x900 viewport -> 1000x810 canvas -> round(810000 / 90000) = 9
        assert_eq!(ParticleField::count_for(1000.0, 810.0, 90_000.0), 9);
        // 300x200 viewport -> 300x180 canvas -> round(54000 / 90000) = 1
        assert_eq!(ParticleField::count_for(300.0, 180.0, 90_000.0), 1);
    }

    #[test]
    fn resize_initializes_field() {
        let mut f = field();
        f.resize(1000.0, 810.0);
        assert_eq!(f.len(), 9);
        for p in f.iter() {
            assert!(p.pos.x >= 0.0 && p.pos.x < 1000.0);
            assert!(p.pos.y >= 0.0 && p.pos.y < 810.0);
        }
    }

    #[test]
    fn resize_discards_old_field() {
        let mut f = field();
        f.resize(1000.0, 810.0);
        assert_eq!(f.len(), 9);
        f.resize(300.0, 180.0);
        assert_eq!(f.len(), 1);
        // Old positions are gone: everything lies inside the new bounds.
        for p in f.iter() {
            assert!(p.pos.x < 300.0 && p.pos.y < 180.0);
        }
    }

    #[test]
    fn resize_cardinality_is_idempotent() {
        let mut f = field();
        f.resize(1000.0, 810.0);
        let first = f.len();
        f.resize(1000.0, 810.0);
        assert_eq!(f.len(), first);
    }

    #[test]
    fn particles_stay_within_margin() {
        let mut f = field();
        f.resize(400.0, 300.0);
        let input = InputQueue::new();
        let m = f.config().margin;
        for _ in 0..2000 {
            f.update(16.7, &input);
            for p in f.iter() {
                assert!(
                    p.pos.x >= -m && p.pos.x <= 400.0 + m,
                    "x escaped margin: {}",
                    p.pos.x
                );
                assert!(
                    p.pos.y >= -m && p.pos.y <= 300.0 + m,
                    "y escaped margin: {}",
                    p.pos.y
                );
            }
        }
    }

    #[test]
    fn out_of_bounds_particle_resets() {
        let mut f = field();
        f.resize(400.0, 300.0);
        let stray = f.iter_mut().next().unwrap();
        stray.pos = Vec2::new(500.0, 50.0);
        stray.vel = Vec2::ZERO;
        f.update(16.7, &InputQueue::new());
        let reborn = f.iter().next().unwrap();
        assert!(reborn.pos.x >= 0.0 && reborn.pos.x < 400.0);
        assert!(reborn.pos.y >= 0.0 && reborn.pos.y < 300.0);
    }

    #[test]
    fn link_alpha_linear_falloff() {
        let config = FieldConfig {
            link_distance: 90.0,
            link_base_alpha: 0.015,
            link_alpha_scale: 0.08,
            ..FieldConfig::default()
        };
        let f = ParticleField::new(config, 1);
        let alpha = f.link_alpha(45.0).unwrap();
        assert!((alpha - 0.055).abs() < 1e-6, "got {}", alpha);
    }

    #[test]
    fn no_link_at_or_past_threshold() {
        let f = field();
        assert!(f.link_alpha(110.0).is_none());
        assert!(f.link_alpha(200.0).is_none());
        assert!(f.link_alpha(109.9).unwrap() > 0.0);
    }

    #[test]
    fn render_links_only_close_pairs() {
        let mut f = field();
        // 600x300 -> exactly 2 particles
        f.resize(600.0, 300.0);
        assert_eq!(f.len(), 2);

        let positions = [Vec2::new(10.0, 10.0), Vec2::new(50.0, 10.0)];
        for (p, pos) in f.iter_mut().zip(positions) {
            p.pos = pos;
        }
        let mut sketch = FrameSketch::new();
        sketch.begin(600.0, 300.0);
        f.render(&mut sketch);
        assert_eq!(sketch.circle_count(), 2);
        assert_eq!(sketch.line_count(), 1, "d=40 < 110 should link");

        let positions = [Vec2::new(10.0, 10.0), Vec2::new(400.0, 10.0)];
        for (p, pos) in f.iter_mut().zip(positions) {
            p.pos = pos;
        }
        sketch.begin(600.0, 300.0);
        f.render(&mut sketch);
        assert_eq!(sketch.line_count(), 0, "d=390 >= 110 should not link");
    }

    #[test]
    fn render_paints_backdrop_first() {
        let mut f = field();
        f.resize(600.0, 300.0);
        let mut sketch = FrameSketch::new();
        sketch.begin(600.0, 300.0);
        f.render(&mut sketch);
        assert!(matches!(sketch.ops()[0], DrawOp::Backdrop { .. }));
    }

    #[test]
    fn same_seed_same_field() {
        let mut f1 = ParticleField::new(FieldConfig::default(), 7);
        let mut f2 = ParticleField::new(FieldConfig::default(), 7);
        f1.resize(1000.0, 810.0);
        f2.resize(1000.0, 810.0);
        for (a, b) in f1.iter().zip(f2.iter()) {
            assert_eq!(a.pos, b.pos);
            assert_eq!(a.vel, b.vel);
        }
    }
}
