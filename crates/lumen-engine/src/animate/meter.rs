//! Circular meter sweep: animates an SVG ring's dash offset from fully
//! hidden down to the target fill fraction.

use std::f32::consts::TAU;

use crate::animate::easing::Easing;

/// Ring geometry for the circular meters.
#[derive(Debug, Clone, Copy)]
pub struct RingGeometry {
    /// Side of the square SVG viewport in px.
    pub size: f32,
    /// Stroke width in px.
    pub stroke: f32,
}

impl RingGeometry {
    pub fn radius(&self) -> f32 {
        (self.size - self.stroke) / 2.0
    }

    pub fn circumference(&self) -> f32 {
        TAU * self.radius()
    }
}

impl Default for RingGeometry {
    fn default() -> Self {
        Self {
            size: 86.0,
            stroke: 4.0,
        }
    }
}

/// One running sweep animation for a meter.
///
/// The dash offset starts at the full circumference (ring hidden) and
/// converges on `circumference * (1 - value)` with an ease-out curve.
pub struct MeterSweep {
    geometry: RingGeometry,
    /// Target fill fraction in [0, 1].
    value: f32,
    duration_ms: f32,
    elapsed_ms: f32,
    easing: Easing,
}

impl MeterSweep {
    pub const DEFAULT_DURATION_MS: f32 = 900.0;

    pub fn new(value: f32, geometry: RingGeometry) -> Self {
        Self {
            geometry,
            value: value.clamp(0.0, 1.0),
            duration_ms: Self::DEFAULT_DURATION_MS,
            elapsed_ms: 0.0,
            easing: Easing::CubicOut,
        }
    }

    pub fn with_duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn geometry(&self) -> RingGeometry {
        self.geometry
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Dash offset once the sweep has finished.
    pub fn target_offset(&self) -> f32 {
        self.geometry.circumference() * (1.0 - self.value)
    }

    /// Advance by `dt_ms` and return the current dash offset.
    pub fn tick(&mut self, dt_ms: f32) -> f32 {
        self.elapsed_ms = (self.elapsed_ms + dt_ms).min(self.duration_ms);
        let t = if self.duration_ms <= 0.0 {
            1.0
        } else {
            self.elapsed_ms / self.duration_ms
        };
        let c = self.geometry.circumference();
        c - (c - self.target_offset()) * self.easing.apply(t)
    }

    /// Whether the sweep has reached its target.
    pub fn done(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    /// Label shown inside the ring when the sweep completes.
    pub fn percent_label(&self) -> String {
        format!("{}%", (self.value * 100.0).round() as i32)
    }
}
