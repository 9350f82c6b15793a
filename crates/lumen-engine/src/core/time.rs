/// Frame clock: turns host frame timestamps into bounded per-frame deltas.
/// The first frame yields zero; long stalls (tab in background, debugger)
/// are clamped so animations resume instead of jumping.
pub struct FrameClock {
    /// Timestamp of the previous frame, in milliseconds.
    last_ms: Option<f64>,
    /// Upper bound on a single reported delta.
    max_dt_ms: f32,
}

impl FrameClock {
    pub const DEFAULT_MAX_DT_MS: f32 = 50.0;

    pub fn new() -> Self {
        Self {
            last_ms: None,
            max_dt_ms: Self::DEFAULT_MAX_DT_MS,
        }
    }

    /// Create a clock with a custom delta cap.
    pub fn with_max_dt(max_dt_ms: f32) -> Self {
        Self {
            last_ms: None,
            max_dt_ms,
        }
    }

    /// Advance the clock to `now_ms` and return the elapsed milliseconds.
    pub fn delta(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(prev) => ((now_ms - prev).max(0.0) as f32).min(self.max_dt_ms),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.delta(1000.0), 0.0);
    }

    #[test]
    fn measures_elapsed_time() {
        let mut clock = FrameClock::new();
        clock.delta(1000.0);
        let dt = clock.delta(1016.7);
        assert!((dt - 16.7).abs() < 0.01, "expected ~16.7, got {}", dt);
    }

    #[test]
    fn clamps_long_stall() {
        let mut clock = FrameClock::new();
        clock.delta(0.0);
        assert_eq!(clock.delta(5000.0), FrameClock::DEFAULT_MAX_DT_MS);
    }

    #[test]
    fn backwards_time_yields_zero() {
        let mut clock = FrameClock::new();
        clock.delta(1000.0);
        assert_eq!(clock.delta(900.0), 0.0);
    }
}
