use glam::Vec2;

/// An RGB color with a floating-point alpha, matching CSS `rgba()` notation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in [0, 1].
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Rgba { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Rgba { a, ..self }
    }

    /// CSS color string, e.g. `rgba(125,200,255,0.25)`.
    pub fn css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// A single Canvas2D draw command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    /// Fill the whole surface with a two-stop linear gradient spanning the
    /// canvas diagonal, top-left to bottom-right.
    Backdrop { start: Rgba, end: Rgba },
    /// A filled circle.
    Circle {
        center: Vec2,
        radius: f32,
        fill: Rgba,
    },
    /// A stroked line segment.
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        stroke: Rgba,
    },
}

/// Per-frame draw-command buffer handed to the canvas replayer.
/// Cleared and refilled every tick.
pub struct FrameSketch {
    width: f32,
    height: f32,
    ops: Vec<DrawOp>,
}

impl FrameSketch {
    pub fn new() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            ops: Vec::with_capacity(256),
        }
    }

    /// Reset the sketch for a new frame at the given surface size.
    pub fn begin(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.ops.clear();
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Number of circle commands in the sketch.
    pub fn circle_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
            .count()
    }

    /// Number of line commands in the sketch.
    pub fn line_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { .. }))
            .count()
    }
}

impl Default for FrameSketch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_clears_previous_frame() {
        let mut sketch = FrameSketch::new();
        sketch.begin(100.0, 50.0);
        sketch.push(DrawOp::Circle {
            center: Vec2::ZERO,
            radius: 1.0,
            fill: Rgba::new(255, 255, 255, 1.0),
        });
        assert_eq!(sketch.len(), 1);
        sketch.begin(200.0, 80.0);
        assert!(sketch.is_empty());
        assert_eq!(sketch.width(), 200.0);
        assert_eq!(sketch.height(), 80.0);
    }

    #[test]
    fn counts_by_kind() {
        let mut sketch = FrameSketch::new();
        sketch.begin(10.0, 10.0);
        sketch.push(DrawOp::Backdrop {
            start: Rgba::new(0, 0, 0, 1.0),
            end: Rgba::new(0, 0, 0, 1.0),
        });
        sketch.push(DrawOp::Circle {
            center: Vec2::ZERO,
            radius: 1.0,
            fill: Rgba::new(1, 2, 3, 0.5),
        });
        sketch.push(DrawOp::Line {
            from: Vec2::ZERO,
            to: Vec2::ONE,
            width: 0.6,
            stroke: Rgba::new(1, 2, 3, 0.1),
        });
        assert_eq!(sketch.circle_count(), 1);
        assert_eq!(sketch.line_count(), 1);
        assert_eq!(sketch.len(), 3);
    }

    #[test]
    fn css_notation() {
        assert_eq!(Rgba::new(125, 200, 255, 0.25).css(), "rgba(125,200,255,0.25)");
        assert_eq!(Rgba::new(6, 18, 36, 0.35).css(), "rgba(6,18,36,0.35)");
    }
}
