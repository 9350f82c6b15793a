//! Tilt-on-hover math for project cards.

/// Limits for the hover tilt transform.
#[derive(Debug, Clone)]
pub struct TiltConfig {
    /// Max rotation around the X axis in degrees (vertical pointer travel).
    pub max_rot_x_deg: f32,
    /// Max rotation around the Y axis in degrees (horizontal pointer travel).
    pub max_rot_y_deg: f32,
    /// Uniform scale while hovered.
    pub scale: f32,
    /// CSS perspective distance in px.
    pub perspective_px: f32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_rot_x_deg: 10.0,
            max_rot_y_deg: 16.0,
            scale: 1.03,
            perspective_px: 900.0,
        }
    }
}

/// A computed card transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltTransform {
    pub rot_x_deg: f32,
    pub rot_y_deg: f32,
    pub scale: f32,
}

impl TiltTransform {
    /// CSS transform string for the card's inline style.
    pub fn css(&self, config: &TiltConfig) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) scale({})",
            config.perspective_px, self.rot_x_deg, self.rot_y_deg, self.scale
        )
    }
}

/// Transform for a pointer at normalized (px, py) within the card rect,
/// both in [0, 1] with (0, 0) the top-left corner. The card leans toward
/// the pointer: right half turns the card right, top half tips it back.
pub fn tilt_for_pointer(px: f32, py: f32, config: &TiltConfig) -> TiltTransform {
    TiltTransform {
        rot_x_deg: (0.5 - py) * config.max_rot_x_deg,
        rot_y_deg: (px - 0.5) * config.max_rot_y_deg,
        scale: config.scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_pointer_is_flat() {
        let t = tilt_for_pointer(0.5, 0.5, &TiltConfig::default());
        assert_eq!(t.rot_x_deg, 0.0);
        assert_eq!(t.rot_y_deg, 0.0);
        assert_eq!(t.scale, 1.03);
    }

    #[test]
    fn right_edge_turns_right() {
        let t = tilt_for_pointer(1.0, 0.5, &TiltConfig::default());
        assert_eq!(t.rot_y_deg, 8.0);
        assert_eq!(t.rot_x_deg, 0.0);
    }

    #[test]
    fn top_edge_tips_back() {
        let t = tilt_for_pointer(0.5, 0.0, &TiltConfig::default());
        assert_eq!(t.rot_x_deg, 5.0);
        assert_eq!(t.rot_y_deg, 0.0);
    }

    #[test]
    fn css_transform_string() {
        let config = TiltConfig::default();
        let t = tilt_for_pointer(1.0, 0.0, &config);
        assert_eq!(
            t.css(&config),
            "perspective(900px) rotateX(5deg) rotateY(8deg) scale(1.03)"
        );
    }
}
