use super::constants::{TILT_HOVER_SCALE, TILT_MAX_DEG, TILT_PERSPECTIVE_PX};
use super::reveal::RevealStyle;

/// Pointer-coupled 3D tilt of a timeline card, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub scale: f32,
}

impl Default for Tilt {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

// Card elevation while hovered and at rest
pub const HOVER_SHADOW: &str = "0 25px 50px -12px rgba(0, 0, 0, 0.4)";
pub const REST_SHADOW: &str =
    "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)";

#[inline]
pub fn map_range(in_min: f32, in_max: f32, out_min: f32, out_max: f32, v: f32) -> f32 {
    out_min + (v - in_min) / (in_max - in_min) * (out_max - out_min)
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
        scale: 1.0,
    };

    /// `u`/`v` are the pointer position normalized to the card bounds,
    /// `(0, 0)` top-left. Points outside the card are clamped to its edge.
    pub fn from_pointer(u: f32, v: f32) -> Self {
        let u = u.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);
        Self {
            rotate_x: map_range(0.0, 1.0, -TILT_MAX_DEG, TILT_MAX_DEG, v),
            rotate_y: map_range(0.0, 1.0, TILT_MAX_DEG, -TILT_MAX_DEG, u),
            scale: TILT_HOVER_SCALE,
        }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }

    /// Lifted shadow while the pointer is over the card.
    pub fn box_shadow(&self) -> &'static str {
        if self.is_neutral() {
            REST_SHADOW
        } else {
            HOVER_SHADOW
        }
    }
}

/// CSS transform for a card that is both revealing and tilted.
pub fn compose_transform(reveal: &RevealStyle, tilt: &Tilt) -> String {
    format!(
        "perspective({:.0}px) translateX({:.3}%) rotateX({:.3}deg) rotateY({:.3}deg) scale({:.4})",
        TILT_PERSPECTIVE_PX,
        reveal.x_percent,
        tilt.rotate_x,
        tilt.rotate_y,
        reveal.scale * tilt.scale
    )
}
