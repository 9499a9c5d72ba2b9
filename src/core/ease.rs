// Easing curves shared by the scrubbed reveal and the CSS transitions.

/// Quartic ease-out, `1 - (1 - t)^4`. Input is clamped to `[0, 1]`.
#[inline]
pub fn power3_out(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv * inv
}

/// Cubic ease-out as a CSS timing function.
pub const POWER2_OUT_CSS: &str = "cubic-bezier(0.215, 0.61, 0.355, 1)";
/// Quartic ease-in-out as a CSS timing function.
pub const POWER3_IN_OUT_CSS: &str = "cubic-bezier(0.77, 0, 0.175, 1)";
