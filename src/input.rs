use glam::Vec2;

// ---------------- Pointer helpers ----------------

/// Pointer position relative to a rect, as `[u, v]` in `0..1` with `(0, 0)`
/// at the top-left. `None` for a collapsed rect.
#[inline]
pub fn rect_uv(
    client_x: f64,
    client_y: f64,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> Option<[f32; 2]> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some([
        ((client_x - left) / width) as f32,
        ((client_y - top) / height) as f32,
    ])
}

/// Pointer position in normalized device units over a rect: `-1..1` on both
/// axes with +y up. A collapsed rect maps everything to the center.
#[inline]
pub fn pointer_ndc(
    client_x: f64,
    client_y: f64,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> Vec2 {
    match rect_uv(client_x, client_y, left, top, width, height) {
        Some([u, v]) => Vec2::new(u * 2.0 - 1.0, -(v * 2.0 - 1.0)),
        None => Vec2::ZERO,
    }
}
