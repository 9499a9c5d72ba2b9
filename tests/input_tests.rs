// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn rect_uv_maps_corners() {
    assert_eq!(rect_uv(10.0, 20.0, 10.0, 20.0, 200.0, 100.0), Some([0.0, 0.0]));
    assert_eq!(rect_uv(210.0, 120.0, 10.0, 20.0, 200.0, 100.0), Some([1.0, 1.0]));
    assert_eq!(rect_uv(110.0, 70.0, 10.0, 20.0, 200.0, 100.0), Some([0.5, 0.5]));
}

#[test]
fn rect_uv_rejects_collapsed_rect() {
    assert_eq!(rect_uv(5.0, 5.0, 0.0, 0.0, 0.0, 100.0), None);
    assert_eq!(rect_uv(5.0, 5.0, 0.0, 0.0, 100.0, 0.0), None);
    assert_eq!(rect_uv(5.0, 5.0, 0.0, 0.0, -1.0, 10.0), None);
}

#[test]
fn pointer_ndc_centers_and_flips_y() {
    let c = pointer_ndc(50.0, 50.0, 0.0, 0.0, 100.0, 100.0);
    assert!(c.length() < 1e-6);

    // Top-left of the rect is (-1, +1)
    let tl = pointer_ndc(0.0, 0.0, 0.0, 0.0, 100.0, 100.0);
    assert!((tl.x + 1.0).abs() < 1e-6);
    assert!((tl.y - 1.0).abs() < 1e-6);

    // Bottom-right is (+1, -1)
    let br = pointer_ndc(100.0, 100.0, 0.0, 0.0, 100.0, 100.0);
    assert!((br.x - 1.0).abs() < 1e-6);
    assert!((br.y + 1.0).abs() < 1e-6);
}

#[test]
fn pointer_ndc_collapsed_rect_is_center() {
    let p = pointer_ndc(30.0, 40.0, 0.0, 0.0, 0.0, 0.0);
    assert_eq!(p, glam::Vec2::ZERO);
}
