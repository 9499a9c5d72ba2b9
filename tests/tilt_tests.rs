// Host-side tests for the card hover tilt.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod ease {
    include!("../src/core/ease.rs");
}
mod reveal {
    include!("../src/core/reveal.rs");
}
mod tilt {
    include!("../src/core/tilt.rs");
}

use constants::*;
use reveal::{Placement, RevealStyle};
use tilt::*;

#[test]
fn center_of_card_is_flat() {
    let t = Tilt::from_pointer(0.5, 0.5);
    assert!(t.rotate_x.abs() < 1e-6);
    assert!(t.rotate_y.abs() < 1e-6);
    assert_eq!(t.scale, TILT_HOVER_SCALE);
}

#[test]
fn corners_reach_full_tilt() {
    let tl = Tilt::from_pointer(0.0, 0.0);
    assert_eq!(tl.rotate_x, -TILT_MAX_DEG);
    assert_eq!(tl.rotate_y, TILT_MAX_DEG);

    let br = Tilt::from_pointer(1.0, 1.0);
    assert_eq!(br.rotate_x, TILT_MAX_DEG);
    assert_eq!(br.rotate_y, -TILT_MAX_DEG);
}

#[test]
fn pointer_outside_card_is_clamped() {
    assert_eq!(Tilt::from_pointer(-3.0, 4.0), Tilt::from_pointer(0.0, 1.0));
}

#[test]
fn map_range_is_linear() {
    assert_eq!(map_range(0.0, 1.0, -15.0, 15.0, 0.25), -7.5);
    assert_eq!(map_range(0.0, 4.0, 0.0, 100.0, 1.0), 25.0);
    assert_eq!(map_range(0.0, 1.0, 15.0, -15.0, 1.0), -15.0);
}

#[test]
fn neutral_is_default() {
    assert_eq!(Tilt::default(), Tilt::NEUTRAL);
    assert_eq!(Tilt::NEUTRAL.scale, 1.0);
}

#[test]
fn composed_transform_carries_reveal_and_tilt() {
    let reveal = RevealStyle::hidden(Placement::Left);
    let css = compose_transform(&reveal, &Tilt::from_pointer(0.0, 0.5));
    assert!(css.starts_with("perspective(1000px)"));
    assert!(css.contains("translateX(-100.000%)"));
    assert!(css.contains("rotateY(15.000deg)"));
    // Reveal and hover scale multiply
    let expected = format!("scale({:.4})", REVEAL_SCALE_FROM * TILT_HOVER_SCALE);
    assert!(css.ends_with(&expected), "{css}");
}

#[test]
fn resting_neutral_card_has_identity_scale() {
    let css = compose_transform(&RevealStyle::RESTING, &Tilt::NEUTRAL);
    assert!(css.contains("translateX(0.000%)"));
    assert!(css.ends_with("scale(1.0000)"));
}

#[test]
fn hovered_card_lifts_its_shadow() {
    assert_eq!(Tilt::NEUTRAL.box_shadow(), REST_SHADOW);
    assert!(Tilt::NEUTRAL.is_neutral());

    let hovered = Tilt::from_pointer(0.5, 0.5);
    // Centered pointer is flat but still scaled, so the card stays lifted
    assert!(!hovered.is_neutral());
    assert_eq!(hovered.box_shadow(), HOVER_SHADOW);
    assert_eq!(Tilt::from_pointer(0.9, 0.1).box_shadow(), HOVER_SHADOW);
}
