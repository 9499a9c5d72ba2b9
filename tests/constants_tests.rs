// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_constants_are_within_reasonable_bounds() {
    assert!(PARTICLE_COUNT > 0);
    assert!(PARTICLE_SPREAD > 0.0);
    assert!(PARTICLE_SPEED > 0.0);
    assert!(PARTICLE_BASE_SIZE > 0.0);
    assert!(SIZE_RANDOMNESS >= 0.0);
    assert!(!PARTICLE_COLORS.is_empty());

    // Damping closes part of the gap each frame, never overshoots
    assert!(HOVER_DAMPING > 0.0 && HOVER_DAMPING <= 1.0);

    // Wobble amplitude range
    assert!(WOBBLE_MAX > WOBBLE_MIN);
    assert!(WOBBLE_MIN > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_frames_the_cloud() {
    assert!(CAMERA_ZNEAR > 0.0);
    assert!(CAMERA_ZFAR > CAMERA_ZNEAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    // Cloud center sits between the clip planes
    assert!(CAMERA_ZFAR > CAMERA_DISTANCE);
    assert!(CAMERA_DISTANCE > CAMERA_ZNEAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reveal_band_runs_downward_in_viewport() {
    // Band starts lower in the viewport than it ends
    assert!(REVEAL_START > REVEAL_END);
    assert!(REVEAL_START <= 1.0);
    assert!(REVEAL_END >= 0.0);
    assert!(REVEAL_SCALE_FROM > 0.0 && REVEAL_SCALE_FROM < 1.0);
    assert!(REVEAL_OFFSET_PERCENT > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hero_gate_and_tilt_constants_have_logical_relationships() {
    assert!(TILT_MAX_DEG > 0.0 && TILT_MAX_DEG < 90.0);
    assert!(TILT_HOVER_SCALE >= 1.0);
    assert!(TILT_PERSPECTIVE_PX > 0.0);
    assert!(TILT_TRANSITION_SEC > 0.0);

    // Phase timers outlast the CSS transitions they wait on
    assert!(HERO_LEAVE_MS as f32 >= HERO_TRANSITION_SEC * 1000.0);
    assert!(HERO_RETURN_MS as f32 >= HERO_TRANSITION_SEC * 1000.0);
    assert!(HERO_RETURN_SCROLL_Y > 0.0);
    assert!(HERO_LIFT_OPACITY > 0.0 && HERO_LIFT_OPACITY <= 1.0);
}

#[test]
fn dom_ids_are_distinct() {
    let ids = [
        HERO_ID,
        HERO_CANVAS_HOST_ID,
        ENTER_BUTTON_ID,
        CONTENT_ID,
        TIMELINE_ID,
        TIMELINE_DATA_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
