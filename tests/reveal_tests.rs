// Host-side tests for the scroll-driven timeline choreography.
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

use constants::*;
use ease::power3_out;
use reveal::*;

const VH: f64 = 1000.0;

fn container() -> Span {
    Span {
        top: 1000.0,
        height: 3000.0,
    }
}

#[test]
fn fill_progress_is_zero_at_start_and_one_at_end() {
    assert_eq!(scroll_progress(0.0, container(), VH), 0.0);
    assert_eq!(scroll_progress(1000.0, container(), VH), 0.0);
    assert!((scroll_progress(2000.0, container(), VH) - 0.5).abs() < 1e-6);
    assert_eq!(scroll_progress(3000.0, container(), VH), 1.0);
    assert_eq!(scroll_progress(9000.0, container(), VH), 1.0);
}

#[test]
fn fill_progress_is_monotonic_in_scroll() {
    let mut last = 0.0;
    let mut y = 0.0;
    while y < 5000.0 {
        let p = scroll_progress(y, container(), VH);
        assert!(p >= last, "progress fell from {last} to {p} at y={y}");
        assert!((0.0..=1.0).contains(&p));
        last = p;
        y += 37.0;
    }
}

#[test]
fn short_container_steps_straight_to_full() {
    let short = Span {
        top: 1000.0,
        height: 500.0,
    };
    assert_eq!(scroll_progress(999.0, short, VH), 0.0);
    assert_eq!(scroll_progress(1000.0, short, VH), 1.0);
}

#[test]
fn placement_alternates_starting_left() {
    assert_eq!(Placement::for_index(0), Placement::Left);
    assert_eq!(Placement::for_index(1), Placement::Right);
    assert_eq!(Placement::for_index(2), Placement::Left);
    assert_eq!(Placement::for_index(7), Placement::Right);
    assert!(Placement::Left.hidden_offset_percent() < 0.0);
    assert!(Placement::Right.hidden_offset_percent() > 0.0);
    assert_ne!(Placement::Left.class_name(), Placement::Right.class_name());
}

#[test]
fn band_progress_spans_start_to_end() {
    let band = TriggerBand::default();
    assert_eq!(band.progress(VH, VH), 0.0);
    assert_eq!(band.progress(REVEAL_START as f64 * VH, VH), 0.0);
    assert_eq!(band.progress(REVEAL_END as f64 * VH, VH), 1.0);
    assert_eq!(band.progress(0.0, VH), 1.0);
    let mid = (REVEAL_START + REVEAL_END) as f64 / 2.0 * VH;
    assert!((band.progress(mid, VH) - 0.5).abs() < 1e-5);
}

#[test]
fn four_entries_reveal_in_order_of_scroll() {
    let band = TriggerBand::default();
    // Entry tops relative to the viewport, entry 2 at 80% of its height
    let tops = [100.0, 400.0, 800.0, 1200.0];
    let phases: Vec<RevealPhase> = tops
        .iter()
        .map(|&top| RevealPhase::from_progress(band.progress(top, VH)))
        .collect();
    assert_eq!(
        phases,
        vec![
            RevealPhase::Revealed,
            RevealPhase::Revealed,
            RevealPhase::Entering,
            RevealPhase::Hidden,
        ]
    );
}

#[test]
fn scrolling_back_up_reverses_the_reveal() {
    let band = TriggerBand::default();
    let down = band.progress(600.0, VH);
    let back = band.progress(840.0, VH);
    assert!(back < down);
    assert_eq!(band.progress(900.0, VH), 0.0);
}

#[test]
fn reveal_style_endpoints() {
    for placement in [Placement::Left, Placement::Right] {
        let hidden = RevealStyle::hidden(placement);
        assert_eq!(hidden.opacity, 0.0);
        assert_eq!(hidden.scale, REVEAL_SCALE_FROM);
        assert_eq!(hidden.x_percent, placement.hidden_offset_percent());
        assert!(!hidden.visible());

        let shown = RevealStyle::at(placement, 1.0);
        assert_eq!(shown, RevealStyle::RESTING);
        assert!(shown.visible());
    }
}

#[test]
fn reveal_style_is_eased_between_endpoints() {
    let s = RevealStyle::at(Placement::Right, 0.5);
    let e = power3_out(0.5);
    assert!((s.opacity - e).abs() < 1e-6);
    // Ease-out front-loads the motion
    assert!(s.opacity > 0.5);
    assert!(s.x_percent > 0.0 && s.x_percent < REVEAL_OFFSET_PERCENT);
}

#[test]
fn power3_out_is_clamped_and_monotonic() {
    assert_eq!(power3_out(-1.0), 0.0);
    assert_eq!(power3_out(0.0), 0.0);
    assert_eq!(power3_out(1.0), 1.0);
    assert_eq!(power3_out(2.0), 1.0);
    let mut last = 0.0;
    for i in 0..=100 {
        let v = power3_out(i as f32 / 100.0);
        assert!(v >= last);
        last = v;
    }
}

#[test]
fn entries_deserialize_from_json() {
    let json = r##"[
        {"icon": "seed", "heading": "Founded", "paragraph": "Where it began.", "color": "#B77466"},
        {"icon": "chart", "heading": "Growth", "paragraph": "Scaling up.", "color": "#957C62"}
    ]"##;
    let entries = parse_entries(json).expect("valid entries");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].heading, "Growth");
    assert_eq!(entries[0].color, "#B77466");
}

#[test]
fn malformed_entries_are_rejected() {
    assert!(parse_entries("").is_err());
    assert!(parse_entries(r#"{"icon": "x"}"#).is_err());
    // Missing color
    assert!(parse_entries(r#"[{"icon": "x", "heading": "h", "paragraph": "p"}]"#).is_err());
    assert_eq!(parse_entries("[]").map(|e| e.len()).ok(), Some(0));
}
