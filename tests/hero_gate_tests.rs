// Host-side tests for the hero enter/return state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod hero_gate {
    include!("../src/core/hero_gate.rs");
}

use hero_gate::*;

fn entered() -> HeroGate {
    let mut gate = HeroGate::new();
    assert!(gate.request_enter());
    gate.finish_transition();
    gate
}

#[test]
fn starts_shown_and_locked() {
    let gate = HeroGate::new();
    assert_eq!(gate.phase(), GatePhase::Shown);
    assert!(gate.scroll_locked());
    assert!(!gate.is_animating());
}

#[test]
fn enter_leaves_then_unlocks_scroll() {
    let mut gate = HeroGate::new();
    assert!(gate.request_enter());
    assert_eq!(gate.phase(), GatePhase::Leaving);
    assert!(gate.is_animating());
    assert!(gate.scroll_locked());

    gate.finish_transition();
    assert_eq!(gate.phase(), GatePhase::Hidden);
    assert!(!gate.scroll_locked());
}

#[test]
fn enter_is_ignored_unless_shown() {
    let mut gate = HeroGate::new();
    assert!(gate.request_enter());
    assert!(!gate.request_enter());
    gate.finish_transition();
    assert!(!gate.request_enter());
    assert_eq!(gate.phase(), GatePhase::Hidden);
}

#[test]
fn scrolling_up_to_top_returns_to_hero() {
    let mut gate = entered();
    assert!(!gate.observe_scroll(400.0));
    assert!(!gate.observe_scroll(120.0));
    assert!(gate.observe_scroll(2.0));
    assert_eq!(gate.phase(), GatePhase::Returning);
    assert!(gate.scroll_locked());

    gate.finish_transition();
    assert_eq!(gate.phase(), GatePhase::Shown);
}

#[test]
fn scrolling_down_near_top_does_not_return() {
    let mut gate = entered();
    assert!(!gate.observe_scroll(0.0));
    assert!(!gate.observe_scroll(3.0));
    assert_eq!(gate.phase(), GatePhase::Hidden);
}

#[test]
fn scroll_is_ignored_while_hero_is_up() {
    let mut gate = HeroGate::new();
    gate.observe_scroll(300.0);
    assert!(!gate.observe_scroll(0.0));
    assert_eq!(gate.phase(), GatePhase::Shown);
}

#[test]
fn finish_without_transition_is_a_no_op() {
    let mut gate = HeroGate::new();
    gate.finish_transition();
    assert_eq!(gate.phase(), GatePhase::Shown);
    let mut gate = entered();
    gate.finish_transition();
    assert_eq!(gate.phase(), GatePhase::Hidden);
}

#[test]
fn full_round_trip_can_enter_again() {
    let mut gate = entered();
    gate.observe_scroll(50.0);
    assert!(gate.observe_scroll(0.0));
    gate.finish_transition();
    assert!(gate.request_enter());
}
