// Enter/return choreography between the fullscreen hero and the content.
//
// The gate only tracks phases; the web frontend applies the matching
// styles and reports back when a transition has finished.

use super::constants::HERO_RETURN_SCROLL_Y;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GatePhase {
    /// Hero covers the page, scrolling is locked.
    Shown,
    /// Hero is lifting away.
    Leaving,
    /// Content is visible and scrollable.
    Hidden,
    /// Hero is sliding back in.
    Returning,
}

#[derive(Clone, Debug)]
pub struct HeroGate {
    phase: GatePhase,
    last_scroll_y: f64,
}

impl Default for HeroGate {
    fn default() -> Self {
        Self {
            phase: GatePhase::Shown,
            last_scroll_y: 0.0,
        }
    }
}

impl HeroGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, GatePhase::Leaving | GatePhase::Returning)
    }

    /// Enter button pressed. Returns true when the leave transition should start.
    pub fn request_enter(&mut self) -> bool {
        if self.phase != GatePhase::Shown {
            return false;
        }
        self.phase = GatePhase::Leaving;
        true
    }

    /// Scroll tick. Returns true when the return transition should start:
    /// the page was scrolled upward to within a few pixels of the top while
    /// the content was showing.
    pub fn observe_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolling_up = scroll_y < self.last_scroll_y;
        self.last_scroll_y = scroll_y;
        if self.phase == GatePhase::Hidden && scrolling_up && scroll_y < HERO_RETURN_SCROLL_Y {
            self.phase = GatePhase::Returning;
            return true;
        }
        false
    }

    /// The running transition has completed.
    pub fn finish_transition(&mut self) {
        self.phase = match self.phase {
            GatePhase::Leaving => GatePhase::Hidden,
            GatePhase::Returning => {
                self.last_scroll_y = 0.0;
                GatePhase::Shown
            }
            other => other,
        };
    }

    /// Page scrolling is only allowed once the content owns the viewport.
    pub fn scroll_locked(&self) -> bool {
        self.phase != GatePhase::Hidden
    }
}
