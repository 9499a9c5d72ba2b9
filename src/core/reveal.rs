// Scroll-driven timeline choreography.
//
// Everything here is a pure function of scroll offset and element bounds;
// the web frontend recomputes it on every scroll/resize tick.

use serde::Deserialize;

use super::constants::{REVEAL_END, REVEAL_OFFSET_PERCENT, REVEAL_SCALE_FROM, REVEAL_START};
use super::ease::power3_out;

/// One story entry as supplied by the host page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TimelineEntry {
    pub icon: String,
    pub heading: String,
    pub paragraph: String,
    pub color: String,
}

/// Parse the JSON array of entries supplied by the host page.
pub fn parse_entries(json: &str) -> Result<Vec<TimelineEntry>, serde_json::Error> {
    serde_json::from_str(json)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Left,
    Right,
}

impl Placement {
    /// Even indices sit on the left, odd on the right.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Placement::Left
        } else {
            Placement::Right
        }
    }

    /// Horizontal offset of the hidden state, in percent of the card width.
    pub fn hidden_offset_percent(self) -> f32 {
        match self {
            Placement::Left => -REVEAL_OFFSET_PERCENT,
            Placement::Right => REVEAL_OFFSET_PERCENT,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Placement::Left => "timeline-item-left",
            Placement::Right => "timeline-item-right",
        }
    }
}

/// Vertical extent of an element in document coordinates (CSS pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub top: f64,
    pub height: f64,
}

impl Span {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Progress of the timeline fill: 0 when the container's top meets the
/// viewport top, 1 when its bottom meets the viewport bottom.
pub fn scroll_progress(scroll_y: f64, container: Span, viewport_height: f64) -> f32 {
    let start = container.top;
    let end = container.bottom() - viewport_height;
    if end <= start {
        return if scroll_y >= start { 1.0 } else { 0.0 };
    }
    ((scroll_y - start) / (end - start)).clamp(0.0, 1.0) as f32
}

/// Viewport-relative band an entry's top edge travels through while revealing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerBand {
    /// Fraction of viewport height where the reveal begins.
    pub start: f32,
    /// Fraction of viewport height where the entry is fully revealed.
    pub end: f32,
}

impl Default for TriggerBand {
    fn default() -> Self {
        Self {
            start: REVEAL_START,
            end: REVEAL_END,
        }
    }
}

impl TriggerBand {
    /// Linear progress of an entry whose top edge is `top` pixels below the
    /// viewport top.
    pub fn progress(&self, top: f64, viewport_height: f64) -> f32 {
        let start = self.start as f64 * viewport_height;
        let end = self.end as f64 * viewport_height;
        if start <= end {
            return if top <= end { 1.0 } else { 0.0 };
        }
        ((start - top) / (start - end)).clamp(0.0, 1.0) as f32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    Hidden,
    Entering,
    Revealed,
}

impl RevealPhase {
    pub fn from_progress(p: f32) -> Self {
        if p <= 0.0 {
            RevealPhase::Hidden
        } else if p >= 1.0 {
            RevealPhase::Revealed
        } else {
            RevealPhase::Entering
        }
    }
}

/// Visual state of one entry card along its reveal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStyle {
    pub x_percent: f32,
    pub opacity: f32,
    pub scale: f32,
}

impl RevealStyle {
    pub const RESTING: RevealStyle = RevealStyle {
        x_percent: 0.0,
        opacity: 1.0,
        scale: 1.0,
    };

    pub fn at(placement: Placement, progress: f32) -> Self {
        let e = power3_out(progress);
        Self {
            x_percent: placement.hidden_offset_percent() * (1.0 - e),
            opacity: e,
            scale: REVEAL_SCALE_FROM + (1.0 - REVEAL_SCALE_FROM) * e,
        }
    }

    pub fn hidden(placement: Placement) -> Self {
        Self::at(placement, 0.0)
    }

    /// Fully transparent cards also drop out of hit testing.
    pub fn visible(&self) -> bool {
        self.opacity > 0.0
    }
}
