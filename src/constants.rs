/// DOM contract and transition tuning for the web frontend.
///
/// Element ids and class names the page markup must provide, plus the CSS
/// transition shapes used when the hero gate or the cards animate.
// Page elements looked up by the auto-mount in `start()`
pub const HERO_ID: &str = "hero";
pub const HERO_CANVAS_HOST_ID: &str = "hero-canvas-host";
pub const ENTER_BUTTON_ID: &str = "enter-button";
pub const CONTENT_ID: &str = "content";
pub const TIMELINE_ID: &str = "story-timeline";
// JSON array of timeline entries embedded in the page
pub const TIMELINE_DATA_ID: &str = "story-entries";

// Timeline markup
pub const TIMELINE_LINE_CLASS: &str = "timeline-line";
pub const TIMELINE_FILL_CLASS: &str = "timeline-line-fill";
pub const TIMELINE_ITEM_CLASS: &str = "timeline-item-container";
pub const TIMELINE_CONTENT_CLASS: &str = "timeline-content";
pub const TIMELINE_ICON_CLASS: &str = "timeline-icon";

// Card hover transition (seconds)
pub const TILT_TRANSITION_SEC: f32 = 0.3;

// Hero gate visuals
pub const HERO_LIFT_SCALE: f32 = 1.1;
pub const HERO_LIFT_OPACITY: f32 = 0.8;
pub const CONTENT_DROP_PX: f32 = 50.0;
pub const HERO_TRANSITION_SEC: f32 = 1.5;
