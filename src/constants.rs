//! Behavioral constants shared across the scroller.
//!
//! Appearance defaults (sizes, colors) live in [`crate::config`]; this module
//! holds the timing and gesture constants that are part of the component's
//! feel rather than its theme.

/// Duration of the scrollbar expand/collapse (width + color) animation.
pub const SCROLL_BAR_VIS_DURATION_MS: u64 = 150;

/// Popup fade-in duration.
pub const POPUP_FADE_IN_MS: u64 = 200;

/// Popup fade-out duration.
pub const POPUP_FADE_OUT_MS: u64 = 150;

/// Fixed alpha applied to the track color (30/255 in the source material).
pub const MAX_TRACK_ALPHA: f32 = 30.0 / 255.0;

/// The popup floats this many popup-heights above the touch point.
pub const POPUP_Y_OFFSET_FACTOR: f32 = 1.5;

/// Delay before the scrollbar collapses after a drag ends.
pub const DEFAULT_HIDE_DELAY_MS: u32 = 1000;

/// Minimum pointer travel before a press is recognized as a drag.
pub const DEFAULT_TOUCH_SLOP: i32 = 8;

/// Pointer travel beyond which the gesture is treated as a page scroll and
/// fast-scroll dragging is suppressed for the rest of the pointer sequence.
pub const DEFAULT_PAGING_TOUCH_SLOP: i32 = 16;
