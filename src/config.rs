//! Scroller configuration.
//!
//! All options are applied at construction and are optional with stated
//! defaults. The struct is serde-(de)serializable so hosts can load the
//! appearance from their own theme/config files.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HIDE_DELAY_MS, DEFAULT_PAGING_TOUCH_SLOP, DEFAULT_TOUCH_SLOP};
use crate::error::ConfigError;
use crate::renderer::Color;

/// Configuration for the fast scroller's appearance and behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FastScrollConfig {
    /// Keep the scrollbar expanded at all times instead of collapsing after
    /// the hide delay.
    pub always_enabled: bool,
    /// Bow the thumb's inner edge while it is narrower than its max width.
    pub curvature_enabled: bool,
    /// Detach the thumb from live scroll once grabbed; reattached only by an
    /// explicit `reset()` from the host.
    pub detachable_thumb: bool,
    /// Thumb width when idle.
    pub thumb_min_width: i32,
    /// Thumb width while dragging.
    pub thumb_max_width: i32,
    pub thumb_height: i32,
    /// Extra hit-test slack around the thumb, in pixels (negative grows the
    /// rectangle when applied).
    pub touch_inset: i32,
    /// Whether `touch_inset` is actually applied to the hit test. The source
    /// material parses the inset but leaves it out of the hit test; this
    /// preserves that behavior by default while letting hosts opt in.
    pub apply_touch_inset: bool,
    /// Pointer travel before a press on the thumb becomes a drag.
    pub touch_slop: i32,
    /// Pointer travel beyond which the gesture is treated as a page scroll
    /// and fast-scroll dragging is suppressed for the pointer sequence.
    pub paging_touch_slop: i32,
    /// Delay before the scrollbar collapses after interaction ends.
    pub hide_delay_ms: u32,
    pub thumb_inactive_color: Color,
    pub thumb_active_color: Color,
    /// Track color; drawn at a fixed low alpha over the list.
    pub track_color: Color,
    pub popup_bg_color: Color,
    pub popup_text_color: Color,
    pub popup_text_size: f32,
    /// Padding added to the text size to form the popup badge height.
    pub popup_padding: i32,
}

impl Default for FastScrollConfig {
    fn default() -> Self {
        Self {
            always_enabled: false,
            curvature_enabled: false,
            detachable_thumb: false,
            thumb_min_width: 5,
            thumb_max_width: 9,
            thumb_height: 48,
            touch_inset: -24,
            apply_touch_inset: false,
            touch_slop: DEFAULT_TOUCH_SLOP,
            paging_touch_slop: DEFAULT_PAGING_TOUCH_SLOP,
            hide_delay_ms: DEFAULT_HIDE_DELAY_MS,
            thumb_inactive_color: Color::rgb(0.62, 0.62, 0.62),
            thumb_active_color: Color::rgb(0.25, 0.54, 0.91),
            track_color: Color::BLACK,
            popup_bg_color: Color::rgb(0.17, 0.17, 0.19),
            popup_text_color: Color::WHITE,
            popup_text_size: 32.0,
            popup_padding: 23,
        }
    }
}

impl FastScrollConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the scrollbar expanded at all times.
    pub fn always_enabled(mut self, enabled: bool) -> Self {
        self.always_enabled = enabled;
        self
    }

    /// Enable the curved thumb edge.
    pub fn curvature_enabled(mut self, enabled: bool) -> Self {
        self.curvature_enabled = enabled;
        self
    }

    /// Detach the thumb from live scroll while dragging.
    pub fn detachable_thumb(mut self, enabled: bool) -> Self {
        self.detachable_thumb = enabled;
        self
    }

    /// Set the thumb width range.
    pub fn thumb_widths(mut self, min: i32, max: i32) -> Self {
        self.thumb_min_width = min;
        self.thumb_max_width = max;
        self
    }

    /// Set the thumb height.
    pub fn thumb_height(mut self, height: i32) -> Self {
        self.thumb_height = height;
        self
    }

    /// Set the touch inset and apply it to the hit test.
    pub fn touch_inset(mut self, inset: i32) -> Self {
        self.touch_inset = inset;
        self.apply_touch_inset = true;
        self
    }

    /// Set the hide delay in milliseconds.
    pub fn hide_delay_ms(mut self, delay: u32) -> Self {
        self.hide_delay_ms = delay;
        self
    }

    /// Set the thumb colors for the idle and dragging states.
    pub fn thumb_colors(mut self, inactive: Color, active: Color) -> Self {
        self.thumb_inactive_color = inactive;
        self.thumb_active_color = active;
        self
    }

    /// Set the track color.
    pub fn track_color(mut self, color: Color) -> Self {
        self.track_color = color;
        self
    }

    /// Set the popup background and text colors.
    pub fn popup_colors(mut self, background: Color, text: Color) -> Self {
        self.popup_bg_color = background;
        self.popup_text_color = text;
        self
    }

    /// Set the popup text size.
    pub fn popup_text_size(mut self, size: f32) -> Self {
        self.popup_text_size = size;
        self
    }

    /// Set the popup badge padding.
    pub fn popup_padding(mut self, padding: i32) -> Self {
        self.popup_padding = padding;
        self
    }

    /// Check the invariants the scroller relies on at runtime.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.thumb_min_width < 1 || self.thumb_min_width > self.thumb_max_width {
            return Err(ConfigError::ThumbWidthRange {
                min: self.thumb_min_width,
                max: self.thumb_max_width,
            });
        }
        if self.thumb_height < 1 {
            return Err(ConfigError::NonPositiveThumbHeight(self.thumb_height));
        }
        if self.hide_delay_ms == 0 {
            return Err(ConfigError::ZeroHideDelay(self.hide_delay_ms));
        }
        Ok(())
    }
}
