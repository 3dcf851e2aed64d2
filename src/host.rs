//! The seam between the scroller and the host list widget.
//!
//! The scroller holds no widget reference; everything it needs from the list
//! comes through [`ScrollHost`], so unit tests drive it with a fake and real
//! hosts adapt whatever list/grid implementation they have.

use crate::geometry::{Padding, Rect};
use crate::mapper::ScrollPositionState;

/// Identifies a delayed callback posted to the host's timer.
///
/// Posting a token that is already pending restarts its delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayToken {
    /// Collapse the scrollbar after the hide delay.
    HideScrollbar,
}

/// Capabilities the scroller consumes from the host list widget.
///
/// All calls happen on the host's UI timeline; nothing here may block or
/// re-enter the scroller.
pub trait ScrollHost {
    /// Number of items in the list (not rows; see [`ScrollHost::span_count`]).
    fn item_count(&self) -> usize;

    /// Items per row for grid layouts. `1` for plain lists.
    fn span_count(&self) -> usize {
        1
    }

    fn viewport_width(&self) -> i32;

    fn viewport_height(&self) -> i32;

    /// Padding between the viewport edges and the list content.
    fn background_padding(&self) -> Padding;

    /// Whether the layout direction is right-to-left.
    fn is_rtl(&self) -> bool {
        false
    }

    /// Current scroll snapshot, recomputed by the host per layout pass.
    fn scroll_state(&self) -> ScrollPositionState;

    /// Scroll so that item `row_index` is first visible, shifted by
    /// `pixel_offset` (negative values position partway into the row).
    fn scroll_to_row(&mut self, row_index: usize, pixel_offset: i32);

    /// Section label for an item, or an empty string when the data source
    /// does not support sectioning.
    fn section_label(&self, item_index: usize) -> String {
        let _ = item_index;
        String::new()
    }

    /// Kill any fling/momentum scrolling before a position jump.
    fn stop_scroll(&mut self) {}

    /// Repaint at least `dirty`.
    fn request_redraw(&mut self, dirty: Rect);

    /// Stop ancestor widgets from stealing the rest of this pointer sequence.
    fn disallow_ancestor_interception(&mut self) {}

    /// Invoke the token's callback on the scroller after `delay_ms`.
    fn post_delayed(&mut self, token: DelayToken, delay_ms: u32);

    /// Drop a pending delayed callback, if any.
    fn cancel_delayed(&mut self, token: DelayToken);
}
