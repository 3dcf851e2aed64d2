//! Pure pixel/scroll position mapping.
//!
//! Stateless arithmetic converting between the host list's logical scroll
//! position and the thumb's pixel position, and back from a touch fraction to
//! a scroll target. All functions are idempotent: identical inputs always
//! yield identical outputs, which is what makes resync after a no-op layout
//! pass deterministic.
//!
//! Division guards are the caller's contract: callers must treat a
//! non-positive [`available_scroll_height`] as "no scrollbar" and never feed
//! it onward. The functions assert that contract in debug builds.

use crate::geometry::Padding;

/// Snapshot of the host list's scroll position, recomputed by the host on
/// every layout pass. Read-only to the core; valid for one query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPositionState {
    /// Index of the first visible row, or negative when the host has not laid
    /// out any children yet.
    pub row_index: i32,
    /// Fraction of `row_height` the first visible row is offset by.
    pub row_top_offset: f32,
    /// Uniform row height in pixels.
    pub row_height: i32,
}

impl Default for ScrollPositionState {
    fn default() -> Self {
        Self {
            row_index: -1,
            row_top_offset: 0.0,
            row_height: 0,
        }
    }
}

/// Where a touch fraction lands in the list: a target item index plus a
/// negative sub-row pixel offset that produces smooth sub-row positioning
/// instead of snapping to row boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowTarget {
    pub row_index: usize,
    pub sub_row_offset: i32,
}

/// Total scrollable pixel extent of the list.
///
/// `<= 0` means the content fits the viewport and no scrollbar is needed.
pub fn available_scroll_height(
    row_count: usize,
    row_height: i32,
    viewport_height: i32,
    padding: Padding,
) -> i32 {
    padding.top + row_count as i32 * row_height + padding.bottom - viewport_height
}

/// Pixel range the thumb may travel within the viewport.
pub fn available_thumb_travel(viewport_height: i32, padding: Padding, thumb_height: i32) -> i32 {
    viewport_height - padding.vertical() - thumb_height
}

/// Map the current logical scroll position to a thumb pixel Y.
///
/// The caller must have rejected `available_scroll_height <= 0` already;
/// calling with a non-positive extent is a contract violation.
pub fn thumb_y_for_scroll(
    state: ScrollPositionState,
    available_scroll_height: i32,
    available_thumb_travel: i32,
    padding_top: i32,
) -> i32 {
    debug_assert!(
        available_scroll_height > 0,
        "caller must hide the scrollbar when there is nothing to scroll"
    );
    let scroll_y = padding_top
        + ((state.row_index as f32 - state.row_top_offset) * state.row_height as f32).round()
            as i32;
    padding_top
        + ((scroll_y as f32 / available_scroll_height as f32) * available_thumb_travel as f32)
            as i32
}

/// Decompose a touch fraction into a scroll target.
///
/// The exact pixel position is `round(available_scroll_height * fraction)`,
/// split into a row index (scaled by the grid span count) and the negative
/// remainder within that row. The fraction is clamped to `0.0..=1.0` and a
/// non-positive scroll extent collapses to the top of the list.
pub fn row_target_for_fraction(
    fraction: f32,
    span_count: usize,
    available_scroll_height: i32,
    row_height: i32,
) -> RowTarget {
    debug_assert!(row_height > 0, "row height must be positive");
    let fraction = fraction.clamp(0.0, 1.0);
    let exact = (available_scroll_height as f32 * fraction).round().max(0.0) as i32;
    RowTarget {
        row_index: span_count * (exact / row_height) as usize,
        sub_row_offset: -(exact % row_height),
    }
}

/// The item whose section label should be shown for a touch fraction.
///
/// `fraction == 1.0` selects the last item, never `item_count`.
pub fn section_index_for_fraction(fraction: f32, item_count: usize) -> usize {
    debug_assert!(item_count > 0, "caller must short-circuit empty lists");
    if fraction >= 1.0 {
        item_count - 1
    } else {
        ((item_count as f32 * fraction.max(0.0)) as usize).min(item_count - 1)
    }
}
