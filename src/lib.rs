//! fastscroll_ui - A draggable fast-scroll bar for scrollable list widgets
//!
//! This crate provides the scroll-independent core of a fast scroller: thumb
//! geometry and gestures, pixel/scroll position mapping, and a floating
//! section-label popup. It renders to a recorded command list and talks to
//! the owning list widget only through the [`ScrollHost`] trait, so any list
//! or grid implementation can embed it.

mod animation;
mod config;
mod constants;
mod error;
mod event;
mod geometry;
mod host;
mod mapper;
mod popup;
mod renderer;
mod scrollbar;
mod text_metrics;

pub use animation::{Lerp, Transition};
pub use config::FastScrollConfig;
pub use error::{ColorParseError, ConfigError};
pub use event::{TouchEvent, TouchPhase};
pub use geometry::{Padding, Point, Rect};
pub use host::{DelayToken, ScrollHost};
pub use mapper::{
    available_scroll_height, available_thumb_travel, row_target_for_fraction,
    section_index_for_fraction, thumb_y_for_scroll, RowTarget, ScrollPositionState,
};
pub use popup::SectionPopup;
pub use renderer::{Color, DrawCommand, Path, PathSegment, Renderer};
pub use scrollbar::{FastScroller, GestureState};
pub use text_metrics::TextMetrics;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::FastScrollConfig;
    pub use crate::event::{TouchEvent, TouchPhase};
    pub use crate::geometry::{Padding, Point, Rect};
    pub use crate::host::{DelayToken, ScrollHost};
    pub use crate::mapper::ScrollPositionState;
    pub use crate::renderer::{Color, Renderer};
    pub use crate::scrollbar::FastScroller;
}
