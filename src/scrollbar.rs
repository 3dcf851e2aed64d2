//! The fast scroll bar: thumb/track geometry, gesture handling, and the
//! glue between touch input, the position mapper and the host list.

use web_time::{Duration, Instant};

use crate::animation::Transition;
use crate::config::FastScrollConfig;
use crate::constants::{MAX_TRACK_ALPHA, SCROLL_BAR_VIS_DURATION_MS};
use crate::error::ConfigError;
use crate::event::{TouchEvent, TouchPhase};
use crate::geometry::{Point, Rect};
use crate::host::{DelayToken, ScrollHost};
use crate::mapper;
use crate::popup::SectionPopup;
use crate::renderer::{Color, Path, Renderer};

/// Gesture recognition state, driven only by pointer events.
///
/// Thumb detachment is deliberately not a variant here: a detached thumb
/// stays detached across pointer sequences until the host calls
/// [`FastScroller::reset`], so it lives as an orthogonal flag instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    Idle,
    /// Pointer went down on the thumb; not yet confirmed as a drag.
    Pressed { down: Point, touch_offset_y: i32 },
    /// Drag confirmed; `touch_offset_y` keeps the grab point fixed under the
    /// finger so the thumb does not jump.
    Dragging { touch_offset_y: i32 },
}

/// The draggable scroll indicator overlaying a host list widget.
///
/// The host forwards pointer events to [`FastScroller::on_touch_event`],
/// calls [`FastScroller::on_update_scrollbar`] after every scroll/layout
/// change, ticks animations from its redraw clock, and paints whatever
/// [`FastScroller::draw`] records.
#[derive(Debug)]
pub struct FastScroller {
    config: FastScrollConfig,
    popup: SectionPopup,

    gesture: GestureState,
    /// Latched when the pointer travels past the paging slop before a drag is
    /// confirmed; stays set until the pointer sequence ends.
    ignore_drag_gesture: bool,
    thumb_detached: bool,
    last_touch_y: i32,

    thumb_offset: Point,
    thumb_width: i32,
    track_width: i32,
    thumb_curvature: i32,
    thumb_color: Color,
    thumb_path: Path,

    thumb_width_anim: Option<Transition<f32>>,
    track_width_anim: Option<Transition<f32>>,
    thumb_color_anim: Option<Transition<Color>>,
}

impl FastScroller {
    pub fn new(config: FastScrollConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let popup = SectionPopup::new(&config);
        let width = if config.always_enabled {
            config.thumb_max_width
        } else {
            config.thumb_min_width
        };
        let thumb_color = if config.always_enabled {
            config.thumb_active_color
        } else {
            config.thumb_inactive_color
        };
        let thumb_curvature = if config.curvature_enabled {
            config.thumb_max_width - width
        } else {
            0
        };
        Ok(Self {
            popup,
            gesture: GestureState::Idle,
            ignore_drag_gesture: false,
            thumb_detached: false,
            last_touch_y: 0,
            thumb_offset: Point::HIDDEN,
            thumb_width: width,
            track_width: width,
            thumb_curvature,
            thumb_color,
            thumb_path: Path::new(),
            thumb_width_anim: None,
            track_width_anim: None,
            thumb_color_anim: None,
            config,
        })
    }

    // === State queries ===

    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, GestureState::Dragging { .. })
    }

    pub fn is_thumb_detached(&self) -> bool {
        self.thumb_detached
    }

    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    /// Thumb top-left corner, or [`Point::HIDDEN`] when not shown.
    pub fn thumb_offset(&self) -> Point {
        self.thumb_offset
    }

    pub fn thumb_width(&self) -> i32 {
        self.thumb_width
    }

    pub fn track_width(&self) -> i32 {
        self.track_width
    }

    pub fn thumb_height(&self) -> i32 {
        self.config.thumb_height
    }

    /// Scrollbar width while expanded; also the popup's edge offset unit.
    pub fn max_thumb_width(&self) -> i32 {
        self.config.thumb_max_width
    }

    /// Last clamped touch Y of the current drag, 0 outside drags.
    pub fn last_touch_y(&self) -> i32 {
        self.last_touch_y
    }

    pub fn popup(&self) -> &SectionPopup {
        &self.popup
    }

    /// True while any width/color/fade timeline still needs ticks.
    pub fn has_active_animation(&self) -> bool {
        self.thumb_width_anim.is_some()
            || self.track_width_anim.is_some()
            || self.thumb_color_anim.is_some()
            || self.popup.is_fading()
    }

    // === Host entry points ===

    /// Handle a pointer event. Returns true while the scroller owns the
    /// pointer sequence (a drag is in progress).
    pub fn on_touch_event<H: ScrollHost>(
        &mut self,
        host: &mut H,
        event: TouchEvent,
        now: Instant,
    ) -> bool {
        let position = event.position;
        match event.phase {
            TouchPhase::Down => {
                if self.is_near_thumb(position) {
                    self.gesture = GestureState::Pressed {
                        down: position,
                        touch_offset_y: position.y - self.thumb_offset.y,
                    };
                    log::trace!("thumb pressed at ({}, {})", position.x, position.y);
                }
            }
            TouchPhase::Moved => {
                if let GestureState::Pressed {
                    down,
                    touch_offset_y,
                } = self.gesture
                {
                    self.ignore_drag_gesture |=
                        (position.y - down.y).abs() > self.config.paging_touch_slop;
                    if !self.ignore_drag_gesture
                        && self.is_near_thumb(Point::new(down.x, position.y))
                        && (position.y - down.y).abs() > self.config.touch_slop
                    {
                        host.disallow_ancestor_interception();
                        let touch_offset_y = touch_offset_y + (position.y - down.y);
                        self.gesture = GestureState::Dragging { touch_offset_y };
                        if self.config.detachable_thumb {
                            self.thumb_detached = true;
                        }
                        self.popup.animate_visibility(true, now);
                        self.animate_scrollbar(true, now);
                        log::debug!("drag started (grab offset {touch_offset_y})");
                    }
                }
                if let GestureState::Dragging { touch_offset_y } = self.gesture {
                    self.drag_to(host, position.y - touch_offset_y, now);
                }
            }
            TouchPhase::Up | TouchPhase::Cancelled => {
                self.last_touch_y = 0;
                self.ignore_drag_gesture = false;
                if self.is_dragging() {
                    self.popup.animate_visibility(false, now);
                    self.schedule_hide(host);
                    log::debug!("drag ended");
                }
                self.gesture = GestureState::Idle;
            }
        }
        self.is_dragging()
    }

    /// Resync the thumb to the host's live scroll position. Call after every
    /// scroll or layout change.
    pub fn on_update_scrollbar<H: ScrollHost>(&mut self, host: &mut H) {
        let span = host.span_count().max(1);
        let row_count = (host.item_count() + span - 1) / span;
        if row_count == 0 {
            self.set_thumb_offset(host, Point::HIDDEN);
            return;
        }
        let state = host.scroll_state();
        if state.row_index < 0 {
            // The host has not laid out any children yet.
            self.set_thumb_offset(host, Point::HIDDEN);
            return;
        }
        let padding = host.background_padding();
        let available = mapper::available_scroll_height(
            row_count,
            state.row_height,
            host.viewport_height(),
            padding,
        );
        if available <= 0 {
            self.set_thumb_offset(host, Point::HIDDEN);
            return;
        }
        if self.thumb_detached {
            // A detached thumb follows the pointer, not the live scroll.
            return;
        }
        let travel = mapper::available_thumb_travel(
            host.viewport_height(),
            padding,
            self.config.thumb_height,
        );
        let y = mapper::thumb_y_for_scroll(state, available, travel, padding.top);
        let x = self.thumb_x(host);
        self.set_thumb_offset(host, Point::new(x, y));
    }

    /// Jump the host list to `fraction` of its scrollable extent and return
    /// the section label at that position (empty when unsectioned or empty).
    pub fn scroll_to_position_at_progress<H: ScrollHost>(
        &self,
        host: &mut H,
        fraction: f32,
    ) -> String {
        let item_count = host.item_count();
        if item_count == 0 {
            return String::new();
        }
        let span = host.span_count().max(1);
        let row_count = (item_count + span - 1) / span;

        host.stop_scroll();
        let state = host.scroll_state();
        if state.row_height <= 0 {
            log::warn!("host reported non-positive row height; ignoring progress scroll");
            return String::new();
        }

        let available = mapper::available_scroll_height(
            row_count,
            state.row_height,
            host.viewport_height(),
            host.background_padding(),
        );
        let target = mapper::row_target_for_fraction(fraction, span, available, state.row_height);
        host.scroll_to_row(target.row_index, target.sub_row_offset);

        host.section_label(mapper::section_index_for_fraction(fraction, item_count))
    }

    /// Advance animations on the host's redraw clock. Returns true while
    /// more ticks are needed.
    pub fn tick<H: ScrollHost>(&mut self, host: &mut H, now: Instant) -> bool {
        let mut animating = false;

        if let Some(anim) = self.thumb_width_anim {
            self.set_thumb_width(host, anim.value_at(now).round() as i32);
            if anim.is_finished(now) {
                self.thumb_width_anim = None;
            } else {
                animating = true;
            }
        }
        if let Some(anim) = self.track_width_anim {
            self.set_track_width(host, anim.value_at(now).round() as i32);
            if anim.is_finished(now) {
                self.track_width_anim = None;
            } else {
                animating = true;
            }
        }
        if let Some(anim) = self.thumb_color_anim {
            self.thumb_color = anim.value_at(now);
            host.request_redraw(self.thumb_damage_rect());
            if anim.is_finished(now) {
                self.thumb_color_anim = None;
            } else {
                animating = true;
            }
        }
        if self.popup.tick(now) {
            host.request_redraw(self.popup.bounds());
            animating = true;
        }

        animating
    }

    /// Delayed-callback entry point for tokens posted via the host timer.
    pub fn on_delay_elapsed<H: ScrollHost>(
        &mut self,
        _host: &mut H,
        token: DelayToken,
        now: Instant,
    ) {
        match token {
            DelayToken::HideScrollbar => {
                if !self.is_dragging() {
                    self.animate_scrollbar(false, now);
                }
            }
        }
    }

    /// Reattach a detached thumb. Hosts call this on dataset changes.
    pub fn reset(&mut self) {
        self.thumb_detached = false;
    }

    /// Record the track, thumb and popup draw commands. Skipped entirely
    /// while the thumb is hidden.
    pub fn draw<H: ScrollHost>(&self, host: &H, renderer: &mut Renderer) {
        if self.thumb_offset.is_hidden() {
            return;
        }
        let track_color = self.config.track_color;
        if track_color.a > 0.0 && self.track_width > 0 {
            renderer.fill_rect(
                Rect::new(
                    self.thumb_offset.x,
                    0,
                    self.track_width,
                    host.viewport_height(),
                ),
                track_color.with_alpha(track_color.a * MAX_TRACK_ALPHA),
            );
        }
        renderer.fill_path(self.thumb_path.clone(), self.thumb_color);
        self.popup.draw(renderer);
    }

    // === Runtime theme setters ===

    pub fn set_thumb_active_color<H: ScrollHost>(&mut self, host: &mut H, color: Color) {
        self.config.thumb_active_color = color;
        self.thumb_color = color;
        host.request_redraw(self.thumb_damage_rect());
    }

    pub fn set_thumb_inactive_color<H: ScrollHost>(&mut self, host: &mut H, color: Color) {
        self.config.thumb_inactive_color = color;
        self.thumb_color = color;
        host.request_redraw(self.thumb_damage_rect());
    }

    pub fn set_track_color<H: ScrollHost>(&mut self, host: &mut H, color: Color) {
        self.config.track_color = color;
        host.request_redraw(self.thumb_damage_rect());
    }

    pub fn set_popup_background_color(&mut self, color: Color) {
        self.popup.set_background_color(color);
    }

    pub fn set_popup_text_color(&mut self, color: Color) {
        self.popup.set_text_color(color);
    }

    // === Internals ===

    fn drag_to<H: ScrollHost>(&mut self, host: &mut H, raw_y: i32, now: Instant) {
        let padding = host.background_padding();
        let top = padding.top;
        let bottom = host.viewport_height() - padding.bottom - self.config.thumb_height;
        let bounded_y = raw_y.clamp(top, bottom.max(top));
        let fraction = if bottom > top {
            (bounded_y - top) as f32 / (bottom - top) as f32
        } else {
            0.0
        };

        let section = self.scroll_to_position_at_progress(host, fraction);
        self.popup.set_section_name(&section);
        self.popup.animate_visibility(!section.is_empty(), now);

        if self.thumb_detached {
            let x = self.thumb_x(host);
            self.set_thumb_offset(host, Point::new(x, bounded_y));
        }

        let damage = self.popup.update_bounds(
            host.viewport_width(),
            host.viewport_height(),
            padding,
            host.is_rtl(),
            self.config.thumb_max_width,
            bounded_y,
        );
        host.request_redraw(damage);
        self.last_touch_y = bounded_y;
    }

    /// Expand or collapse the track/thumb widths (and cross-fade the thumb
    /// color when the active and inactive colors differ). Starting this
    /// replaces any in-flight timeline per property.
    fn animate_scrollbar(&mut self, scrolling: bool, now: Instant) {
        let duration = Duration::from_millis(SCROLL_BAR_VIS_DURATION_MS);
        let target = if scrolling {
            self.config.thumb_max_width
        } else {
            self.config.thumb_min_width
        } as f32;
        self.thumb_width_anim =
            Some(Transition::new(self.thumb_width as f32, target, duration, now));
        self.track_width_anim =
            Some(Transition::new(self.track_width as f32, target, duration, now));
        if self.config.thumb_active_color != self.config.thumb_inactive_color {
            let color_target = if scrolling {
                self.config.thumb_active_color
            } else {
                self.config.thumb_inactive_color
            };
            self.thumb_color_anim =
                Some(Transition::new(self.thumb_color, color_target, duration, now));
        }
    }

    fn schedule_hide<H: ScrollHost>(&mut self, host: &mut H) {
        if self.config.always_enabled {
            return;
        }
        host.cancel_delayed(DelayToken::HideScrollbar);
        host.post_delayed(DelayToken::HideScrollbar, self.config.hide_delay_ms);
    }

    fn thumb_x<H: ScrollHost>(&self, host: &H) -> i32 {
        let padding = host.background_padding();
        if host.is_rtl() {
            padding.left
        } else {
            host.viewport_width() - padding.right - self.thumb_width
        }
    }

    /// Whether a point grabs the thumb. The configured touch inset is only
    /// honored when `apply_touch_inset` is set; the default hit region is
    /// the exact thumb rectangle.
    fn is_near_thumb(&self, point: Point) -> bool {
        if self.thumb_offset.is_hidden() {
            return false;
        }
        let mut rect = Rect::new(
            self.thumb_offset.x,
            self.thumb_offset.y,
            self.thumb_width,
            self.config.thumb_height,
        );
        if self.config.apply_touch_inset {
            rect = rect.inset(self.config.touch_inset);
        }
        rect.contains(point)
    }

    /// The area the thumb currently occupies, extended by its curvature.
    fn thumb_damage_rect(&self) -> Rect {
        if self.thumb_offset.is_hidden() {
            return Rect::EMPTY;
        }
        Rect::from_edges(
            self.thumb_offset.x - self.thumb_curvature,
            self.thumb_offset.y,
            self.thumb_offset.x + self.thumb_width,
            self.thumb_offset.y + self.config.thumb_height,
        )
    }

    fn set_thumb_offset<H: ScrollHost>(&mut self, host: &mut H, offset: Point) {
        if self.thumb_offset == offset {
            return;
        }
        let old = self.thumb_damage_rect();
        self.thumb_offset = offset;
        self.update_thumb_path();
        host.request_redraw(old.union(self.thumb_damage_rect()));
    }

    fn set_thumb_width<H: ScrollHost>(&mut self, host: &mut H, width: i32) {
        if self.thumb_width == width {
            return;
        }
        let old = self.thumb_damage_rect();
        self.thumb_width = width;
        self.update_thumb_path();
        host.request_redraw(old.union(self.thumb_damage_rect()));
    }

    fn set_track_width<H: ScrollHost>(&mut self, host: &mut H, width: i32) {
        if self.track_width == width {
            return;
        }
        self.track_width = width;
        if !self.thumb_offset.is_hidden() {
            host.request_redraw(Rect::from_edges(
                self.thumb_offset.x - self.thumb_curvature,
                0,
                self.thumb_offset.x + self.thumb_width.max(width),
                host.viewport_height(),
            ));
        }
    }

    /// Rebuild the thumb outline. The left edge bows inward by
    /// `max_width - width` pixels while curvature is enabled, collapsing to a
    /// plain rectangle outline at full width or when disabled.
    fn update_thumb_path(&mut self) {
        self.thumb_curvature = if self.config.curvature_enabled {
            self.config.thumb_max_width - self.thumb_width
        } else {
            0
        };
        self.thumb_path.clear();
        if self.thumb_offset.is_hidden() {
            return;
        }
        let Point { x, y } = self.thumb_offset;
        let w = self.thumb_width;
        let h = self.config.thumb_height;
        self.thumb_path.move_to(Point::new(x + w, y));
        self.thumb_path.line_to(Point::new(x + w, y + h));
        self.thumb_path.line_to(Point::new(x, y + h));
        self.thumb_path.cubic_to(
            Point::new(x, y + h),
            Point::new(x - self.thumb_curvature, y + h / 2),
            Point::new(x, y),
        );
        self.thumb_path.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Padding;
    use crate::mapper::ScrollPositionState;
    use crate::renderer::DrawCommand;

    const VIEWPORT_W: i32 = 400;
    const VIEWPORT_H: i32 = 600;
    const ROW_HEIGHT: i32 = 50;

    struct FakeHost {
        items: usize,
        span: usize,
        padding: Padding,
        rtl: bool,
        sectioned: bool,
        state: ScrollPositionState,
        scrolled_to: Vec<(usize, i32)>,
        redraws: Vec<Rect>,
        posted: Vec<(DelayToken, u32)>,
        cancelled: Vec<DelayToken>,
        interception_disallowed: bool,
        stop_calls: usize,
    }

    impl FakeHost {
        fn new(items: usize) -> Self {
            Self {
                items,
                span: 1,
                padding: Padding::ZERO,
                rtl: false,
                sectioned: true,
                state: ScrollPositionState {
                    row_index: 0,
                    row_top_offset: 0.0,
                    row_height: ROW_HEIGHT,
                },
                scrolled_to: Vec::new(),
                redraws: Vec::new(),
                posted: Vec::new(),
                cancelled: Vec::new(),
                interception_disallowed: false,
                stop_calls: 0,
            }
        }
    }

    impl ScrollHost for FakeHost {
        fn item_count(&self) -> usize {
            self.items
        }
        fn span_count(&self) -> usize {
            self.span
        }
        fn viewport_width(&self) -> i32 {
            VIEWPORT_W
        }
        fn viewport_height(&self) -> i32 {
            VIEWPORT_H
        }
        fn background_padding(&self) -> Padding {
            self.padding
        }
        fn is_rtl(&self) -> bool {
            self.rtl
        }
        fn scroll_state(&self) -> ScrollPositionState {
            self.state
        }
        fn scroll_to_row(&mut self, row_index: usize, pixel_offset: i32) {
            self.scrolled_to.push((row_index, pixel_offset));
            // Land exactly where asked, like a well-behaved list.
            self.state = ScrollPositionState {
                row_index: (row_index / self.span.max(1)) as i32,
                row_top_offset: pixel_offset as f32 / self.state.row_height as f32,
                row_height: self.state.row_height,
            };
        }
        fn section_label(&self, item_index: usize) -> String {
            if self.sectioned {
                format!("S{}", item_index / 10)
            } else {
                String::new()
            }
        }
        fn stop_scroll(&mut self) {
            self.stop_calls += 1;
        }
        fn request_redraw(&mut self, dirty: Rect) {
            self.redraws.push(dirty);
        }
        fn disallow_ancestor_interception(&mut self) {
            self.interception_disallowed = true;
        }
        fn post_delayed(&mut self, token: DelayToken, delay_ms: u32) {
            self.posted.push((token, delay_ms));
        }
        fn cancel_delayed(&mut self, token: DelayToken) {
            self.cancelled.push(token);
        }
    }

    fn placed_scroller(host: &mut FakeHost, config: FastScrollConfig) -> FastScroller {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut scroller = FastScroller::new(config).unwrap();
        scroller.on_update_scrollbar(host);
        assert!(!scroller.thumb_offset().is_hidden(), "thumb should be placed");
        scroller
    }

    /// Press the thumb and move just past the touch slop to confirm a drag.
    fn start_drag(
        scroller: &mut FastScroller,
        host: &mut FakeHost,
        now: Instant,
    ) -> Point {
        let thumb = scroller.thumb_offset();
        let grab = Point::new(thumb.x + 2, thumb.y + 4);
        scroller.on_touch_event(host, TouchEvent::down(grab.x, grab.y), now);
        scroller.on_touch_event(host, TouchEvent::moved(grab.x, grab.y + 12), now);
        assert!(scroller.is_dragging());
        grab
    }

    #[test]
    fn test_resync_hides_when_list_is_empty() {
        let mut host = FakeHost::new(0);
        let mut scroller = FastScroller::new(FastScrollConfig::default()).unwrap();
        scroller.on_update_scrollbar(&mut host);
        assert_eq!(scroller.thumb_offset(), Point::HIDDEN);
        assert_eq!(
            scroller.scroll_to_position_at_progress(&mut host, 0.5),
            ""
        );
        assert!(host.scrolled_to.is_empty());
    }

    #[test]
    fn test_resync_hides_before_first_layout() {
        let mut host = FakeHost::new(100);
        host.state.row_index = -1;
        let mut scroller = FastScroller::new(FastScrollConfig::default()).unwrap();
        scroller.on_update_scrollbar(&mut host);
        assert_eq!(scroller.thumb_offset(), Point::HIDDEN);
    }

    #[test]
    fn test_resync_hides_when_content_fits() {
        let mut host = FakeHost::new(5); // 250 px < 600 px viewport
        let mut scroller = FastScroller::new(FastScrollConfig::default()).unwrap();
        scroller.on_update_scrollbar(&mut host);
        assert_eq!(scroller.thumb_offset(), Point::HIDDEN);
    }

    #[test]
    fn test_resync_places_thumb_at_trailing_edge() {
        let mut host = FakeHost::new(100);
        let scroller = placed_scroller(&mut host, FastScrollConfig::default());
        let thumb = scroller.thumb_offset();
        assert_eq!(thumb.x, VIEWPORT_W - scroller.thumb_width());
        assert_eq!(thumb.y, 0);
    }

    #[test]
    fn test_resync_mirrors_thumb_under_rtl() {
        let mut host = FakeHost::new(100);
        host.rtl = true;
        host.padding = Padding::new(0, 4, 0, 7);
        let scroller = placed_scroller(&mut host, FastScrollConfig::default());
        assert_eq!(scroller.thumb_offset().x, 7);
    }

    #[test]
    fn test_resync_follows_scroll_position() {
        let mut host = FakeHost::new(100);
        let mut scroller = placed_scroller(&mut host, FastScrollConfig::default());
        host.state.row_index = 44;
        scroller.on_update_scrollbar(&mut host);
        let mid_y = scroller.thumb_offset().y;
        assert!(mid_y > 0);
        host.state.row_index = 88; // fully scrolled
        scroller.on_update_scrollbar(&mut host);
        let end_y = scroller.thumb_offset().y;
        assert!(end_y > mid_y);
        assert_eq!(
            end_y,
            mapper::available_thumb_travel(VIEWPORT_H, Padding::ZERO, scroller.thumb_height())
        );
    }

    #[test]
    fn test_down_outside_thumb_never_drags() {
        let mut host = FakeHost::new(100);
        let mut scroller = placed_scroller(&mut host, FastScrollConfig::default());
        let now = Instant::now();
        assert!(!scroller.on_touch_event(&mut host, TouchEvent::down(10, 100), now));
        for y in (100..500).step_by(40) {
            assert!(!scroller.on_touch_event(&mut host, TouchEvent::moved(10, y), now));
        }
        assert_eq!(scroller.gesture(), GestureState::Idle);
        assert!(host.scrolled_to.is_empty());
    }

    #[test]
    fn test_small_movement_stays_pressed() {
        let mut host = FakeHost::new(100);
        let mut scroller = placed_scroller(&mut host, FastScrollConfig::default());
        let now = Instant::now();
        let thumb = scroller.thumb_offset();
        scroller.on_touch_event(&mut host, TouchEvent::down(thumb.x + 1, thumb.y + 4), now);
        assert!(matches!(scroller.gesture(), GestureState::Pressed { .. }));
        // Within the touch slop: still just pressed.
        scroller.on_touch_event(&mut host, TouchEvent::moved(thumb.x + 1, thumb.y + 9), now);
        assert!(matches!(scroller.gesture(), GestureState::Pressed { .. }));
    }

    #[test]
    fn test_drag_scrolls_host_and_shows_popup() {
        let mut host = FakeHost::new(100);
        let mut scroller = placed_scroller(&mut host, FastScrollConfig::default());
        let now = Instant::now();
        let grab = start_drag(&mut scroller, &mut host, now);
        assert!(host.interception_disallowed);
        assert_eq!(host.stop_calls, 1);
        assert!(!host.scrolled_to.is_empty());

        // Drag to the middle of the track.
        let consumed =
            scroller.on_touch_event(&mut host, TouchEvent::moved(grab.x, VIEWPORT_H / 2), now);
        assert!(consumed);
        assert!(!scroller.popup().section_name().is_empty());
        assert!(scroller.last_touch_y() > 0);

        scroller.tick(&mut host, now + Duration::from_millis(200));
        assert!(scroller.popup().is_visible());
    }

    #[test]
    fn test_paging_slop_suppresses_rest_of_sequence() {
        let mut host = FakeHost::new(100);
        let mut scroller = placed_scroller(&mut host, FastScrollConfig::default());
        let now = Instant::now();
        let thumb = scroller.thumb_offset();
        let x = thumb.x + 2;
        scroller.on_touch_event(&mut host, TouchEvent::down(x, thumb.y + 4), now);
        // Blows past the paging slop before the drag was confirmed.
        scroller.on_touch_event(&mut host, TouchEvent::moved(x, thumb.y + 40), now);
        assert!(!scroller.is_dragging());
        // A later in-slop movement cannot revive the gesture.
        scroller.on_touch_event(&mut host, TouchEvent::moved(x, thumb.y + 16), now);
        assert!(!scroller.is_dragging());
        scroller.on_touch_event(&mut host, TouchEvent::up(x, thumb.y + 16), now);

        // The next pointer sequence works normally again.
        start_drag(&mut scroller, &mut host, now);
    }

    #[test]
    fn test_detach_requires_config_and_reset_clears_it() {
        let mut host = FakeHost::new(100);
        let mut scroller = placed_scroller(&mut host, FastScrollConfig::default());
        let now = Instant::now();
        start_drag(&mut scroller, &mut host, now);
        assert!(!scroller.is_thumb_detached(), "detach is off by default");
        scroller.on_touch_event(&mut host, TouchEvent::up(0, 0), now);

        let mut scroller =
            placed_scroller(&mut host, FastScrollConfig::new().detachable_thumb(true));
        start_drag(&mut scroller, &mut host, now);
        assert!(scroller.is_thumb_detached());
        scroller.on_touch_event(&mut host, TouchEvent::up(0, 0), now);
        assert!(
            scroller.is_thumb_detached(),
            "detachment survives pointer-up"
        );

        // While detached, resync leaves the thumb alone.
        let frozen = scroller.thumb_offset();
        host.state.row_index = 80;
        scroller.on_update_scrollbar(&mut host);
        assert_eq!(scroller.thumb_offset(), frozen);

        scroller.reset();
        assert!(!scroller.is_thumb_detached());
        scroller.on_update_scrollbar(&mut host);
        assert_ne!(scroller.thumb_offset(), frozen);
    }

    #[test]
    fn test_drag_clamps_to_track_and_reaches_last_row() {
        let mut host = FakeHost::new(100);
        let mut scroller = placed_scroller(&mut host, FastScrollConfig::default());
        let now = Instant::now();
        let grab = start_drag(&mut scroller, &mut host, now);

        // Way past the bottom edge.
        scroller.on_touch_event(&mut host, TouchEvent::moved(grab.x, VIEWPORT_H * 2), now);
        let bottom = VIEWPORT_H - scroller.thumb_height();
        assert_eq!(scroller.last_touch_y(), bottom);
        // touchFraction == 1 selects the last item, not one past it.
        assert_eq!(scroller.popup().section_name(), "S9");
        let (row, offset) = *host.scrolled_to.last().unwrap();
        assert_eq!((row, offset), (88, 0));
    }

    #[test]
    fn test_pointer_up_schedules_hide_and_delay_collapses() {
        let mut host = FakeHost::new(100);
        let mut scroller = placed_scroller(&mut host, FastScrollConfig::default());
        let start = Instant::now();
        start_drag(&mut scroller, &mut host, start);

        // Expand animation completes.
        let expanded = start + Duration::from_millis(150);
        scroller.tick(&mut host, expanded);
        assert_eq!(scroller.thumb_width(), scroller.max_thumb_width());
        assert_eq!(scroller.track_width(), scroller.max_thumb_width());

        scroller.on_touch_event(&mut host, TouchEvent::up(0, 0), expanded);
        assert!(!scroller.is_dragging());
        assert_eq!(host.cancelled, vec![DelayToken::HideScrollbar]);
        assert_eq!(host.posted, vec![(DelayToken::HideScrollbar, 1000)]);

        scroller.on_delay_elapsed(&mut host, DelayToken::HideScrollbar, expanded);
        scroller.tick(&mut host, expanded + Duration::from_millis(150));
        assert_eq!(scroller.thumb_width(), 5);
        assert!(!scroller.has_active_animation());
    }

    #[test]
    fn test_cancelled_ends_drag_like_up() {
        let mut host = FakeHost::new(100);
        let mut scroller = placed_scroller(&mut host, FastScrollConfig::default());
        let now = Instant::now();
        let grab = start_drag(&mut scroller, &mut host, now);
        scroller.on_touch_event(&mut host, TouchEvent::moved(grab.x, 300), now);

        let consumed =
            scroller.on_touch_event(&mut host, TouchEvent::cancelled(grab.x, 300), now);
        assert!(!consumed);
        assert_eq!(scroller.gesture(), GestureState::Idle);
        assert_eq!(scroller.last_touch_y(), 0);
        assert_eq!(host.cancelled, vec![DelayToken::HideScrollbar]);
        assert_eq!(host.posted, vec![(DelayToken::HideScrollbar, 1000)]);

        // Popup fades out exactly as after Up.
        scroller.tick(&mut host, now + Duration::from_millis(300));
        assert!(!scroller.popup().is_visible());
        assert!(!scroller.has_active_animation());
    }

    #[test]
    fn test_cancelled_clears_paging_suppression() {
        let mut host = FakeHost::new(100);
        let mut scroller = placed_scroller(&mut host, FastScrollConfig::default());
        let now = Instant::now();
        let thumb = scroller.thumb_offset();
        let x = thumb.x + 2;
        scroller.on_touch_event(&mut host, TouchEvent::down(x, thumb.y + 4), now);
        scroller.on_touch_event(&mut host, TouchEvent::moved(x, thumb.y + 40), now);
        assert!(!scroller.is_dragging());
        scroller.on_touch_event(&mut host, TouchEvent::cancelled(x, thumb.y + 40), now);

        // The next pointer sequence drags normally again.
        start_drag(&mut scroller, &mut host, now);
    }

    #[test]
    fn test_restarted_width_animation_replaces_prior_timeline() {
        let mut host = FakeHost::new(100);
        let mut scroller = placed_scroller(&mut host, FastScrollConfig::default());
        let start = Instant::now();
        start_drag(&mut scroller, &mut host, start);

        // Collapse is requested halfway through the expansion.
        let halfway = start + Duration::from_millis(75);
        scroller.tick(&mut host, halfway);
        let mid_width = scroller.thumb_width();
        assert!(mid_width > 5 && mid_width < 9);
        scroller.on_touch_event(&mut host, TouchEvent::up(0, 0), halfway);
        scroller.on_delay_elapsed(&mut host, DelayToken::HideScrollbar, halfway);

        // Only the replacement timeline runs; the old one cannot finish the
        // expansion underneath it.
        scroller.tick(&mut host, halfway + Duration::from_millis(150));
        assert_eq!(scroller.thumb_width(), 5);
        assert!(!scroller.has_active_animation());
    }

    #[test]
    fn test_color_crossfade_reaches_active_color() {
        let mut host = FakeHost::new(100);
        let config = FastScrollConfig::default();
        let active = config.thumb_active_color;
        let mut scroller = placed_scroller(&mut host, config);
        let start = Instant::now();
        start_drag(&mut scroller, &mut host, start);
        scroller.tick(&mut host, start + Duration::from_millis(150));
        assert_eq!(scroller.thumb_color, active);
    }

    #[test]
    fn test_identical_colors_skip_crossfade() {
        let mut host = FakeHost::new(100);
        let gray = Color::rgb(0.5, 0.5, 0.5);
        let mut scroller =
            placed_scroller(&mut host, FastScrollConfig::new().thumb_colors(gray, gray));
        let now = Instant::now();
        start_drag(&mut scroller, &mut host, now);
        assert!(scroller.thumb_color_anim.is_none());
    }

    #[test]
    fn test_always_enabled_starts_expanded_and_skips_hide() {
        let mut host = FakeHost::new(100);
        let mut scroller =
            placed_scroller(&mut host, FastScrollConfig::new().always_enabled(true));
        assert_eq!(scroller.thumb_width(), scroller.max_thumb_width());
        let now = Instant::now();
        start_drag(&mut scroller, &mut host, now);
        scroller.on_touch_event(&mut host, TouchEvent::up(0, 0), now);
        assert!(host.posted.is_empty());
    }

    #[test]
    fn test_unsectioned_host_yields_empty_label() {
        let mut host = FakeHost::new(100);
        host.sectioned = false;
        let mut scroller = placed_scroller(&mut host, FastScrollConfig::default());
        let now = Instant::now();
        let grab = start_drag(&mut scroller, &mut host, now);
        scroller.on_touch_event(&mut host, TouchEvent::moved(grab.x, 300), now);
        assert_eq!(scroller.popup().section_name(), "");
        scroller.tick(&mut host, now + Duration::from_millis(300));
        assert!(!scroller.popup().is_visible());
        // The scroll itself still happens.
        assert!(!host.scrolled_to.is_empty());
    }

    #[test]
    fn test_zero_row_height_is_guarded() {
        let mut host = FakeHost::new(100);
        host.state.row_height = 0;
        let scroller = FastScroller::new(FastScrollConfig::default()).unwrap();
        assert_eq!(scroller.scroll_to_position_at_progress(&mut host, 0.5), "");
        assert!(host.scrolled_to.is_empty());
    }

    #[test]
    fn test_grid_span_scales_row_targets() {
        let mut host = FakeHost::new(90);
        host.span = 3; // 30 rows of 50 px = 1500 px content
        let scroller = placed_scroller(&mut host, FastScrollConfig::default());
        scroller.scroll_to_position_at_progress(&mut host, 1.0);
        let (row, _) = *host.scrolled_to.last().unwrap();
        // 900 px of scroll extent = row 18, scaled by the span count.
        assert_eq!(row, 3 * 18);
    }

    #[test]
    fn test_touch_inset_expands_hit_region_when_applied() {
        let mut host = FakeHost::new(100);
        let mut scroller = placed_scroller(&mut host, FastScrollConfig::default());
        let thumb = scroller.thumb_offset();
        let outside = Point::new(thumb.x - 10, thumb.y + 10);
        let now = Instant::now();
        scroller.on_touch_event(&mut host, TouchEvent::down(outside.x, outside.y), now);
        assert_eq!(scroller.gesture(), GestureState::Idle);

        let mut scroller = placed_scroller(&mut host, FastScrollConfig::new().touch_inset(-24));
        scroller.on_touch_event(&mut host, TouchEvent::down(outside.x, outside.y), now);
        assert!(matches!(scroller.gesture(), GestureState::Pressed { .. }));
    }

    #[test]
    fn test_draw_skips_hidden_thumb() {
        let mut host = FakeHost::new(0);
        let mut scroller = FastScroller::new(FastScrollConfig::default()).unwrap();
        scroller.on_update_scrollbar(&mut host);
        let mut renderer = Renderer::new();
        scroller.draw(&host, &mut renderer);
        assert!(renderer.commands().is_empty());
    }

    #[test]
    fn test_draw_emits_track_then_thumb() {
        let mut host = FakeHost::new(100);
        let scroller = placed_scroller(&mut host, FastScrollConfig::default());
        let mut renderer = Renderer::new();
        scroller.draw(&host, &mut renderer);
        assert_eq!(renderer.commands().len(), 2);
        let DrawCommand::FillRect { rect, color } = &renderer.commands()[0] else {
            panic!("expected the track rect first");
        };
        assert_eq!(rect.height, VIEWPORT_H);
        assert!(color.a < 0.2, "track is drawn at a fixed low alpha");
        assert!(matches!(renderer.commands()[1], DrawCommand::FillPath { .. }));
    }

    #[test]
    fn test_curvature_bows_only_when_enabled() {
        let mut host = FakeHost::new(100);
        let scroller = placed_scroller(
            &mut host,
            FastScrollConfig::new().curvature_enabled(true),
        );
        // Idle width 5 of max 9: the control point sits 4 px left of the edge.
        assert_eq!(scroller.thumb_curvature, 4);

        let scroller = placed_scroller(&mut host, FastScrollConfig::default());
        assert_eq!(scroller.thumb_curvature, 0);
    }

    #[test]
    fn test_damage_rects_fuse_old_and_new_thumb_area() {
        let mut host = FakeHost::new(100);
        let mut scroller = placed_scroller(&mut host, FastScrollConfig::default());
        host.redraws.clear();
        host.state.row_index = 44;
        scroller.on_update_scrollbar(&mut host);
        let damage = *host.redraws.last().unwrap();
        let thumb = scroller.thumb_offset();
        // Covers the new position...
        assert!(damage.contains(Point::new(thumb.x, thumb.y)));
        // ...and the old one at the top of the track.
        assert!(damage.contains(Point::new(thumb.x, 0)));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let result = FastScroller::new(FastScrollConfig::new().thumb_widths(10, 2));
        assert!(matches!(
            result,
            Err(ConfigError::ThumbWidthRange { .. })
        ));
    }
}
