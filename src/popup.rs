//! The floating section-label popup shown while dragging the thumb.

use web_time::{Duration, Instant};

use crate::animation::Transition;
use crate::config::FastScrollConfig;
use crate::constants::{POPUP_FADE_IN_MS, POPUP_FADE_OUT_MS, POPUP_Y_OFFSET_FACTOR};
use crate::geometry::{Padding, Point, Rect};
use crate::renderer::{Color, Renderer};
use crate::text_metrics::TextMetrics;

/// Visibility and bounds state for the fast scroller popup.
///
/// The popup is visible whenever its fade alpha is above zero and there is a
/// section label to show. Bounds are recomputed from the host's metrics on
/// every drag move; the old and new bounds are fused into one damage rect.
#[derive(Debug)]
pub struct SectionPopup {
    section_name: String,
    alpha: f32,
    /// The state the running (or last) fade is heading toward.
    fade_target_visible: bool,
    fade: Option<Transition<f32>>,
    bounds: Rect,
    text_width: i32,
    text_height: i32,
    /// Badge height; also the minimum badge width.
    background_size: i32,
    bg_color: Color,
    text_color: Color,
    text_size: f32,
    metrics: TextMetrics,
}

impl SectionPopup {
    pub fn new(config: &FastScrollConfig) -> Self {
        let metrics = TextMetrics::new(config.popup_text_size);
        Self {
            section_name: String::new(),
            alpha: 0.0,
            fade_target_visible: false,
            fade: None,
            bounds: Rect::EMPTY,
            text_width: 0,
            text_height: metrics.measure("").1,
            background_size: config.popup_text_size as i32 + config.popup_padding,
            bg_color: config.popup_bg_color,
            text_color: config.popup_text_color,
            text_size: config.popup_text_size,
            metrics,
        }
    }

    /// Update the label, re-measuring only when it actually changed.
    pub fn set_section_name(&mut self, name: &str) {
        if name == self.section_name {
            return;
        }
        self.section_name = name.to_string();
        let (width, height) = self.metrics.measure(name);
        self.text_width = width;
        self.text_height = height;
    }

    pub fn section_name(&self) -> &str {
        &self.section_name
    }

    pub fn is_visible(&self) -> bool {
        self.alpha > 0.0 && !self.section_name.is_empty()
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// True while a fade is in flight.
    pub fn is_fading(&self) -> bool {
        self.fade.is_some()
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Badge height in pixels.
    pub fn height(&self) -> i32 {
        self.background_size
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.bg_color = color;
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    /// Recompute the popup bounds relative to the current touch position.
    ///
    /// Returns the union of the previous and new bounds so the host can
    /// invalidate exactly the affected area. When the popup is not visible
    /// the bounds collapse and the returned rect covers only the old area.
    pub fn update_bounds(
        &mut self,
        viewport_width: i32,
        viewport_height: i32,
        padding: Padding,
        rtl: bool,
        max_thumb_width: i32,
        last_touch_y: i32,
    ) -> Rect {
        let old = self.bounds;

        if self.is_visible() {
            let edge_padding = max_thumb_width;
            let bg_padding = (self.background_size - self.text_height) / 2;
            let bg_height = self.background_size;
            let bg_width = self
                .background_size
                .max(self.text_width + 2 * bg_padding);

            // Pinned 2 thumb-widths inside the trailing edge; mirrored for RTL.
            let (left, right) = if rtl {
                let left = padding.left + 2 * max_thumb_width;
                (left, left + bg_width)
            } else {
                let right = viewport_width - padding.right - 2 * max_thumb_width;
                (right - bg_width, right)
            };

            let offset = (POPUP_Y_OFFSET_FACTOR * bg_height as f32) as i32;
            let top = (last_touch_y - offset)
                .min(viewport_height - edge_padding - bg_height)
                .max(edge_padding);

            self.bounds = Rect::from_edges(left, top, right, top + bg_height);
        } else {
            self.bounds = Rect::EMPTY;
        }

        old.union(self.bounds)
    }

    /// Fade toward visible/hidden. No-op when already heading there;
    /// otherwise the running fade is cancelled and replaced.
    pub fn animate_visibility(&mut self, visible: bool, now: Instant) {
        if self.fade_target_visible == visible {
            return;
        }
        self.fade_target_visible = visible;
        let (target, duration_ms) = if visible {
            (1.0, POPUP_FADE_IN_MS)
        } else {
            (0.0, POPUP_FADE_OUT_MS)
        };
        log::trace!("popup fade -> {target} over {duration_ms}ms");
        self.fade = Some(Transition::new(
            self.alpha,
            target,
            Duration::from_millis(duration_ms),
            now,
        ));
    }

    /// Advance the fade. Returns true while a fade is still producing frames.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(fade) = self.fade else {
            return false;
        };
        self.alpha = fade.value_at(now);
        if fade.is_finished(now) {
            self.fade = None;
        }
        true
    }

    /// Emit the badge rectangle and centered label.
    pub fn draw(&self, renderer: &mut Renderer) {
        if !self.is_visible() {
            return;
        }
        renderer.fill_rect(
            self.bounds,
            self.bg_color.with_alpha(self.bg_color.a * self.alpha),
        );
        let text_pos = Point::new(
            self.bounds.x + (self.bounds.width - self.text_width) / 2,
            self.bounds.y + (self.bounds.height - self.text_height) / 2,
        );
        renderer.draw_text(
            &self.section_name,
            text_pos,
            self.text_color.with_alpha(self.text_color.a * self.alpha),
            self.text_size,
        );
    }
}
