//! Command-recording renderer.
//!
//! The scroller never touches a GPU or a platform canvas. Widgets push
//! [`DrawCommand`]s into a [`Renderer`] and the host drains them after each
//! frame, rasterizing however it likes. This keeps the core deterministic and
//! directly assertable in tests.

use serde::{Deserialize, Serialize};

use crate::error::ColorParseError;
use crate::geometry::{Point, Rect};

/// A draw command to be executed by the host during rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill a rectangle (the track, the popup badge background).
    FillRect { rect: Rect, color: Color },
    /// Fill a closed path (the thumb, possibly with a curved left edge).
    FillPath { path: Path, color: Color },
    /// Draw a single line of text (the popup's section label).
    DrawText {
        text: String,
        position: Point,
        color: Color,
        size: f32,
    },
}

/// Records draw commands for the host to execute.
#[derive(Debug, Default)]
pub struct Renderer {
    commands: Vec<DrawCommand>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw a filled rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    /// Draw a filled path.
    pub fn fill_path(&mut self, path: Path, color: Color) {
        self.commands.push(DrawCommand::FillPath { path, color });
    }

    /// Draw text with its top-left corner at `position`.
    pub fn draw_text(&mut self, text: &str, position: Point, color: Color, size: f32) {
        self.commands.push(DrawCommand::DrawText {
            text: text.to_string(),
            position,
            color,
            size,
        });
    }

    /// Commands recorded since the last [`Renderer::take_commands`].
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the recorded commands for execution.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

/// A path made of straight and cubic segments, as drawn by platform canvases.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    segments: Vec<PathSegment>,
}

/// One segment of a [`Path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    /// Cubic bezier to `to` with control points `c1` and `c2`.
    CubicTo {
        c1: Point,
        c2: Point,
        to: Point,
    },
    Close,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.segments.push(PathSegment::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.segments.push(PathSegment::LineTo(p));
        self
    }

    pub fn cubic_to(&mut self, c1: Point, c2: Point, to: Point) -> &mut Self {
        self.segments.push(PathSegment::CubicTo { c1, c2, to });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.segments.push(PathSegment::Close);
        self
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

/// RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// The same color with a different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Per-channel linear interpolation toward `other` at `t` in `0.0..=1.0`.
    ///
    /// Drives the thumb active/inactive cross-fade.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Parse `#RRGGBB` or `#AARRGGBB` theme attribute literals.
    pub fn from_hex(s: &str) -> Result<Color, ColorParseError> {
        let digits = s.strip_prefix('#').ok_or(ColorParseError::MissingHash)?;
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError::BadDigit(s.to_string()))?;
        let byte = |shift: u32| ((value >> shift) & 0xff) as f32 / 255.0;
        match digits.len() {
            6 => Ok(Color::new(byte(16), byte(8), byte(0), 1.0)),
            8 => Ok(Color::new(byte(16), byte(8), byte(0), byte(24))),
            n => Err(ColorParseError::BadLength(n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_rgb() {
        let c = Color::from_hex("#ff8000").unwrap();
        assert!((c.r - 1.0).abs() < 0.005);
        assert!((c.g - 0.502).abs() < 0.005);
        assert!((c.b - 0.0).abs() < 0.005);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_from_hex_argb() {
        let c = Color::from_hex("#80000000").unwrap();
        assert!((c.a - 0.502).abs() < 0.005);
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert_eq!(Color::from_hex("ff8000"), Err(ColorParseError::MissingHash));
        assert_eq!(Color::from_hex("#ff80"), Err(ColorParseError::BadLength(4)));
        assert!(matches!(
            Color::from_hex("#zzzzzz"),
            Err(ColorParseError::BadDigit(_))
        ));
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let a = Color::BLACK;
        let b = Color::WHITE;
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        let mid = a.lerp(b, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
        // Out-of-range t is clamped.
        assert_eq!(a.lerp(b, 2.0), b);
    }

    #[test]
    fn test_renderer_records_in_order() {
        let mut r = Renderer::new();
        r.fill_rect(Rect::new(0, 0, 4, 4), Color::BLACK);
        r.draw_text("A", Point::ZERO, Color::WHITE, 12.0);
        assert_eq!(r.commands().len(), 2);
        assert!(matches!(r.commands()[0], DrawCommand::FillRect { .. }));
        let drained = r.take_commands();
        assert_eq!(drained.len(), 2);
        assert!(r.commands().is_empty());
    }

    #[test]
    fn test_path_builder() {
        let mut p = Path::new();
        p.move_to(Point::new(0, 0))
            .line_to(Point::new(10, 0))
            .close();
        assert_eq!(p.segments().len(), 3);
        p.clear();
        assert!(p.is_empty());
    }
}
