//! Pixel-space geometry primitives.
//!
//! The scroll mapper's contract is integral: thumb offsets, scroll extents and
//! damage rectangles are whole pixels, and rounding behavior is part of the
//! public semantics. Touch positions are snapped to pixels before they enter
//! the gesture machine.

use serde::{Deserialize, Serialize};

/// A 2D point in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    /// Sentinel offset meaning "the thumb is not placed / not drawn".
    pub const HIDDEN: Point = Point { x: -1, y: -1 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True for the hidden-thumb sentinel (either coordinate negative).
    pub fn is_hidden(&self) -> bool {
        self.x < 0 || self.y < 0
    }
}

/// A rectangle defined by its top-left corner and size, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const EMPTY: Rect = Rect {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from its four edges. Inverted edges collapse to a
    /// zero-sized rectangle.
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            x: left,
            y: top,
            width: (right - left).max(0),
            height: (bottom - top).max(0),
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Hit test, inclusive of all edges.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// The smallest rectangle covering both `self` and `other`.
    ///
    /// Empty rectangles are treated as "no area": the union with an empty
    /// rectangle is the other rectangle. Used for fusing old and new bounds
    /// into a single damage rectangle.
    pub fn union(&self, other: Rect) -> Rect {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return *self;
        }
        Rect::from_edges(
            self.x.min(other.x),
            self.y.min(other.y),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }

    /// Shrink (positive amount) or grow (negative amount) on all sides.
    pub fn inset(&self, amount: i32) -> Rect {
        Rect {
            x: self.x + amount,
            y: self.y + amount,
            width: (self.width - 2 * amount).max(0),
            height: (self.height - 2 * amount).max(0),
        }
    }
}

/// Edge padding around the list content, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Padding {
    pub const ZERO: Padding = Padding {
        top: 0,
        right: 0,
        bottom: 0,
        left: 0,
    };

    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Uniform padding on all sides.
    pub const fn uniform(amount: i32) -> Self {
        Self {
            top: amount,
            right: amount,
            bottom: amount,
            left: amount,
        }
    }

    pub fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_sentinel() {
        assert!(Point::HIDDEN.is_hidden());
        assert!(Point::new(-1, 40).is_hidden());
        assert!(!Point::new(0, 0).is_hidden());
    }

    #[test]
    fn test_contains_is_edge_inclusive() {
        let r = Rect::new(10, 10, 20, 20);
        assert!(r.contains(Point::new(10, 10)));
        assert!(r.contains(Point::new(30, 30)));
        assert!(!r.contains(Point::new(31, 30)));
        assert!(!r.contains(Point::new(9, 15)));
    }

    #[test]
    fn test_union_covers_both() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(20, 5, 10, 10);
        let u = a.union(b);
        assert_eq!(u, Rect::from_edges(0, 0, 30, 15));
    }

    #[test]
    fn test_union_with_empty_is_identity() {
        let a = Rect::new(5, 5, 10, 10);
        assert_eq!(a.union(Rect::EMPTY), a);
        assert_eq!(Rect::EMPTY.union(a), a);
    }

    #[test]
    fn test_inset_never_inverts() {
        let r = Rect::new(0, 0, 10, 10);
        let shrunk = r.inset(20);
        assert!(shrunk.is_empty());
        let grown = r.inset(-5);
        assert_eq!(grown, Rect::new(-5, -5, 20, 20));
    }

    #[test]
    fn test_from_edges_clamps_inverted() {
        let r = Rect::from_edges(10, 10, 5, 5);
        assert!(r.is_empty());
    }
}
