use crate::geometry::Point;

/// A single-pointer touch event forwarded by the host list widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub position: Point,
}

impl TouchEvent {
    pub fn new(phase: TouchPhase, position: Point) -> Self {
        Self { phase, position }
    }

    pub fn down(x: i32, y: i32) -> Self {
        Self::new(TouchPhase::Down, Point::new(x, y))
    }

    pub fn moved(x: i32, y: i32) -> Self {
        Self::new(TouchPhase::Moved, Point::new(x, y))
    }

    pub fn up(x: i32, y: i32) -> Self {
        Self::new(TouchPhase::Up, Point::new(x, y))
    }

    pub fn cancelled(x: i32, y: i32) -> Self {
        Self::new(TouchPhase::Cancelled, Point::new(x, y))
    }
}

/// Pointer phases. `Up` and `Cancelled` terminate a gesture identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Down,
    Moved,
    Up,
    Cancelled,
}
