#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All values are logical pixels (`f32`), origin at top-left, y grows downward.

/// A 2D position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A square of side `side`.
    #[inline]
    pub const fn square(side: f32) -> Self {
        Self::new(side, side)
    }
}

/// A rectangle, used for clip masks.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: f32,
    /// Top edge (inclusive).
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Point, Rect, Size};

    #[test]
    fn square_has_equal_sides() {
        assert_eq!(Size::square(24.0), Size::new(24.0, 24.0));
    }

    #[test]
    fn rect_new_keeps_fields() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!((r.x, r.y, r.width, r.height), (1.0, 2.0, 3.0, 4.0));
        assert_eq!(Rect::default(), Rect::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn zero_is_default() {
        assert_eq!(Point::ZERO, Point::default());
    }
}
