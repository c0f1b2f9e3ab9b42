//! Geometric primitives: Point, IntPoint, Size, IntSize, Rect

use std::ops::{Add, Sub};

/// A position in float pixels. Pointer samples report these.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A position in integer pixels. Layout nodes are placed on these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct IntPoint {
    pub x: i32,
    pub y: i32,
}

impl IntPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const ZERO: IntPoint = IntPoint { x: 0, y: 0 };
}

impl From<IntPoint> for Point {
    fn from(point: IntPoint) -> Point {
        Point::new(point.x as f32, point.y as f32)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };
}

/// A size in integer pixels, matching layout-node placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct IntSize {
    pub width: i32,
    pub height: i32,
}

impl IntSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub const ZERO: IntSize = IntSize {
        width: 0,
        height: 0,
    };
}

impl From<IntSize> for Size {
    fn from(size: IntSize) -> Size {
        Size::new(size.width as f32, size.height as f32)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && y >= self.y && x <= self.x + self.width && y <= self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_delta() {
        let delta = Point::new(10.0, 4.0) - Point::new(4.0, 1.0);
        assert_eq!(delta, Point::new(6.0, 3.0));
    }

    #[test]
    fn int_point_converts_to_float() {
        let point: Point = IntPoint::new(3, -7).into();
        assert_eq!(point, Point::new(3.0, -7.0));
    }

    #[test]
    fn rect_contains_its_edges() {
        let rect = Rect::from_origin_size(Point::new(0.0, 0.0), Size::new(10.0, 5.0));
        assert!(rect.contains(0.0, 0.0));
        assert!(rect.contains(10.0, 5.0));
        assert!(!rect.contains(10.1, 5.0));
    }
}
