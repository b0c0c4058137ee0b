//! Pixel-space geometry
//!
//! Pen positions and measured sizes are `f32`; atlas rectangles are
//! integers because they address texels on a texture.

/// A 2D position or offset in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Width and height of a laid-out string.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width rounded to the nearest integer pixel.
    pub fn width_int(&self) -> i32 {
        crate::round_to_int(self.width)
    }

    /// Height rounded to the nearest integer pixel.
    pub fn height_int(&self) -> i32 {
        crate::round_to_int(self.height)
    }
}

/// An integer rectangle on a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Shift the rectangle without changing its size.
    pub fn offset(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_offset_moves_origin_only() {
        let mut r = Rect::new(10, 20, 5, 6);
        r.offset(-10, 3);
        assert_eq!(r, Rect::new(0, 23, 5, 6));
        assert_eq!(r.right(), 5);
        assert_eq!(r.bottom(), 29);
    }

    #[test]
    fn point_addition() {
        assert_eq!(
            Point::new(1.0, 2.0) + Point::new(3.0, -2.0),
            Point::new(4.0, 0.0)
        );
    }
}
