//! Liskov Substitution: rectangles and squares behind one `Shape` trait.
//!
//! A `Square` keeps its sides equal, so code written against `Shape` that
//! sets the width and expects the height to stay put gets a surprise. The
//! demo prints both areas to make that visible.

use std::fmt;

/// Anything with a settable width and height.
pub trait Shape: fmt::Display {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn set_width(&mut self, width: u32);
    fn set_height(&mut self, height: u32);
}

/// Area of any shape. Widened to `u64`, which holds any `u32 * u32`.
pub fn area(shape: &dyn Shape) -> u64 {
    u64::from(shape.width()) * u64::from(shape.height())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rectangle {
    width: u32,
    height: u32,
}

impl Rectangle {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Shape for Rectangle {
    fn width(&self) -> u32 {
        self.width
    }
    fn height(&self) -> u32 {
        self.height
    }
    fn set_width(&mut self, width: u32) {
        self.width = width;
    }
    fn set_height(&mut self, height: u32) {
        self.height = height;
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Width: {}, Height: {}", self.width, self.height)
    }
}

/// Setting either side sets both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Square {
    side: u32,
}

impl Square {
    pub fn new(side: u32) -> Self {
        Self { side }
    }
}

impl Shape for Square {
    fn width(&self) -> u32 {
        self.side
    }
    fn height(&self) -> u32 {
        self.side
    }
    fn set_width(&mut self, width: u32) {
        self.side = width;
    }
    fn set_height(&mut self, height: u32) {
        self.side = height;
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Width: {}, Height: {}", self.side, self.side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_area() {
        let rc = Rectangle::new(2, 3);
        assert_eq!(area(&rc), 6);
        assert_eq!(rc.to_string(), "Width: 2, Height: 3");
    }

    #[test]
    fn square_keeps_sides_equal() {
        let mut sq: Box<dyn Shape> = Box::new(Square::default());
        sq.set_width(4);
        assert_eq!(sq.height(), 4);
        assert_eq!(area(sq.as_ref()), 16);
    }

    #[test]
    fn large_sides_do_not_overflow() {
        assert_eq!(area(&Rectangle::new(70_000, 70_000)), 4_900_000_000);
        assert_eq!(
            area(&Square::new(u32::MAX)),
            u64::from(u32::MAX) * u64::from(u32::MAX)
        );
    }

    // The substitution failure the demo exists to show.
    #[test]
    fn square_breaks_rectangle_expectations() {
        fn stretch(shape: &mut dyn Shape) -> u64 {
            shape.set_width(2);
            shape.set_height(5);
            area(shape)
        }
        assert_eq!(stretch(&mut Rectangle::default()), 10);
        assert_eq!(stretch(&mut Square::default()), 25);
    }
}
