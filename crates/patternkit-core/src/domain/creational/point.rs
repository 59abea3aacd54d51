//! Factory methods: named constructors for points.
//!
//! `Point::new` is private because `(a, b)` could mean cartesian or polar
//! coordinates; the factory methods say which.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x : {}, y : {}", tidy(self.x), tidy(self.y))
    }
}

/// Round to six decimals so `polar(1, pi/2)` prints as `x : 0`.
fn tidy(v: f64) -> f64 {
    let rounded = (v * 1e6).round() / 1e6;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Named constructors for [`Point`].
pub struct PointFactory;

impl PointFactory {
    pub fn cartesian(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    pub fn polar(rho: f64, theta: f64) -> Point {
        Point::new(rho * theta.cos(), rho * theta.sin())
    }
}
