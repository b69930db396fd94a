use std::{
    cmp::Ordering,
    convert::TryFrom,
    fmt,
    ops::{Add, Mul, Sub},
};

use crate::error::{Error, Result};

/// Immutable 2D coordinate, also used as a vector.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
	Point { x, y }
    }

    pub fn get(&self, index: usize) -> Result<f64> {
	match index {
	    0 => Ok(self.x),
	    1 => Ok(self.y),
	    other => Err(Error::IndexOutOfRange(other)),
	}
    }

    pub fn abs(self) -> Point {
	Point::new(self.x.abs(), self.y.abs())
    }

    /// Both components strictly greater than `other`'s.
    pub fn upper_right_of(&self, other: &Point) -> bool {
	self.x > other.x && self.y > other.y
    }

    pub fn distance(&self, other: &Point) -> f64 {
	self.vector_to(other).magnitude()
    }

    pub fn midpoint(&self, other: &Point) -> Point {
	Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Strictly inside, compared on squared distances.
    pub fn in_circle(&self, center: &Point, radius: f64) -> bool {
	let dx = center.x - self.x;
	let dy = center.y - self.y;
	dx * dx + dy * dy < radius * radius
    }

    pub fn to_array(self) -> [f64; 2] {
	[self.x, self.y]
    }

    pub fn magnitude(&self) -> f64 {
	(self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit vector in the same direction. The zero vector has no direction,
    /// so it normalizes to itself instead of failing.
    pub fn normalize(&self) -> Point {
	let mag = self.magnitude();
	if mag == 0.0 {
	    return Point::ZERO;
	}
	Point::new(self.x / mag, self.y / mag)
    }

    /// Delta from `self` to `other`.
    pub fn vector_to(&self, other: &Point) -> Point {
	Point::new(other.x - self.x, other.y - self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	write!(f, "{},{}", self.x, self.y)
    }
}

/// Partial order by the upper-right rule: `Greater` only when both
/// components are strictly greater, `Less` only when both are strictly less.
impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Point) -> Option<Ordering> {
	if self == other {
	    Some(Ordering::Equal)
	} else if self.upper_right_of(other) {
	    Some(Ordering::Greater)
	} else if other.upper_right_of(self) {
	    Some(Ordering::Less)
	} else {
	    None
	}
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
	Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
	Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul for Point {
    type Output = Point;

    fn mul(self, other: Point) -> Point {
	Point::new(self.x * other.x, self.y * other.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, factor: f64) -> Point {
	Point::new(self.x * factor, self.y * factor)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
	Point::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
	Point::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
	(p.x, p.y)
    }
}

impl TryFrom<&[f64]> for Point {
    type Error = Error;

    fn try_from(values: &[f64]) -> Result<Self> {
	match values {
	    [x, y] => Ok(Point::new(*x, *y)),
	    other => Err(Error::InvalidArgument(format!(
		"a point needs exactly 2 components, got {}", other.len()))),
	}
    }
}

impl TryFrom<Vec<f64>> for Point {
    type Error = Error;

    fn try_from(values: Vec<f64>) -> Result<Self> {
	Point::try_from(values.as_slice())
    }
}
