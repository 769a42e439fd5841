//! Integer 3-D points consumed by the clustering pipeline.

use core::fmt;

/// A point with integer coordinates.
///
/// # Examples
/// ```
/// use linkage_core::Point;
///
/// let point = Point::new(162, 817, 812);
/// assert_eq!(point.x(), 162);
/// assert_eq!(point.to_string(), "162,817,812");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    x: i32,
    y: i32,
    z: i32,
}

impl Point {
    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns the x-coordinate.
    #[must_use]
    #[rustfmt::skip]
    pub const fn x(&self) -> i32 { self.x }

    /// Returns the y-coordinate.
    #[must_use]
    #[rustfmt::skip]
    pub const fn y(&self) -> i32 { self.y }

    /// Returns the z-coordinate.
    #[must_use]
    #[rustfmt::skip]
    pub const fn z(&self) -> i32 { self.z }

    /// Returns the coordinates as an array in `x, y, z` order.
    #[must_use]
    pub const fn coordinates(&self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[i32; 3]> for Point {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(i32, i32, i32)> for Point {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}
