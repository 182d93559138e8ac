//! Basic geometric types used at the placement boundary.

use serde::Serialize;

/// A point in room space.
///
/// The coordinate system matches the room: `x` runs along the front wall,
/// `y` is the vertical elevation, and `z` runs along the side walls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Point3 {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate (elevation) of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Returns the z-coordinate of the point
    pub fn z(self) -> f64 {
        self.z
    }

    /// Checks if all three coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point3) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}
