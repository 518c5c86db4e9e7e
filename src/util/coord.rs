use geo_types::Point;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Trait for types that can provide horizontal x/y coordinates.
///
/// Implemented for `(f64, f64)`, `(f64, f64, f64)`, `geo_types::Point<f64>`
/// and [`Position`]. The encoder only ever looks at these two values.
pub trait Coordinate {
    /// Returns the x-coordinate in world units.
    fn x(&self) -> f64;
    /// Returns the y-coordinate in world units.
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for (f64, f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

impl Coordinate for Position {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
}

/// A world position. `z` is height and is only ever produced by decoding.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    /// Legacy "no position" value returned when a GeoID cannot be decoded.
    pub const SENTINEL: Position = Position::new(-1.0, -1.0, -1.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn is_sentinel(&self) -> bool {
        *self == Self::SENTINEL
    }

    /// Returns this position shifted by the given deltas.
    pub fn offset(&self, dx: f64, dy: f64, dz: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Horizontal part as a `geo_types::Point`.
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.x, self.y)
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        self.offset(rhs.x, rhs.y, rhs.z)
    }
}

impl From<(f64, f64, f64)> for Position {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y, 0.0)
    }
}

impl From<Point<f64>> for Position {
    fn from(point: Point<f64>) -> Self {
        Self::new(point.x(), point.y(), 0.0)
    }
}

impl From<DVec3> for Position {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Position> for DVec3 {
    fn from(p: Position) -> Self {
        DVec3::new(p.x, p.y, p.z)
    }
}

/// Space separated `"x y z"`, the way the host engine prints vectors.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}
