//! 3D point.

use std::fmt;
use std::ops::{Add, Sub};

use super::{Vector, XYZ};

/// An absolute position in Euclidean 3-space.
///
/// `==` is exact coordinate equality; there is no tolerance.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    coord: XYZ,
}

impl Point {
    /// The origin (0, 0, 0).
    pub const ORIGIN: Point = Point::from_coords(0.0, 0.0, 0.0);

    /// Creates a point from XYZ coordinates.
    #[inline]
    pub const fn from_xyz(xyz: XYZ) -> Self {
        Self { coord: xyz }
    }

    /// Creates a point from coordinates.
    #[inline]
    pub const fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self {
            coord: XYZ::from_coords(x, y, z),
        }
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.coord.x()
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.coord.y()
    }

    #[inline]
    pub const fn z(&self) -> f64 {
        self.coord.z()
    }

    /// Returns all coordinates as tuple.
    #[inline]
    pub const fn coords(&self) -> (f64, f64, f64) {
        self.coord.coords()
    }

    #[inline]
    pub const fn xyz(&self) -> &XYZ {
        &self.coord
    }

    /// Computes square distance to another point.
    #[inline]
    pub fn distance_squared(&self, other: &Point) -> f64 {
        let dx = other.coord.x() - self.coord.x();
        let dy = other.coord.y() - self.coord.y();
        let dz = other.coord.z() - self.coord.z();
        dx * dx + dy * dy + dz * dz
    }

    /// Computes distance to another point.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Displacement of this point from [`Point::ORIGIN`].
    #[inline]
    pub fn to_vector(&self) -> Vector {
        *self - Point::ORIGIN
    }

    /// Returns the point translated by `v`.
    #[inline]
    pub fn translated(&self, v: &Vector) -> Point {
        Point {
            coord: self.coord + *v.xyz(),
        }
    }
}

impl Add<Vector> for Point {
    type Output = Point;
    #[inline]
    fn add(self, v: Vector) -> Point {
        self.translated(&v)
    }
}

/// `p - q` is the displacement from `q` to `p`.
impl Sub for Point {
    type Output = Vector;
    #[inline]
    fn sub(self, other: Point) -> Vector {
        Vector::from_xyz(self.coord - other.coord)
    }
}

/// Same instance, or all three coordinates equal under `f64 ==`.
impl PartialEq for Point {
    #[inline]
    fn eq(&self, other: &Point) -> bool {
        std::ptr::eq(self, other) || self.coord == other.coord
    }
}

impl From<[f64; 3]> for Point {
    fn from(arr: [f64; 3]) -> Self {
        Point::from_xyz(arr.into())
    }
}

impl From<(f64, f64, f64)> for Point {
    fn from(tuple: (f64, f64, f64)) -> Self {
        Point::from_xyz(tuple.into())
    }
}

impl From<Point> for [f64; 3] {
    fn from(p: Point) -> Self {
        p.coord.into()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {}, {})", self.x(), self.y(), self.z())
    }
}
