//! 3D vector.

use std::fmt;
use std::ops::{Add, Sub, Mul, Div, Neg};

use super::{Point, XYZ};
use crate::{KernelError, Result};

/// A free displacement (direction and magnitude) in Euclidean 3-space.
///
/// `==` is exact component-wise equality.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    coord: XYZ,
}

impl Vector {
    /// The null vector.
    pub const ZERO: Vector = Vector::from_coords(0.0, 0.0, 0.0);
    /// First basis vector (1, 0, 0).
    pub const E1: Vector = Vector::from_coords(1.0, 0.0, 0.0);
    /// Second basis vector (0, 1, 0).
    pub const E2: Vector = Vector::from_coords(0.0, 1.0, 0.0);
    /// Third basis vector (0, 0, 1).
    pub const E3: Vector = Vector::from_coords(0.0, 0.0, 1.0);

    /// Creates a vector from XYZ coordinates.
    #[inline]
    pub const fn from_xyz(xyz: XYZ) -> Self {
        Self { coord: xyz }
    }

    /// Creates a vector from coordinates.
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

    #[inline]
    pub const fn coords(&self) -> (f64, f64, f64) {
        self.coord.coords()
    }

    #[inline]
    pub const fn xyz(&self) -> &XYZ {
        &self.coord
    }

    #[inline]
    pub const fn dot(&self, other: &Vector) -> f64 {
        self.coord.dot(&other.coord)
    }

    /// Sum of squared components.
    #[inline]
    pub const fn norm_squared(&self) -> f64 {
        self.coord.square_modulus()
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        self.coord.modulus()
    }

    /// Returns the vector scaled to unit length.
    ///
    /// Fails with [`KernelError::DivisionByZero`] when the norm is exactly
    /// zero. Compare [`super::Direction::unit`], which maps the null vector to
    /// itself instead.
    pub fn normalize(&self) -> Result<Vector> {
        let norm = self.norm();
        if norm == 0.0 {
            return Err(KernelError::division_by_zero("Vector::normalize"));
        }
        Ok((1.0 / norm) * *self)
    }

    /// Right-handed cross product.
    #[inline]
    pub fn cross(&self, other: &Vector) -> Vector {
        Vector {
            coord: self.coord.crossed(&other.coord),
        }
    }

    /// The point at this offset from [`Point::ORIGIN`].
    #[inline]
    pub const fn to_point(&self) -> Point {
        Point::from_xyz(self.coord)
    }
}

impl Add for Vector {
    type Output = Vector;
    #[inline]
    fn add(self, other: Vector) -> Vector {
        Vector { coord: self.coord + other.coord }
    }
}

impl Sub for Vector {
    type Output = Vector;
    #[inline]
    fn sub(self, other: Vector) -> Vector {
        Vector { coord: self.coord - other.coord }
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, scalar: f64) -> Vector {
        Vector { coord: self.coord * scalar }
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;
    #[inline]
    fn mul(self, v: Vector) -> Vector {
        Vector { coord: self * v.coord }
    }
}

/// IEEE division: a zero divisor yields infinities or NaN, not an error.
impl Div<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn div(self, scalar: f64) -> Vector {
        Vector { coord: self.coord / scalar }
    }
}

impl Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        Vector { coord: -self.coord }
    }
}

/// Same instance, or all three coordinates equal under `f64 ==`.
impl PartialEq for Vector {
    #[inline]
    fn eq(&self, other: &Vector) -> bool {
        std::ptr::eq(self, other) || self.coord == other.coord
    }
}

impl From<[f64; 3]> for Vector {
    fn from(arr: [f64; 3]) -> Self {
        Vector::from_xyz(arr.into())
    }
}

impl From<(f64, f64, f64)> for Vector {
    fn from(tuple: (f64, f64, f64)) -> Self {
        Vector::from_xyz(tuple.into())
    }
}

impl From<Vector> for [f64; 3] {
    fn from(v: Vector) -> Self {
        v.coord.into()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({}, {}, {})", self.x(), self.y(), self.z())
    }
}
