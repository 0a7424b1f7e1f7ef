//! 3D coordinate triplet.
//!
//! Storage and algebra shared by [`super::Point`] and [`super::Vector`].
//! Equality is the native `f64` equality on all three coordinates.

use std::ops::{Add, Sub, Mul, Div, Neg};
use crate::numeric::determinant2;

/// Cartesian coordinate entity {X, Y, Z}.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XYZ {
    x: f64,
    y: f64,
    z: f64,
}

impl XYZ {
    /// Creates an XYZ with given coordinates.
    #[inline]
    pub const fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Returns all three coordinates as a tuple.
    #[inline]
    pub const fn coords(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    /// Computes the square of the modulus.
    #[inline]
    pub const fn square_modulus(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Computes the modulus (length).
    #[inline]
    pub fn modulus(&self) -> f64 {
        self.square_modulus().sqrt()
    }

    /// Computes dot product.
    #[inline]
    pub const fn dot(&self, other: &XYZ) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the right-handed cross product, one 2x2 minor per component.
    #[inline]
    pub fn crossed(&self, other: &XYZ) -> XYZ {
        XYZ {
            x: determinant2(self.y, other.y, self.z, other.z),
            y: -determinant2(self.x, other.x, self.z, other.z),
            z: determinant2(self.x, other.x, self.y, other.y),
        }
    }
}

impl Add for XYZ {
    type Output = XYZ;
    #[inline]
    fn add(self, other: XYZ) -> XYZ {
        XYZ {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for XYZ {
    type Output = XYZ;
    #[inline]
    fn sub(self, other: XYZ) -> XYZ {
        XYZ {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Mul<f64> for XYZ {
    type Output = XYZ;
    #[inline]
    fn mul(self, scalar: f64) -> XYZ {
        XYZ {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl Mul<XYZ> for f64 {
    type Output = XYZ;
    #[inline]
    fn mul(self, xyz: XYZ) -> XYZ {
        XYZ {
            x: self * xyz.x,
            y: self * xyz.y,
            z: self * xyz.z,
        }
    }
}

impl Div<f64> for XYZ {
    type Output = XYZ;
    #[inline]
    fn div(self, scalar: f64) -> XYZ {
        XYZ {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

impl Neg for XYZ {
    type Output = XYZ;
    #[inline]
    fn neg(self) -> XYZ {
        XYZ {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl From<[f64; 3]> for XYZ {
    #[inline]
    fn from(arr: [f64; 3]) -> Self {
        XYZ { x: arr[0], y: arr[1], z: arr[2] }
    }
}

impl From<(f64, f64, f64)> for XYZ {
    #[inline]
    fn from(tuple: (f64, f64, f64)) -> Self {
        XYZ { x: tuple.0, y: tuple.1, z: tuple.2 }
    }
}

impl From<XYZ> for [f64; 3] {
    #[inline]
    fn from(xyz: XYZ) -> Self {
        [xyz.x, xyz.y, xyz.z]
    }
}
