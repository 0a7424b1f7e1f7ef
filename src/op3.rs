//! Oriented-projective 3-space point.
//!
//! Only the surface the Euclidean kernel needs: it produces these values
//! (see [`crate::Plane::closest_point_projective`]) and hands them on.

use std::fmt;

/// A point of oriented projective 3-space in homogeneous coordinates
/// `(hx, hy, hz, hw)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointOP3 {
    hx: f64,
    hy: f64,
    hz: f64,
    hw: f64,
}

impl PointOP3 {
    #[inline]
    pub const fn new(hx: f64, hy: f64, hz: f64, hw: f64) -> Self {
        Self { hx, hy, hz, hw }
    }

    #[inline]
    pub const fn hx(&self) -> f64 {
        self.hx
    }

    #[inline]
    pub const fn hy(&self) -> f64 {
        self.hy
    }

    #[inline]
    pub const fn hz(&self) -> f64 {
        self.hz
    }

    #[inline]
    pub const fn hw(&self) -> f64 {
        self.hw
    }

    /// Returns all four homogeneous coordinates as a tuple.
    #[inline]
    pub const fn coords(&self) -> (f64, f64, f64, f64) {
        (self.hx, self.hy, self.hz, self.hw)
    }
}

impl From<PointOP3> for [f64; 4] {
    fn from(p: PointOP3) -> Self {
        [p.hx, p.hy, p.hz, p.hw]
    }
}

impl fmt::Display for PointOP3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PointOP3({}, {}, {}, {})", self.hx, self.hy, self.hz, self.hw)
    }
}
