//! Affine plane in 3D space.

use std::fmt;

use super::{Point, Vector};
use crate::numeric::are_dependent4;
use crate::op3::PointOP3;
use crate::{KernelError, Result};

/// A plane `{X : N·X + d = 0}` stored as its normal `N` and offset `d`.
///
/// The normal is not normalized. A plane built from collinear points has a
/// null normal; construction does not reject it, but every operation that
/// divides by `|N|²` then returns [`KernelError::DivisionByZero`].
///
/// There is no `PartialEq`: two planes are the same plane when their
/// coefficients are proportional, see [`Plane::is_projectively_equal`].
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    normal: Vector,
    offset: f64,
}

impl Default for Plane {
    /// The XY plane through the origin.
    fn default() -> Self {
        Self::new(Vector::E3, 0.0)
    }
}

impl Plane {
    /// Creates a plane from its normal and offset. The normal is stored as
    /// given, without normalization or validation.
    #[inline]
    pub const fn new(normal: Vector, offset: f64) -> Self {
        Self { normal, offset }
    }

    /// Plane through three points, oriented by `(p2 - p1) × (p3 - p1)`.
    ///
    /// Precondition: the points are not collinear. Collinear points give a
    /// null normal (see the type docs).
    pub fn from_three_points(p1: &Point, p2: &Point, p3: &Point) -> Self {
        let normal = (*p2 - *p1).cross(&(*p3 - *p1));
        let offset = (Point::ORIGIN - *p1).dot(&normal);
        Self { normal, offset }
    }

    #[inline]
    pub const fn normal(&self) -> &Vector {
        &self.normal
    }

    #[inline]
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    /// Returns the coefficients of the cartesian equation `A*X + B*Y + C*Z + D = 0`.
    #[inline]
    pub const fn coefficients(&self) -> (f64, f64, f64, f64) {
        (self.normal.x(), self.normal.y(), self.normal.z(), self.offset)
    }

    /// `d / |N|²`, the signed scale from `-N` to the foot of the perpendicular.
    fn origin_factor(&self, operation: &str) -> Result<f64> {
        let n2 = self.normal.norm_squared();
        if n2 == 0.0 {
            return Err(KernelError::division_by_zero(operation));
        }
        Ok(self.offset / n2)
    }

    /// Foot of the perpendicular from [`Point::ORIGIN`] to the plane.
    pub fn closest_point_to_origin(&self) -> Result<Point> {
        let fact = self.origin_factor("Plane::closest_point_to_origin")?;
        Ok(Point::from_coords(
            -self.normal.x() * fact,
            -self.normal.y() * fact,
            -self.normal.z() * fact,
        ))
    }

    /// Same point as [`Plane::closest_point_to_origin`], in homogeneous
    /// coordinates `(-N, d / |N|²)`.
    pub fn closest_point_projective(&self) -> Result<PointOP3> {
        let fact = self.origin_factor("Plane::closest_point_projective")?;
        Ok(PointOP3::new(
            -self.normal.x(),
            -self.normal.y(),
            -self.normal.z(),
            fact,
        ))
    }

    /// True if both planes have proportional coefficient tuples `(N, d)`.
    ///
    /// The scale may be negative, so a plane equals its own negation.
    pub fn is_projectively_equal(&self, other: &Plane) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        let (a1, b1, c1, d1) = self.coefficients();
        let (a2, b2, c2, d2) = other.coefficients();
        are_dependent4(a1, b1, c1, d1, a2, b2, c2, d2)
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plane(N={}, d={})", self.normal, self.offset)
    }
}
