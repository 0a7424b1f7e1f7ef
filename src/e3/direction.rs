//! Direction with a lazily normalized view.

use std::fmt;
use std::ops::{Add, Sub, Neg};
use std::sync::OnceLock;

use super::{Point, Vector};

/// A direction in 3-space, defined by any vector and compared by its unit
/// vector.
///
/// Invariants:
/// - `vec` (the defining vector) is never modified.
/// - `unit` is filled at most once, from `vec` alone: `vec / |vec|`, or the
///   null vector when `|vec| == 0`.
/// - Every operation returning a `Direction` returns a new instance with an
///   empty cache.
///
/// The cache is a [`OnceLock`], so shared references may be read from many
/// threads; racing first reads may each compute the unit vector but only one
/// value is ever stored.
#[derive(Clone, Debug, Default)]
pub struct Direction {
    vec: Vector,
    unit: OnceLock<Vector>,
}

impl Direction {
    /// Creates a direction from a defining vector of any length.
    #[inline]
    pub const fn new(vec: Vector) -> Self {
        Self {
            vec,
            unit: OnceLock::new(),
        }
    }

    /// Creates a direction from coordinates of its defining vector.
    #[inline]
    pub const fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self::new(Vector::from_coords(x, y, z))
    }

    /// Direction of [`Vector::E1`].
    pub const fn e1() -> Self {
        Self::new(Vector::E1)
    }

    /// Direction of [`Vector::E2`].
    pub const fn e2() -> Self {
        Self::new(Vector::E2)
    }

    /// Direction of [`Vector::E3`].
    pub const fn e3() -> Self {
        Self::new(Vector::E3)
    }

    /// The defining vector, as given at construction.
    #[inline]
    pub const fn vector(&self) -> &Vector {
        &self.vec
    }

    /// The unit vector of this direction, computed on first access.
    ///
    /// A zero-length defining vector gives the null vector; this is the
    /// degenerate direction, not an error.
    pub fn unit(&self) -> &Vector {
        self.unit.get_or_init(|| {
            let norm = self.vec.norm();
            if norm == 0.0 {
                log::trace!("degenerate direction: defining vector has zero norm");
                Vector::ZERO
            } else {
                let inv = 1.0 / norm;
                Vector::from_coords(self.vec.x() * inv, self.vec.y() * inv, self.vec.z() * inv)
            }
        })
    }

    /// True once [`Direction::unit`] has been computed for this instance.
    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.unit.get().is_some()
    }

    /// The point on the unit sphere in this direction.
    #[inline]
    pub fn end_point(&self) -> Point {
        self.unit().to_point()
    }

    /// Dot product of the two unit vectors.
    #[inline]
    pub fn dot(&self, other: &Direction) -> f64 {
        self.unit().dot(other.unit())
    }

    /// Direction of the cross product of the two unit vectors.
    #[inline]
    pub fn cross(&self, other: &Direction) -> Direction {
        Direction::new(self.unit().cross(other.unit()))
    }
}

/// The sum of the unit vectors, renormalized lazily.
impl Add for &Direction {
    type Output = Direction;
    #[inline]
    fn add(self, other: &Direction) -> Direction {
        Direction::new(*self.unit() + *other.unit())
    }
}

impl Add for Direction {
    type Output = Direction;
    #[inline]
    fn add(self, other: Direction) -> Direction {
        &self + &other
    }
}

/// The difference of the unit vectors, renormalized lazily.
impl Sub for &Direction {
    type Output = Direction;
    #[inline]
    fn sub(self, other: &Direction) -> Direction {
        Direction::new(*self.unit() - *other.unit())
    }
}

impl Sub for Direction {
    type Output = Direction;
    #[inline]
    fn sub(self, other: Direction) -> Direction {
        &self - &other
    }
}

impl Neg for &Direction {
    type Output = Direction;
    #[inline]
    fn neg(self) -> Direction {
        Direction::new(-self.vec)
    }
}

impl Neg for Direction {
    type Output = Direction;
    #[inline]
    fn neg(self) -> Direction {
        -&self
    }
}

/// Exact equality of the unit vectors; resolves both caches.
impl PartialEq for Direction {
    fn eq(&self, other: &Direction) -> bool {
        std::ptr::eq(self, other) || self.unit() == other.unit()
    }
}

impl From<Vector> for Direction {
    fn from(vec: Vector) -> Self {
        Direction::new(vec)
    }
}

impl From<&Direction> for [f64; 3] {
    fn from(d: &Direction) -> Self {
        (*d.unit()).into()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let u = self.unit();
        write!(f, "Direction({}, {}, {})", u.x(), u.y(), u.z())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Direction {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.vec, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Direction {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        <Vector as serde::Deserialize>::deserialize(deserializer).map(Direction::new)
    }
}
