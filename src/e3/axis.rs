//! Axis-dominance classification.
//!
//! `dominant` and `least_dominant` are deliberately not mirror images:
//!
//! | | comparison | zero winning component |
//! |---|---|---|
//! | `dominant` | `>=`, X then Y against Z | negative axis |
//! | `least_dominant` | `<=`, X then Y against Z | positive axis |

use std::fmt;

use super::Vector;

/// One of the six signed principal axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

// Indexed by `Axis as usize`.
const UNIT_VECTORS: [Vector; 6] = [
    Vector::from_coords(1.0, 0.0, 0.0),
    Vector::from_coords(-1.0, 0.0, 0.0),
    Vector::from_coords(0.0, 1.0, 0.0),
    Vector::from_coords(0.0, -1.0, 0.0),
    Vector::from_coords(0.0, 0.0, 1.0),
    Vector::from_coords(0.0, 0.0, -1.0),
];

impl Axis {
    pub const ALL: [Axis; 6] = [
        Axis::PosX,
        Axis::NegX,
        Axis::PosY,
        Axis::NegY,
        Axis::PosZ,
        Axis::NegZ,
    ];

    /// Unit vector pointing along this axis.
    #[inline]
    pub const fn unit_vector(self) -> Vector {
        UNIT_VECTORS[self as usize]
    }

    /// The same axis with the opposite sign.
    pub const fn opposite(self) -> Axis {
        match self {
            Axis::PosX => Axis::NegX,
            Axis::NegX => Axis::PosX,
            Axis::PosY => Axis::NegY,
            Axis::NegY => Axis::PosY,
            Axis::PosZ => Axis::NegZ,
            Axis::NegZ => Axis::PosZ,
        }
    }
}

impl From<Axis> for Vector {
    fn from(axis: Axis) -> Self {
        axis.unit_vector()
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::PosX => "+X",
            Axis::NegX => "-X",
            Axis::PosY => "+Y",
            Axis::NegY => "-Y",
            Axis::PosZ => "+Z",
            Axis::NegZ => "-Z",
        };
        f.write_str(name)
    }
}

/// Axis of the component with the largest magnitude.
///
/// X wins ties with Y or Z, Y wins ties with Z. The axis is positive only
/// if the winning component is `> 0`.
pub fn dominant(dx: f64, dy: f64, dz: f64) -> Axis {
    let (ax, ay, az) = (dx.abs(), dy.abs(), dz.abs());

    if ax >= ay && ax >= az {
        if dx > 0.0 { Axis::PosX } else { Axis::NegX }
    } else if ay >= az {
        if dy > 0.0 { Axis::PosY } else { Axis::NegY }
    } else if dz > 0.0 {
        Axis::PosZ
    } else {
        Axis::NegZ
    }
}

/// Axis of the component with the smallest magnitude.
///
/// X wins ties with Y or Z, Y wins ties with Z. The axis is positive if the
/// winning component is `>= 0`.
pub fn least_dominant(dx: f64, dy: f64, dz: f64) -> Axis {
    let (ax, ay, az) = (dx.abs(), dy.abs(), dz.abs());

    if ax <= ay && ax <= az {
        if dx >= 0.0 { Axis::PosX } else { Axis::NegX }
    } else if ay <= az {
        if dy >= 0.0 { Axis::PosY } else { Axis::NegY }
    } else if dz >= 0.0 {
        Axis::PosZ
    } else {
        Axis::NegZ
    }
}

#[inline]
pub fn dominant_of(v: &Vector) -> Axis {
    dominant(v.x(), v.y(), v.z())
}

#[inline]
pub fn least_dominant_of(v: &Vector) -> Axis {
    least_dominant(v.x(), v.y(), v.z())
}
