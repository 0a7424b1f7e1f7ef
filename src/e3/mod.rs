//! Euclidean 3-space.
//!
//! Point and Vector are both stored as an [`XYZ`] triple; Direction wraps a
//! Vector with a lazily normalized view; Plane is a (normal, offset) pair.
//!
//! Point, Vector and Direction compare exactly (`==`). Plane equality is
//! projective and only available as [`Plane::is_projectively_equal`].

mod xyz;
mod point;
mod vector;
mod direction;
mod plane;
mod axis;

pub use xyz::XYZ;
pub use point::Point;
pub use vector::Vector;
pub use direction::Direction;
pub use plane::Plane;
pub use axis::{dominant, dominant_of, least_dominant, least_dominant_of, Axis};
