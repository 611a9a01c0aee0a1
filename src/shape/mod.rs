//! Shapes carrying precomputed data.
//!
//! Boxes, spheres and triangles have no dedicated type: they are given to the queries of
//! [`crate::query`] as loose parameters.

pub use self::oblique_circular_cone::{ConeError, ObliqueCircularCone};
pub use self::plane::Plane;

mod oblique_circular_cone;
mod plane;
