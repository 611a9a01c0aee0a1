/*!
narrowgeom
==========

**narrowgeom** is a narrow-phase geometric query library for 2 and 3 dimensions written with
the rust programming language.

It answers three questions about pairs of simple primitives: how far apart they are, whether
they overlap, and where they meet. Supported primitives are points, infinite lines, rays,
segments, axis-aligned boxes, planes, spheres, triangles and a truncated oblique circular cone.

Boxes, spheres and triangles are passed to the queries as loose parameters (corner points,
center and radius, vertices). The [`shape::Plane`] and [`shape::ObliqueCircularCone`] types
cache derived data and are built once.

The scalar type [`math::Real`] is `f32` for the `narrowgeom` crate and `f64` for the
`narrowgeom-f64` crate.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![doc(html_root_url = "http://docs.rs/narrowgeom/0.1.0")]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(not(feature = "std"))]
extern crate core as std;

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point2, Point3, UnitVector3, Vector2, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// Magnitude under which cross products, denominators and distances are treated as zero
    /// when detecting parallel, colinear or degenerate configurations.
    pub const ZERO_TOLERANCE: Real = 1.0e-6;

    /// A point with `D` coordinates.
    pub type Point<const D: usize> = na::Point<Real, D>;

    /// A vector with `D` components.
    pub type Vector<const D: usize> = na::SVector<Real, D>;
}
