//! Infinite thin plane.

use crate::math::{Point3, Real, UnitVector3, Vector3};
use crate::utils;

/// An infinite plane of zero thickness.
///
/// A point `p` lies on the plane iff `p.coords.dot(&normal) == d`. The plane splits the space
/// in two sides: points with a positive [`Plane::signed_distance`] lie on the side the normal
/// points to.
///
/// # Precondition
///
/// The normal must have unit length. This is checked by a debug assertion in every
/// constructor; in release builds, a non-unit normal scales every distance returned by this
/// plane by the normal's length and [`Plane::closest_point`] no longer lands on the plane.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone, Copy)]
#[repr(C)]
pub struct Plane {
    /// The unit normal of the plane.
    pub normal: UnitVector3<Real>,
    /// The signed distance from the origin to the plane, along `normal`.
    pub d: Real,
}

impl Plane {
    /// Builds a plane from its unit normal and its signed distance to the origin.
    #[inline]
    pub fn new(normal: UnitVector3<Real>, d: Real) -> Self {
        debug_assert!(
            relative_eq!(normal.norm_squared(), 1.0, epsilon = 1.0e-4),
            "the plane normal must have unit length"
        );
        Self { normal, d }
    }

    /// Builds the plane passing through `point` and orthogonal to `normal`.
    ///
    /// If `normalized` is `false`, `normal` is normalized first. If it is `true`, the caller
    /// guarantees that `normal` already has unit length.
    #[inline]
    pub fn from_point_and_normal(
        point: &Point3<Real>,
        normal: &Vector3<Real>,
        normalized: bool,
    ) -> Self {
        let normal = if normalized {
            UnitVector3::new_unchecked(*normal)
        } else {
            UnitVector3::new_normalize(*normal)
        };

        Self::new(normal, normal.dot(&point.coords))
    }

    /// Builds the plane containing the counter-clockwise triangle `a, b, c`.
    ///
    /// The normal follows the right-hand rule. Returns `None` if the triangle is degenerate.
    #[inline]
    pub fn from_triangle(a: &Point3<Real>, b: &Point3<Real>, c: &Point3<Real>) -> Option<Self> {
        let normal = utils::ccw_face_normal([a, b, c])?;
        Some(Self::new(normal, normal.dot(&a.coords)))
    }

    /// The same plane with its normal pointing to the other side.
    #[inline]
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            d: -self.d,
        }
    }

    /// The signed distance from `pt` to this plane.
    ///
    /// Zero means `pt` lies on the plane, a positive value means it lies on the side the
    /// normal points to.
    #[inline]
    pub fn signed_distance(&self, pt: &Point3<Real>) -> Real {
        self.normal.dot(&pt.coords) - self.d
    }

    /// The point of this plane closest to `pt`.
    #[inline]
    pub fn closest_point(&self, pt: &Point3<Real>) -> Point3<Real> {
        pt + *self.normal * (self.d - self.normal.dot(&pt.coords))
    }
}
