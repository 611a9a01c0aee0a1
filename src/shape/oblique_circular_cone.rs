//! Truncated oblique circular cone.

use crate::math::{Point3, Real, UnitVector3, Vector3, ZERO_TOLERANCE};
use crate::utils;
use na::RealField;

#[cfg(not(feature = "std"))]
use na::ComplexField;

/// Errors raised when building an [`ObliqueCircularCone`] from invalid parameters.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq)]
pub enum ConeError {
    /// The end disc normal does not have unit length.
    #[error("the end disc normal must have unit length")]
    NonUnitEndNormal,
    /// The end disc radius is negative, infinite or NaN.
    #[error("the end disc radius must be finite and non-negative, got {0}")]
    InvalidRadius(Real),
    /// The cone length is negative, infinite or NaN.
    #[error("the cone length must be finite and non-negative, got {0}")]
    InvalidLength(Real),
    /// The apex coincides with the center of the end disc.
    #[error("the apex coincides with the end disc center")]
    DegenerateAxis,
}

/// A circular cone with an apex that is not necessarily above the center of its base, and
/// that may be cut before reaching its apex.
///
/// The cone is the set of circles parallel to the end disc whose centers slide linearly from
/// the apex (radius zero) to the end disc center (radius `end_radius`). Its `length`, measured
/// from the end disc back toward the apex along the main axis, may stop short of the apex.
/// The cut is then described by [`Self::relative_start`]: 0 for a complete cone, and the
/// fraction of the apex-to-end axis that was removed otherwise.
///
/// Every derived quantity is computed once by [`Self::new`]. The only way to modify a cone is
/// [`Self::set`], which rebuilds it entirely.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct ObliqueCircularCone {
    apex: Point3<Real>,
    end_center: Point3<Real>,
    end_normal: UnitVector3<Real>,
    end_radius: Real,
    length: Real,

    relative_start: Real,
    start_center: Point3<Real>,
    apex_to_end: Vector3<Real>,
    inv_axis_dot_normal: Real,
    start_plane_d: Real,
    end_plane_d: Real,
    aabb_mins: Point3<Real>,
    aabb_maxs: Point3<Real>,
}

impl ObliqueCircularCone {
    /// Builds a cone from its apex, its end disc, and its length.
    ///
    /// # Arguments:
    /// * `apex` - the tip of the complete cone.
    /// * `end_center` - the center of the end disc.
    /// * `end_normal` - the unit normal of the end disc, pointing away from the apex.
    /// * `end_radius` - the radius of the end disc.
    /// * `length` - the length of the cone measured from the end disc toward the apex. A
    ///   length greater than or equal to the apex-to-end distance yields a complete cone.
    pub fn new(
        apex: Point3<Real>,
        end_center: Point3<Real>,
        end_normal: Vector3<Real>,
        end_radius: Real,
        length: Real,
    ) -> Result<Self, ConeError> {
        if !relative_eq!(end_normal.norm_squared(), 1.0, epsilon = 1.0e-4) {
            return Err(ConeError::NonUnitEndNormal);
        }

        if !end_radius.is_finite() || end_radius < 0.0 {
            return Err(ConeError::InvalidRadius(end_radius));
        }

        if !length.is_finite() || length < 0.0 {
            return Err(ConeError::InvalidLength(length));
        }

        let apex_to_end = end_center - apex;
        let full_length = apex_to_end.norm();

        if full_length <= ZERO_TOLERANCE {
            return Err(ConeError::DegenerateAxis);
        }

        let relative_start = if length >= full_length {
            if length > full_length {
                log::debug!(
                    "Cone length {} exceeds the apex distance {}, using the complete cone.",
                    length,
                    full_length
                );
            }
            0.0
        } else {
            1.0 - length / full_length
        };

        let end_normal = UnitVector3::new_unchecked(end_normal);
        let start_center = apex + apex_to_end * relative_start;
        let start_radius = end_radius * relative_start;

        let end_extents = disc_extents(&end_normal, end_radius);
        let start_extents = disc_extents(&end_normal, start_radius);
        let aabb_mins = (end_center - end_extents).inf(&(start_center - start_extents));
        let aabb_maxs = (end_center + end_extents).sup(&(start_center + start_extents));

        Ok(Self {
            apex,
            end_center,
            end_normal,
            end_radius,
            length,
            relative_start,
            start_center,
            apex_to_end,
            inv_axis_dot_normal: utils::inv(apex_to_end.dot(&*end_normal)),
            start_plane_d: end_normal.dot(&start_center.coords),
            end_plane_d: end_normal.dot(&end_center.coords),
            aabb_mins,
            aabb_maxs,
        })
    }

    /// Replaces this cone by the one built from the given parameters.
    ///
    /// On error, `self` is left untouched. See [`Self::new`] for the meaning of each argument.
    pub fn set(
        &mut self,
        apex: Point3<Real>,
        end_center: Point3<Real>,
        end_normal: Vector3<Real>,
        end_radius: Real,
        length: Real,
    ) -> Result<(), ConeError> {
        *self = Self::new(apex, end_center, end_normal, end_radius, length)?;
        Ok(())
    }

    /// The tip of the complete cone.
    #[inline]
    pub fn apex(&self) -> &Point3<Real> {
        &self.apex
    }

    /// The center of the end disc.
    #[inline]
    pub fn end_center(&self) -> &Point3<Real> {
        &self.end_center
    }

    /// The unit normal of the end disc.
    #[inline]
    pub fn end_normal(&self) -> &UnitVector3<Real> {
        &self.end_normal
    }

    /// The radius of the end disc.
    #[inline]
    pub fn end_radius(&self) -> Real {
        self.end_radius
    }

    /// The length this cone was built with.
    #[inline]
    pub fn length(&self) -> Real {
        self.length
    }

    /// Fraction of the apex-to-end axis removed by the cut, in `[0, 1]`.
    #[inline]
    pub fn relative_start(&self) -> Real {
        self.relative_start
    }

    /// The center of the start disc, equal to the apex for a complete cone.
    #[inline]
    pub fn start_center(&self) -> &Point3<Real> {
        &self.start_center
    }

    /// The radius of the start disc, zero for a complete cone.
    #[inline]
    pub fn start_radius(&self) -> Real {
        self.end_radius * self.relative_start
    }

    /// The vector from the apex to the end disc center.
    #[inline]
    pub fn apex_to_end(&self) -> &Vector3<Real> {
        &self.apex_to_end
    }

    /// `1 / apex_to_end.dot(end_normal)`, or zero if that dot product is exactly zero.
    #[inline]
    pub fn inv_axis_dot_normal(&self) -> Real {
        self.inv_axis_dot_normal
    }

    /// Signed distance from the origin to the plane of the start disc, along the end normal.
    #[inline]
    pub fn start_plane_distance(&self) -> Real {
        self.start_plane_d
    }

    /// Signed distance from the origin to the plane of the end disc, along the end normal.
    #[inline]
    pub fn end_plane_distance(&self) -> Real {
        self.end_plane_d
    }

    /// The tight axis-aligned bounding box of this cone, as `(mins, maxs)`.
    #[inline]
    pub fn aabb(&self) -> (Point3<Real>, Point3<Real>) {
        (self.aabb_mins, self.aabb_maxs)
    }

    /// Is the end normal (nearly) orthogonal to the main axis?
    ///
    /// Such a cone is flat: it has no volume and contains no point.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.apex_to_end.dot(&*self.end_normal).abs() <= ZERO_TOLERANCE * self.apex_to_end.norm()
    }

    /// Parameter of the cross-section containing `pt`, along the complete cone.
    ///
    /// The parameter is 0 at the apex and 1 on the end disc.
    #[inline]
    pub(crate) fn full_parameter(&self, pt: &Point3<Real>) -> Real {
        (pt - self.apex).dot(&*self.end_normal) * self.inv_axis_dot_normal
    }

    /// Tests if `pt` lies inside this cone, boundary included.
    pub fn contains(&self, pt: &Point3<Real>) -> bool {
        if self.is_degenerate() || self.relative_start >= 1.0 {
            return false;
        }

        let full_t = self.full_parameter(pt);
        let cut_t = (full_t - self.relative_start) / (1.0 - self.relative_start);

        if cut_t < 0.0 || cut_t > 1.0 {
            return false;
        }

        let radius = full_t * self.end_radius;
        let center = self.apex + self.apex_to_end * full_t;

        (pt - center).norm_squared() <= radius * radius
    }

    /// The volume of this cone.
    ///
    /// Returns zero for a degenerate cone.
    pub fn volume(&self) -> Real {
        if self.is_degenerate() {
            log::debug!("Volume requested for a degenerate cone, returning zero.");
            return 0.0;
        }

        let height = self.apex_to_end.dot(&*self.end_normal).abs();
        let full = Real::frac_pi_3() * self.end_radius * self.end_radius * height;

        let cut_radius = self.end_radius * self.relative_start;
        let cut_height = height * self.relative_start;
        let cut = Real::frac_pi_3() * cut_radius * cut_radius * cut_height;

        full - cut
    }
}

/// Half-extents, along each coordinate axis, of a disc with the given normal and radius.
fn disc_extents(normal: &UnitVector3<Real>, radius: Real) -> Vector3<Real> {
    normal.map(|n| radius * (1.0 - n * n).max(0.0).sqrt())
}
