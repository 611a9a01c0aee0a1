use crate::math::{Point3, Real, Vector3, ZERO_TOLERANCE};
use crate::shape::Plane;

/// Intersection between a line, a ray or a segment, and a plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PlaneIntersection {
    /// The line crosses the plane at a single point.
    Point {
        /// The parameter of the intersection point along the line.
        param: Real,
        /// The intersection point.
        point: Point3<Real>,
    },
    /// The line lies in the plane: every one of its points is an intersection.
    ///
    /// The origin of the line (at parameter zero) is reported as the intersection point.
    Coplanar {
        /// The origin of the line.
        point: Point3<Real>,
    },
}

impl PlaneIntersection {
    /// The parameter of the reported intersection point, zero for [`Self::Coplanar`].
    #[inline]
    pub fn param(&self) -> Real {
        match self {
            Self::Point { param, .. } => *param,
            Self::Coplanar { .. } => 0.0,
        }
    }

    /// The reported intersection point.
    #[inline]
    pub fn point(&self) -> Point3<Real> {
        match self {
            Self::Point { point, .. } | Self::Coplanar { point } => *point,
        }
    }
}

/// Computes the intersection between the line `origin + t * dir` and `plane`.
///
/// Returns `None` if the line is parallel to the plane without lying in it.
pub fn intersect_line_with_plane(
    origin: &Point3<Real>,
    dir: &Vector3<Real>,
    plane: &Plane,
) -> Option<PlaneIntersection> {
    let denom = plane.normal.dot(dir);

    if denom.abs() <= ZERO_TOLERANCE * dir.norm() {
        // Parallel.
        return if plane.signed_distance(origin).abs() <= ZERO_TOLERANCE {
            Some(PlaneIntersection::Coplanar { point: *origin })
        } else {
            None
        };
    }

    let param = (plane.d - plane.normal.dot(&origin.coords)) / denom;

    Some(PlaneIntersection::Point {
        param,
        point: origin + dir * param,
    })
}

/// Computes the intersection between the ray `origin + t * dir`, `t >= 0`, and `plane`.
#[inline]
pub fn intersect_ray_with_plane(
    origin: &Point3<Real>,
    dir: &Vector3<Real>,
    plane: &Plane,
) -> Option<PlaneIntersection> {
    intersect_line_with_plane(origin, dir, plane).filter(|inter| inter.param() >= 0.0)
}

/// Computes the intersection between the segment `[a, b]` and `plane`.
///
/// The parameter of the result is relative to `a + (b - a) * t`.
#[inline]
pub fn intersect_segment_with_plane(
    a: &Point3<Real>,
    b: &Point3<Real>,
    plane: &Plane,
) -> Option<PlaneIntersection> {
    intersect_line_with_plane(a, &(b - a), plane).filter(|inter| {
        let t = inter.param();
        t >= 0.0 && t <= 1.0
    })
}
