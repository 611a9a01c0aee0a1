use crate::math::{Point, Real, Vector};
use num::Zero;

#[cfg(not(feature = "std"))]
use na::ComplexField;

/// The two points where a line crosses a sphere.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineSphereIntersection<const D: usize> {
    /// The parameters of the intersection points along the line, in increasing order.
    pub params: [Real; 2],
    /// The intersection points, in the same order as `params`.
    pub points: [Point<D>; 2],
}

/// Computes the intersection between the line `origin + t * dir` and the sphere with the given
/// `center` and `radius`.
///
/// Returns `None` if the line misses the sphere. A tangent line yields two equal parameters.
///
/// # Precondition
///
/// `dir` must not be zero. This is checked in debug builds only; in release builds a zero
/// direction yields non-finite parameters.
pub fn intersect_line_with_sphere<const D: usize>(
    origin: &Point<D>,
    dir: &Vector<D>,
    center: &Point<D>,
    radius: Real,
) -> Option<LineSphereIntersection<D>> {
    debug_assert!(!dir.is_zero(), "the line direction must not be zero");
    let a = dir.norm_squared();
    let [t0, t1] = half_quadratic_roots(origin, dir, center, radius, a)?;
    Some(LineSphereIntersection {
        params: [t0, t1],
        points: [origin + dir * t0, origin + dir * t1],
    })
}

/// Computes the intersection between the line `origin + t * dir` and a sphere, assuming that
/// `dir` has unit length.
///
/// This skips the division by the squared length of `dir` made by
/// [`intersect_line_with_sphere`].
pub fn intersect_line_with_sphere_normalized<const D: usize>(
    origin: &Point<D>,
    dir: &Vector<D>,
    center: &Point<D>,
    radius: Real,
) -> Option<LineSphereIntersection<D>> {
    debug_assert!(
        relative_eq!(dir.norm_squared(), 1.0, epsilon = 1.0e-4),
        "the line direction must have unit length"
    );
    let [t0, t1] = half_quadratic_roots(origin, dir, center, radius, 1.0)?;
    Some(LineSphereIntersection {
        params: [t0, t1],
        points: [origin + dir * t0, origin + dir * t1],
    })
}

/// Roots of `a * t² + 2 * b * t + c = 0` for the line-sphere equation, in increasing order.
#[inline]
fn half_quadratic_roots<const D: usize>(
    origin: &Point<D>,
    dir: &Vector<D>,
    center: &Point<D>,
    radius: Real,
    a: Real,
) -> Option<[Real; 2]> {
    let dcenter = origin - center;
    let b = dcenter.dot(dir);
    let c = dcenter.norm_squared() - radius * radius;
    let delta = b * b - a * c;

    if delta < 0.0 {
        // no solution
        return None;
    }

    let sqrt_delta = delta.sqrt();

    if a == 1.0 {
        Some([-b - sqrt_delta, -b + sqrt_delta])
    } else {
        Some([(-b - sqrt_delta) / a, (-b + sqrt_delta) / a])
    }
}
