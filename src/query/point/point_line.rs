use crate::math::{Point, Real, Vector, ZERO_TOLERANCE};

/// Projects `pt` on the infinite line `origin + t * dir`.
///
/// Returns the parameter `t` of the projection and the projected point. If `dir` is (nearly)
/// zero, the line degenerates to `origin`, which is returned with `t = 0`.
#[inline]
pub fn project_point_on_line<const D: usize>(
    pt: &Point<D>,
    origin: &Point<D>,
    dir: &Vector<D>,
) -> (Real, Point<D>) {
    let sq_len = dir.norm_squared();

    if sq_len <= ZERO_TOLERANCE * ZERO_TOLERANCE {
        return (0.0, *origin);
    }

    let t = (pt - origin).dot(dir) / sq_len;
    (t, origin + dir * t)
}

/// Distance from `pt` to the infinite line `origin + t * dir`.
#[inline]
pub fn distance_to_line<const D: usize>(
    pt: &Point<D>,
    origin: &Point<D>,
    dir: &Vector<D>,
) -> Real {
    let (_, proj) = project_point_on_line(pt, origin, dir);
    na::distance(pt, &proj)
}

/// Projects `pt` on the segment `[a, b]`.
///
/// Returns the parameter `t ∈ [0, 1]` of the projection, such that the projected point is
/// `a + (b - a) * t`, and the projected point itself. A (nearly) zero-length segment is treated
/// as the point `a`.
#[inline]
pub fn project_point_on_segment<const D: usize>(
    pt: &Point<D>,
    a: &Point<D>,
    b: &Point<D>,
) -> (Real, Point<D>) {
    let ab = b - a;
    let ap = pt - a;
    let ab_ap = ab.dot(&ap);

    if ab_ap <= 0.0 {
        // Voronoï region of `a`.
        return (0.0, *a);
    }

    let sq_len = ab.norm_squared();

    if ab_ap >= sq_len {
        // Voronoï region of `b`. Degenerate segments are caught here too.
        return (1.0, *b);
    }

    if sq_len <= ZERO_TOLERANCE * ZERO_TOLERANCE {
        return (0.0, *a);
    }

    let t = ab_ap / sq_len;
    (t, a + ab * t)
}

/// Distance from `pt` to the segment `[a, b]`.
#[inline]
pub fn distance_to_segment<const D: usize>(pt: &Point<D>, a: &Point<D>, b: &Point<D>) -> Real {
    let (_, proj) = project_point_on_segment(pt, a, b);
    na::distance(pt, &proj)
}
