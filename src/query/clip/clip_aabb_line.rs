use crate::math::{Point, Real, Vector, ZERO_TOLERANCE};

/// Computes the parameters of the points where the line `origin + t * dir` enters and exits
/// the AABB `[mins, maxs]`, using the slab method.
///
/// Returns `Some((entry, exit))` with `entry <= exit`, or `None` if the line misses the box.
///
/// A zero component of `dir` produces infinite slab parameters: they are ordered correctly by
/// the `min`/`max` operations and make the slab along that axis either irrelevant (the origin
/// lies inside it) or empty. No tolerance is applied to `dir`.
pub fn clip_aabb_line<const D: usize>(
    mins: &Point<D>,
    maxs: &Point<D>,
    origin: &Point<D>,
    dir: &Vector<D>,
) -> Option<(Real, Real)> {
    let mut entry = -Real::MAX;
    let mut exit = Real::MAX;

    for i in 0..D {
        let inv_dir = 1.0 / dir[i];
        let t1 = (mins[i] - origin[i]) * inv_dir;
        let t2 = (maxs[i] - origin[i]) * inv_dir;

        if t1.is_nan() || t2.is_nan() {
            // `0 * inf`: the line runs along a boundary of this slab and never leaves it.
            continue;
        }

        entry = entry.max(t1.min(t2));
        exit = exit.min(t1.max(t2));
    }

    if exit >= entry {
        Some((entry, exit))
    } else {
        None
    }
}

/// Computes the parameters of the portion of the segment `[a, b]` inside the AABB
/// `[mins, maxs]`.
///
/// The parameters are relative to `a + (b - a) * t` and lie in `[0, 1]`. Returns `None` if the
/// segment misses the box.
pub fn clip_aabb_segment<const D: usize>(
    mins: &Point<D>,
    maxs: &Point<D>,
    a: &Point<D>,
    b: &Point<D>,
) -> Option<(Real, Real)> {
    let (entry, exit) = clip_aabb_line(mins, maxs, a, &(b - a))?;
    let entry = entry.max(0.0);
    let exit = exit.min(1.0);

    if exit >= entry {
        Some((entry, exit))
    } else {
        None
    }
}

/// Computes the parameters of the points where the ray `origin + t * dir`, `t >= 0`, enters
/// and exits the AABB `[mins, maxs]`.
///
/// The ray must enter the box at a non-negative parameter (up to [`ZERO_TOLERANCE`]): a ray
/// starting inside of the box is reported as a miss.
pub fn clip_aabb_ray<const D: usize>(
    mins: &Point<D>,
    maxs: &Point<D>,
    origin: &Point<D>,
    dir: &Vector<D>,
) -> Option<(Real, Real)> {
    clip_aabb_line(mins, maxs, origin, dir).filter(|(entry, _)| *entry >= -ZERO_TOLERANCE)
}

/// Tests if the line `origin + t * dir` intersects the AABB `[mins, maxs]`.
#[inline]
pub fn intersection_test_aabb_line<const D: usize>(
    mins: &Point<D>,
    maxs: &Point<D>,
    origin: &Point<D>,
    dir: &Vector<D>,
) -> bool {
    clip_aabb_line(mins, maxs, origin, dir).is_some()
}

/// Tests if the segment `[a, b]` intersects the AABB `[mins, maxs]`.
#[inline]
pub fn intersection_test_aabb_segment<const D: usize>(
    mins: &Point<D>,
    maxs: &Point<D>,
    a: &Point<D>,
    b: &Point<D>,
) -> bool {
    clip_aabb_segment(mins, maxs, a, b).is_some()
}

/// Tests if the ray `origin + t * dir` enters the AABB `[mins, maxs]`.
///
/// See [`clip_aabb_ray`] for the treatment of rays starting inside of the box.
#[inline]
pub fn intersection_test_aabb_ray<const D: usize>(
    mins: &Point<D>,
    maxs: &Point<D>,
    origin: &Point<D>,
    dir: &Vector<D>,
) -> bool {
    clip_aabb_ray(mins, maxs, origin, dir).is_some()
}
