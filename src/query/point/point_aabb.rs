use crate::math::{Point, Real};

#[cfg(not(feature = "std"))]
use na::ComplexField;

/// Tests if `pt` lies inside the AABB `[mins, maxs]`, border included.
#[inline]
pub fn is_point_in_aabb<const D: usize>(pt: &Point<D>, mins: &Point<D>, maxs: &Point<D>) -> bool {
    (0..D).all(|i| pt[i] >= mins[i] && pt[i] <= maxs[i])
}

/// Computes the distance between `pt` and the AABB `[mins, maxs]`.
///
/// The distance is zero if `pt` lies inside the box or on its border. Otherwise, the feature of
/// the box closest to `pt` is identified by counting the axes along which `pt` lies outside of
/// the box slab:
/// - one axis: the closest feature is a face and the distance is the gap along that axis,
/// - several axes: the closest feature is an edge or a vertex, and the distance is the one to
///   the point obtained by clamping each outside coordinate to its nearest bound.
pub fn distance_to_aabb<const D: usize>(pt: &Point<D>, mins: &Point<D>, maxs: &Point<D>) -> Real {
    let mut num_outside = 0;
    let mut last_gap: Real = 0.0;
    let mut sq_dist: Real = 0.0;

    for i in 0..D {
        let gap = if pt[i] < mins[i] {
            mins[i] - pt[i]
        } else if pt[i] > maxs[i] {
            pt[i] - maxs[i]
        } else {
            // Inside the slab, border included.
            continue;
        };

        num_outside += 1;
        last_gap = gap;
        sq_dist += gap * gap;
    }

    match num_outside {
        0 => 0.0,
        1 => last_gap,
        _ => sq_dist.sqrt(),
    }
}
