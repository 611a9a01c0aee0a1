use crate::math::{Point, Real};

/// Tests if the AABB `[mins, maxs]` intersects the sphere (or disc in 2D) with the given
/// `center` and `radius`.
pub fn intersection_test_aabb_sphere<const D: usize>(
    mins: &Point<D>,
    maxs: &Point<D>,
    center: &Point<D>,
    radius: Real,
) -> bool {
    // The planes of the box faces are the cheapest separating axes to test.
    for i in 0..D {
        if center[i] + radius < mins[i] || center[i] - radius > maxs[i] {
            return false;
        }
    }

    // Squared distance from the center to the closest point of the box.
    let mut sq_dist: Real = 0.0;

    for i in 0..D {
        let closest = center[i].max(mins[i]).min(maxs[i]);
        let diff = center[i] - closest;
        sq_dist += diff * diff;
    }

    sq_dist <= radius * radius
}
