use crate::math::Point;

/// Tests if the AABBs `[mins1, maxs1]` and `[mins2, maxs2]` overlap.
///
/// Boxes that only touch along their border are considered overlapping.
#[inline]
pub fn intersection_test_aabb_aabb<const D: usize>(
    mins1: &Point<D>,
    maxs1: &Point<D>,
    mins2: &Point<D>,
    maxs2: &Point<D>,
) -> bool {
    (0..D).all(|i| mins1[i] <= maxs2[i] && mins2[i] <= maxs1[i])
}
