use crate::math::{Real, Vector2};

/// The 2D cross product `a.x * b.y - a.y * b.x`.
///
/// Its sign tells on which side of `a` the vector `b` lies, and it is zero when both are
/// parallel.
#[inline]
pub fn perp2(a: &Vector2<Real>, b: &Vector2<Real>) -> Real {
    a.x * b.y - a.y * b.x
}
