use crate::math::Real;

/// The pair `(min(a, b), max(a, b))`.
///
/// Turns two projections or two clip parameters into an interval.
#[inline]
pub fn sort2(a: Real, b: Real) -> (Real, Real) {
    if b < a {
        (b, a)
    } else {
        (a, b)
    }
}
