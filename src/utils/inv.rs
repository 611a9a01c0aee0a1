use crate::math::Real;

/// Reciprocal of `val`, with `inv(0) == 0`.
///
/// Used for cached reciprocals that may legitimately be zero. A flat oblique cone has an end
/// normal orthogonal to its axis, so `apex_to_end · end_normal` vanishes. Caching `0` instead of
/// an infinite inverse keeps the cone's full parameter finite. Callers that need the real
/// quotient check `is_degenerate` first. Likewise, a zero-length second primitive in a colinear
/// 2D overlap maps to the parameter `0`.
#[inline]
pub fn inv(val: Real) -> Real {
    if val == 0.0 {
        0.0
    } else {
        1.0 / val
    }
}

#[cfg(test)]
mod test {
    use super::inv;

    #[test]
    fn inverse_of_zero_is_zero() {
        assert_eq!(inv(0.0), 0.0);
        assert_eq!(inv(-0.0), 0.0);
        assert_eq!(inv(4.0), 0.25);
    }
}
