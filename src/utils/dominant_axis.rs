use crate::math::{Real, Vector};

/// Index of the component of `v` with the largest magnitude.
///
/// Ties are resolved in favor of the lowest index.
#[inline]
pub fn dominant_axis<const D: usize>(v: &Vector<D>) -> usize {
    let mut best = 0;
    let mut best_abs: Real = v[0].abs();

    for i in 1..D {
        if v[i].abs() > best_abs {
            best = i;
            best_abs = v[i].abs();
        }
    }

    best
}
