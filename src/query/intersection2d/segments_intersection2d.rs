use crate::math::{Point2, Real, Vector2, ZERO_TOLERANCE};
use crate::utils::{dominant_axis, inv, perp2, sort2};
use num::Zero;

/// Intersection between two linear primitives (lines, rays or segments) in 2D.
///
/// Parameters are relative to the parametric form `origin + t * dir` of each primitive, where
/// a segment `[a, b]` has origin `a` and direction `b - a`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LinearIntersection2 {
    /// The primitives do not intersect.
    Disjoint {
        /// Whether both primitives lie on the same line.
        colinear: bool,
    },
    /// The primitives intersect at a single point.
    Point {
        /// The intersection point.
        point: Point2<Real>,
        /// The parameters of the intersection point along the first and the second primitive.
        params: (Real, Real),
    },
    /// The primitives are colinear and overlap along a segment.
    Overlap {
        /// The endpoints of the overlap, by increasing parameter along the first primitive.
        points: [Point2<Real>; 2],
        /// The parameters of `points` along the first primitive.
        params: [Real; 2],
    },
}

impl LinearIntersection2 {
    /// Whether the primitives have at least one point in common.
    #[inline]
    pub fn intersects(&self) -> bool {
        !matches!(self, Self::Disjoint { .. })
    }
}

/// Valid parameter range of each kind of linear primitive.
#[derive(Copy, Clone, Debug)]
enum Extent {
    Line,
    Ray,
    Segment,
}

impl Extent {
    #[inline]
    fn range(self) -> (Real, Real) {
        match self {
            Extent::Line => (-Real::INFINITY, Real::INFINITY),
            Extent::Ray => (0.0, Real::INFINITY),
            Extent::Segment => (0.0, 1.0),
        }
    }

    /// Checks `t` against the range, up to [`ZERO_TOLERANCE`], and snaps it inside.
    #[inline]
    fn clamp(self, t: Real) -> Option<Real> {
        let (min, max) = self.range();

        if t < min - ZERO_TOLERANCE || t > max + ZERO_TOLERANCE {
            None
        } else {
            Some(t.clamp(min, max))
        }
    }
}

/// Computes the intersection between the segments `[a0, a1]` and `[b0, b1]`.
///
/// # Precondition
///
/// Both segments must have a non-zero length. This is checked in debug builds only; the
/// result for a zero-length segment is unspecified in release builds.
pub fn intersect_segments(
    a0: &Point2<Real>,
    a1: &Point2<Real>,
    b0: &Point2<Real>,
    b1: &Point2<Real>,
) -> LinearIntersection2 {
    debug_assert!(a0 != a1, "the first segment must not have a zero length");
    debug_assert!(b0 != b1, "the second segment must not have a zero length");
    intersect_linear(
        a0,
        &(a1 - a0),
        Extent::Segment,
        b0,
        &(b1 - b0),
        Extent::Segment,
    )
}

/// Computes the intersection between the ray `origin + t * dir`, `t >= 0`, and the segment
/// `[b0, b1]`.
///
/// # Precondition
///
/// `dir` must not be zero and the segment must have a non-zero length. This is checked in
/// debug builds only.
pub fn intersect_ray_with_segment(
    origin: &Point2<Real>,
    dir: &Vector2<Real>,
    b0: &Point2<Real>,
    b1: &Point2<Real>,
) -> LinearIntersection2 {
    debug_assert!(!dir.is_zero(), "the ray direction must not be zero");
    debug_assert!(b0 != b1, "the segment must not have a zero length");
    intersect_linear(origin, dir, Extent::Ray, b0, &(b1 - b0), Extent::Segment)
}

/// Computes the intersection between the line `origin + t * dir` and the segment `[b0, b1]`.
///
/// # Precondition
///
/// `dir` must not be zero and the segment must have a non-zero length. This is checked in
/// debug builds only.
pub fn intersect_line_with_segment(
    origin: &Point2<Real>,
    dir: &Vector2<Real>,
    b0: &Point2<Real>,
    b1: &Point2<Real>,
) -> LinearIntersection2 {
    debug_assert!(!dir.is_zero(), "the line direction must not be zero");
    debug_assert!(b0 != b1, "the segment must not have a zero length");
    intersect_linear(origin, dir, Extent::Line, b0, &(b1 - b0), Extent::Segment)
}

/// Computes the overlap of the segments `[a0, a1]` and `[b0, b1]`, assuming that both lie on
/// the same line.
///
/// The colinearity is not checked: `[b0, b1]` is projected on the line supporting `[a0, a1]`.
///
/// # Precondition
///
/// Both segments must have a non-zero length. This is checked in debug builds only. In release
/// builds, a zero-length `[b0, b1]` is treated as the point `b0`, at parameter zero along the
/// second segment.
pub fn intersect_segments_on_line(
    a0: &Point2<Real>,
    a1: &Point2<Real>,
    b0: &Point2<Real>,
    b1: &Point2<Real>,
) -> LinearIntersection2 {
    debug_assert!(a0 != a1, "the first segment must not have a zero length");
    debug_assert!(b0 != b1, "the second segment must not have a zero length");
    colinear_overlap(
        a0,
        &(a1 - a0),
        Extent::Segment,
        b0,
        &(b1 - b0),
        Extent::Segment,
    )
}

fn intersect_linear(
    p: &Point2<Real>,
    dp: &Vector2<Real>,
    extent_p: Extent,
    q: &Point2<Real>,
    dq: &Vector2<Real>,
    extent_q: Extent,
) -> LinearIntersection2 {
    let cross = perp2(dp, dq);
    let pq = q - p;

    if cross.abs() <= ZERO_TOLERANCE * dp.norm() * dq.norm() {
        // Parallel: the primitives intersect only if the offset between them is colinear too.
        if perp2(&pq, dp).abs() > ZERO_TOLERANCE * pq.norm() * dp.norm() {
            return LinearIntersection2::Disjoint { colinear: false };
        }

        return colinear_overlap(p, dp, extent_p, q, dq, extent_q);
    }

    let t = perp2(&pq, dq) / cross;
    let u = perp2(&pq, dp) / cross;

    match (extent_p.clamp(t), extent_q.clamp(u)) {
        (Some(t), Some(u)) => LinearIntersection2::Point {
            point: p + dp * t,
            params: (t, u),
        },
        _ => LinearIntersection2::Disjoint { colinear: false },
    }
}

/// Overlap between two primitives on the same line, measured along the dominant axis of the
/// first primitive's direction.
fn colinear_overlap(
    p: &Point2<Real>,
    dp: &Vector2<Real>,
    extent_p: Extent,
    q: &Point2<Real>,
    dq: &Vector2<Real>,
    extent_q: Extent,
) -> LinearIntersection2 {
    let k = dominant_axis(dp);
    // Maps a parameter along the second primitive to one along the first.
    let to_p = |u: Real| (q[k] + dq[k] * u - p[k]) / dp[k];

    let (min_q, max_q) = extent_q.range();
    let (s0, s1) = sort2(to_p(min_q), to_p(max_q));
    let (min_p, max_p) = extent_p.range();
    let start = s0.max(min_p);
    let end = s1.min(max_p);

    if start > end + ZERO_TOLERANCE {
        return LinearIntersection2::Disjoint { colinear: true };
    }

    if end - start <= ZERO_TOLERANCE {
        let t = start.min(end);
        let point = p + dp * t;
        // Inverse of `to_p`. `dq[k]` is zero only for a zero-length second primitive.
        let u = (point[k] - q[k]) * inv(dq[k]);
        return LinearIntersection2::Point {
            point,
            params: (t, u),
        };
    }

    LinearIntersection2::Overlap {
        points: [p + dp * start, p + dp * end],
        params: [start, end],
    }
}
