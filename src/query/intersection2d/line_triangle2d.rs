use arrayvec::ArrayVec;

use crate::math::{Point2, Real, Vector2, ZERO_TOLERANCE};
use crate::utils::{dominant_axis, perp2};
use num::Zero;

/// Intersection between a line and the boundary of a triangle in 2D.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TriangleIntersection2 {
    /// The line touches the triangle at a single point, one of its vertices.
    Touch {
        /// The contact point.
        point: Point2<Real>,
        /// The parameter of the contact point along the line.
        param: Real,
    },
    /// The line crosses the triangle, or runs along one of its edges.
    Cross {
        /// The points where the line enters and exits the triangle.
        points: [Point2<Real>; 2],
        /// The parameters of `points` along the line, in increasing order.
        params: [Real; 2],
    },
}

/// The part of a segment lying inside of a filled triangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FilledTriangleSegment {
    /// The endpoints of the clipped segment.
    pub points: [Point2<Real>; 2],
    /// The parameters of `points` along the segment, in `[0, 1]` and in increasing order.
    pub params: [Real; 2],
    /// For each endpoint, whether it is an endpoint of the original segment lying strictly inside
    /// of the triangle, rather than a point of the triangle boundary.
    pub inside: [bool; 2],
}

/// Points where the line `origin + t * dir` meets the boundary of `tri`, by increasing `t`.
///
/// Each vertex is classified once against the line, so a vertex shared by two edges is reported
/// at most once. The returned flag is set if the line runs along an edge.
fn boundary_hits(
    origin: &Point2<Real>,
    dir: &Vector2<Real>,
    tri: &[Point2<Real>; 3],
) -> (ArrayVec<(Real, Point2<Real>), 3>, bool) {
    debug_assert!(!dir.is_zero(), "the line direction must not be zero");

    let k = dominant_axis(dir);
    let param = |pt: &Point2<Real>| (pt[k] - origin[k]) / dir[k];

    let rel = tri.map(|v| v - origin);
    // Rounding errors of `rel` grow with the magnitude of the inputs.
    let scale = tri.iter().zip(&rel).fold(origin.coords.norm(), |acc, (pt, v)| {
        acc.max(pt.coords.norm()).max(v.norm())
    });
    let tolerance = ZERO_TOLERANCE * dir.norm() * scale;
    let sides = rel.map(|v| {
        let side = perp2(dir, &v);
        if side.abs() <= tolerance {
            0.0
        } else {
            side
        }
    });

    let mut hits = ArrayVec::new();
    let mut num_on_line = 0;

    for i in 0..3 {
        let j = (i + 1) % 3;

        if sides[i] == 0.0 {
            num_on_line += 1;
            hits.push((param(&tri[i]), tri[i]));
        } else if sides[i] * sides[j] < 0.0 {
            let lambda = sides[i] / (sides[i] - sides[j]);
            let pt = tri[i] + (tri[j] - tri[i]) * lambda;
            hits.push((param(&pt), pt));
        }
    }

    hits.sort_unstable_by(|a, b| a.0.total_cmp(&b.0));
    (hits, num_on_line >= 2)
}

/// Computes the intersection between the line `origin + t * dir` and the boundary of the
/// triangle `tri`.
///
/// If the line runs along an edge of the triangle, the endpoints of that edge are returned.
pub fn intersect_line_with_triangle(
    origin: &Point2<Real>,
    dir: &Vector2<Real>,
    tri: &[Point2<Real>; 3],
) -> Option<TriangleIntersection2> {
    let (hits, _) = boundary_hits(origin, dir, tri);

    match hits.as_slice() {
        [] => None,
        [(param, point)] => Some(TriangleIntersection2::Touch {
            point: *point,
            param: *param,
        }),
        [first, .., last] => Some(TriangleIntersection2::Cross {
            points: [first.1, last.1],
            params: [first.0, last.0],
        }),
    }
}

/// Computes the part of the segment `[a, b]` lying inside of the filled triangle `tri`.
///
/// The parameters of the result are relative to `a + (b - a) * t`. A segment that only touches
/// a vertex of the triangle yields two identical points. An endpoint lying on an edge of the
/// triangle is never flagged as `inside`.
pub fn intersect_segment_with_filled_triangle(
    a: &Point2<Real>,
    b: &Point2<Real>,
    tri: &[Point2<Real>; 3],
) -> Option<FilledTriangleSegment> {
    debug_assert!(a != b, "the segment must not have a zero length");

    let (hits, along_edge) = boundary_hits(a, &(b - a), tri);

    match hits.as_slice() {
        [] => None,
        [(param, point)] => (*param >= 0.0 && *param <= 1.0).then(|| FilledTriangleSegment {
            points: [*point, *point],
            params: [*param, *param],
            inside: [false, false],
        }),
        [first, .., last] => {
            let start = first.0.max(0.0);
            let end = last.0.min(1.0);

            if start > end {
                return None;
            }

            let clamped = [first.0 < 0.0, last.0 > 1.0];
            let points = [
                if clamped[0] { *a } else { first.1 },
                if clamped[1] { *b } else { last.1 },
            ];

            Some(FilledTriangleSegment {
                points,
                params: [start, end],
                inside: [clamped[0] && !along_edge, clamped[1] && !along_edge],
            })
        }
    }
}
