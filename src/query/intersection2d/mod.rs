//! Intersections between linear primitives and triangles in 2D.

pub use self::line_triangle2d::{
    intersect_line_with_triangle, intersect_segment_with_filled_triangle, FilledTriangleSegment,
    TriangleIntersection2,
};
pub use self::segments_intersection2d::{
    intersect_line_with_segment, intersect_ray_with_segment, intersect_segments,
    intersect_segments_on_line, LinearIntersection2,
};

mod line_triangle2d;
mod segments_intersection2d;
