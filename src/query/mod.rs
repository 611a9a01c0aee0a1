//! Non-persistent geometric queries.
//!
//! Every query is a free function taking its primitives as loose parameters: a box is given by
//! its `mins` and `maxs` corners, a sphere by its center and radius, a triangle by its vertices,
//! and a line, ray or segment by an origin and a direction (or by its two endpoints).
//!
//! The queries are grouped by kind:
//!
//! * [`point`] computes distances and projections of points on lines, segments and boxes.
//! * [`intersection_test`] answers boolean overlap tests against boxes.
//! * [`clip`] clips lines, rays and segments by boxes.
//! * [`line`] intersects lines, rays and segments with planes, spheres and triangles.
//! * [`intersection2d`] intersects linear primitives with each other and with triangles in 2D.
//!
//! Queries generic over the dimension accept [`Point2`](crate::math::Point2) as well as
//! [`Point3`](crate::math::Point3) inputs. The separating axis test between a cone and a box is
//! the [`ObliqueCircularCone::have_separating_axis`](crate::shape::ObliqueCircularCone) method.

pub use self::clip::{
    clip_aabb_line, clip_aabb_ray, clip_aabb_segment, intersection_test_aabb_line,
    intersection_test_aabb_ray, intersection_test_aabb_segment,
};
pub use self::intersection2d::{
    intersect_line_with_segment, intersect_line_with_triangle, intersect_ray_with_segment,
    intersect_segment_with_filled_triangle, intersect_segments, intersect_segments_on_line,
    FilledTriangleSegment, LinearIntersection2, TriangleIntersection2,
};
pub use self::intersection_test::{
    intersection_test_aabb_aabb, intersection_test_aabb_sphere, intersection_test_aabb_triangle,
};
pub use self::line::{
    intersect_line_with_plane, intersect_line_with_sphere, intersect_line_with_sphere_normalized,
    intersect_ray_with_plane, intersect_ray_with_triangle, intersect_segment_with_plane,
    LineSphereIntersection, PlaneIntersection, RayTriangleIntersection,
};
pub use self::point::{
    distance_to_aabb, distance_to_line, distance_to_segment, is_point_in_aabb,
    project_point_on_line, project_point_on_segment,
};

pub mod clip;
pub mod intersection2d;
pub mod intersection_test;
pub mod line;
pub mod point;
mod sat;
