//! Intersections between lines, rays or segments, and planes, spheres or triangles.

pub use self::line_plane::{
    intersect_line_with_plane, intersect_ray_with_plane, intersect_segment_with_plane,
    PlaneIntersection,
};
pub use self::line_sphere::{
    intersect_line_with_sphere, intersect_line_with_sphere_normalized, LineSphereIntersection,
};
pub use self::ray_triangle::{intersect_ray_with_triangle, RayTriangleIntersection};

mod line_plane;
mod line_sphere;
mod ray_triangle;
