//! Boolean overlap tests.

pub use self::intersection_test_aabb_aabb::intersection_test_aabb_aabb;
pub use self::intersection_test_aabb_sphere::intersection_test_aabb_sphere;
pub use self::intersection_test_aabb_triangle::intersection_test_aabb_triangle;

mod intersection_test_aabb_aabb;
mod intersection_test_aabb_sphere;
mod intersection_test_aabb_triangle;
