//! Clipping of lines, segments and rays against axis-aligned boxes.

pub use self::clip_aabb_line::{
    clip_aabb_line, clip_aabb_ray, clip_aabb_segment, intersection_test_aabb_line,
    intersection_test_aabb_ray, intersection_test_aabb_segment,
};

mod clip_aabb_line;
