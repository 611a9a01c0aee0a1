//! Distance queries between a point and other primitives.

pub use self::point_aabb::{distance_to_aabb, is_point_in_aabb};
pub use self::point_line::{
    distance_to_line, distance_to_segment, project_point_on_line, project_point_on_segment,
};

mod point_aabb;
mod point_line;
