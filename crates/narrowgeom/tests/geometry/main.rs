mod aabb_point_distance;
mod aabb_triangle;
mod cone_aabb_separation;
mod line_triangle2d;
mod reference_queries;
