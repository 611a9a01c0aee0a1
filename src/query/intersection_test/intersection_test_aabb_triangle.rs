use crate::math::{Point3, Real, Vector3};
use crate::utils::sort2;

/// Tests if the AABB `[mins, maxs]` intersects the triangle with the given vertices.
///
/// This is a separating axis test on the 13 axes that can separate a box from a triangle:
/// - the 3 coordinate axes (the box face normals),
/// - the normal of the triangle,
/// - the 9 cross products between a coordinate axis and an edge of the triangle.
///
/// The box and the triangle overlap iff none of these axes separate them.
pub fn intersection_test_aabb_triangle(
    mins: &Point3<Real>,
    maxs: &Point3<Real>,
    triangle: &[Point3<Real>; 3],
) -> bool {
    // Work in the frame centered on the box.
    let center = na::center(mins, maxs);
    let half_extents = (maxs - mins) * 0.5;
    let v = [
        triangle[0] - center,
        triangle[1] - center,
        triangle[2] - center,
    ];

    // Box face normals: the triangle must not lie entirely on one side of the box.
    for i in 0..3 {
        let (min, max) = projection_interval(&v, |vtx| vtx[i]);

        if min > half_extents[i] || max < -half_extents[i] {
            return false;
        }
    }

    let edges = [v[1] - v[0], v[2] - v[1], v[0] - v[2]];

    // Triangle normal: all the vertices project on the same value. The box projection
    // radius is the dot product with the absolute value of the axis.
    let normal = edges[0].cross(&edges[1]);
    let radius = half_extents.dot(&normal.abs());

    if normal.dot(&v[0]).abs() > radius {
        return false;
    }

    // Edge cross axes.
    for edge in &edges {
        for i in 0..3 {
            let axis = Vector3::ith(i, 1.0).cross(edge);
            let radius = half_extents.dot(&axis.abs());
            let (min, max) = projection_interval(&v, |vtx| vtx.dot(&axis));

            if min > radius || max < -radius {
                return false;
            }
        }
    }

    true
}

fn projection_interval(
    vertices: &[Vector3<Real>; 3],
    project: impl Fn(&Vector3<Real>) -> Real,
) -> (Real, Real) {
    let (min, max) = sort2(project(&vertices[0]), project(&vertices[1]));
    let p2 = project(&vertices[2]);
    (min.min(p2), max.max(p2))
}
