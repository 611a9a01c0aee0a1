use crate::math::{Point3, Real, Vector3, ZERO_TOLERANCE};

/// The point where a ray hits a triangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayTriangleIntersection {
    /// The parameter of the hit point along the ray.
    pub param: Real,
    /// The hit point.
    pub point: Point3<Real>,
    /// The barycentric coordinates of the hit point, relative to the vertices `a`, `b` and `c`
    /// of the triangle, in that order.
    pub barycentric: Vector3<Real>,
}

/// Computes the intersection between the ray `origin + t * dir`, `t >= 0`, and the triangle
/// `abc`.
///
/// The triangle normal defaults to `(b - a) × (c - a)` when `normal` is `None`. If
/// `cull_backfaces` is `true`, a ray hitting the side of the triangle the normal points away
/// from is reported as a miss.
///
/// Rays parallel to the triangle plane always miss, even when they lie in that plane.
pub fn intersect_ray_with_triangle(
    origin: &Point3<Real>,
    dir: &Vector3<Real>,
    a: &Point3<Real>,
    b: &Point3<Real>,
    c: &Point3<Real>,
    normal: Option<&Vector3<Real>>,
    cull_backfaces: bool,
) -> Option<RayTriangleIntersection> {
    let ab = b - a;
    let ac = c - a;
    let normal = normal.copied().unwrap_or_else(|| ab.cross(&ac));
    let denom = normal.dot(dir);

    if cull_backfaces && denom > 0.0 {
        return None;
    }

    if denom.abs() <= ZERO_TOLERANCE * normal.norm() * dir.norm() {
        // The ray is parallel to the triangle plane.
        return None;
    }

    let param = normal.dot(&(a - origin)) / denom;

    if param < 0.0 {
        return None;
    }

    let point = origin + dir * param;
    let barycentric = barycentric_coordinates(&ab, &ac, &(point - a))?;

    if barycentric.iter().all(|w| *w >= 0.0 && *w <= 1.0) {
        Some(RayTriangleIntersection {
            param,
            point,
            barycentric,
        })
    } else {
        None
    }
}

/// Barycentric coordinates of the point `a + ap` relative to the triangle `(a, a + ab, a + ac)`.
///
/// Returns `None` if the triangle is degenerate.
fn barycentric_coordinates(
    ab: &Vector3<Real>,
    ac: &Vector3<Real>,
    ap: &Vector3<Real>,
) -> Option<Vector3<Real>> {
    let d00 = ab.norm_squared();
    let d01 = ab.dot(ac);
    let d11 = ac.norm_squared();
    let d20 = ap.dot(ab);
    let d21 = ap.dot(ac);
    let denom = d00 * d11 - d01 * d01;

    if denom <= ZERO_TOLERANCE * d00 * d11 {
        return None;
    }

    let v = (d11 * d20 - d01 * d21) / denom;
    let w = (d00 * d21 - d01 * d20) / denom;
    Some(Vector3::new(1.0 - v - w, v, w))
}
