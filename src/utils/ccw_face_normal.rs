use crate::math::{Point3, Real, UnitVector3, ZERO_TOLERANCE};

/// Unit normal of the triangle `pts`, oriented so that its vertices turn counter-clockwise
/// around it.
///
/// Returns `None` if the triangle is degenerate: one edge has a zero length, or both edges
/// leaving `pts[0]` are parallel up to a relative tolerance.
#[inline]
pub fn ccw_face_normal(pts: [&Point3<Real>; 3]) -> Option<UnitVector3<Real>> {
    let ab = pts[1] - pts[0];
    let ac = pts[2] - pts[0];

    UnitVector3::try_new(ab.cross(&ac), ZERO_TOLERANCE * ab.norm() * ac.norm())
}
