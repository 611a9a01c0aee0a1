use crate::math::{Point3, Real, UnitVector3, Vector3, ZERO_TOLERANCE};
use crate::query::intersection_test::intersection_test_aabb_aabb;
use crate::shape::ObliqueCircularCone;
use crate::utils::sort2;

#[cfg(not(feature = "std"))]
use na::ComplexField;

impl ObliqueCircularCone {
    /// Searches for an axis separating this cone from the AABB with the given minimum corner
    /// and size.
    ///
    /// This test is conservative: `true` proves that the cone and the box do not overlap, but
    /// `false` only means that none of the tested axes separates them. The candidate axes are,
    /// in order:
    /// 1. the coordinate axes, through the cached AABB of the cone,
    /// 2. the normals of the two boundary edges of the cone silhouette in each coordinate plane,
    /// 3. the end disc normal, against the start and end disc planes,
    /// 4. for each box corner, the direction from the closest point of the cone surface at the
    ///    height of that corner, made orthogonal to the cone edge through that point.
    ///
    /// A degenerate cone is only tested against the first group of axes.
    pub fn have_separating_axis(
        &self,
        aabb_mins: &Point3<Real>,
        aabb_size: &Vector3<Real>,
    ) -> bool {
        let aabb_maxs = aabb_mins + aabb_size;
        let (cone_mins, cone_maxs) = self.aabb();

        if !intersection_test_aabb_aabb(&cone_mins, &cone_maxs, aabb_mins, &aabb_maxs) {
            return true;
        }

        if self.is_degenerate() {
            return false;
        }

        let corners = aabb_corners(aabb_mins, &aabb_maxs);

        // Silhouette edges in each coordinate plane.
        for k in 0..3 {
            let mut axis = *self.apex_to_end();
            axis[k] = 0.0;

            let mut perp = Vector3::zeros();
            perp[(k + 1) % 3] = -axis[(k + 2) % 3];
            perp[(k + 2) % 3] = axis[(k + 1) % 3];

            let Some(perp) = UnitVector3::try_new(perp, ZERO_TOLERANCE) else {
                // The main axis is parallel to the `k`-th coordinate axis.
                continue;
            };

            // The silhouette edges of a cut cone are parallel to those of the complete cone.
            let n_perp = self.end_normal().dot(&*perp);
            let extent = self.end_radius() * (1.0 - n_perp * n_perp).max(0.0).sqrt();

            for side in [-1.0, 1.0] {
                let edge = axis + *perp * (side * extent);
                let mut normal = Vector3::zeros();
                normal[(k + 1) % 3] = -edge[(k + 2) % 3];
                normal[(k + 2) % 3] = edge[(k + 1) % 3];

                if self.is_separating_axis(&corners, &normal) {
                    return true;
                }
            }
        }

        // Start and end disc planes.
        let normal = self.end_normal();
        let (box_min, box_max) = projection_interval(&corners, &**normal);
        let (plane_min, plane_max) = sort2(self.start_plane_distance(), self.end_plane_distance());

        if box_max < plane_min || box_min > plane_max {
            return true;
        }

        // Cone surface normals facing each corner.
        corners
            .iter()
            .filter_map(|corner| self.surface_axis(corner))
            .any(|axis| self.is_separating_axis(&corners, &axis))
    }

    /// Direction from the cone surface toward `pt`, orthogonal to the cone edge.
    ///
    /// Returns `None` if `pt` lies on the main axis or on the cone surface.
    fn surface_axis(&self, pt: &Point3<Real>) -> Option<Vector3<Real>> {
        let normal = self.end_normal();
        let t = self.full_parameter(pt).clamp(self.relative_start(), 1.0);
        let center = self.apex() + self.apex_to_end() * t;

        let radial = pt - center;
        let radial = radial - **normal * normal.dot(&radial);
        let radial = UnitVector3::try_new(radial, ZERO_TOLERANCE)?;

        let surface_pt = center + *radial * (self.end_radius() * t);
        let edge = self.apex_to_end() + *radial * self.end_radius();

        let dir = pt - surface_pt;
        let axis = dir - edge * (edge.dot(&dir) / edge.norm_squared());

        if axis.norm_squared() <= ZERO_TOLERANCE * ZERO_TOLERANCE {
            None
        } else {
            Some(axis)
        }
    }

    /// Tests if the projections of the cone and of the box corners on `axis` are disjoint.
    fn is_separating_axis(&self, corners: &[Point3<Real>; 8], axis: &Vector3<Real>) -> bool {
        let (box_min, box_max) = projection_interval(corners, axis);
        let cone_max = self.support_distance(axis);
        let cone_min = -self.support_distance(&-axis);

        cone_max < box_min || cone_min > box_max
    }

    /// Maximum of `x.dot(dir)` over the points `x` of the cone.
    ///
    /// The cone is the convex hull of its start and end discs.
    fn support_distance(&self, dir: &Vector3<Real>) -> Real {
        let start = disc_support_distance(
            self.start_center(),
            self.start_radius(),
            self.end_normal(),
            dir,
        );
        let end = disc_support_distance(
            self.end_center(),
            self.end_radius(),
            self.end_normal(),
            dir,
        );
        start.max(end)
    }
}

fn disc_support_distance(
    center: &Point3<Real>,
    radius: Real,
    normal: &UnitVector3<Real>,
    dir: &Vector3<Real>,
) -> Real {
    let n_dir = normal.dot(dir);
    center.coords.dot(dir) + radius * (dir.norm_squared() - n_dir * n_dir).max(0.0).sqrt()
}

fn aabb_corners(mins: &Point3<Real>, maxs: &Point3<Real>) -> [Point3<Real>; 8] {
    [
        Point3::new(mins.x, mins.y, mins.z),
        Point3::new(maxs.x, mins.y, mins.z),
        Point3::new(mins.x, maxs.y, mins.z),
        Point3::new(maxs.x, maxs.y, mins.z),
        Point3::new(mins.x, mins.y, maxs.z),
        Point3::new(maxs.x, mins.y, maxs.z),
        Point3::new(mins.x, maxs.y, maxs.z),
        Point3::new(maxs.x, maxs.y, maxs.z),
    ]
}

fn projection_interval(corners: &[Point3<Real>; 8], axis: &Vector3<Real>) -> (Real, Real) {
    corners
        .iter()
        .map(|pt| pt.coords.dot(axis))
        .fold((Real::MAX, -Real::MAX), |(min, max), d| (min.min(d), max.max(d)))
}
