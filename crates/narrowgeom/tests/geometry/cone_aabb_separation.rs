use narrowgeom::math::{Point3, Real, Vector3};
use narrowgeom::shape::ObliqueCircularCone;

fn rand_range(rng: &mut oorandom::Rand32, min: Real, max: Real) -> Real {
    min + rng.rand_float() * (max - min)
}

fn rand_vector(rng: &mut oorandom::Rand32, extent: Real) -> Vector3<Real> {
    Vector3::new(
        rand_range(rng, -extent, extent),
        rand_range(rng, -extent, extent),
        rand_range(rng, -extent, extent),
    )
}

fn rand_cone(rng: &mut oorandom::Rand32) -> Option<ObliqueCircularCone> {
    let apex = Point3::from(rand_vector(rng, 5.0));
    let end_center = apex + rand_vector(rng, 6.0);
    let axis = (end_center - apex).try_normalize(1.0e-3)?;
    let end_normal = (axis + rand_vector(rng, 0.5)).try_normalize(1.0e-3)?;

    if end_normal.dot(&axis) < 0.3 {
        return None;
    }

    let full_length = (end_center - apex).norm();
    let length = full_length * rand_range(rng, 0.3, 1.2);
    let radius = rand_range(rng, 0.5, 4.0);

    ObliqueCircularCone::new(apex, end_center, end_normal, radius, length).ok()
}

/// Searches the box for a point contained in the cone.
fn sampled_overlap(
    cone: &ObliqueCircularCone,
    mins: &Point3<Real>,
    size: &Vector3<Real>,
    rng: &mut oorandom::Rand32,
) -> bool {
    const STEPS: usize = 6;

    for i in 0..=STEPS {
        for j in 0..=STEPS {
            for k in 0..=STEPS {
                let f = Vector3::new(i as Real, j as Real, k as Real) / STEPS as Real;

                if cone.contains(&(mins + size.component_mul(&f))) {
                    return true;
                }
            }
        }
    }

    (0..200).any(|_| {
        let f = Vector3::new(rng.rand_float(), rng.rand_float(), rng.rand_float());
        cone.contains(&(mins + size.component_mul(&f)))
    })
}

#[test]
fn sampled_overlaps_have_no_separating_axis() {
    let mut rng = oorandom::Rand32::new(1234);
    let mut num_overlaps = 0;
    let mut num_separated = 0;

    for _ in 0..3000 {
        let Some(cone) = rand_cone(&mut rng) else {
            continue;
        };

        let mins = Point3::from(rand_vector(&mut rng, 10.0));
        let size = Vector3::new(
            rand_range(&mut rng, 0.2, 6.0),
            rand_range(&mut rng, 0.2, 6.0),
            rand_range(&mut rng, 0.2, 6.0),
        );

        let separated = cone.have_separating_axis(&mins, &size);

        if sampled_overlap(&cone, &mins, &size, &mut rng) {
            num_overlaps += 1;
            assert!(
                !separated,
                "separating axis found between {cone:?} and the overlapping box \
                 [{mins:?}, {size:?}]"
            );
        } else if separated {
            num_separated += 1;
        }
    }

    assert!(num_overlaps > 0);
    assert!(num_separated > 0);
}

#[test]
fn box_around_end_center_has_no_separating_axis() {
    let mut rng = oorandom::Rand32::new(99);

    for _ in 0..500 {
        let Some(cone) = rand_cone(&mut rng) else {
            continue;
        };

        // The end disc center always belongs to the cone.
        let half = Vector3::repeat(rand_range(&mut rng, 0.01, 2.0));
        let mins = cone.end_center() - half;

        assert!(!cone.have_separating_axis(&mins, &(half * 2.0)));
    }
}
