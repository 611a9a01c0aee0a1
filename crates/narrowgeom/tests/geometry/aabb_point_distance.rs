use narrowgeom::math::{Point2, Point3, Real};
use narrowgeom::query;

fn rand_range(rng: &mut oorandom::Rand32, min: Real, max: Real) -> Real {
    min + rng.rand_float() * (max - min)
}

#[test]
fn points_in_aabb_are_at_distance_zero() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..1000 {
        let mins = Point3::new(
            rand_range(&mut rng, -10.0, 10.0),
            rand_range(&mut rng, -10.0, 10.0),
            rand_range(&mut rng, -10.0, 10.0),
        );
        let maxs = mins + narrowgeom::na::Vector3::new(
            rand_range(&mut rng, 0.0, 5.0),
            rand_range(&mut rng, 0.0, 5.0),
            rand_range(&mut rng, 0.0, 5.0),
        );
        let pt = Point3::new(
            rand_range(&mut rng, -15.0, 15.0),
            rand_range(&mut rng, -15.0, 15.0),
            rand_range(&mut rng, -15.0, 15.0),
        );

        let dist = query::distance_to_aabb(&pt, &mins, &maxs);

        if query::is_point_in_aabb(&pt, &mins, &maxs) {
            assert_eq!(dist, 0.0, "{pt:?} lies inside of [{mins:?}, {maxs:?}]");
        } else {
            assert!(dist > 0.0, "{pt:?} lies outside of [{mins:?}, {maxs:?}]");
        }

        // The distance never exceeds the one to the box center plus its half-diagonal.
        let center = narrowgeom::na::center(&mins, &maxs);
        let bound = narrowgeom::na::distance(&pt, &center) + (maxs - mins).norm() * 0.5;
        assert!(dist <= bound * (1.0 + 1.0e-5));
    }
}

#[test]
fn box_corners_are_at_distance_zero2() {
    let mins = Point2::new(-1.0, 2.0);
    let maxs = Point2::new(3.0, 2.5);

    for pt in [mins, maxs, Point2::new(mins.x, maxs.y), Point2::new(maxs.x, mins.y)] {
        assert!(query::is_point_in_aabb(&pt, &mins, &maxs));
        assert_eq!(query::distance_to_aabb(&pt, &mins, &maxs), 0.0);
    }
}
