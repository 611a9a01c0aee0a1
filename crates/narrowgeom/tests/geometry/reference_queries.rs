use narrowgeom::math::{Point2, Point3, Real, Vector3};
use narrowgeom::query::{self, LinearIntersection2, PlaneIntersection};
use narrowgeom::shape::{ObliqueCircularCone, Plane};

#[test]
fn distance_to_aabb_corner_region() {
    let dist = query::distance_to_aabb(
        &Point3::new(2.0, 2.0, 2.0),
        &Point3::origin(),
        &Point3::new(1.0, 1.0, 1.0),
    );

    assert!(approx::relative_eq!(dist, (3.0 as Real).sqrt()));
}

#[test]
fn crossing_segments_intersection() {
    let inter = query::intersect_segments(
        &Point2::new(0.0, 0.0),
        &Point2::new(10.0, 0.0),
        &Point2::new(5.0, -5.0),
        &Point2::new(5.0, 5.0),
    );

    match inter {
        LinearIntersection2::Point { point, params } => {
            assert_eq!(point, Point2::new(5.0, 0.0));
            assert_eq!(params.0, 0.5);
        }
        _ => panic!("unexpected segments intersection {inter:?}"),
    }
}

#[test]
fn ray_hits_plane_at_origin() {
    let plane = Plane::new(narrowgeom::na::Unit::new_unchecked(Vector3::z()), 0.0);
    let origin = Point3::new(0.0, 0.0, -5.0);
    let inter = query::intersect_ray_with_plane(&origin, &Vector3::z(), &plane);

    assert_eq!(
        inter,
        Some(PlaneIntersection::Point {
            param: 5.0,
            point: Point3::origin()
        })
    );
}

#[test]
fn sphere_misses_distant_aabb() {
    assert!(!query::intersection_test_aabb_sphere(
        &Point3::new(2.0, 2.0, 2.0),
        &Point3::new(3.0, 3.0, 3.0),
        &Point3::origin(),
        1.0
    ));
}

#[test]
fn reference_cone_containment() {
    let cone = ObliqueCircularCone::new(
        Point3::origin(),
        Point3::new(0.0, 0.0, 10.0),
        Vector3::z(),
        5.0,
        10.0,
    )
    .unwrap();

    assert!(cone.contains(&Point3::new(0.0, 0.0, 5.0)));
    assert!(!cone.contains(&Point3::new(0.0, 0.0, -1.0)));
}

#[test]
fn plane_round_trip() {
    let mut rng = oorandom::Rand32::new(3);

    for _ in 0..100 {
        let mut rand = || rng.rand_float() * 20.0 - 10.0;
        let pt = Point3::new(rand(), rand(), rand());
        let normal = Vector3::new(rand(), rand(), rand());

        if normal.norm() < 1.0e-2 {
            continue;
        }

        let plane = Plane::from_point_and_normal(&pt, &normal, false);
        assert!(approx::relative_eq!(plane.signed_distance(&pt), 0.0, epsilon = 1.0e-4));
        assert!(approx::relative_eq!(
            plane.signed_distance(&plane.closest_point(&(pt + normal))),
            0.0,
            epsilon = 1.0e-4
        ));
    }
}
