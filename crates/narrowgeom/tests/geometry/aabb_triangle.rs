use narrowgeom::math::{Point3, Real};
use narrowgeom::query;

fn rand_point(rng: &mut oorandom::Rand32, extent: Real) -> Point3<Real> {
    Point3::new(
        (rng.rand_float() * 2.0 - 1.0) * extent,
        (rng.rand_float() * 2.0 - 1.0) * extent,
        (rng.rand_float() * 2.0 - 1.0) * extent,
    )
}

#[test]
fn triangle_outside_of_aabb_never_intersects() {
    let mut rng = oorandom::Rand32::new(7);
    let mut num_disjoint_bounds = 0;

    for _ in 0..2000 {
        let mins = rand_point(&mut rng, 5.0);
        let maxs = mins + narrowgeom::na::Vector3::repeat(rng.rand_float() * 3.0);
        let triangle = [
            rand_point(&mut rng, 8.0),
            rand_point(&mut rng, 8.0),
            rand_point(&mut rng, 8.0),
        ];

        let tri_mins = triangle[0].inf(&triangle[1]).inf(&triangle[2]);
        let tri_maxs = triangle[0].sup(&triangle[1]).sup(&triangle[2]);

        if !query::intersection_test_aabb_aabb(&mins, &maxs, &tri_mins, &tri_maxs) {
            num_disjoint_bounds += 1;
            assert!(
                !query::intersection_test_aabb_triangle(&mins, &maxs, &triangle),
                "{triangle:?} reported as intersecting [{mins:?}, {maxs:?}]"
            );
        }
    }

    assert!(num_disjoint_bounds > 0);
}

#[test]
fn triangle_with_vertex_in_aabb_intersects() {
    let mut rng = oorandom::Rand32::new(11);
    let mins = Point3::new(-1.0, -1.0, -1.0);
    let maxs = Point3::new(1.0, 1.0, 1.0);

    for _ in 0..500 {
        let inside = rand_point(&mut rng, 0.99);
        let triangle = [inside, rand_point(&mut rng, 10.0), rand_point(&mut rng, 10.0)];

        assert!(query::intersection_test_aabb_triangle(&mins, &maxs, &triangle));
    }
}
