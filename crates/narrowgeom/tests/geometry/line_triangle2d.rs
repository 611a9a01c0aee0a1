use approx::relative_eq;
use narrowgeom::math::{Point2, Real, Vector2};
use narrowgeom::query::{self, TriangleIntersection2};
use narrowgeom::utils::perp2;

fn rand_real(rng: &mut oorandom::Rand32, min: Real, max: Real) -> Real {
    min + rng.rand_float() as Real * (max - min)
}

fn rand_triangle(rng: &mut oorandom::Rand32) -> [Point2<Real>; 3] {
    let mut pt = || Point2::new(rand_real(rng, -100.0, 100.0), rand_real(rng, -100.0, 100.0));
    [pt(), pt(), pt()]
}

fn rand_dir(rng: &mut oorandom::Rand32) -> Vector2<Real> {
    let angle = rand_real(rng, 0.0, 2.0 * core::f32::consts::PI as Real);
    Vector2::new(angle.cos(), angle.sin()) * rand_real(rng, 5.0, 50.0)
}

fn is_thin(tri: &[Point2<Real>; 3]) -> bool {
    perp2(&(tri[1] - tri[0]), &(tri[2] - tri[0])).abs() <= 100.0
}

fn distance_to_boundary(pt: &Point2<Real>, tri: &[Point2<Real>; 3]) -> Real {
    (0..3)
        .map(|i| query::distance_to_segment(pt, &tri[i], &tri[(i + 1) % 3]))
        .fold(Real::MAX, Real::min)
}

#[test]
fn line_through_single_vertex_touches_it() {
    let mut rng = oorandom::Rand32::new(17);
    let mut num_touches = 0;

    for _ in 0..2000 {
        let tri = rand_triangle(&mut rng);
        let dir = rand_dir(&mut rng);

        if is_thin(&tri) {
            continue;
        }

        // Keep lines leaving both other vertices clearly on the same side.
        let e1 = tri[1] - tri[0];
        let e2 = tri[2] - tri[0];
        let s1 = perp2(&dir, &e1);
        let s2 = perp2(&dir, &e2);
        if s1 * s2 <= 0.0
            || s1.abs() <= 1.0e-2 * dir.norm() * e1.norm()
            || s2.abs() <= 1.0e-2 * dir.norm() * e2.norm()
        {
            continue;
        }

        let k = rand_real(&mut rng, 0.5, 2.0);
        let origin = tri[0] - dir * k;

        match query::intersect_line_with_triangle(&origin, &dir, &tri) {
            Some(TriangleIntersection2::Touch { point, param }) => {
                num_touches += 1;
                assert_eq!(point, tri[0]);
                assert!(relative_eq!(param, k, epsilon = 1.0e-3));
            }
            inter => panic!("{tri:?}, origin {origin:?}, dir {dir:?}: found {inter:?}"),
        }
    }

    assert!(num_touches > 100);
}

#[test]
fn line_through_interior_point_crosses_boundary() {
    let mut rng = oorandom::Rand32::new(23);
    let mut num_crossings = 0;

    for _ in 0..2000 {
        let tri = rand_triangle(&mut rng);
        let dir = rand_dir(&mut rng);

        if is_thin(&tri) {
            continue;
        }

        let w1 = rand_real(&mut rng, 0.05, 0.9);
        let w2 = rand_real(&mut rng, 0.05, 0.95 - w1);
        let inner = tri[0] + (tri[1] - tri[0]) * w1 + (tri[2] - tri[0]) * w2;
        let k = rand_real(&mut rng, 0.5, 2.0);
        let origin = inner - dir * k;

        match query::intersect_line_with_triangle(&origin, &dir, &tri) {
            Some(TriangleIntersection2::Cross { points, params }) => {
                num_crossings += 1;
                assert!(params[0] < params[1]);
                assert!(params[0] <= k && k <= params[1], "{params:?} do not enclose {k}");

                for pt in &points {
                    assert!(distance_to_boundary(pt, &tri) <= 1.0e-1);
                }
            }
            inter => panic!("{tri:?}, origin {origin:?}, dir {dir:?}: found {inter:?}"),
        }
    }

    assert!(num_crossings > 1000);
}
