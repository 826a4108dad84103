use approx::assert_relative_eq;
use oorandom::Rand64;
use polysplit2d::math::Point;
use polysplit2d::query::polygon_contains_polygon;
use polysplit2d::shape::Polygon;
use polysplit2d::{split, SplitError};

// A star-shaped polygon with vertices at random angles and distances from the origin.
fn star_polygon(rng: &mut Rand64) -> Polygon {
    let num_vertices = rng.rand_range(4..10) as usize;
    let mut angles: Vec<f64> = (0..num_vertices)
        .map(|_| rng.rand_float() * core::f64::consts::TAU)
        .collect();
    angles.sort_by(f64::total_cmp);

    let vertices = angles
        .into_iter()
        .map(|angle| {
            let radius = 20.0 + rng.rand_float() * 80.0;
            let round = |x: f64| (x * 10.0).round() / 10.0;
            Point::new(round(radius * angle.cos()), round(radius * angle.sin()))
        })
        .collect();

    Polygon::new(vertices).unwrap()
}

#[test]
fn split_random_star_polygons() {
    let mut rng = Rand64::new(42);
    let mut num_split = 0;

    for _ in 0..200 {
        let polygon = star_polygon(&mut rng);
        let parts = rng.rand_range(2..6) as usize;

        let result = match split(&polygon, parts) {
            Ok(result) => result,
            // The greedy search may not find a cut, and rounding may create a
            // non-simple polygon.
            Err(SplitError::NoCutFound { .. }) | Err(SplitError::InvalidPolygon(_)) => continue,
            Err(err) if err.is_internal() => {
                panic!("inconsistent split of {polygon} in {parts} parts: {err}")
            }
            Err(err) => panic!("failed to split {polygon} in {parts} parts: {err}"),
        };

        num_split += 1;
        assert_eq!(result.len(), parts);

        let target = polygon.area() / parts as f64;
        for part in &result {
            assert_relative_eq!(part.area(), target, max_relative = 1.0e-5);
            assert!(polygon_contains_polygon(&polygon, part));
        }
    }

    // Most polygons can be split.
    assert!(num_split > 150, "only {num_split} polygons were split");
}
