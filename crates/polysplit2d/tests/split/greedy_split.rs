use approx::assert_relative_eq;
use polysplit2d::shape::{InvalidPolygon, Polygon};
use polysplit2d::{split, GreedyPolygonSplitter, PolygonSplitter, SplitError};

fn polygon(wkt: &str) -> Polygon {
    wkt.parse().unwrap()
}

fn assert_parts_eq(parts: &[Polygon], expected: &[&str]) {
    assert_eq!(parts.len(), expected.len());

    for (part, expected) in parts.iter().zip(expected) {
        assert!(
            part.equals_norm(&polygon(expected)),
            "{part} is not {expected}"
        );
    }
}

fn assert_equal_areas(polygon: &Polygon, parts: &[Polygon], max_relative: f64) {
    let target = polygon.area() / parts.len() as f64;

    for part in parts {
        assert_relative_eq!(part.area(), target, max_relative = max_relative);
    }

    let total: f64 = parts.iter().map(Polygon::area).sum();
    assert_relative_eq!(total, polygon.area(), max_relative = 1.0e-9);
}

#[test]
fn split_trapezoid_in_two() {
    let trapezoid = polygon("POLYGON ((0 0, 100 0, 90 50, 10 50, 0 0))");
    let parts = split(&trapezoid, 2).unwrap();

    assert_parts_eq(
        &parts,
        &[
            "POLYGON ((50 0, 100 0, 90 50, 50 50, 50 0))",
            "POLYGON ((50 0, 0 0, 10 50, 50 50, 50 0))",
        ],
    );
    assert_equal_areas(&trapezoid, &parts, 1.0e-9);
}

#[test]
fn split_l_shape_in_four() {
    let l_shape = polygon("POLYGON ((0 0, 0 30, 10 30, 10 10, 20 10, 20 0, 0 0))");
    let parts = split(&l_shape, 4).unwrap();

    // The parts are returned in the order they are cut away, the remainder last.
    assert_parts_eq(
        &parts,
        &[
            "POLYGON ((0 20, 0 30, 10 30, 10 20, 0 20))",
            "POLYGON ((0 10, 0 20, 10 20, 10 10, 0 10))",
            "POLYGON ((10 10, 20 10, 20 0, 10 0, 10 10))",
            "POLYGON ((0 0, 0 10, 10 10, 10 0, 0 0))",
        ],
    );
}

#[test]
fn split_rectangle_across_its_long_side() {
    let rectangle = polygon("POLYGON ((0 0, 10 0, 10 5, 0 5, 0 0))");
    let parts = GreedyPolygonSplitter::new().split(&rectangle, 2).unwrap();

    assert_parts_eq(
        &parts,
        &[
            "POLYGON ((5 0, 10 0, 10 5, 5 5, 5 0))",
            "POLYGON ((0 0, 5 0, 5 5, 0 5, 0 0))",
        ],
    );
}

#[test]
fn split_square_in_four() {
    let square = polygon("POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0))");
    let parts = split(&square, 4).unwrap();

    assert_eq!(parts.len(), 4);
    assert_equal_areas(&square, &parts, 1.0e-7);
}

#[test]
fn split_hexagon_in_three() {
    let hexagon = polygon("POLYGON ((0 0, 50 -10, 100 0, 90 50, 50 60, 10 50, 0 0))");
    let parts = split(&hexagon, 3).unwrap();

    assert_eq!(parts.len(), 3);
    assert_equal_areas(&hexagon, &parts, 0.05);
    // The trapezoid cuts are solved exactly.
    assert_equal_areas(&hexagon, &parts, 1.0e-7);

    for part in &parts {
        assert!(part.is_valid());
    }
}

#[test]
fn splitter_as_trait_object() {
    let splitter: Box<dyn PolygonSplitter> = Box::new(GreedyPolygonSplitter);
    let trapezoid = polygon("POLYGON ((0 0, 100 0, 90 50, 10 50, 0 0))");

    assert_eq!(splitter.split(&trapezoid, 2), split(&trapezoid, 2));
}

#[test]
fn split_needs_at_least_two_parts() {
    let rectangle = polygon("POLYGON ((0 0, 10 0, 10 5, 0 5, 0 0))");

    assert_eq!(split(&rectangle, 0), Err(SplitError::InvalidArgument(0)));
    assert_eq!(split(&rectangle, 1), Err(SplitError::InvalidArgument(1)));
}

#[test]
fn split_rejects_invalid_polygons() {
    let bowtie = polygon("POLYGON ((0 0, 10 10, 10 0, 0 10, 0 0))");
    let crossing = InvalidPolygon::SelfIntersection(0, 2);

    assert_eq!(split(&bowtie, 2), Err(SplitError::InvalidPolygon(crossing)));
}

#[test]
fn split_triangle_fails() {
    let triangle = polygon("POLYGON ((0 0, 10 0, 0 10, 0 0))");

    assert!(matches!(
        split(&triangle, 2),
        Err(SplitError::NoCutFound { .. })
    ));
}
