use crate::shape::{Polygon, Segment};
use crate::utils::{points_approx_equal, segments_intersection2d};

/// Tests if `line` crosses the ring of `polygon` somewhere else than at its own endpoints.
///
/// Touching the ring at one of the endpoints of `line` is not a proper intersection,
/// but overlapping an edge of the ring beyond these endpoints is.
///
/// # Example
///
/// ```
/// # use polysplit2d::math::Point;
/// # use polysplit2d::shape::{Polygon, Segment};
/// # use polysplit2d::query::properly_intersects;
/// let polygon: Polygon = "POLYGON ((0 0, 50 10, 50 0, 100 0, 90 50, 10 50, 0 0))"
///     .parse()
///     .unwrap();
///
/// let inside = Segment::new(Point::new(60.0, 0.0), Point::new(90.0, 50.0));
/// let crossing = Segment::new(Point::new(0.0, 0.0), Point::new(60.0, 10.0));
///
/// assert!(!properly_intersects(&inside, &polygon));
/// assert!(properly_intersects(&crossing, &polygon));
/// ```
pub fn properly_intersects(line: &Segment, polygon: &Polygon) -> bool {
    polygon.segments().any(|edge| {
        let Some(inter) = segments_intersection2d(&line.a, &line.b, &edge.a, &edge.b) else {
            return false;
        };

        inter
            .points()
            .any(|pt| !points_approx_equal(&pt, &line.a) && !points_approx_equal(&pt, &line.b))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Point, Real};

    fn polygon() -> Polygon {
        "POLYGON ((0 0, 50 10, 50 0, 100 0, 90 50, 10 50, 0 0))"
            .parse()
            .unwrap()
    }

    fn line(a: [Real; 2], b: [Real; 2]) -> Segment {
        Segment::new(Point::from(a), Point::from(b))
    }

    #[test]
    fn touching_the_ring_at_the_endpoints() {
        let poly = polygon();
        let between_edges = line([60.0, 0.0], [90.0, 50.0]);
        let between_vertices = line([0.0, 0.0], [75.0, 50.0]);

        assert!(!properly_intersects(&between_edges, &poly));
        assert!(!properly_intersects(&between_vertices, &poly));
    }

    #[test]
    fn crossing_the_ring() {
        let poly = polygon();
        let leaving = line([0.0, 0.0], [100.0, 100.0]);
        let through_the_notch = line([0.0, 0.0], [60.0, 10.0]);

        assert!(properly_intersects(&leaving, &poly));
        assert!(properly_intersects(&through_the_notch, &poly));
    }

    #[test]
    fn overlapping_an_edge() {
        let poly = polygon();
        let past_the_corner = line([60.0, 0.0], [110.0, 0.0]);
        let along_the_edge = line([60.0, 0.0], [100.0, 0.0]);

        assert!(properly_intersects(&past_the_corner, &poly));
        assert!(!properly_intersects(&along_the_edge, &poly));
    }
}
