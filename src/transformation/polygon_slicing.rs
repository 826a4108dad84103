use crate::math::{Point, Real};
use crate::shape::{Polygon, PolygonError};
use crate::utils::{point_on_segment, points_approx_equal};

/// Builds the triangle with the vertices `a`, `b`, `c`, in this order.
pub fn make_triangle(
    a: Point<Real>,
    b: Point<Real>,
    c: Point<Real>,
) -> Result<Polygon, PolygonError> {
    Polygon::new(vec![a, b, c])
}

/// Builds the polygon with the given vertices, in this order.
///
/// Fails with [`PolygonError::DegeneratePolygon`] if less than three vertices are given.
pub fn make_polygon(vertices: &[Point<Real>]) -> Result<Polygon, PolygonError> {
    Polygon::new(vertices.to_vec())
}

/// Extracts the polygon made of the ring vertices from `start` to `end`.
///
/// The ring of `polygon` is walked forward from `start`, wrapping around its closing
/// point if needed, until `end` is reached. Both points must be exactly vertices of
/// the ring, otherwise [`PolygonError::VertexNotFound`] is returned.
///
/// # Example
///
/// ```
/// # use polysplit2d::math::Point;
/// # use polysplit2d::shape::Polygon;
/// # use polysplit2d::transformation::subpolygon_between_vertices;
/// let polygon: Polygon = "POLYGON ((0 0, 50 1, 100 0, 90 50, 10 50, 0 0))".parse().unwrap();
/// let sub = subpolygon_between_vertices(
///     &polygon,
///     &Point::new(10.0, 50.0),
///     &Point::new(50.0, 1.0),
/// )
/// .unwrap();
///
/// assert_eq!(sub.to_string(), "POLYGON ((10 50, 0 0, 50 1, 10 50))");
/// ```
pub fn subpolygon_between_vertices(
    polygon: &Polygon,
    start: &Point<Real>,
    end: &Point<Real>,
) -> Result<Polygon, PolygonError> {
    let vertices = polygon.vertices();
    let first = vertices
        .iter()
        .position(|pt| pt == start)
        .ok_or_else(|| PolygonError::vertex_not_found(start))?;

    if !polygon.has_vertex(end) {
        return Err(PolygonError::vertex_not_found(end));
    }

    let mut result = Vec::new();

    for pt in vertices.iter().cycle().skip(first).take(vertices.len()) {
        push_distinct(&mut result, *pt);

        if pt == end {
            break;
        }
    }

    Polygon::new(result)
}

/// Extracts the polygon bounded by the ring of `polygon` from `start` to `end`, closed
/// by the straight line from `end` back to `start`.
///
/// Both points may lie anywhere on the edges of the ring. The edges are scanned in
/// ring order, starting with the first edge containing `start`, then the vertices
/// are collected until reaching the edge containing `end`, wrapping around the
/// closing point of the ring if needed. A `start` matching the last point of an edge
/// is attributed to the following edge.
///
/// Fails with [`PolygonError::PointNotOnRing`] if either point is not on the ring.
pub fn slice_ring(
    polygon: &Polygon,
    start: &Point<Real>,
    end: &Point<Real>,
) -> Result<Polygon, PolygonError> {
    let segments: Vec<_> = polygon.segments().collect();
    let first = segments
        .iter()
        .position(|seg| point_on_segment(start, seg, true) && !points_approx_equal(start, &seg.b))
        .ok_or_else(|| PolygonError::point_not_on_ring(start))?;

    let mut result = vec![*start];

    for k in 1..=segments.len() {
        let segment = &segments[(first + k) % segments.len()];
        push_distinct(&mut result, segment.a);

        if point_on_segment(end, segment, true) {
            push_distinct(&mut result, *end);
            return Polygon::new(result);
        }
    }

    Err(PolygonError::point_not_on_ring(end))
}

fn push_distinct(vertices: &mut Vec<Point<Real>>, pt: Point<Real>) {
    if vertices.last() != Some(&pt) {
        vertices.push(pt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sliced(ring: &str, start: [Real; 2], end: [Real; 2]) -> String {
        let polygon: Polygon = ring.parse().unwrap();
        slice_ring(&polygon, &start.into(), &end.into())
            .unwrap()
            .to_string()
    }

    const PENTAGON: &str = "POLYGON ((0 0, 50 50, 100 20, 70 -20, 30 -10, 0 0))";
    const QUAD: &str = "POLYGON ((0 100, 80 100, 100 0, 20 0, 0 100))";
    const NOTCHED: &str = "POLYGON ((0 0, 50 1, 100 0, 90 50, 10 50, 0 0))";

    #[test]
    fn make_polygon_requires_three_vertices() {
        let pts = [Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        assert_eq!(make_polygon(&pts), Err(PolygonError::DegeneratePolygon(2)));

        let triangle = make_triangle(pts[0], pts[1], Point::new(0.0, 1.0)).unwrap();
        assert_eq!(triangle.to_string(), "POLYGON ((0 0, 1 0, 0 1, 0 0))");
        assert_eq!(triangle.area(), 0.5);
    }

    #[test]
    fn subpolygon_forward() {
        let polygon: Polygon = NOTCHED.parse().unwrap();
        let (start, end) = (Point::new(50.0, 1.0), Point::new(10.0, 50.0));
        let sub = subpolygon_between_vertices(&polygon, &start, &end).unwrap();
        assert_eq!(
            sub.to_string(),
            "POLYGON ((50 1, 100 0, 90 50, 10 50, 50 1))"
        );
    }

    #[test]
    fn subpolygon_wrapping_around_the_ring() {
        let polygon: Polygon = NOTCHED.parse().unwrap();
        let (start, end) = (Point::new(10.0, 50.0), Point::new(50.0, 1.0));
        let sub = subpolygon_between_vertices(&polygon, &start, &end).unwrap();
        assert_eq!(sub.to_string(), "POLYGON ((10 50, 0 0, 50 1, 10 50))");
    }

    #[test]
    fn subpolygon_requires_ring_vertices() {
        let polygon: Polygon = PENTAGON.parse().unwrap();
        let (start, end) = (Point::new(25.0, 25.0), Point::new(0.0, 0.0));
        let result = subpolygon_between_vertices(&polygon, &start, &end);
        assert_eq!(
            result,
            Err(PolygonError::VertexNotFound { x: 25.0, y: 25.0 })
        );
    }

    #[test]
    fn slice_starting_at_the_ring_start() {
        assert_eq!(
            sliced(PENTAGON, [0.0, 0.0], [75.0, 35.0]),
            "POLYGON ((0 0, 50 50, 75 35, 0 0))"
        );
    }

    #[test]
    fn slice_ending_at_the_ring_start() {
        assert_eq!(
            sliced(PENTAGON, [75.0, 35.0], [0.0, 0.0]),
            "POLYGON ((75 35, 100 20, 70 -20, 30 -10, 0 0, 75 35))"
        );
    }

    #[test]
    fn slice_from_vertex_to_vertex() {
        assert_eq!(
            sliced(PENTAGON, [50.0, 50.0], [70.0, -20.0]),
            "POLYGON ((50 50, 100 20, 70 -20, 50 50))"
        );
    }

    #[test]
    fn slice_between_edge_interiors() {
        assert_eq!(
            sliced(PENTAGON, [25.0, 25.0], [50.0, -15.0]),
            "POLYGON ((25 25, 50 50, 100 20, 70 -20, 50 -15, 25 25))"
        );
    }

    #[test]
    fn slice_running_through_the_ring_start() {
        assert_eq!(
            sliced(QUAD, [20.0, 0.0], [5.0, 100.0]),
            "POLYGON ((20 0, 0 100, 5 100, 20 0))"
        );
        assert_eq!(
            sliced(QUAD, [20.0, 0.0], [90.0, 50.0]),
            "POLYGON ((20 0, 0 100, 80 100, 90 50, 20 0))"
        );
    }

    #[test]
    fn slice_requires_points_on_the_ring() {
        let polygon: Polygon = PENTAGON.parse().unwrap();
        let result = slice_ring(&polygon, &Point::new(50.0, 10.0), &Point::new(0.0, 0.0));
        assert_eq!(
            result,
            Err(PolygonError::PointNotOnRing { x: 50.0, y: 10.0 })
        );
    }
}
