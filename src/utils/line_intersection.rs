use crate::math::{Point, Real};
use crate::shape::Segment;

/// Computes the point where the lines supporting `edge1` and `edge2` cross.
///
/// Both segments are extended infinitely. Returns `None` if the lines are
/// parallel or coincident, that is if the determinant of their directions
/// is exactly zero. No tolerance is applied.
///
/// # Example
///
/// ```
/// # use polysplit2d::math::Point;
/// # use polysplit2d::shape::Segment;
/// # use polysplit2d::utils::intersect_infinite_lines;
/// let edge1 = Segment::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
/// let edge2 = Segment::new(Point::new(0.0, 10.0), Point::new(1.0, 9.0));
///
/// assert_eq!(intersect_infinite_lines(&edge1, &edge2), Some(Point::new(10.0, 0.0)));
/// ```
pub fn intersect_infinite_lines(edge1: &Segment, edge2: &Segment) -> Option<Point<Real>> {
    let det = |a: Real, b: Real, c: Real, d: Real| a * d - b * c;

    let (p1, p2) = (edge1.a, edge1.b);
    let (p3, p4) = (edge2.a, edge2.b);
    let d12 = p1 - p2;
    let d34 = p3 - p4;

    let denom = det(d12.x, d12.y, d34.x, d34.y);

    if denom == 0.0 {
        return None;
    }

    let cross12 = det(p1.x, p1.y, p2.x, p2.y);
    let cross34 = det(p3.x, p3.y, p4.x, p4.y);

    Some(Point::new(
        det(cross12, d12.x, cross34, d34.x) / denom,
        det(cross12, d12.y, cross34, d34.y) / denom,
    ))
}
