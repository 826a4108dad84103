//! Definition of the segment shape.

use crate::math::{Point, Real, Vector};

/// A directed segment.
///
/// When taken from a polygon ring, `a` comes before `b` in the traversal order of the ring.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point<Real>,
    /// The segment second point.
    pub b: Point<Real>,
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }

    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The length of this segment.
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }

    /// The same segment, traversed from `self.b` to `self.a`.
    #[must_use]
    pub fn reversed(&self) -> Segment {
        Segment::new(self.b, self.a)
    }

    /// The point located at `fraction` of the way from `self.a` to `self.b`.
    pub fn point_along(&self, fraction: Real) -> Point<Real> {
        self.a + self.scaled_direction() * fraction
    }

    /// Projects `pt` orthogonally on the infinite line supporting this segment.
    ///
    /// If the segment is degenerate, its first point is returned.
    pub fn project_point_on_line(&self, pt: &Point<Real>) -> Point<Real> {
        let dir = self.scaled_direction();
        let sq_len = dir.norm_squared();

        if sq_len == 0.0 {
            return self.a;
        }

        self.point_along((pt - self.a).dot(&dir) / sq_len)
    }

    /// The point of this segment closest to `pt`.
    pub fn closest_point(&self, pt: &Point<Real>) -> Point<Real> {
        let dir = self.scaled_direction();
        let sq_len = dir.norm_squared();

        if sq_len == 0.0 {
            return self.a;
        }

        let t = (pt - self.a).dot(&dir) / sq_len;
        self.point_along(t.clamp(0.0, 1.0))
    }

    /// The distance between `pt` and the closest point of this segment.
    pub fn distance_to_point(&self, pt: &Point<Real>) -> Real {
        na::distance(pt, &self.closest_point(pt))
    }

    /// Tests if both segments have the same endpoints, regardless of their direction.
    pub fn eq_topo(&self, other: &Segment) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topological_equality_ignores_direction() {
        let seg = Segment::new(Point::new(1.0, 2.0), Point::new(3.0, 4.0));
        assert!(seg.eq_topo(&seg));
        assert!(seg.eq_topo(&seg.reversed()));
        assert_ne!(seg, seg.reversed());

        let other = Segment::new(Point::new(1.0, 2.0), Point::new(3.0, 5.0));
        assert!(!seg.eq_topo(&other));
    }

    #[test]
    fn projections_on_line_and_segment() {
        let seg = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let pt = Point::new(15.0, 3.0);

        assert_eq!(seg.project_point_on_line(&pt), Point::new(15.0, 0.0));
        assert_eq!(seg.closest_point(&pt), Point::new(10.0, 0.0));
        assert_relative_eq!(seg.distance_to_point(&pt), 34.0_f64.sqrt());
    }

    #[test]
    fn point_along_interpolates_linearly() {
        let seg = Segment::new(Point::new(2.0, 2.0), Point::new(6.0, 10.0));
        assert_eq!(seg.point_along(0.0), seg.a);
        assert_eq!(seg.point_along(1.0), seg.b);
        assert_eq!(seg.point_along(0.25), Point::new(3.0, 4.0));
    }
}
