//! Definition of the simple polygon shape.

use num::Zero;

use crate::math::{Point, Real};
use crate::shape::Segment;
use crate::utils::{points_approx_equal, segments_intersection2d};

/// Error raised while building a polygon or extracting a part of its ring.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum PolygonError {
    /// Less than three vertices were given to build a polygon.
    #[error("a polygon needs at least 3 vertices, {0} were given.")]
    DegeneratePolygon(usize),
    /// The point is not exactly one of the vertices of the ring.
    #[error("the point ({x}, {y}) is not a vertex of the polygon ring.")]
    VertexNotFound {
        /// The point abscissa.
        x: Real,
        /// The point ordinate.
        y: Real,
    },
    /// The point does not lie on any edge of the ring.
    #[error("the point ({x}, {y}) does not lie on the polygon ring.")]
    PointNotOnRing {
        /// The point abscissa.
        x: Real,
        /// The point ordinate.
        y: Real,
    },
}

impl PolygonError {
    pub(crate) fn vertex_not_found(pt: &Point<Real>) -> Self {
        PolygonError::VertexNotFound { x: pt.x, y: pt.y }
    }

    pub(crate) fn point_not_on_ring(pt: &Point<Real>) -> Self {
        PolygonError::PointNotOnRing { x: pt.x, y: pt.y }
    }
}

/// The reason why a polygon is not a valid simple polygon.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum InvalidPolygon {
    /// The ring has less than three vertices.
    #[error("the ring has {0} vertices, at least 3 are required.")]
    TooFewVertices(usize),
    /// One of the vertex coordinates is infinite or NaN.
    #[error("the vertex {0} is not finite.")]
    NonFiniteVertex(usize),
    /// The vertex is equal to the vertex preceding it, forming a zero-length edge.
    #[error("the vertex {0} is equal to the vertex preceding it.")]
    RepeatedVertex(usize),
    /// Two edges intersect somewhere else than at their shared vertex.
    #[error("the edges {0} and {1} intersect.")]
    SelfIntersection(usize, usize),
    /// The ring does not enclose any area.
    #[error("the ring does not enclose any area.")]
    ZeroArea,
}

/// A simple polygon without holes.
///
/// The polygon is stored as a closed ring: its last point is equal to its first point.
/// The ring may be oriented either clockwise or counterclockwise.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde-serialize",
    serde(try_from = "Vec<Point<Real>>", into = "Vec<Point<Real>>")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    ring: Vec<Point<Real>>,
}

impl Polygon {
    /// Creates a polygon from its vertices, in ring order.
    ///
    /// The ring is closed automatically if the last vertex differs from the first one.
    /// Fails with [`PolygonError::DegeneratePolygon`] if less than three vertices remain
    /// once the closing point is dropped. Only the vertices are counted: repeated vertices
    /// and self-intersections are reported by [`Polygon::validate`] instead.
    ///
    /// # Example
    ///
    /// ```
    /// # use polysplit2d::math::Point;
    /// # use polysplit2d::shape::Polygon;
    /// let square = Polygon::new(vec![
    ///     Point::new(0.0, 0.0),
    ///     Point::new(1.0, 0.0),
    ///     Point::new(1.0, 1.0),
    ///     Point::new(0.0, 1.0),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(square.ring().len(), 5);
    /// assert_eq!(square.vertices().len(), 4);
    /// assert_eq!(square.area(), 1.0);
    /// ```
    pub fn new(mut vertices: Vec<Point<Real>>) -> Result<Self, PolygonError> {
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            let _ = vertices.pop();
        }

        if vertices.len() < 3 {
            return Err(PolygonError::DegeneratePolygon(vertices.len()));
        }

        vertices.push(vertices[0]);
        Ok(Self { ring: vertices })
    }

    /// The closed ring of this polygon: the first point is repeated at the end.
    #[inline]
    pub fn ring(&self) -> &[Point<Real>] {
        &self.ring
    }

    /// The vertices of this polygon, without the closing point.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.ring[..self.ring.len() - 1]
    }

    /// The number of edges of this polygon.
    #[inline]
    pub fn num_segments(&self) -> usize {
        self.ring.len() - 1
    }

    /// The directed edges of this polygon, in ring order.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Segment> + '_ {
        self.ring.windows(2).map(|pts| Segment::new(pts[0], pts[1]))
    }

    /// The `i`-th edge of this polygon.
    ///
    /// If `reversed` is `true`, the endpoints of the edge are swapped.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.num_segments()`.
    pub fn segment(&self, i: usize, reversed: bool) -> Segment {
        let segment = Segment::new(self.ring[i], self.ring[i + 1]);

        if reversed {
            segment.reversed()
        } else {
            segment
        }
    }

    /// Tests if `pt` is exactly one of the vertices of this polygon.
    pub fn has_vertex(&self, pt: &Point<Real>) -> bool {
        self.vertices().contains(pt)
    }

    /// The signed area of this polygon: positive if its ring is counterclockwise.
    pub fn signed_area(&self) -> Real {
        let origin = self.ring[0];
        let doubled: Real = self
            .ring
            .windows(2)
            .map(|pts| (pts[0] - origin).perp(&(pts[1] - origin)))
            .sum();
        doubled / 2.0
    }

    /// The area of this polygon.
    pub fn area(&self) -> Real {
        self.signed_area().abs()
    }

    /// Checks that this polygon is a valid simple polygon.
    ///
    /// A valid polygon has at least three finite vertices, no zero-length edge, a
    /// non-zero area, and no edges intersecting each other except consecutive edges
    /// meeting at their shared vertex.
    pub fn validate(&self) -> Result<(), InvalidPolygon> {
        let vertices = self.vertices();
        let n = vertices.len();

        if n < 3 {
            return Err(InvalidPolygon::TooFewVertices(n));
        }

        if let Some(i) = vertices
            .iter()
            .position(|pt| !pt.x.is_finite() || !pt.y.is_finite())
        {
            return Err(InvalidPolygon::NonFiniteVertex(i));
        }

        let segments: Vec<_> = self.segments().collect();

        if let Some(i) = segments.iter().position(|seg| seg.a == seg.b) {
            return Err(InvalidPolygon::RepeatedVertex((i + 1) % n));
        }

        for (i, seg1) in segments.iter().enumerate() {
            for (j, seg2) in segments.iter().enumerate().skip(i + 1) {
                let Some(inter) = segments_intersection2d(&seg1.a, &seg1.b, &seg2.a, &seg2.b)
                else {
                    continue;
                };

                let shared = if j == i + 1 {
                    Some(seg1.b)
                } else if i == 0 && j == n - 1 {
                    Some(seg1.a)
                } else {
                    None
                };

                let only_shared_vertex = shared.is_some_and(|shared| {
                    inter.points().all(|pt| points_approx_equal(&pt, &shared))
                });

                if !only_shared_vertex {
                    return Err(InvalidPolygon::SelfIntersection(i, j));
                }
            }
        }

        if self.area().is_zero() {
            return Err(InvalidPolygon::ZeroArea);
        }

        Ok(())
    }

    /// Tests if this polygon is a valid simple polygon.
    ///
    /// See [`Polygon::validate`] for the reason of a failure.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// A normalized copy of this polygon.
    ///
    /// Consecutive duplicate vertices are removed, the ring is oriented counterclockwise,
    /// and it starts at its lowest vertex along `x`, then along `y`.
    #[must_use]
    pub fn normalized(&self) -> Polygon {
        let mut vertices = self.vertices().to_vec();
        vertices.dedup();

        while vertices.len() > 1 && vertices.first() == vertices.last() {
            let _ = vertices.pop();
        }

        if self.signed_area() < 0.0 {
            vertices.reverse();
        }

        let first = vertices
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)))
            .map(|(i, _)| i)
            .unwrap_or(0);
        vertices.rotate_left(first);

        if let Some(start) = vertices.first().copied() {
            vertices.push(start);
        }

        Polygon { ring: vertices }
    }

    /// Tests if both polygons describe the same ring once normalized, up to
    /// [`DEFAULT_EPSILON`](crate::math::DEFAULT_EPSILON) on each vertex.
    pub fn equals_norm(&self, other: &Polygon) -> bool {
        let ring1 = self.normalized().ring;
        let ring2 = other.normalized().ring;

        ring1.len() == ring2.len()
            && ring1
                .iter()
                .zip(ring2.iter())
                .all(|(pt1, pt2)| points_approx_equal(pt1, pt2))
    }
}

impl TryFrom<Vec<Point<Real>>> for Polygon {
    type Error = PolygonError;

    fn try_from(vertices: Vec<Point<Real>>) -> Result<Self, Self::Error> {
        Polygon::new(vertices)
    }
}

impl From<Polygon> for Vec<Point<Real>> {
    fn from(polygon: Polygon) -> Self {
        polygon.ring
    }
}
