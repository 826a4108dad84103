use crate::math::{Point, Real};
use crate::shape::{PolygonError, Segment};
use crate::split::EdgePairSubpolygons;
use crate::utils::{intersect_infinite_lines, project_point};

/// A vertex of one edge of an [`EdgePair`], projected onto the other edge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProjectedVertex {
    /// The projected point.
    pub point: Point<Real>,
    /// The edge the projected point lies on.
    pub edge: Segment,
}

impl ProjectedVertex {
    fn project(
        vertex: &Point<Real>,
        opposing_edge: &Segment,
        intersection: Option<&Point<Real>>,
    ) -> Option<Self> {
        project_point(vertex, opposing_edge, intersection).map(|point| ProjectedVertex {
            point,
            edge: *opposing_edge,
        })
    }

    /// Tests if this projected vertex lies on `edge`, whatever its direction.
    pub fn lies_on(&self, edge: &Segment) -> bool {
        self.edge.eq_topo(edge)
    }
}

/// Two non-adjacent directed edges of a polygon ring.
///
/// The edges must be directed like the ring, and `edge_a` must come before `edge_b` when
/// walking the ring from its first vertex. The vertices of each edge are projected onto
/// the other edge, perpendicularly to the bisector of their supporting lines, to split
/// the region between them into two triangles and a trapezoid.
///
/// # Example
///
/// ```
/// # use polysplit2d::math::Point;
/// # use polysplit2d::shape::Segment;
/// # use polysplit2d::split::EdgePair;
/// let edge_a = Segment::new(Point::new(15.0, 5.0), Point::new(3.0, 5.0));
/// let edge_b = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
/// let pair = EdgePair::new(edge_a, edge_b);
///
/// // The end of `edge_a` is projected onto `edge_b`.
/// assert_eq!(pair.projected0().unwrap().point, Point::new(3.0, 0.0));
///
/// let subpolygons = pair.subpolygons().unwrap();
/// assert_eq!(subpolygons.area(), 55.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EdgePair {
    edge_a: Segment,
    edge_b: Segment,
    projected0: Option<ProjectedVertex>,
    projected1: Option<ProjectedVertex>,
}

impl EdgePair {
    /// Computes the projected vertices of the edge pair.
    pub fn new(edge_a: Segment, edge_b: Segment) -> Self {
        let intersection = intersect_infinite_lines(&edge_a, &edge_b);
        let intersection = intersection.as_ref();

        let projected0 = ProjectedVertex::project(&edge_a.b, &edge_b, intersection)
            .or_else(|| ProjectedVertex::project(&edge_b.a, &edge_a, intersection));
        let projected1 = ProjectedVertex::project(&edge_a.a, &edge_b, intersection)
            .or_else(|| ProjectedVertex::project(&edge_b.b, &edge_a, intersection));

        EdgePair {
            edge_a,
            edge_b,
            projected0,
            projected1,
        }
    }

    /// The first edge of the pair, in ring order.
    #[inline]
    pub fn edge_a(&self) -> &Segment {
        &self.edge_a
    }

    /// The second edge of the pair, in ring order.
    #[inline]
    pub fn edge_b(&self) -> &Segment {
        &self.edge_b
    }

    /// The projection of the end of `edge_a` onto `edge_b`, or else of the start of `edge_b`
    /// onto `edge_a`.
    ///
    /// `None` if neither projection falls strictly inside the opposing edge.
    #[inline]
    pub fn projected0(&self) -> Option<&ProjectedVertex> {
        self.projected0.as_ref()
    }

    /// The projection of the start of `edge_a` onto `edge_b`, or else of the end of `edge_b`
    /// onto `edge_a`.
    ///
    /// `None` if neither projection falls strictly inside the opposing edge.
    #[inline]
    pub fn projected1(&self) -> Option<&ProjectedVertex> {
        self.projected1.as_ref()
    }

    /// Decomposes the region between both edges into triangles and a trapezoid.
    pub fn subpolygons(&self) -> Result<EdgePairSubpolygons, PolygonError> {
        EdgePairSubpolygons::new(self)
    }
}
