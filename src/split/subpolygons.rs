use arrayvec::ArrayVec;

use crate::math::{Point, Real};
use crate::query::{polygon_contains_polygon, properly_intersects};
use crate::shape::{Polygon, PolygonError, Segment};
use crate::split::{Cut, EdgePair, ProjectedVertex, SplitError};
use crate::transformation::{make_polygon, make_triangle, slice_ring, subpolygon_between_vertices};
use crate::utils::areas_match;

/// The decomposition of the region between the two edges of an [`EdgePair`].
///
/// Following the ring from the end of `edge_a` to its start, the region is made of:
/// - `triangle1`: between the end of `edge_a`, the first projected vertex and the start of
///   `edge_b`. Exists only if the first projected vertex exists.
/// - `trapezoid`: the quadrilateral between both edges, always present.
/// - `triangle2`: between the start of `edge_a`, the second projected vertex and the end of
///   `edge_b`. Exists only if the second projected vertex exists.
#[derive(Clone, Debug)]
pub struct EdgePairSubpolygons {
    edge_a: Segment,
    edge_b: Segment,
    projected0: Option<ProjectedVertex>,
    projected1: Option<ProjectedVertex>,
    triangle1: Option<Polygon>,
    trapezoid: Polygon,
    triangle2: Option<Polygon>,
    // The trapezoid vertices, in order: on `edge_a` from its start side, then on `edge_b`.
    trapezoid_corners: [Point<Real>; 4],
    triangle1_area: Real,
    trapezoid_area: Real,
    triangle2_area: Real,
}

impl EdgePairSubpolygons {
    pub(crate) fn new(pair: &EdgePair) -> Result<Self, PolygonError> {
        let edge_a = *pair.edge_a();
        let edge_b = *pair.edge_b();
        let projected0 = pair.projected0().copied();
        let projected1 = pair.projected1().copied();

        let triangle1 = projected0
            .map(|projected| make_triangle(edge_a.b, projected.point, edge_b.a))
            .transpose()?;
        let triangle2 = projected1
            .map(|projected| make_triangle(edge_a.a, projected.point, edge_b.b))
            .transpose()?;

        let trapezoid_corners = [
            corner_on_edge(projected1, &edge_a, edge_a.a),
            corner_on_edge(projected0, &edge_a, edge_a.b),
            corner_on_edge(projected0, &edge_b, edge_b.a),
            corner_on_edge(projected1, &edge_b, edge_b.b),
        ];
        let trapezoid = make_polygon(&trapezoid_corners)?;

        Ok(EdgePairSubpolygons {
            edge_a,
            edge_b,
            projected0,
            projected1,
            triangle1_area: triangle1.as_ref().map_or(0.0, Polygon::area),
            trapezoid_area: trapezoid.area(),
            triangle2_area: triangle2.as_ref().map_or(0.0, Polygon::area),
            triangle1,
            trapezoid,
            triangle2,
            trapezoid_corners,
        })
    }

    /// The triangle next to the end of `edge_a`, if any.
    #[inline]
    pub fn triangle1(&self) -> Option<&Polygon> {
        self.triangle1.as_ref()
    }

    /// The trapezoid between both edges.
    #[inline]
    pub fn trapezoid(&self) -> &Polygon {
        &self.trapezoid
    }

    /// The triangle next to the start of `edge_a`, if any.
    #[inline]
    pub fn triangle2(&self) -> Option<&Polygon> {
        self.triangle2.as_ref()
    }

    /// The total area of the decomposition.
    pub fn area(&self) -> Real {
        self.triangle1_area + self.trapezoid_area + self.triangle2_area
    }

    fn pieces(&self) -> impl Iterator<Item = &Polygon> {
        core::iter::once(&self.trapezoid)
            .chain(self.triangle1.as_ref())
            .chain(self.triangle2.as_ref())
    }

    /// Computes the cuts isolating `target_area` from `polygon`, starting from either side
    /// of the edge pair.
    ///
    /// The edges of the pair must be edges of `polygon`. Walking from the end of `edge_a` to
    /// its start, the polygon is made of the region of the ring between `edge_a` and
    /// `edge_b`, then `triangle1`, the trapezoid, `triangle2`, and finally the region of the
    /// ring between `edge_b` and `edge_a`. The forward cut accumulates these areas in this
    /// order until reaching `target_area`, the reverse cut in the opposite order.
    ///
    /// No cuts are returned if one of the regions spills outside `polygon`. A cut line
    /// properly intersecting the ring is discarded.
    pub fn cuts(
        &self,
        polygon: &Polygon,
        target_area: Real,
    ) -> Result<ArrayVec<Cut, 2>, SplitError> {
        let mut cuts = ArrayVec::new();

        let num_segments = polygon.num_segments();
        let index_a = polygon.segments().position(|seg| seg == self.edge_a);
        let index_b = polygon.segments().position(|seg| seg == self.edge_b);

        let (Some(index_a), Some(index_b)) = (index_a, index_b) else {
            return Err(SplitError::InvalidEdgePair);
        };

        if index_b < index_a + 2 || index_b - index_a + 1 == num_segments {
            return Err(SplitError::InvalidEdgePair);
        }

        if !self
            .pieces()
            .all(|piece| polygon_contains_polygon(polygon, piece))
        {
            log::trace!("edge pair decomposition spills outside of the polygon, skipped.");
            return Ok(cuts);
        }

        let num_covered = index_b - index_a + 1;

        let num_between = num_covered - 2;
        let num_outside = num_segments - num_covered;

        let Some(outside1) =
            self.outside_area(polygon, num_between, &self.edge_a.b, &self.edge_b.a)?
        else {
            return Ok(cuts);
        };
        let Some(outside2) =
            self.outside_area(polygon, num_outside, &self.edge_b.b, &self.edge_a.a)?
        else {
            return Ok(cuts);
        };

        let expected = polygon.area();
        let actual = outside1 + outside2 + self.area();

        if !areas_match(actual, expected) {
            return Err(SplitError::InconsistentDecomposition { expected, actual });
        }

        if outside1 <= target_area {
            if let Some(line) = self.forward_cut_line(outside1, target_area) {
                Self::push_cut(polygon, line, &mut cuts)?;
            }
        }

        if outside2 <= target_area {
            if let Some(line) = self.reverse_cut_line(outside2, target_area) {
                Self::push_cut(polygon, line, &mut cuts)?;
            }
        }

        Ok(cuts)
    }

    // The area of the ring region between `start` and `end`, separated from the
    // decomposition by `num_edges` edges. `None` if that region spills outside `polygon`.
    fn outside_area(
        &self,
        polygon: &Polygon,
        num_edges: usize,
        start: &Point<Real>,
        end: &Point<Real>,
    ) -> Result<Option<Real>, PolygonError> {
        if num_edges <= 1 {
            return Ok(Some(0.0));
        }

        let region = subpolygon_between_vertices(polygon, start, end)?;

        if polygon_contains_polygon(polygon, &region) {
            Ok(Some(region.area()))
        } else {
            log::trace!("region outside of the edge pair spills outside of the polygon, skipped.");
            Ok(None)
        }
    }

    fn forward_cut_line(&self, outside: Real, target_area: Real) -> Option<Segment> {
        let [c1, c2, c3, c4] = self.trapezoid_corners;
        let after_triangle1 = outside + self.triangle1_area;
        let after_trapezoid = after_triangle1 + self.trapezoid_area;

        if after_triangle1 > target_area {
            let projected = self.projected0.as_ref()?;
            let fraction = (target_area - outside) / self.triangle1_area;

            if projected.lies_on(&self.edge_a) {
                let pt = Segment::new(self.edge_a.b, projected.point).point_along(fraction);
                Some(Segment::new(pt, self.edge_b.a))
            } else {
                let pt = Segment::new(self.edge_b.a, projected.point).point_along(fraction);
                Some(Segment::new(self.edge_a.b, pt))
            }
        } else if after_trapezoid >= target_area {
            let leg_a = Segment::new(c2, c1);
            let leg_b = Segment::new(c3, c4);
            let fraction = trapezoid_cut_fraction(&leg_a, &leg_b, target_area - after_triangle1);
            Some(Segment::new(
                leg_a.point_along(fraction),
                leg_b.point_along(fraction),
            ))
        } else if after_trapezoid + self.triangle2_area >= target_area {
            let projected = self.projected1.as_ref()?;
            let fraction = (target_area - after_trapezoid) / self.triangle2_area;

            if projected.lies_on(&self.edge_a) {
                let pt = Segment::new(projected.point, self.edge_a.a).point_along(fraction);
                Some(Segment::new(pt, self.edge_b.b))
            } else {
                let pt = Segment::new(projected.point, self.edge_b.b).point_along(fraction);
                Some(Segment::new(self.edge_a.a, pt))
            }
        } else {
            None
        }
    }

    fn reverse_cut_line(&self, outside: Real, target_area: Real) -> Option<Segment> {
        let [c1, c2, c3, c4] = self.trapezoid_corners;
        let after_triangle2 = outside + self.triangle2_area;
        let after_trapezoid = after_triangle2 + self.trapezoid_area;

        if after_triangle2 > target_area {
            let projected = self.projected1.as_ref()?;
            let fraction = (target_area - outside) / self.triangle2_area;

            if projected.lies_on(&self.edge_a) {
                let pt = Segment::new(self.edge_a.a, projected.point).point_along(fraction);
                Some(Segment::new(self.edge_b.b, pt))
            } else {
                let pt = Segment::new(self.edge_b.b, projected.point).point_along(fraction);
                Some(Segment::new(pt, self.edge_a.a))
            }
        } else if after_trapezoid >= target_area {
            let leg_b = Segment::new(c4, c3);
            let leg_a = Segment::new(c1, c2);
            let fraction = trapezoid_cut_fraction(&leg_b, &leg_a, target_area - after_triangle2);
            Some(Segment::new(
                leg_b.point_along(fraction),
                leg_a.point_along(fraction),
            ))
        } else if after_trapezoid + self.triangle1_area >= target_area {
            let projected = self.projected0.as_ref()?;
            let fraction = (target_area - after_trapezoid) / self.triangle1_area;

            if projected.lies_on(&self.edge_a) {
                let pt = Segment::new(projected.point, self.edge_a.b).point_along(fraction);
                Some(Segment::new(self.edge_b.a, pt))
            } else {
                let pt = Segment::new(projected.point, self.edge_b.a).point_along(fraction);
                Some(Segment::new(pt, self.edge_a.b))
            }
        } else {
            None
        }
    }

    fn push_cut(
        polygon: &Polygon,
        line: Segment,
        cuts: &mut ArrayVec<Cut, 2>,
    ) -> Result<(), SplitError> {
        if properly_intersects(&line, polygon) {
            log::trace!("cut line {line:?} intersects the polygon ring, discarded.");
            return Ok(());
        }

        let cut_away = slice_ring(polygon, &line.a, &line.b)?;
        cuts.push(Cut::new(line, cut_away));
        Ok(())
    }
}

/// The fraction of the legs of a trapezoid at which the cut joining both legs isolates
/// `area`, starting from the side of `leg_a.a` and `leg_b.a`.
///
/// Both legs are walked in parallel: the cut joins `leg_a.point_along(t)` and
/// `leg_b.point_along(t)`. The isolated area is a quadratic function of `t`, exactly
/// solved here. It becomes linear when both legs are parallel.
fn trapezoid_cut_fraction(leg_a: &Segment, leg_b: &Segment, area: Real) -> Real {
    let dir_a = leg_a.scaled_direction();
    let dir_b = leg_b.scaled_direction();

    // Twice the signed area isolated at `t` is `k1 * t + k2 * t²`.
    let k1 = (leg_a.a - leg_b.a).perp(&(dir_a + dir_b));
    let k2 = dir_a.perp(&dir_b);
    let sign = if k1 + k2 >= 0.0 { 1.0 } else { -1.0 };
    let quadratic = sign * k2 / 2.0;
    let linear = sign * k1 / 2.0;

    // Root of `quadratic * t² + linear * t - area`, in a form stable when `quadratic` vanishes.
    let denom = linear + (linear * linear + 4.0 * quadratic * area).max(0.0).sqrt();

    if denom > 0.0 {
        (2.0 * area / denom).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

// The projected vertex if it lies on `edge`, the `default` edge endpoint otherwise.
fn corner_on_edge(
    projected: Option<ProjectedVertex>,
    edge: &Segment,
    default: Point<Real>,
) -> Point<Real> {
    projected
        .filter(|projected| projected.lies_on(edge))
        .map_or(default, |projected| projected.point)
}
