use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::shape::{Polygon, Segment};
use crate::utils::{point_in_poly2d, segments_intersection2d};

/// Sub-intervals of an edge shorter than this, in parameter space, are ignored.
const MIN_INTERVAL_LENGTH: Real = 1.0e-12;

/// Tests if `pt` is inside `polygon` or closer than
/// [`DEFAULT_EPSILON`] from its boundary.
pub fn polygon_covers_point(polygon: &Polygon, pt: &Point<Real>) -> bool {
    polygon
        .segments()
        .any(|edge| edge.distance_to_point(pt) < DEFAULT_EPSILON)
        || point_in_poly2d(pt, polygon.vertices())
}

/// Tests if `inner` lies entirely inside `outer`, boundaries included.
///
/// The boundary of `outer` is given a thickness of [`DEFAULT_EPSILON`]. An invalid
/// `inner` polygon (see [`Polygon::validate`]) is never contained.
///
/// # Example
///
/// ```
/// # use polysplit2d::shape::Polygon;
/// # use polysplit2d::query::polygon_contains_polygon;
/// let l_shape: Polygon = "POLYGON ((0 0, 0 30, 10 30, 10 10, 20 10, 20 0, 0 0))".parse().unwrap();
/// let square: Polygon = "POLYGON ((0 0, 0 10, 10 10, 10 0, 0 0))".parse().unwrap();
/// let across: Polygon = "POLYGON ((0 0, 0 30, 20 30, 20 0, 0 0))".parse().unwrap();
///
/// assert!(polygon_contains_polygon(&l_shape, &square));
/// assert!(polygon_contains_polygon(&l_shape, &l_shape));
/// assert!(!polygon_contains_polygon(&l_shape, &across));
/// ```
pub fn polygon_contains_polygon(outer: &Polygon, inner: &Polygon) -> bool {
    inner.is_valid()
        && inner
            .vertices()
            .iter()
            .all(|pt| polygon_covers_point(outer, pt))
        && inner.segments().all(|edge| edge_covered(outer, &edge))
}

// Splits `edge` wherever it meets the boundary of `polygon`, and checks that
// each piece is covered by testing its midpoint.
fn edge_covered(polygon: &Polygon, edge: &Segment) -> bool {
    let dir = edge.scaled_direction();
    let sq_len = dir.norm_squared();
    let mut params: SmallVec<[Real; 8]> = SmallVec::new();
    params.push(0.0);
    params.push(1.0);

    for boundary in polygon.segments() {
        if let Some(inter) = segments_intersection2d(&edge.a, &edge.b, &boundary.a, &boundary.b) {
            params.extend(inter.points().map(|pt| (pt - edge.a).dot(&dir) / sq_len));
        }
    }

    params.sort_unstable_by_key(|t| OrderedFloat(*t));

    params
        .windows(2)
        .filter(|interval| interval[1] - interval[0] > MIN_INTERVAL_LENGTH)
        .all(|interval| {
            let midpoint = edge.point_along((interval[0] + interval[1]) / 2.0);
            polygon_covers_point(polygon, &midpoint)
        })
}
