use crate::math::{Point, Real};
use crate::shape::Segment;
use crate::utils::{point_on_segment, points_approx_equal};

/// Projects `vertex` onto `opposing_edge`, perpendicularly to the bisector of the
/// angle formed by the lines supporting both edges.
///
/// The `intersection` is the point where the lines supporting the edge of `vertex`
/// and `opposing_edge` cross, as computed by
/// [`intersect_infinite_lines`](crate::utils::intersect_infinite_lines).
///
/// If the lines cross, the projection is the point of the line from `intersection` to
/// the farthest endpoint of `opposing_edge` that is as far from `intersection` as
/// `vertex`. If the lines are parallel, `vertex` is projected perpendicularly on the
/// line supporting `opposing_edge`.
///
/// Returns `None` unless the projection lies strictly inside `opposing_edge`.
pub fn project_point(
    vertex: &Point<Real>,
    opposing_edge: &Segment,
    intersection: Option<&Point<Real>>,
) -> Option<Point<Real>> {
    let Some(intersection) = intersection else {
        let projected = opposing_edge.project_point_on_line(vertex);
        return point_on_segment(&projected, opposing_edge, false).then_some(projected);
    };

    let dist_vertex = na::distance(vertex, intersection);
    let dist_a = na::distance(intersection, &opposing_edge.a);
    let dist_b = na::distance(intersection, &opposing_edge.b);

    if dist_vertex >= dist_a.max(dist_b) || dist_vertex <= dist_a.min(dist_b) {
        return None;
    }

    let (farthest, dist_farthest) = if dist_a > dist_b {
        (opposing_edge.a, dist_a)
    } else {
        (opposing_edge.b, dist_b)
    };

    let projected = Segment::new(*intersection, farthest).point_along(dist_vertex / dist_farthest);

    // The distance checks above may still accept a point rounding to an endpoint.
    if points_approx_equal(&projected, &opposing_edge.a)
        || points_approx_equal(&projected, &opposing_edge.b)
    {
        None
    } else {
        Some(projected)
    }
}
