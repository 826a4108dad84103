use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::shape::Segment;
use crate::utils::{approx_equal, points_approx_equal};

/// Tests if `point` lies on `segment`.
///
/// The point is on the segment if the distances to both endpoints sum up to the
/// segment length, or if it is closer than [`DEFAULT_EPSILON`] to the segment. If
/// `inclusive` is `false`, points matching one of the endpoints are rejected.
pub fn point_on_segment(point: &Point<Real>, segment: &Segment, inclusive: bool) -> bool {
    let on_endpoint = || {
        points_approx_equal(point, &segment.a) || points_approx_equal(point, &segment.b)
    };

    if !inclusive && on_endpoint() {
        return false;
    }

    let length_sum = na::distance(point, &segment.a) + na::distance(point, &segment.b);
    let on_line = approx_equal(length_sum, segment.length());

    on_line || segment.distance_to_point(point) < DEFAULT_EPSILON
}
