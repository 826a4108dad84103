use crate::math::{Point, Real};

/// Relative tolerance below which two segments are considered parallel.
const PARALLELISM_EPSILON: Real = 1.0e-12;
/// Relative tolerance below which two parallel segments are considered collinear.
const COLLINEARITY_EPSILON: Real = 1.0e-9;
/// Tolerance on the segment parameters, absorbing rounding at the endpoints.
const PARAMETER_EPSILON: Real = 1.0e-12;

/// Intersection between two segments.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SegmentsIntersection {
    /// Single point of intersection.
    Point(Point<Real>),
    /// Intersection along a segment (when both segments are collinear).
    ///
    /// The two points are sorted along the first segment. They may coincide
    /// if the segments only touch at one endpoint.
    Segment(Point<Real>, Point<Real>),
}

impl SegmentsIntersection {
    /// The intersection points: one for a crossing, two for an overlap.
    pub fn points(&self) -> impl Iterator<Item = Point<Real>> {
        let (first, second) = match *self {
            SegmentsIntersection::Point(pt) => (pt, None),
            SegmentsIntersection::Segment(pt1, pt2) => (pt1, Some(pt2)),
        };
        core::iter::once(first).chain(second)
    }
}

/// Computes the intersection between the segments `[a, b]` and `[c, d]`.
pub fn segments_intersection2d(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    d: &Point<Real>,
) -> Option<SegmentsIntersection> {
    let ab = b - a;
    let cd = d - c;
    let ac = c - a;
    let denom = ab.perp(&cd);

    // If denom is zero, then segments are parallel: handle separately.
    if denom.abs() < PARALLELISM_EPSILON * (ab.norm() * cd.norm()).max(1.0) {
        return parallel_intersection(a, b, c, d);
    }

    let s = ac.perp(&cd) / denom;
    let t = ac.perp(&ab) / denom;
    let range = -PARAMETER_EPSILON..=1.0 + PARAMETER_EPSILON;

    if range.contains(&s) && range.contains(&t) {
        Some(SegmentsIntersection::Point(a + ab * s.clamp(0.0, 1.0)))
    } else {
        None
    }
}

fn parallel_intersection(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    d: &Point<Real>,
) -> Option<SegmentsIntersection> {
    let ab = b - a;
    let ac = c - a;

    if ac.perp(&ab).abs() > COLLINEARITY_EPSILON * ab.norm().max(1.0) {
        return None;
    }

    let sq_len = ab.norm_squared();

    if sq_len == 0.0 {
        return None;
    }

    // Parameters of `c` and `d` along `ab`.
    let tc = ac.dot(&ab) / sq_len;
    let td = tc + (d - c).dot(&ab) / sq_len;
    let start = tc.min(td).max(0.0);
    let end = tc.max(td).min(1.0);

    if start > end + PARAMETER_EPSILON {
        None
    } else {
        Some(SegmentsIntersection::Segment(a + ab * start, a + ab * end))
    }
}
