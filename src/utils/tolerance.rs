use crate::math::{Point, Real, DEFAULT_EPSILON};

/// Tests if two lengths differ by less than [`DEFAULT_EPSILON`].
#[inline]
pub fn approx_equal(a: Real, b: Real) -> bool {
    (a - b).abs() < DEFAULT_EPSILON
}

/// Tests if two points are closer than [`DEFAULT_EPSILON`] from each other.
#[inline]
pub fn points_approx_equal(a: &Point<Real>, b: &Point<Real>) -> bool {
    na::distance(a, b) < DEFAULT_EPSILON
}

/// Tests if two areas are equal up to [`DEFAULT_EPSILON`], either absolutely or relatively
/// to the largest of both.
#[inline]
pub fn areas_match(a: Real, b: Real) -> bool {
    relative_eq!(
        a,
        b,
        epsilon = DEFAULT_EPSILON,
        max_relative = DEFAULT_EPSILON
    )
}
