use crate::math::Real;
use crate::shape::{InvalidPolygon, PolygonError};

/// Error raised while splitting a polygon.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum SplitError {
    /// The requested number of parts is smaller than 2.
    #[error("a polygon must be split into at least 2 parts, {0} requested.")]
    InvalidArgument(usize),
    /// The polygon to split is not a valid simple polygon.
    #[error("the polygon to split is invalid: {0}")]
    InvalidPolygon(#[from] InvalidPolygon),
    /// A polygon could not be built or sliced.
    #[error(transparent)]
    Polygon(#[from] PolygonError),
    /// The edges of an [`EdgePair`](crate::split::EdgePair) are not two non-adjacent edges
    /// of the polygon ring, given in ring order.
    #[error("the edges are not two non-adjacent edges of the polygon ring, in ring order.")]
    InvalidEdgePair,
    /// No edge pair yields a cut isolating the target area.
    ///
    /// This is a known limitation of the greedy search for some polygons.
    #[error("no cut isolating an area of {target_area} was found.")]
    NoCutFound {
        /// The area the cut should have isolated.
        target_area: Real,
    },
    /// The decomposition of an edge pair does not cover the polygon area.
    #[error("the edge pair decomposition covers an area of {actual} instead of {expected}.")]
    InconsistentDecomposition {
        /// The area of the polygon.
        expected: Real,
        /// The area covered by the decomposition and the regions outside of it.
        actual: Real,
    },
    /// The parts do not sum up to the area of the split polygon.
    #[error("the parts cover an area of {actual} instead of {expected}.")]
    AreaMismatch {
        /// The area of the split polygon.
        expected: Real,
        /// The sum of the areas of the parts.
        actual: Real,
    },
    /// A part is not contained in the split polygon.
    #[error("the part {0} is not contained in the split polygon.")]
    PartOutsidePolygon(usize),
}

impl SplitError {
    /// Tests if this error reveals an internal inconsistency rather than an unsupported input.
    ///
    /// Such errors indicate a geometric invariant was violated during the split.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            SplitError::InconsistentDecomposition { .. }
                | SplitError::AreaMismatch { .. }
                | SplitError::PartOutsidePolygon(_)
        )
    }
}
