use arrayvec::ArrayVec;
use ordered_float::OrderedFloat;

use crate::math::Real;
use crate::query::polygon_contains_polygon;
use crate::shape::{Polygon, Segment};
use crate::split::{Cut, EdgePair, SplitError};
use crate::transformation::slice_ring;
use crate::utils::areas_match;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// An algorithm splitting a polygon into parts of equal area.
pub trait PolygonSplitter {
    /// Splits `polygon` into `parts` polygons of equal area.
    ///
    /// The polygon must be a valid simple polygon, and `parts` must be at least 2.
    fn split(&self, polygon: &Polygon, parts: usize) -> Result<Vec<Polygon>, SplitError>;
}

/// Splits polygons by repeatedly cutting away the shortest cut isolating one part.
///
/// Every pair of non-adjacent edges of the polygon ring is considered for a cut isolating
/// the area of one part. The shortest cut among all pairs is applied, and the search
/// resumes on the remainder of the polygon, until only one part remains.
///
/// This is a heuristic: the total length of the cuts is not guaranteed to be minimal, and
/// the search may fail to find a cut for some polygons, yielding [`SplitError::NoCutFound`].
///
/// With the `parallel` feature, the edge pairs are evaluated concurrently.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GreedyPolygonSplitter;

impl GreedyPolygonSplitter {
    /// Creates a new greedy polygon splitter.
    pub fn new() -> Self {
        GreedyPolygonSplitter
    }

    /// All the cuts isolating `target_area` from `polygon`, in edge pair order.
    pub fn candidate_cuts(
        &self,
        polygon: &Polygon,
        target_area: Real,
    ) -> Result<Vec<Cut>, SplitError> {
        let segments: Vec<Segment> = polygon.segments().collect();
        let pairs: Vec<_> = edge_pair_indices(segments.len()).collect();

        let evaluate = |&(i, j): &(usize, usize)| -> Result<ArrayVec<Cut, 2>, SplitError> {
            EdgePair::new(segments[i], segments[j])
                .subpolygons()?
                .cuts(polygon, target_area)
        };

        #[cfg(feature = "parallel")]
        let cuts_per_pair: Vec<_> = pairs.par_iter().map(evaluate).collect();
        #[cfg(not(feature = "parallel"))]
        let cuts_per_pair: Vec<_> = pairs.iter().map(evaluate).collect();

        let mut candidates = Vec::new();

        for cuts in cuts_per_pair {
            candidates.extend(cuts?);
        }

        Ok(candidates)
    }

    /// Cuts away the part of `polygon` isolated by the shortest cut of area `target_area`.
    ///
    /// Returns the part cut away, and the remainder of `polygon`. Among cuts of equal
    /// length, the first one in edge pair order is selected.
    pub fn split_once(
        &self,
        polygon: &Polygon,
        target_area: Real,
    ) -> Result<(Polygon, Polygon), SplitError> {
        let candidates = self.candidate_cuts(polygon, target_area)?;
        let num_candidates = candidates.len();

        let best = candidates
            .into_iter()
            .min_by_key(|cut| OrderedFloat(cut.length))
            .ok_or(SplitError::NoCutFound { target_area })?;

        log::debug!(
            "selected a cut of length {} among {} candidates.",
            best.length,
            num_candidates
        );

        let remainder = slice_ring(polygon, &best.line.b, &best.line.a)?;
        Ok((best.cut_away, remainder))
    }
}

impl PolygonSplitter for GreedyPolygonSplitter {
    fn split(&self, polygon: &Polygon, parts: usize) -> Result<Vec<Polygon>, SplitError> {
        polygon.validate()?;

        if parts < 2 {
            return Err(SplitError::InvalidArgument(parts));
        }

        let target_area = polygon.area() / parts as Real;
        let mut result = Vec::with_capacity(parts);
        let mut remainder = polygon.clone();

        for part in 0..parts - 1 {
            log::debug!("searching part {}/{parts} of area {target_area}.", part + 1);
            let (cut_away, rest) = self.split_once(&remainder, target_area)?;
            result.push(cut_away);
            remainder = rest;
        }

        result.push(remainder);
        check_partition(polygon, &result)?;

        Ok(result)
    }
}

/// Splits `polygon` into `parts` polygons of equal area with the [`GreedyPolygonSplitter`].
///
/// The `i`-th polygon returned is the `i`-th part cut away, and the last one is the
/// remainder after all the cuts.
///
/// # Example
///
/// ```
/// # use polysplit2d::shape::Polygon;
/// let polygon: Polygon = "POLYGON ((0 0, 0 30, 10 30, 10 10, 20 10, 20 0, 0 0))".parse().unwrap();
/// let parts = polysplit2d::split(&polygon, 4).unwrap();
///
/// assert_eq!(parts.len(), 4);
///
/// for part in &parts {
///     assert!((part.area() - 100.0).abs() < 1.0e-7);
/// }
/// ```
pub fn split(polygon: &Polygon, parts: usize) -> Result<Vec<Polygon>, SplitError> {
    GreedyPolygonSplitter.split(polygon, parts)
}

/// The index pairs `(i, j)` of the non-adjacent edges of a ring with `num_segments` edges,
/// with `i < j`, in lexicographic order.
///
/// # Example
///
/// ```
/// # use polysplit2d::split::edge_pair_indices;
/// let pairs: Vec<_> = edge_pair_indices(5).collect();
/// assert_eq!(pairs, [(0, 2), (0, 3), (1, 3), (1, 4), (2, 4)]);
/// ```
pub fn edge_pair_indices(num_segments: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..num_segments).flat_map(move |i| {
        (i + 2..num_segments)
            .filter(move |j| j - i + 1 != num_segments)
            .map(move |j| (i, j))
    })
}

// The parts must tile the original polygon: each one lies inside it, and their areas
// sum up to its area.
fn check_partition(polygon: &Polygon, parts: &[Polygon]) -> Result<(), SplitError> {
    let expected = polygon.area();
    let actual: Real = parts.iter().map(Polygon::area).sum();

    if !areas_match(actual, expected) {
        return Err(SplitError::AreaMismatch { expected, actual });
    }

    if let Some(i) = parts
        .iter()
        .position(|part| !polygon_contains_polygon(polygon, part))
    {
        return Err(SplitError::PartOutsidePolygon(i));
    }

    Ok(())
}
