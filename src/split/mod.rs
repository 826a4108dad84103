//! Splitting of polygons into parts of equal area.
//!
//! The search for a cut isolating a given area works on pairs of non-adjacent edges of the
//! polygon ring. The region between both edges is decomposed by [`EdgePair`] into up to two
//! triangles and a trapezoid, whose areas are then interpolated by
//! [`EdgePairSubpolygons::cuts`] to find the exact cut lines. The [`GreedyPolygonSplitter`]
//! repeatedly removes the shortest of these cuts from the polygon.

pub use self::cut::Cut;
pub use self::edge_pair::{EdgePair, ProjectedVertex};
pub use self::error::SplitError;
pub use self::greedy::{edge_pair_indices, split, GreedyPolygonSplitter, PolygonSplitter};
pub use self::subpolygons::EdgePairSubpolygons;

mod cut;
mod edge_pair;
mod error;
mod greedy;
mod subpolygons;
