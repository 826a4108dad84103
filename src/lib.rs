/*!
polysplit2d
===========

**polysplit2d** splits simple 2-dimensional polygons into parts of equal
area, written with the rust programming language.

Each part is isolated by a straight cut. At every step the shortest cut
isolating exactly one share of the total area is removed from the polygon,
until only the last part remains.

```
use polysplit2d::shape::Polygon;

let polygon: Polygon = "POLYGON ((0 0, 100 0, 90 50, 10 50, 0 0))".parse().unwrap();
let parts = polysplit2d::split(&polygon, 2).unwrap();

assert_eq!(parts.len(), 2);
assert!((parts[0].area() - parts[1].area()).abs() < 1.0e-7);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![deny(unused_qualifications)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod split;
pub mod transformation;
pub mod utils;

pub use crate::split::{split, GreedyPolygonSplitter, PolygonSplitter, SplitError};

/// Aliases for the mathematical types used by this crate.
pub mod math {
    pub use super::real::*;

    /// The default tolerance used for length and area comparisons.
    ///
    /// Two lengths closer than this value are considered equal, and a point closer
    /// than this value to a segment is considered to lie on it.
    pub const DEFAULT_EPSILON: Real = 1.0e-7;

    /// The point type.
    pub use na::Point2 as Point;

    /// The vector type.
    pub use na::Vector2 as Vector;
}

mod real {
    /// The scalar type used throughout this crate.
    pub use f64 as Real;
}
