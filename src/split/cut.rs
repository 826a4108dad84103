use crate::math::Real;
use crate::shape::{Polygon, Segment};

/// A candidate cut, isolating a part of a polygon.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Cut {
    /// The length of the cut line.
    pub length: Real,
    /// The cut line, with both endpoints on the polygon ring.
    pub line: Segment,
    /// The part of the polygon isolated by the cut: the ring from `line.a` to `line.b`.
    pub cut_away: Polygon,
}

impl Cut {
    /// Creates a cut from its line and the polygon it isolates.
    pub fn new(line: Segment, cut_away: Polygon) -> Self {
        Cut {
            length: line.length(),
            line,
            cut_away,
        }
    }
}
