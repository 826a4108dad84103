//! Non-persistent geometric queries on polygons.

pub use self::containment::{polygon_contains_polygon, polygon_covers_point};
pub use self::proper_intersection::properly_intersects;

mod containment;
mod proper_intersection;
