//! Shapes handled by the polygon splitter.

pub use self::polygon::{InvalidPolygon, Polygon, PolygonError};
pub use self::segment::Segment;
pub use self::wkt::WktError;

mod polygon;
mod segment;
mod wkt;
