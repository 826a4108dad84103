//! Various unsorted geometrical and logical operators.

pub use self::bisector_projection::project_point;
pub use self::line_intersection::intersect_infinite_lines;
pub use self::point_in_poly2d::point_in_poly2d;
pub use self::point_on_segment::point_on_segment;
pub use self::segments_intersection::{segments_intersection2d, SegmentsIntersection};
pub use self::tolerance::{approx_equal, areas_match, points_approx_equal};

mod bisector_projection;
mod line_intersection;
mod point_in_poly2d;
mod point_on_segment;
mod segments_intersection;
mod tolerance;
