//! Construction of polygons and extraction of parts of their rings.

pub use self::polygon_slicing::{
    make_polygon, make_triangle, slice_ring, subpolygon_between_vertices,
};

mod polygon_slicing;
