use crate::math::{Point, Real};

/// Tests if `pt` is inside the polygon with the vertices `poly`, in any orientation.
///
/// The last vertex is implicitly connected to the first one. A ray is cast from `pt` toward
/// increasing `x` and the point is inside if it crosses the ring an odd number of times.
/// Each edge is treated as half-open along `y`, so a ray passing through a vertex or along a
/// horizontal edge is counted consistently.
///
/// Points exactly on the boundary may be classified either way: use
/// [`polygon_covers_point`](crate::query::polygon_covers_point) for a test including the
/// boundary.
pub fn point_in_poly2d(pt: &Point<Real>, poly: &[Point<Real>]) -> bool {
    let mut inside = false;

    for (a, b) in poly.iter().zip(poly.iter().cycle().skip(1)) {
        if (a.y > pt.y) != (b.y > pt.y) {
            // Never divides by zero: the edge endpoints lie on both sides of `pt.y`.
            let x_cross = a.x + (pt.y - a.y) * (b.x - a.x) / (b.y - a.y);

            if pt.x < x_cross {
                inside = !inside;
            }
        }
    }

    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l_shape() -> [Point<Real>; 6] {
        [
            [0.0, 0.0],
            [0.0, 30.0],
            [10.0, 30.0],
            [10.0, 10.0],
            [20.0, 10.0],
            [20.0, 0.0],
        ]
        .map(Point::from)
    }

    #[test]
    fn point_in_poly2d_concave() {
        let poly = l_shape();
        assert!(point_in_poly2d(&[5.0, 25.0].into(), &poly));
        assert!(point_in_poly2d(&[15.0, 5.0].into(), &poly));
        assert!(!point_in_poly2d(&[15.0, 15.0].into(), &poly));
        assert!(!point_in_poly2d(&[-1.0, 5.0].into(), &poly));
    }

    #[test]
    fn point_in_poly2d_orientation_independent() {
        let mut poly = l_shape();
        poly.reverse();
        assert!(point_in_poly2d(&[5.0, 25.0].into(), &poly));
        assert!(!point_in_poly2d(&[15.0, 15.0].into(), &poly));
    }

    #[test]
    fn point_in_poly2d_empty() {
        assert!(!point_in_poly2d(&Point::origin(), &[]));
    }

    #[test]
    fn point_in_poly2d_ray_through_vertices() {
        let diamond = [
            Point::new(0.0, -1.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(-1.0, 0.0),
        ];
        assert!(point_in_poly2d(&[-0.5, 0.0].into(), &diamond));
        assert!(!point_in_poly2d(&[1.5, 0.0].into(), &diamond));
        assert!(!point_in_poly2d(&[-1.5, 0.0].into(), &diamond));

        // The ray runs along the horizontal edge from (10, 10) to (20, 10).
        let poly = l_shape();
        assert!(point_in_poly2d(&[5.0, 10.0].into(), &poly));
        assert!(!point_in_poly2d(&[-5.0, 10.0].into(), &poly));
    }
}
