use core::error::Error;
use std::env;

use polysplit2d::shape::Polygon;

const DEFAULT_POLYGON: &str = "POLYGON ((0 0, 50 -10, 100 0, 90 50, 50 60, 10 50, 0 0))";

// Usage: split_polygon2d [WKT] [PARTS]
fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let wkt = args.next().unwrap_or_else(|| DEFAULT_POLYGON.to_string());
    let parts = args.next().map_or(Ok(3), |parts| parts.parse())?;

    /*
     * Parse and split the polygon.
     */
    let polygon: Polygon = wkt.parse()?;
    let result = polysplit2d::split(&polygon, parts)?;

    /*
     * Print the parts, in the order they were cut away.
     */
    println!("{polygon}: area {}", polygon.area());

    for (i, part) in result.iter().enumerate() {
        println!("part {i}: {part}: area {}", part.area());
    }

    Ok(())
}
