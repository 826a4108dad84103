//! Conversion of polygons from and to the well-known text format.

use core::fmt;
use core::str::FromStr;

use crate::math::{Point, Real};
use crate::shape::{Polygon, PolygonError};

const POLYGON_TAG: &str = "POLYGON";

/// Error raised while parsing a polygon from a well-known text.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum WktError {
    /// The text does not start with the `POLYGON` tag.
    #[error("the text does not describe a polygon.")]
    NotAPolygon,
    /// The text describes an empty polygon.
    #[error("empty polygons are not supported.")]
    Empty,
    /// A ring is not enclosed in parentheses.
    #[error("unbalanced parentheses.")]
    UnbalancedParentheses,
    /// The polygon has interior rings.
    #[error("polygons with holes are not supported.")]
    HolesNotSupported,
    /// Some text follows the polygon.
    #[error("unexpected text after the polygon: `{0}`.")]
    TrailingInput(String),
    /// A coordinate is not made of exactly two numbers.
    #[error("invalid coordinate `{0}`: expected two numbers.")]
    InvalidCoordinate(String),
    /// A number could not be parsed.
    #[error("invalid number `{0}`.")]
    InvalidNumber(String),
    /// The vertices do not form a polygon.
    #[error(transparent)]
    Polygon(#[from] PolygonError),
}

impl fmt::Display for Polygon {
    /// Formats the polygon ring as `POLYGON ((x0 y0, x1 y1, ..., x0 y0))`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{POLYGON_TAG} ((")?;

        for (i, pt) in self.ring().iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} {}", pt.x, pt.y)?;
        }

        write!(f, "))")
    }
}

impl FromStr for Polygon {
    type Err = WktError;

    /// Parses a polygon from its well-known text, e.g. `POLYGON ((0 0, 1 0, 0 1, 0 0))`.
    ///
    /// The tag is case-insensitive. Only the exterior ring is supported.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        let body = text
            .get(..POLYGON_TAG.len())
            .filter(|tag| tag.eq_ignore_ascii_case(POLYGON_TAG))
            .and_then(|_| text.get(POLYGON_TAG.len()..))
            .ok_or(WktError::NotAPolygon)?
            .trim_start();

        if body.eq_ignore_ascii_case("EMPTY") {
            return Err(WktError::Empty);
        }

        let rings = body
            .strip_prefix('(')
            .and_then(|rings| rings.strip_suffix(')'))
            .ok_or(WktError::UnbalancedParentheses)?;
        let (shell, rest) = rings
            .trim()
            .strip_prefix('(')
            .and_then(|rings| rings.split_once(')'))
            .ok_or(WktError::UnbalancedParentheses)?;

        let rest = rest.trim();
        if rest.starts_with(',') {
            return Err(WktError::HolesNotSupported);
        } else if !rest.is_empty() {
            return Err(WktError::TrailingInput(rest.to_string()));
        }

        let vertices = shell
            .split(',')
            .map(parse_coordinate)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Polygon::new(vertices)?)
    }
}

fn parse_coordinate(text: &str) -> Result<Point<Real>, WktError> {
    let mut numbers = text.split_whitespace().map(|number| {
        number
            .parse::<Real>()
            .map_err(|_| WktError::InvalidNumber(number.to_string()))
    });

    match (numbers.next(), numbers.next(), numbers.next()) {
        (Some(x), Some(y), None) => Ok(Point::new(x?, y?)),
        _ => Err(WktError::InvalidCoordinate(text.trim().to_string())),
    }
}
