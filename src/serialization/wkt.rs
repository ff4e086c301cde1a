use super::split::{split_top_level, strip_parens};
use crate::core::{GeomResult, GeometricObject, GeometryError};
use crate::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
use regex::Regex;
use std::sync::OnceLock;

const GEOM_TYPE: &str = r"^([A-Z]+)\s*((?s).*)$";
const SCALAR: &str = r"^-?(\d+\.?\d*|\.\d+)$";
const EMPTY: &str = "EMPTY";

/// Deepest nesting of geometries inside collections accepted by the reader
pub const MAX_DEPTH: usize = 128;

static GEOM_TYPE_RE: OnceLock<Regex> = OnceLock::new();
static SCALAR_RE: OnceLock<Regex> = OnceLock::new();

#[derive(Debug, PartialEq)]
enum GeomType {
    GeometryCollection,
    LineString,
    MultiLineString,
    MultiPoint,
    MultiPolygon,
    Point,
    Polygon,
}

// Get geometry type regex once to avoid recompilation (thread-safe)
fn geom_type_re() -> &'static Regex {
    GEOM_TYPE_RE.get_or_init(|| Regex::new(GEOM_TYPE).expect("valid geometry type pattern"))
}

// Get scalar regex once to avoid recompilation (thread-safe)
fn scalar_re() -> &'static Regex {
    SCALAR_RE.get_or_init(|| Regex::new(SCALAR).expect("valid scalar pattern"))
}

/// Write a geometry as WKT text
///
/// Members of homogeneous collections are written without their keyword, except
/// when they are empty. Members of a multipolygon are wrapped in an extra pair
/// of parentheses.
///
/// Examples
/// ```rust
/// use wktgeom::serialization::write_wkt;
/// use wktgeom::{Geometry, LineString, MultiLineString, Point};
///
/// assert_eq!(write_wkt(&Geometry::Point(Point::new(2.0, 3.0))), "POINT (2 3)");
///
/// let mls = MultiLineString::new(vec![LineString::empty()]);
/// assert_eq!(write_wkt(&mls.into()), "MULTILINESTRING (LINESTRING EMPTY)");
/// ```
pub fn write_wkt(geom: &Geometry) -> String {
    geom.wkt()
}

/// Parse a WKT string and return the parsed geometry object
///
/// Returns a [GeometryError::FormatError] if any part of the text is malformed;
/// nothing is recovered from a partially valid text. Geometries nested more than
/// [MAX_DEPTH] levels deep are rejected.
///
/// Examples
/// ```rust
/// use wktgeom::serialization::parse_wkt;
/// use wktgeom::{Geometry, Point, Polygon};
///
/// // Instantiate a point from string
/// if let Ok(Geometry::Point(pt)) = parse_wkt("POINT (0 0)") {
///     println!("My point is: {pt:?}");
/// }
///
/// match parse_wkt("MULTIPOLYGON ((POLYGON EMPTY), ((0 0, 0 1, 1 1, 0 0)))") {
///     Ok(Geometry::MultiPolygon(mp)) => assert_eq!(mp.polygons()[0], Polygon::empty()),
///     Ok(_) => panic!("This is weird..."),
///     Err(err) => panic!("Failed: {err}"),
/// }
/// ```
pub fn parse_wkt(raw_str: &str) -> GeomResult<Geometry> {
    parse_geometry(raw_str, 0)
}

/// Parse a geometry found `depth` levels below the top of the text
fn parse_geometry(raw_str: &str, depth: usize) -> GeomResult<Geometry> {
    if depth > MAX_DEPTH {
        return Err(GeometryError::FormatError(format!(
            "Geometries nested more than {MAX_DEPTH} levels deep"
        )));
    }
    let (geom_type, params) = identify_type(raw_str)?;
    log::trace!("Parsing {geom_type:?} at depth {depth} from \"{params}\"");
    let geom: Geometry = match geom_type {
        GeomType::GeometryCollection => parse_collection(params, depth)?.into(),
        GeomType::LineString => parse_linestring(params)?.into(),
        GeomType::MultiLineString => parse_multilinestring(params, depth)?.into(),
        GeomType::MultiPoint => parse_multipoint(params, depth)?.into(),
        GeomType::MultiPolygon => parse_multipolygon(params, depth)?.into(),
        GeomType::Point => parse_point(params)?.into(),
        GeomType::Polygon => parse_polygon(params, depth)?.into(),
    };
    Ok(geom)
}

/// Identifies the type of geometry at the start of a WKT string, returning the
/// remaining parameter text
fn identify_type(raw_str: &str) -> GeomResult<(GeomType, &str)> {
    let trimmed = raw_str.trim();
    let caps = match geom_type_re().captures(trimmed) {
        Some(c) => c,
        None => {
            return Err(GeometryError::FormatError(format!(
                "Could not parse shape type of \"{trimmed}\""
            )));
        }
    };
    let (_, [keyword, params]) = caps.extract();
    let geom_type = match keyword {
        "GEOMETRYCOLLECTION" => GeomType::GeometryCollection,
        "LINESTRING" => GeomType::LineString,
        "MULTILINESTRING" => GeomType::MultiLineString,
        "MULTIPOINT" => GeomType::MultiPoint,
        "MULTIPOLYGON" => GeomType::MultiPolygon,
        "POINT" => GeomType::Point,
        "POLYGON" => GeomType::Polygon,
        _ => {
            return Err(GeometryError::FormatError(format!(
                "Unsupported Geometry: {keyword}"
            )));
        }
    };
    Ok((geom_type, params))
}

/// Whether a member of a collection is written with its own keyword
fn is_tagged(segment: &str) -> bool {
    segment.starts_with(|c: char| c.is_ascii_uppercase())
}

/// Whether a member starts with the given keyword, e.g. `POLYGON EMPTY`
fn has_keyword(segment: &str, keyword: &str) -> bool {
    segment
        .split(|c: char| c.is_whitespace() || c == '(')
        .next()
        .is_some_and(|word| word == keyword)
}

/// Parse a full WKT member and check it has the type the container expects
fn parse_tagged<T>(segment: &str, depth: usize) -> GeomResult<T>
where
    T: TryFrom<Geometry, Error = GeometryError>,
{
    T::try_from(parse_geometry(segment, depth + 1)?)
        .map_err(|err| GeometryError::FormatError(err.to_string()))
}

/// Parse a single numeric token
fn parse_scalar(token: &str) -> GeomResult<f64> {
    if !scalar_re().is_match(token) {
        return Err(GeometryError::FormatError(format!(
            "Invalid coordinate: \"{token}\""
        )));
    }
    token
        .parse::<f64>()
        .map_err(|err| GeometryError::FormatError(format!("Invalid coordinate \"{token}\": {err}")))
}

/// Parse point parameters (after removing the type prefix from the string)
fn parse_point(params: &str) -> GeomResult<Point> {
    if params == EMPTY {
        return Ok(Point::empty());
    }
    parse_point_coords(params)
}

/// Parse the coordinates of a point: `x y`, optionally enclosed in parentheses
fn parse_point_coords(text: &str) -> GeomResult<Point> {
    let trimmed = text.trim();
    let inner = if trimmed.starts_with('(') || trimmed.ends_with(')') {
        strip_parens(trimmed)?
    } else {
        trimmed
    };
    let tokens: Vec<&str> = inner.split_whitespace().collect();
    match tokens.as_slice() {
        [x, y] => Ok(Point::new(parse_scalar(x)?, parse_scalar(y)?)),
        _ => Err(GeometryError::FormatError(format!(
            "Expected 2 coordinates for a point, found {} in \"{trimmed}\"",
            tokens.len()
        ))),
    }
}

/// Parse a parenthesized list of coordinate pairs: `(x1 y1, x2 y2, ...)`
fn parse_coordinate_list(text: &str) -> GeomResult<LineString> {
    let inner = strip_parens(text)?;
    let scalars = inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_scalar)
        .collect::<GeomResult<Vec<f64>>>()?;
    if scalars.is_empty() {
        return Err(GeometryError::FormatError(String::from(
            "Empty coordinate list; empty members must be written with their keyword",
        )));
    }
    Ok(LineString::from_flat(&scalars))
}

fn parse_linestring(params: &str) -> GeomResult<LineString> {
    if params == EMPTY {
        return Ok(LineString::empty());
    }
    parse_coordinate_list(params)
}

/// Parse a line string inside a container: a bare coordinate list, or a member
/// with its keyword such as `LINESTRING EMPTY`
fn parse_line_member(segment: &str, depth: usize) -> GeomResult<LineString> {
    let trimmed = segment.trim();
    if is_tagged(trimmed) {
        parse_tagged(trimmed, depth)
    } else {
        parse_coordinate_list(trimmed)
    }
}

/// Parse a point inside a multipoint: `(x y)` or a member with its keyword
fn parse_point_member(segment: &str, depth: usize) -> GeomResult<Point> {
    let trimmed = segment.trim();
    if is_tagged(trimmed) {
        parse_tagged(trimmed, depth)
    } else {
        parse_point_coords(trimmed)
    }
}

fn parse_multipoint(params: &str, depth: usize) -> GeomResult<MultiPoint> {
    if params == EMPTY {
        return Ok(MultiPoint::empty());
    }
    let points = split_top_level(strip_parens(params)?)?
        .into_iter()
        .map(|segment| parse_point_member(segment, depth))
        .collect::<GeomResult<Vec<Point>>>()?;
    Ok(MultiPoint::new(points))
}

fn parse_multilinestring(params: &str, depth: usize) -> GeomResult<MultiLineString> {
    if params == EMPTY {
        return Ok(MultiLineString::empty());
    }
    let line_strings = split_top_level(strip_parens(params)?)?
        .into_iter()
        .map(|segment| parse_line_member(segment, depth))
        .collect::<GeomResult<Vec<LineString>>>()?;
    Ok(MultiLineString::new(line_strings))
}

/// Parse the comma separated rings of a polygon, outer ring first
fn parse_rings(text: &str, depth: usize) -> GeomResult<Polygon> {
    let rings = split_top_level(text)?
        .into_iter()
        .map(|segment| parse_line_member(segment, depth))
        .collect::<GeomResult<Vec<LineString>>>()?;
    Ok(Polygon::from_rings(rings))
}

// Parse a polygon from the given wkt string with type prefix removed
fn parse_polygon(params: &str, depth: usize) -> GeomResult<Polygon> {
    if params == EMPTY {
        return Ok(Polygon::empty());
    }
    parse_rings(strip_parens(params)?, depth)
}

/// Parse a polygon inside a multipolygon, with its extra parentheses:
/// `(POLYGON EMPTY)` or `((x y, ...), ...)`
///
/// Only a leading `POLYGON` keyword marks a tagged member: the first ring may
/// itself be `LINESTRING EMPTY`.
fn parse_polygon_member(segment: &str, depth: usize) -> GeomResult<Polygon> {
    let inner = strip_parens(segment)?.trim();
    if has_keyword(inner, "POLYGON") {
        parse_tagged(inner, depth)
    } else {
        parse_rings(inner, depth)
    }
}

fn parse_multipolygon(params: &str, depth: usize) -> GeomResult<MultiPolygon> {
    if params == EMPTY {
        return Ok(MultiPolygon::empty());
    }
    let polygons = split_top_level(strip_parens(params)?)?
        .into_iter()
        .map(|segment| parse_polygon_member(segment, depth))
        .collect::<GeomResult<Vec<Polygon>>>()?;
    Ok(MultiPolygon::new(polygons))
}

fn parse_collection(params: &str, depth: usize) -> GeomResult<GeometryCollection> {
    if params == EMPTY {
        return Ok(GeometryCollection::empty());
    }
    let geometries = split_top_level(strip_parens(params)?)?
        .into_iter()
        .map(|segment| parse_geometry(segment, depth + 1))
        .collect::<GeomResult<Vec<Geometry>>>()?;
    Ok(GeometryCollection::new(geometries))
}
