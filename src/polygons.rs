use super::core::{GeometricObject, display_for_geom, empty_wkt, tagged_wkt};
use super::linestring::LineString;

/// Represents a polygon on the Plane: an outer ring plus zero or more holes
///
/// A polygon without any rings is empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    rings: Vec<LineString>,
}

/// A collection of polygons
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
}

impl Polygon {
    /// Instantiate a polygon from its outer ring and holes
    ///
    /// Example
    /// ```rust
    /// use wktgeom::{LineString, Polygon};
    /// let outer = LineString::from_flat(&[0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0]);
    /// let poly = Polygon::new(outer, vec![LineString::empty()]);
    /// assert_eq!(poly.to_string(), "POLYGON ((0 0, 0 1, 1 1, 0 0), LINESTRING EMPTY)");
    /// ```
    pub fn new(outer: LineString, holes: Vec<LineString>) -> Self {
        let mut rings = Vec::with_capacity(holes.len() + 1);
        rings.push(outer);
        rings.extend(holes);
        Self { rings }
    }

    /// Instantiate a polygon from a list of rings, the first one being the outer ring
    pub fn from_rings(rings: Vec<LineString>) -> Self {
        Self { rings }
    }

    /// Instantiate an empty polygon
    pub fn empty() -> Self {
        Self::default()
    }

    /// The outer ring, if the polygon is not empty
    pub fn outer(&self) -> Option<&LineString> {
        self.rings.first()
    }

    /// The holes of the polygon
    pub fn holes(&self) -> &[LineString] {
        self.rings.get(1..).unwrap_or_default()
    }

    /// All rings, outer ring first
    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }

    /// Ring list without the keyword or the enclosing parentheses: `(..), (..)`
    pub(crate) fn rings_wkt(&self) -> String {
        let rings: Vec<String> = self.rings.iter().map(LineString::member_wkt).collect();
        rings.join(", ")
    }

    /// Text of the polygon inside a multipolygon.
    ///
    /// Every member gets an extra pair of parentheses, so that polygon boundaries
    /// are not confused with ring boundaries.
    pub(crate) fn member_wkt(&self) -> String {
        if self.is_empty() {
            format!("({})", empty_wkt(self.keyword()))
        } else {
            format!("({})", self.rings_wkt())
        }
    }
}

impl GeometricObject for Polygon {
    fn keyword(&self) -> &'static str {
        "POLYGON"
    }

    fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// WKT representation of the polygon
    fn wkt(&self) -> String {
        if self.is_empty() {
            empty_wkt(self.keyword())
        } else {
            format!("{} ({})", self.keyword(), self.rings_wkt())
        }
    }
}

display_for_geom!(Polygon);

impl MultiPolygon {
    /// Instantiate a collection of polygons
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// Instantiate a collection with no polygons
    pub fn empty() -> Self {
        Self::default()
    }

    /// Polygons of the collection, in order
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }
}

impl GeometricObject for MultiPolygon {
    fn keyword(&self) -> &'static str {
        "MULTIPOLYGON"
    }

    fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    fn wkt(&self) -> String {
        if self.is_empty() {
            return empty_wkt(self.keyword());
        }
        let members: Vec<String> = self.polygons.iter().map(Polygon::member_wkt).collect();
        tagged_wkt(self.keyword(), &members)
    }
}

display_for_geom!(MultiPolygon);
