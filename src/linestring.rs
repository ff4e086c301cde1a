use super::core::{GeometricObject, display_for_geom, empty_wkt, tagged_wkt};
use super::points::{Coord, Point};

/// Represents a sequence of line segments in 2D
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineString {
    coords: Vec<Coord>,
}

/// A collection of line strings
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiLineString {
    line_strings: Vec<LineString>,
}

impl GeometricObject for LineString {
    fn keyword(&self) -> &'static str {
        "LINESTRING"
    }

    fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// WKT representation of the LineString
    fn wkt(&self) -> String {
        if self.is_empty() {
            empty_wkt(self.keyword())
        } else {
            format!("{} {}", self.keyword(), self.coords_wkt())
        }
    }
}

display_for_geom!(LineString);

impl LineString {
    /// Instantiate a new LineString from a vector of coordinates
    ///
    /// Only finite coordinates survive a WKT round-trip; see [Coord::new].
    pub fn new(coords: Vec<Coord>) -> Self {
        Self { coords }
    }

    /// Instantiate a LineString from a flat sequence of scalars `x1, y1, x2, y2, ...`
    ///
    /// Consecutive scalars are grouped into pairs. An odd trailing scalar has no
    /// partner and is dropped. Scalars should be finite, as for [Coord::new].
    ///
    /// Example
    /// ```rust
    /// use wktgeom::LineString;
    /// let ls = LineString::from_flat(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    /// assert_eq!(ls.len(), 2);
    /// ```
    pub fn from_flat(scalars: &[f64]) -> Self {
        let chunks = scalars.chunks_exact(2);
        if let [dropped] = chunks.remainder() {
            log::debug!("Dropping unpaired trailing scalar {dropped}");
        }
        Self {
            coords: chunks.map(|pair| Coord::new(pair[0], pair[1])).collect(),
        }
    }

    /// Instantiate an empty LineString
    pub fn empty() -> Self {
        Self::default()
    }

    /// Coordinates of the vertices, in order
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Iterate over the vertices as points
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.coords.iter().copied().map(Point::from)
    }

    /// Get the total number of vertices in the linestring.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Bare coordinate list: `(x1 y1, x2 y2, ...)`
    pub(crate) fn coords_wkt(&self) -> String {
        let pairs: Vec<String> = self.coords.iter().map(Coord::wkt).collect();
        format!("({})", pairs.join(", "))
    }

    /// Text of the line string inside a container that implies its type.
    ///
    /// The keyword is elided unless the line string is empty, since a bare `()`
    /// would be ambiguous.
    pub(crate) fn member_wkt(&self) -> String {
        if self.is_empty() {
            empty_wkt(self.keyword())
        } else {
            self.coords_wkt()
        }
    }
}

impl MultiLineString {
    /// Instantiate a collection of line strings
    pub fn new(line_strings: Vec<LineString>) -> Self {
        Self { line_strings }
    }

    /// Instantiate a collection with no line strings
    pub fn empty() -> Self {
        Self::default()
    }

    /// Line strings of the collection, in order
    pub fn line_strings(&self) -> &[LineString] {
        &self.line_strings
    }
}

impl GeometricObject for MultiLineString {
    fn keyword(&self) -> &'static str {
        "MULTILINESTRING"
    }

    fn is_empty(&self) -> bool {
        self.line_strings.is_empty()
    }

    fn wkt(&self) -> String {
        if self.is_empty() {
            return empty_wkt(self.keyword());
        }
        let members: Vec<String> = self
            .line_strings
            .iter()
            .map(LineString::member_wkt)
            .collect();
        tagged_wkt(self.keyword(), &members)
    }
}

display_for_geom!(MultiLineString);
