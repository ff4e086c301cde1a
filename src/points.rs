use super::core::{GeometricObject, display_for_geom, empty_wkt, tagged_wkt};

/// A coordinate pair on the Plane (2D)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

/// A single Point on the Plane (2D), possibly empty
///
/// Examples
/// ```rust
/// use wktgeom::Point;
/// let my_point = Point::new(0.2, -7.9);
/// assert_eq!(my_point.coords(), Some((0.2, -7.9)));
///
/// let nothing = Point::empty();
/// assert_eq!(nothing.coords(), None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    coord: Option<Coord>,
}

/// A simple collection of points
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiPoint {
    points: Vec<Point>,
}

impl Coord {
    /// Instantiate a new coordinate pair
    ///
    /// Scalars should be finite: `NaN` and infinities are written as-is but
    /// can't be read back from WKT.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Text of the pair as written in WKT: `x y`
    pub(crate) fn wkt(&self) -> String {
        format!("{} {}", self.x, self.y)
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Point {
    /// Instantiate a new point
    ///
    /// Only finite coordinates survive a WKT round-trip; see [Coord::new].
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            coord: Some(Coord::new(x, y)),
        }
    }

    /// Instantiate an empty point
    pub fn empty() -> Self {
        Self { coord: None }
    }

    /// The coordinate of the point, if it is not empty
    pub fn coord(&self) -> Option<Coord> {
        self.coord
    }

    /// Get coordinates as a tuple
    pub fn coords(&self) -> Option<(f64, f64)> {
        self.coord.map(|c| (c.x, c.y))
    }

    /// Text of the point as a member of a multipoint: `(x y)` or `POINT EMPTY`
    pub(crate) fn member_wkt(&self) -> String {
        match self.coord {
            Some(c) => format!("({})", c.wkt()),
            None => empty_wkt(self.keyword()),
        }
    }
}

impl From<Coord> for Point {
    fn from(coord: Coord) -> Self {
        Self { coord: Some(coord) }
    }
}

impl GeometricObject for Point {
    fn keyword(&self) -> &'static str {
        "POINT"
    }

    fn is_empty(&self) -> bool {
        self.coord.is_none()
    }

    /// WKT representation of the point
    fn wkt(&self) -> String {
        match self.coord {
            Some(c) => format!("{} ({})", self.keyword(), c.wkt()),
            None => empty_wkt(self.keyword()),
        }
    }
}

display_for_geom!(Point);

impl MultiPoint {
    /// Instantiate a multipoint collection
    ///
    /// Example
    /// ```rust
    /// use wktgeom::{MultiPoint, Point};
    /// let my_points = MultiPoint::new(vec![Point::empty(), Point::new(0.0, 1.0)]);
    /// assert_eq!(my_points.to_string(), "MULTIPOINT (POINT EMPTY, (0 1))");
    /// ```
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Instantiate a multipoint with no members
    pub fn empty() -> Self {
        Self::default()
    }

    /// Points of the collection, in order
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl GeometricObject for MultiPoint {
    fn keyword(&self) -> &'static str {
        "MULTIPOINT"
    }

    fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// WKT representation of the multipoint collection
    fn wkt(&self) -> String {
        if self.is_empty() {
            return empty_wkt(self.keyword());
        }
        let members: Vec<String> = self.points.iter().map(Point::member_wkt).collect();
        tagged_wkt(self.keyword(), &members)
    }
}

display_for_geom!(MultiPoint);
