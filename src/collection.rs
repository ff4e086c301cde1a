use super::core::{GeometricObject, display_for_geom, empty_wkt, tagged_wkt};
use super::geometry::Geometry;

/// An ordered, heterogeneous collection of geometries
///
/// Members are always written with their own keyword, since their type can't
/// be implied by the collection.
///
/// Example
/// ```rust
/// use wktgeom::{GeometryCollection, Point};
/// let gc = GeometryCollection::new(vec![Point::empty().into(), Point::new(1.0, 2.0).into()]);
/// assert_eq!(gc.to_string(), "GEOMETRYCOLLECTION (POINT EMPTY, POINT (1 2))");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeometryCollection {
    geometries: Vec<Geometry>,
}

impl GeometryCollection {
    /// Instantiate a collection from its members
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self { geometries }
    }

    /// Instantiate a collection with no members
    pub fn empty() -> Self {
        Self::default()
    }

    /// Members of the collection, in order
    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }
}

impl GeometricObject for GeometryCollection {
    fn keyword(&self) -> &'static str {
        "GEOMETRYCOLLECTION"
    }

    fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    fn wkt(&self) -> String {
        if self.is_empty() {
            return empty_wkt(self.keyword());
        }
        let members: Vec<String> = self.geometries.iter().map(Geometry::wkt).collect();
        tagged_wkt(self.keyword(), &members)
    }
}

display_for_geom!(GeometryCollection);
