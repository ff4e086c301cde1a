use std::str::FromStr;

use super::collection::GeometryCollection;
use super::core::{GeomResult, GeometricObject, GeometryError, display_for_geom};
use super::linestring::{LineString, MultiLineString};
use super::points::{MultiPoint, Point};
use super::polygons::{MultiPolygon, Polygon};
use super::serialization;

/// Any of the supported geometry types
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    fn inner(&self) -> &dyn GeometricObject {
        match self {
            Geometry::Point(g) => g,
            Geometry::LineString(g) => g,
            Geometry::MultiPoint(g) => g,
            Geometry::MultiLineString(g) => g,
            Geometry::Polygon(g) => g,
            Geometry::MultiPolygon(g) => g,
            Geometry::GeometryCollection(g) => g,
        }
    }
}

impl GeometricObject for Geometry {
    fn keyword(&self) -> &'static str {
        self.inner().keyword()
    }

    fn is_empty(&self) -> bool {
        self.inner().is_empty()
    }

    fn wkt(&self) -> String {
        self.inner().wkt()
    }
}

display_for_geom!(Geometry);

impl FromStr for Geometry {
    type Err = GeometryError;

    fn from_str(s: &str) -> GeomResult<Self> {
        serialization::parse_wkt(s)
    }
}

/// Implements the conversions between a concrete geometry type and [Geometry]
macro_rules! geometry_variant {
    ($variant:ident, $keyword:literal) => {
        impl From<$variant> for Geometry {
            fn from(geom: $variant) -> Self {
                Geometry::$variant(geom)
            }
        }

        impl TryFrom<Geometry> for $variant {
            type Error = GeometryError;

            fn try_from(geom: Geometry) -> GeomResult<Self> {
                match geom {
                    Geometry::$variant(g) => Ok(g),
                    other => Err(GeometryError::TypeMismatch {
                        expected: $keyword,
                        found: other.keyword(),
                    }),
                }
            }
        }
    };
}

geometry_variant!(Point, "POINT");
geometry_variant!(LineString, "LINESTRING");
geometry_variant!(MultiPoint, "MULTIPOINT");
geometry_variant!(MultiLineString, "MULTILINESTRING");
geometry_variant!(Polygon, "POLYGON");
geometry_variant!(MultiPolygon, "MULTIPOLYGON");
geometry_variant!(GeometryCollection, "GEOMETRYCOLLECTION");
