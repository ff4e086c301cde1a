use thiserror::Error;

/// Errors raised while building, converting or (de)serializing geometries
#[derive(Error, Debug)]
pub enum GeometryError {
    /// The text is not a valid WKT geometry
    #[error("Invalid WKT: {0}")]
    FormatError(String),

    /// A geometry of one type was requested, but another one was found
    #[error("Expected a {expected} geometry, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// [std::io::Error]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type used throughout the crate
pub type GeomResult<T> = Result<T, GeometryError>;

/// Trait with common functionality for all geometric objects
pub trait GeometricObject {
    /// WKT keyword naming the geometry type
    fn keyword(&self) -> &'static str;

    /// Whether the geometry is in its empty state
    fn is_empty(&self) -> bool;

    /// WKT representation of the geometry
    fn wkt(&self) -> String;
}

/// Macro to implement the Display trait for Geometric Object types
macro_rules! display_for_geom {
    ($type:ty) => {
        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "{}", self.wkt())
            }
        }
    };
}

pub(crate) use display_for_geom;

/// Text for an empty geometry of the given type, e.g. `POINT EMPTY`
pub(crate) fn empty_wkt(keyword: &str) -> String {
    format!("{keyword} EMPTY")
}

/// Wrap already formatted children in a tagged WKT body: `KEYWORD (a, b, ...)`
pub(crate) fn tagged_wkt(keyword: &str, children: &[String]) -> String {
    format!("{keyword} ({})", children.join(", "))
}
