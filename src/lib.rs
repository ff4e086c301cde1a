mod collection;
pub mod core;
mod geometry;
mod linestring;
mod points;
mod polygons;
pub mod serialization;

pub use self::collection::*;
pub use self::geometry::*;
pub use self::linestring::*;
pub use self::points::*;
pub use self::polygons::*;
pub use self::core::*;
