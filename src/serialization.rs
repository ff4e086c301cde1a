pub mod split;
pub mod wkt;

pub use split::{split_top_level, strip_parens};
pub use wkt::{MAX_DEPTH, parse_wkt, write_wkt};
