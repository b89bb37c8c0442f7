//! Map loading.

mod map_text;

pub use map_text::{MapLayout, MapParseError, load_map, parse_map};
