//! HTTP header maps and case-insensitive name handling.
//!
//! - `map` - Ordered header map with scalar or multi-valued entries
//! - `normalize` - Lowercasing with conflict detection, deletion, raw array conversion

mod map;
mod normalize;

pub use map::{HeaderMap, HeaderValue};
pub use normalize::{
    delete_header, headers_array_to_object, normalize_header_names, normalize_headers,
};
