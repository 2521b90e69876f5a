//! Request-matching engine for HTTP interception.
//!
//! Given an intercepted outbound request and a registered expectation, this
//! crate decides whether they match so that test doubles can stand in for real
//! network calls. Transport hooking, mock registration and recording live
//! elsewhere and call in with an already-parsed request.
//!
//! # Module Structure
//!
//! - `headers` - Header maps, case-insensitive normalization, raw array conversion
//! - `payload` - Request body payloads and binary detection
//! - `predicate` - Literal/regex value matching and body matching
//! - `request` - Request options and diagnostic rendering
//! - `error` - Error types

pub mod error;
pub mod headers;
pub mod payload;
pub mod predicate;
pub mod request;

pub use error::{ConfigError, HeaderError};
pub use headers::{
    delete_header, headers_array_to_object, normalize_header_names, normalize_headers, HeaderMap,
    HeaderValue,
};
pub use payload::{is_binary_buffer, Payload};
pub use predicate::{
    match_body, match_string_or_pattern, BodySpec, BodySpecConfig, MatchContext, StringOrPattern,
    StringOrPatternConfig,
};
pub use request::{percent_encode, stringify_request, RequestOptions};
