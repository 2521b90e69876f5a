//! Request predicates: value patterns and body matching.
//!
//! # Module Structure
//!
//! - `string_matcher` - Literal-or-regex matching for header, path and query values
//! - `body_matcher` - Body specs and the body matching procedure
//! - `deep_equals` - Strict structural equality and body decoding

mod body_matcher;
mod deep_equals;
mod string_matcher;

pub use body_matcher::{match_body, BodyPredicate, BodySpec, BodySpecConfig, MatchContext};
pub use deep_equals::{parse_form_body, strict_deep_equals};
pub use string_matcher::{match_string_or_pattern, StringOrPattern, StringOrPatternConfig};
