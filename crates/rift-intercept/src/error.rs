//! Error types for header normalization and spec configuration.

/// Errors raised while canonicalizing header names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeaderError {
    /// Two distinct header names collapse to the same lowercase name.
    #[error("Failed to convert header keys to lower case due to field name conflict: {0}")]
    FieldNameConflict(String),
}

/// Errors raised while loading or compiling a spec definition.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid regex pattern '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("Failed to parse YAML spec: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Failed to parse JSON spec: {0}")]
    Json(#[from] serde_json::Error),
}
