//! Error types for parsing and configuration.
//!
//! The scalar scorers never return errors: invalid distances map to `None`.
//! Only the seams that read or write external text (array literals, JSON
//! columns, TOML indicator sets, release metadata) produce an [`AccessError`].

/// Errors raised while reading distance columns or indicator configuration.
#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    /// A Postgres array literal without its `{` `}` delimiters.
    #[error("array literal must be enclosed in braces: {input:?}")]
    MissingBraces {
        /// The literal as given.
        input: String,
    },

    /// An array element that is neither an integer nor `NULL`.
    #[error("invalid array element {token:?} at index {index}")]
    InvalidElement {
        /// Zero-based position of the element.
        index: usize,
        /// The trimmed element text.
        token: String,
    },

    /// A JSON document that failed to (de)serialize.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A TOML indicator set that failed to deserialize.
    #[error("invalid indicator configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Release metadata that failed to serialize as YAML.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// An indicator whose threshold is zero or negative.
    #[error("indicator {name:?} has non-positive threshold {threshold_m}")]
    InvalidThreshold {
        /// Indicator name.
        name: String,
        /// The rejected threshold in metres.
        threshold_m: i32,
    },

    /// Two indicators sharing a name.
    #[error("indicator {name:?} is defined more than once")]
    DuplicateIndicator {
        /// The repeated name.
        name: String,
    },

    /// A logistic slope that is zero, negative, or not finite.
    #[error("logistic slope must be finite and positive, got {slope}")]
    InvalidSlope {
        /// The rejected slope.
        slope: f64,
    },
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, AccessError>;
