//! Error handling for ChartKit core.
//!
//! Geometry operations are deliberately permissive and never fail: NaN
//! coordinates flow through, empty rings are skipped, and a draw over empty
//! input simply emits an empty path. The fallible surface is limited to the
//! element registry and JSON configuration, typed here with `thiserror`.

use thiserror::Error;

/// Core error type.
#[derive(Error, Debug)]
pub enum CoreError {
    /// No factory registered under the requested class name
    #[error("Unknown element class: {name}")]
    UnknownElement {
        /// The class name that was looked up.
        name: String,
    },

    /// A length string could not be parsed as pixels or a percentage
    #[error("Invalid length value: {value}")]
    InvalidLength {
        /// The offending input.
        value: String,
    },

    /// Element configuration had the wrong shape
    #[error("Invalid {class_name} config: {message}")]
    InvalidConfig {
        /// The element class being configured.
        class_name: String,
        /// What was wrong with the config.
        message: String,
    },

    /// JSON (de)serialization failure
    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_element_display() {
        let err = CoreError::UnknownElement {
            name: "Sunburst".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown element class: Sunburst");
    }

    #[test]
    fn test_invalid_length_display() {
        let err = CoreError::InvalidLength {
            value: "12 parsecs".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid length value: 12 parsecs");
    }

    #[test]
    fn test_invalid_config_display() {
        let err = CoreError::InvalidConfig {
            class_name: "Polygon".to_string(),
            message: "points must be an array".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid Polygon config: points must be an array"
        );
    }
}
