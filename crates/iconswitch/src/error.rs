//! Error types for configuration loading.

use iconswitch_core::{ColorParseError, SwitchError};
use thiserror::Error;

/// Errors that can occur while loading a switch configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the configuration file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML syntax error, unknown field or malformed color.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// A color string given outside of YAML could not be parsed.
    #[error("Invalid color: {0}")]
    Color(#[from] ColorParseError),

    /// A value parsed but is out of range.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Error message
        message: String,
    },

    /// The configuration produced unusable geometry.
    #[error(transparent)]
    Switch(#[from] SwitchError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ConfigError = io_err.into();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_config_error_invalid_value() {
        let err = ConfigError::InvalidValue {
            field: "density".to_string(),
            message: "must be positive".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for 'density': must be positive");
    }

    #[test]
    fn test_config_error_from_color_error() {
        let err: ConfigError = ColorParseError::InvalidLength.into();
        assert!(matches!(err, ConfigError::Color(_)));
        assert!(err.to_string().starts_with("Invalid color"));
    }

    #[test]
    fn test_config_error_from_switch_error() {
        let err: ConfigError = SwitchError::InvalidConfiguration {
            icon_size: 0,
            min_icon_size: 0,
            travel: 0,
        }
        .into();
        assert!(err.to_string().starts_with("invalid configuration"));
    }
}
