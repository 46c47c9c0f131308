//! Error types for the profile form crate.
//!
//! This module defines custom error types using `thiserror`. The form core
//! itself never fails: validators return verdicts and the mask engine is
//! total, so the only fallible surface is configuration loading.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidValue {
            var: "LOG_LEVEL".to_string(),
            reason: "unknown level".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for LOG_LEVEL: unknown level");

        let err = ConfigError::Other("oops".to_string());
        assert_eq!(err.to_string(), "Configuration error: oops");
    }
}
