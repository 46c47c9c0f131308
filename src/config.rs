//! Configuration management for the profile form demo.
//!
//! This module handles loading configuration from environment variables.
//! Every variable has a default, so a bare environment always yields a
//! working configuration: the well-known seed profile and quiet logging.

use crate::error::{ConfigError, ConfigResult};
use crate::form;
use std::env;

/// Log levels accepted by `LOG_LEVEL`, matching the tracing level names.
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Configuration for the profile form demo.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (default: "error")
    pub log_level: String,

    /// Seed value for the full name field
    pub full_name: String,

    /// Seed value for the username field
    pub username: String,

    /// Seed value for the bio field
    pub bio: String,

    /// Seed value for the email field
    pub email: String,

    /// Seed value for the phone field
    pub phone: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `PROFILE_FULL_NAME`, `PROFILE_USERNAME`, `PROFILE_BIO`,
    ///   `PROFILE_EMAIL`, `PROFILE_PHONE`: seed values for the form fields
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `LOG_LEVEL` is not one of the
    /// tracing level names.
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        if !LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), log_level),
            });
        }

        Ok(Config {
            log_level,
            full_name: Self::var_or("PROFILE_FULL_NAME", form::DEFAULT_FULL_NAME),
            username: Self::var_or("PROFILE_USERNAME", form::DEFAULT_USERNAME),
            bio: Self::var_or("PROFILE_BIO", form::DEFAULT_BIO),
            email: Self::var_or("PROFILE_EMAIL", form::DEFAULT_EMAIL),
            phone: Self::var_or("PROFILE_PHONE", form::DEFAULT_PHONE),
        })
    }

    /// Read an environment variable, falling back to a default value.
    fn var_or(var_name: &str, default: &str) -> String {
        env::var(var_name).unwrap_or_else(|_| default.to_string())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            full_name: form::DEFAULT_FULL_NAME.to_string(),
            username: form::DEFAULT_USERNAME.to_string(),
            bio: form::DEFAULT_BIO.to_string(),
            email: form::DEFAULT_EMAIL.to_string(),
            phone: form::DEFAULT_PHONE.to_string(),
        }
    }
}
