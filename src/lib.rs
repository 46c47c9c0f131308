//! Profile Form - validation rules and phone masking for a profile settings form.
//!
//! This library implements the core of a profile-editing form: pure
//! per-field validation rules evaluated in priority order, and a progressive
//! phone-number mask that rewrites keystrokes into the canonical
//! `+55 DD DDDDD-DDDD` display while the user types. A small owning form
//! ties the two together with touched-state gating and a submit check.
//!
//! # Architecture
//!
//! - **validation**: field identities, verdicts, and the per-field rule tables
//! - **mask**: the digit projection and progressive phone formatter
//! - **form**: the owning form container and its edit pipeline
//! - **messages**: error-kind to display-string catalog
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables

pub mod config;
pub mod error;
pub mod form;
pub mod mask;
pub mod messages;
pub mod validation;

pub use config::Config;
pub use error::{ConfigError, ConfigResult};
pub use form::{ProfileForm, ProfileSnapshot};
pub use mask::PhoneDigits;
pub use messages::message;
pub use validation::{validate, ErrorKind, FieldId, Verdict};
