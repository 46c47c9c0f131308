//! The profile form: owned field values, touched state, and the edit
//! pipeline.
//!
//! The form is the single owner of every field value. Edits flow through
//! one synchronous pipeline: the raw input is (for the phone field) rewritten
//! by the mask engine, written back directly, and the stored value is then
//! validated. There is no notification machinery to suppress: the masked
//! write never re-enters [`ProfileForm::edit`], so a rewrite cannot cascade.

use crate::mask;
use crate::messages;
use crate::validation::{self, FieldId, Verdict};
use serde::Serialize;

pub(crate) const DEFAULT_FULL_NAME: &str = "Ana Sha";
pub(crate) const DEFAULT_USERNAME: &str = "anasha";
pub(crate) const DEFAULT_BIO: &str =
    "Passionate about technology and always hunting for the best products.";
pub(crate) const DEFAULT_EMAIL: &str = "ana@gmail.com";
pub(crate) const DEFAULT_PHONE: &str = "+55 11 99999-9999";

/// One field's raw value plus whether the user has interacted with it.
///
/// Error messages are only surfaced for touched fields; the verdict itself
/// is always available.
#[derive(Debug, Clone, Default)]
struct FieldState {
    value: String,
    touched: bool,
}

impl FieldState {
    fn seeded(value: impl Into<String>) -> Self {
        FieldState {
            value: value.into(),
            touched: false,
        }
    }
}

/// The values of a valid, submitted form.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProfileSnapshot {
    pub full_name: String,
    pub username: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
}

/// The profile settings form.
pub struct ProfileForm {
    full_name: FieldState,
    username: FieldState,
    bio: FieldState,
    email: FieldState,
    phone: FieldState,
    photo: Option<String>,
}

impl ProfileForm {
    /// Create a form seeded with the default profile.
    pub fn new() -> Self {
        ProfileForm {
            full_name: FieldState::seeded(DEFAULT_FULL_NAME),
            username: FieldState::seeded(DEFAULT_USERNAME),
            bio: FieldState::seeded(DEFAULT_BIO),
            email: FieldState::seeded(DEFAULT_EMAIL),
            phone: FieldState::seeded(DEFAULT_PHONE),
            photo: None,
        }
    }

    /// Create a form seeded from configuration.
    ///
    /// The phone seed runs through the mask so a configured value is shown
    /// the same way a typed one would be.
    pub fn from_config(config: &crate::Config) -> Self {
        ProfileForm {
            full_name: FieldState::seeded(&config.full_name),
            username: FieldState::seeded(&config.username),
            bio: FieldState::seeded(&config.bio),
            email: FieldState::seeded(&config.email),
            phone: FieldState::seeded(mask::apply(&config.phone)),
            photo: None,
        }
    }

    fn field(&self, id: FieldId) -> &FieldState {
        match id {
            FieldId::FullName => &self.full_name,
            FieldId::Username => &self.username,
            FieldId::Bio => &self.bio,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
        }
    }

    fn field_mut(&mut self, id: FieldId) -> &mut FieldState {
        match id {
            FieldId::FullName => &mut self.full_name,
            FieldId::Username => &mut self.username,
            FieldId::Bio => &mut self.bio,
            FieldId::Email => &mut self.email,
            FieldId::Phone => &mut self.phone,
        }
    }

    /// The current raw value of a field.
    pub fn value(&self, field: FieldId) -> &str {
        &self.field(field).value
    }

    pub fn is_touched(&self, field: FieldId) -> bool {
        self.field(field).touched
    }

    /// Apply one user edit and return the verdict for the stored value.
    ///
    /// Phone input is rewritten by the mask engine first; the formatted
    /// value is what gets stored and validated. The write is direct, so the
    /// rewrite does not trigger another edit.
    pub fn edit(&mut self, field: FieldId, raw: &str) -> Verdict {
        let next = match field {
            FieldId::Phone => mask::apply(raw),
            _ => raw.to_string(),
        };
        self.field_mut(field).value = next;

        let verdict = self.verdict(field);
        tracing::debug!(field = %field, valid = verdict.is_valid(), "field edited");
        verdict
    }

    /// Mark a field as interacted-with (the blur transition).
    pub fn touch(&mut self, field: FieldId) {
        self.field_mut(field).touched = true;
    }

    /// Re-validate a field's current value.
    pub fn verdict(&self, field: FieldId) -> Verdict {
        validation::validate(field, &self.field(field).value)
    }

    /// The display message for a field, gated on touched state.
    ///
    /// Returns `None` while the field is untouched or valid.
    pub fn error_message(&self, field: FieldId) -> Option<&'static str> {
        let state = self.field(field);
        if !state.touched {
            return None;
        }
        match validation::validate(field, &state.value) {
            Verdict::Valid => None,
            Verdict::Invalid(kind) => Some(messages::message(field, kind)),
        }
    }

    /// True iff every field validates.
    pub fn is_valid(&self) -> bool {
        FieldId::ALL.iter().all(|&field| self.verdict(field).is_valid())
    }

    /// The current field values.
    pub fn snapshot(&self) -> ProfileSnapshot {
        ProfileSnapshot {
            full_name: self.full_name.value.clone(),
            username: self.username.value.clone(),
            bio: self.bio.value.clone(),
            email: self.email.value.clone(),
            phone: self.phone.value.clone(),
        }
    }

    /// Submit the form.
    ///
    /// A no-op returning `None` when any field is invalid; otherwise logs
    /// the serialized snapshot and returns it. There is no partial
    /// submission.
    pub fn submit(&self) -> Option<ProfileSnapshot> {
        if !self.is_valid() {
            tracing::debug!("submit ignored, form has invalid fields");
            return None;
        }

        let snapshot = self.snapshot();
        match serde_json::to_string(&snapshot) {
            Ok(json) => tracing::info!(form = %json, "form submitted"),
            Err(e) => tracing::warn!("failed to serialize submitted form: {}", e),
        }
        Some(snapshot)
    }

    pub fn photo(&self) -> Option<&str> {
        self.photo.as_deref()
    }

    /// Store a new profile photo handle. Upload is out of scope; this only
    /// records and logs the change.
    pub fn change_photo(&mut self, handle: impl Into<String>) {
        self.photo = Some(handle.into());
        tracing::info!("profile photo changed");
    }
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self::new()
    }
}
