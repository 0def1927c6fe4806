// SPDX-License-Identifier: MPL-2.0
//! Sign-up forms and their shared submission flow.
//!
//! Each form keeps its own field state and knows how to validate itself into
//! a [`FormRecord`]. [`SubmitState`] drives the common sequence:
//!
//! 1. clear the previous status
//! 2. a filled honeypot field ends the submission silently
//! 3. validation failures show an error and stop before any network call
//! 4. the record is handed to the store while the submit control is disabled
//! 5. the outcome sets the final status; success also resets the form

pub mod contact;
pub mod program;
pub mod volunteer;

pub use contact::ContactForm;
pub use program::ProgramForm;
pub use volunteer::VolunteerForm;

use crate::store::{StoreError, StoredRecord};
use std::collections::BTreeMap;

/// Value of the `status` field every record carries.
pub const NEW_STATUS: &str = "new";

/// A typed field value, as accepted by the document store.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Double(f64),
    Bool(bool),
    List(Vec<FieldValue>),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// One record appended to a store collection. Field names are camelCase.
/// `createdAt` is never set here; the store assigns it.
#[derive(Debug, Clone, PartialEq)]
pub struct FormRecord {
    pub collection: &'static str,
    pub fields: BTreeMap<String, FieldValue>,
}

impl FormRecord {
    /// Starts a record with `status: "new"`.
    pub fn new(collection: &'static str) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert("status".to_string(), FieldValue::from(NEW_STATUS));
        Self { collection, fields }
    }

    pub fn set(&mut self, name: &str, value: impl Into<FieldValue>) {
        self.fields.insert(name.to_string(), value.into());
    }

    /// Sets a text field, or leaves it absent when `value` is empty.
    pub fn set_optional(&mut self, name: &str, value: &str) {
        if !value.is_empty() {
            self.set(name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.fields.get(name) {
            Some(FieldValue::Text(text)) => Some(text),
            _ => None,
        }
    }
}

/// Visual tone of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Pending,
    Ok,
    Err,
}

/// Status line under a form; `key` is an i18n message key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub tone: Tone,
    pub key: &'static str,
}

impl Status {
    pub fn pending(key: &'static str) -> Self {
        Self {
            tone: Tone::Pending,
            key,
        }
    }

    pub fn ok(key: &'static str) -> Self {
        Self { tone: Tone::Ok, key }
    }

    pub fn err(key: &'static str) -> Self {
        Self {
            tone: Tone::Err,
            key,
        }
    }
}

/// A validation failure that can be shown to the user.
pub trait MessageKey {
    fn message_key(&self) -> &'static str;
}

/// A form that can be submitted through [`SubmitState`].
pub trait Form {
    type Error: MessageKey;

    const PENDING_KEY: &'static str;
    const SUCCESS_KEY: &'static str;
    const FAILURE_KEY: &'static str;

    /// Content of the hidden bot trap field.
    fn honeypot(&self) -> &str;

    /// Checks the fields and builds the record to store.
    fn validate(&self) -> Result<FormRecord, Self::Error>;

    /// Restores the initial field values.
    fn reset(&mut self);
}

/// What the caller should do after [`SubmitState::begin`].
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// A write is already in flight.
    Busy,
    /// The honeypot was filled; nothing happens.
    Trapped,
    /// Validation failed; the status shows why.
    Invalid,
    /// Write this record, then call [`SubmitState::finish`].
    Write(FormRecord),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitState {
    pub status: Option<Status>,
    pub submitting: bool,
}

impl SubmitState {
    pub fn begin<F: Form>(&mut self, form: &F) -> Submission {
        if self.submitting {
            return Submission::Busy;
        }

        self.status = None;

        if !form.honeypot().is_empty() {
            tracing::debug!("honeypot filled, submission dropped");
            return Submission::Trapped;
        }

        match form.validate() {
            Ok(record) => {
                self.submitting = true;
                self.status = Some(Status::pending(F::PENDING_KEY));
                Submission::Write(record)
            }
            Err(err) => {
                self.status = Some(Status::err(err.message_key()));
                Submission::Invalid
            }
        }
    }

    pub fn finish<F: Form>(&mut self, form: &mut F, result: Result<StoredRecord, StoreError>) {
        self.submitting = false;
        match result {
            Ok(stored) => {
                tracing::info!(id = %stored.id, created_at = %stored.created_at, "record stored");
                self.status = Some(Status::ok(F::SUCCESS_KEY));
                form.reset();
            }
            Err(err) => {
                tracing::error!(%err, "record write failed");
                self.status = Some(Status::err(F::FAILURE_KEY));
            }
        }
    }
}

/// Trims a raw input value.
pub(crate) fn clean(value: &str) -> &str {
    value.trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[derive(Default)]
    struct SampleForm {
        trap: String,
        value: String,
        resets: usize,
    }

    #[derive(Debug)]
    struct Missing;

    impl MessageKey for Missing {
        fn message_key(&self) -> &'static str {
            "sample-missing"
        }
    }

    impl Form for SampleForm {
        type Error = Missing;
        const PENDING_KEY: &'static str = "sample-pending";
        const SUCCESS_KEY: &'static str = "sample-ok";
        const FAILURE_KEY: &'static str = "sample-failed";

        fn honeypot(&self) -> &str {
            &self.trap
        }

        fn validate(&self) -> Result<FormRecord, Missing> {
            if self.value.is_empty() {
                return Err(Missing);
            }
            let mut record = FormRecord::new("samples");
            record.set("value", self.value.as_str());
            Ok(record)
        }

        fn reset(&mut self) {
            self.value.clear();
            self.resets += 1;
        }
    }

    fn stored() -> StoredRecord {
        StoredRecord {
            id: "abc".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn honeypot_is_silent() {
        let mut state = SubmitState {
            status: Some(Status::ok("old")),
            submitting: false,
        };
        let form = SampleForm {
            trap: "bot".into(),
            value: "x".into(),
            ..SampleForm::default()
        };
        assert_eq!(state.begin(&form), Submission::Trapped);
        assert_eq!(state.status, None);
        assert!(!state.submitting);
    }

    #[test]
    fn invalid_form_sets_error_and_writes_nothing() {
        let mut state = SubmitState::default();
        assert_eq!(state.begin(&SampleForm::default()), Submission::Invalid);
        assert_eq!(state.status, Some(Status::err("sample-missing")));
        assert!(!state.submitting);
    }

    #[test]
    fn valid_form_goes_pending_then_ok_and_resets() {
        let mut state = SubmitState::default();
        let mut form = SampleForm {
            value: "x".into(),
            ..SampleForm::default()
        };
        let Submission::Write(record) = state.begin(&form) else {
            panic!("expected a write");
        };
        assert_eq!(record.text("status"), Some(NEW_STATUS));
        assert!(state.submitting);
        assert_eq!(state.status, Some(Status::pending("sample-pending")));

        assert_eq!(state.begin(&form), Submission::Busy);

        state.finish(&mut form, Ok(stored()));
        assert!(!state.submitting);
        assert_eq!(state.status, Some(Status::ok("sample-ok")));
        assert_eq!(form.resets, 1);
        assert!(form.value.is_empty());
    }

    #[test]
    fn failed_write_keeps_fields_and_reenables() {
        let mut state = SubmitState::default();
        let mut form = SampleForm {
            value: "x".into(),
            ..SampleForm::default()
        };
        state.begin(&form);
        state.finish(
            &mut form,
            Err(StoreError::Transport("connection refused".into())),
        );
        assert!(!state.submitting);
        assert_eq!(state.status, Some(Status::err("sample-failed")));
        assert_eq!(form.value, "x");
        assert_eq!(form.resets, 0);
    }

    #[test]
    fn optional_fields_are_omitted_when_empty() {
        let mut record = FormRecord::new("c");
        record.set_optional("phone", "");
        record.set_optional("email", "x@y.com");
        assert!(record.get("phone").is_none());
        assert_eq!(record.text("email"), Some("x@y.com"));
    }
}
