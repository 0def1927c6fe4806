// SPDX-License-Identifier: MPL-2.0
//! Volunteer sign-up form.

use super::{clean, FieldValue, Form, FormRecord, MessageKey};

pub const COLLECTION: &str = "volunteerApplications";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Availability,
    Notes,
    /// Hidden bot trap.
    Company,
}

/// Checks run in this order; the first failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingName,
    MissingEmail,
    MissingPhone,
    NoInterest,
    MissingAvailability,
    MissingFrequency,
    NoConsent,
}

impl MessageKey for ValidationError {
    fn message_key(&self) -> &'static str {
        match self {
            ValidationError::MissingName => "form-error-full-name",
            ValidationError::MissingEmail => "volunteer-error-email",
            ValidationError::MissingPhone => "volunteer-error-phone",
            ValidationError::NoInterest => "volunteer-error-interests",
            ValidationError::MissingAvailability => "volunteer-error-availability",
            ValidationError::MissingFrequency => "volunteer-error-frequency",
            ValidationError::NoConsent => "volunteer-error-consent",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VolunteerForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Checked interest areas, in the order they are offered.
    pub interests: Vec<String>,
    pub availability: String,
    pub frequency: Option<String>,
    pub notes: String,
    pub consent: bool,
    pub company: String,
}

impl VolunteerForm {
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Availability => &mut self.availability,
            Field::Notes => &mut self.notes,
            Field::Company => &mut self.company,
        };
        *slot = value;
    }

    /// Checks or unchecks an interest. `offered` is the full option list and
    /// keeps the stored order stable.
    pub fn toggle_interest(&mut self, interest: &str, checked: bool, offered: &[String]) {
        self.interests.retain(|i| i != interest);
        if checked {
            self.interests.push(interest.to_string());
        }
        self.interests
            .sort_by_key(|i| offered.iter().position(|o| o == i).unwrap_or(usize::MAX));
    }

    pub fn has_interest(&self, interest: &str) -> bool {
        self.interests.iter().any(|i| i == interest)
    }
}

impl Form for VolunteerForm {
    type Error = ValidationError;

    const PENDING_KEY: &'static str = "form-status-submitting";
    const SUCCESS_KEY: &'static str = "volunteer-status-ok";
    const FAILURE_KEY: &'static str = "volunteer-status-failed";

    fn honeypot(&self) -> &str {
        &self.company
    }

    fn validate(&self) -> Result<FormRecord, ValidationError> {
        let first_name = clean(&self.first_name);
        let last_name = clean(&self.last_name);
        let email = clean(&self.email);
        let phone = clean(&self.phone);
        let availability = clean(&self.availability);
        let frequency = self.frequency.as_deref().unwrap_or_default();

        if first_name.is_empty() || last_name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if phone.is_empty() {
            return Err(ValidationError::MissingPhone);
        }
        if self.interests.is_empty() {
            return Err(ValidationError::NoInterest);
        }
        if availability.is_empty() {
            return Err(ValidationError::MissingAvailability);
        }
        if frequency.is_empty() {
            return Err(ValidationError::MissingFrequency);
        }
        if !self.consent {
            return Err(ValidationError::NoConsent);
        }

        let mut record = FormRecord::new(COLLECTION);
        record.set("firstName", first_name);
        record.set("lastName", last_name);
        record.set("email", email);
        record.set("phone", phone);
        record.set(
            "interests",
            FieldValue::List(
                self.interests
                    .iter()
                    .map(|i| FieldValue::from(i.as_str()))
                    .collect(),
            ),
        );
        record.set("availability", availability);
        record.set("frequency", frequency);
        record.set_optional("notes", clean(&self.notes));
        record.set("consent", self.consent);
        Ok(record)
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
