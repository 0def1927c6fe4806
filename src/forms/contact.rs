// SPDX-License-Identifier: MPL-2.0
//! Contact form: a name and one way to reach the sender.

use super::{clean, Form, FormRecord, MessageKey};

pub const COLLECTION: &str = "contactMessages";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Phone,
    Email,
    Company,
    Message,
    /// Hidden bot trap.
    CompanyTrap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingName,
    MissingContact,
}

impl MessageKey for ValidationError {
    fn message_key(&self) -> &'static str {
        match self {
            ValidationError::MissingName => "contact-error-name",
            ValidationError::MissingContact => "form-error-contact-method",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub company: String,
    pub message: String,
    pub company_trap: String,
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Company => &mut self.company,
            Field::Message => &mut self.message,
            Field::CompanyTrap => &mut self.company_trap,
        };
        *slot = value;
    }
}

impl Form for ContactForm {
    type Error = ValidationError;

    const PENDING_KEY: &'static str = "contact-status-sending";
    const SUCCESS_KEY: &'static str = "contact-status-ok";
    const FAILURE_KEY: &'static str = "contact-status-failed";

    fn honeypot(&self) -> &str {
        &self.company_trap
    }

    fn validate(&self) -> Result<FormRecord, ValidationError> {
        let first_name = clean(&self.first_name);
        let last_name = clean(&self.last_name);
        let phone = clean(&self.phone);
        let email = clean(&self.email);

        if first_name.is_empty() && last_name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if phone.is_empty() && email.is_empty() {
            return Err(ValidationError::MissingContact);
        }

        let mut record = FormRecord::new(COLLECTION);
        record.set_optional("firstName", first_name);
        record.set_optional("lastName", last_name);
        record.set_optional("phone", phone);
        record.set_optional("email", email);
        record.set_optional("company", clean(&self.company));
        record.set_optional("message", clean(&self.message));
        Ok(record)
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
