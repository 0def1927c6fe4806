// SPDX-License-Identifier: MPL-2.0
//! Program application form.
//!
//! The layout depends on the applicant's age. For minors the participant's
//! own phone and email are disabled and a guardian section becomes required;
//! for adults the guardian section is hidden and cleared. The layout is
//! recomputed on every age edit and after a reset.

use super::{clean, FieldValue, Form, FormRecord, MessageKey};

pub const COLLECTION: &str = "programApplications";

/// Applicants younger than this need a guardian.
pub const ADULT_AGE: f64 = 18.0;

pub const MAX_AGE: f64 = 120.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Age,
    Phone,
    Email,
    GuardianName,
    GuardianPhone,
    GuardianEmail,
    Notes,
    /// Hidden bot trap.
    Company,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingName,
    InvalidAge,
    MissingProgram,
    MissingGuardian,
    MissingContact,
}

impl MessageKey for ValidationError {
    fn message_key(&self) -> &'static str {
        match self {
            ValidationError::MissingName => "form-error-full-name",
            ValidationError::InvalidAge => "program-error-age",
            ValidationError::MissingProgram => "program-error-program",
            ValidationError::MissingGuardian => "program-error-guardian",
            ValidationError::MissingContact => "form-error-contact-method",
        }
    }
}

/// Age-dependent presentation of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub participant_contact_enabled: bool,
    pub guardian_visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramForm {
    pub first_name: String,
    pub last_name: String,
    pub age: String,
    pub program: Option<String>,
    pub phone: String,
    pub email: String,
    pub guardian_name: String,
    pub guardian_phone: String,
    pub guardian_email: String,
    pub notes: String,
    pub company: String,
    layout: Layout,
}

impl Default for ProgramForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            age: String::new(),
            program: None,
            phone: String::new(),
            email: String::new(),
            guardian_name: String::new(),
            guardian_phone: String::new(),
            guardian_email: String::new(),
            notes: String::new(),
            company: String::new(),
            layout: layout_for(layout_age("")),
        }
    }
}

/// Parses the age field. Blank or non-numeric input is `None`.
pub fn parse_age(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|age| age.is_finite())
}

/// Age used for the layout only. A blank field counts as 0, so an empty form
/// starts in the minor layout; non-numeric input gets the adult layout.
pub fn layout_age(raw: &str) -> Option<f64> {
    if raw.trim().is_empty() {
        Some(0.0)
    } else {
        parse_age(raw)
    }
}

pub fn is_minor(age: Option<f64>) -> bool {
    age.is_some_and(|age| age < ADULT_AGE)
}

fn layout_for(age: Option<f64>) -> Layout {
    let minor = is_minor(age);
    Layout {
        participant_contact_enabled: !minor,
        guardian_visible: minor,
    }
}

impl ProgramForm {
    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Age => {
                self.age = value;
                self.apply_age();
                return;
            }
            // Disabled inputs do not accept edits.
            Field::Phone | Field::Email if !self.layout.participant_contact_enabled => return,
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::GuardianName => &mut self.guardian_name,
            Field::GuardianPhone => &mut self.guardian_phone,
            Field::GuardianEmail => &mut self.guardian_email,
            Field::Notes => &mut self.notes,
            Field::Company => &mut self.company,
        };
        *slot = value;
    }

    pub fn select_program(&mut self, program: String) {
        self.program = Some(program);
    }

    /// Recomputes the layout from the current age and clears whichever
    /// contact group no longer applies.
    fn apply_age(&mut self) {
        self.layout = layout_for(layout_age(&self.age));
        if self.layout.guardian_visible {
            self.phone.clear();
            self.email.clear();
        } else {
            self.guardian_name.clear();
            self.guardian_phone.clear();
            self.guardian_email.clear();
        }
    }
}

fn age_value(age: f64) -> FieldValue {
    if age.fract() == 0.0 {
        FieldValue::Integer(age as i64)
    } else {
        FieldValue::Double(age)
    }
}

impl Form for ProgramForm {
    type Error = ValidationError;

    const PENDING_KEY: &'static str = "form-status-submitting";
    const SUCCESS_KEY: &'static str = "program-status-ok";
    const FAILURE_KEY: &'static str = "program-status-failed";

    fn honeypot(&self) -> &str {
        &self.company
    }

    fn validate(&self) -> Result<FormRecord, ValidationError> {
        let first_name = clean(&self.first_name);
        let last_name = clean(&self.last_name);
        let program = self.program.as_deref().map(clean).unwrap_or_default();

        if first_name.is_empty() || last_name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        let age = parse_age(&self.age)
            .filter(|age| (0.0..=MAX_AGE).contains(age))
            .ok_or(ValidationError::InvalidAge)?;
        if program.is_empty() {
            return Err(ValidationError::MissingProgram);
        }

        let mut record = FormRecord::new(COLLECTION);
        record.set("firstName", first_name);
        record.set("lastName", last_name);
        record.set("age", age_value(age));
        record.set("program", program);

        if is_minor(Some(age)) {
            let name = clean(&self.guardian_name);
            let phone = clean(&self.guardian_phone);
            let email = clean(&self.guardian_email);
            if name.is_empty() || phone.is_empty() || email.is_empty() {
                return Err(ValidationError::MissingGuardian);
            }
            record.set("guardianName", name);
            record.set("guardianPhone", phone);
            record.set("guardianEmail", email);
        } else {
            let phone = clean(&self.phone);
            let email = clean(&self.email);
            if phone.is_empty() && email.is_empty() {
                return Err(ValidationError::MissingContact);
            }
            record.set_optional("phone", phone);
            record.set_optional("email", email);
        }

        record.set_optional("notes", clean(&self.notes));
        Ok(record)
    }

    fn reset(&mut self) {
        *self = Self::default();
        self.apply_age();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applicant(age: &str) -> ProgramForm {
        let mut form = ProgramForm::default();
        form.set(Field::FirstName, "Mia".into());
        form.set(Field::LastName, "Chen".into());
        form.set(Field::Age, age.into());
        form.select_program("Summer Camp".into());
        form
    }

    #[test]
    fn minor_requires_full_guardian_contact() {
        let mut form = applicant("12");
        form.set(Field::GuardianName, "Lin Chen".into());
        form.set(Field::GuardianPhone, "555-0101".into());
        assert_eq!(form.validate(), Err(ValidationError::MissingGuardian));

        form.set(Field::GuardianEmail, "lin@example.org".into());
        let record = form.validate().unwrap();
        assert_eq!(record.text("guardianEmail"), Some("lin@example.org"));
        assert!(record.get("phone").is_none());
        assert!(record.get("email").is_none());
        assert_eq!(record.get("age"), Some(&FieldValue::Integer(12)));
    }

    #[test]
    fn adult_needs_phone_or_email_and_no_guardian() {
        let mut form = applicant("30");
        assert_eq!(form.validate(), Err(ValidationError::MissingContact));

        form.set(Field::Phone, "555-0199".into());
        let record = form.validate().unwrap();
        assert_eq!(record.text("phone"), Some("555-0199"));
        assert!(record.get("guardianName").is_none());
        assert!(record.get("email").is_none());
    }

    #[test]
    fn age_bounds_are_enforced() {
        for bad in ["-1", "121", "", "ten", "NaN", "inf"] {
            assert_eq!(
                applicant(bad).validate(),
                Err(ValidationError::InvalidAge),
                "age {bad:?}"
            );
        }
        let mut edge = applicant("120");
        edge.set(Field::Email, "old@example.org".into());
        assert!(edge.validate().is_ok());
    }

    #[test]
    fn fractional_ages_are_stored_as_doubles() {
        let mut form = applicant("17.5");
        form.set(Field::GuardianName, "G".into());
        form.set(Field::GuardianPhone, "1".into());
        form.set(Field::GuardianEmail, "g@x.org".into());
        assert_eq!(
            form.validate().unwrap().get("age"),
            Some(&FieldValue::Double(17.5))
        );
    }

    #[test]
    fn program_is_required() {
        let mut form = applicant("40");
        form.program = None;
        assert_eq!(form.validate(), Err(ValidationError::MissingProgram));
    }

    #[test]
    fn blank_age_starts_in_minor_layout() {
        let form = ProgramForm::default();
        assert!(form.layout().guardian_visible);
        assert!(!form.layout().participant_contact_enabled);

        let mut form = applicant("30");
        form.set(Field::Age, "   ".into());
        assert!(form.layout().guardian_visible);
        assert_eq!(form.validate(), Err(ValidationError::InvalidAge));
    }

    #[test]
    fn non_numeric_age_uses_adult_layout() {
        let mut form = ProgramForm::default();
        form.set(Field::Age, "ten".into());
        assert!(form.layout().participant_contact_enabled);
        assert!(!form.layout().guardian_visible);
    }

    #[test]
    fn layout_follows_age_edits() {
        let mut form = ProgramForm::default();
        form.set(Field::Age, "30".into());
        assert!(form.layout().participant_contact_enabled);
        assert!(!form.layout().guardian_visible);

        form.set(Field::Email, "me@example.org".into());
        form.set(Field::Age, "9".into());
        assert!(form.layout().guardian_visible);
        assert!(form.email.is_empty(), "participant contact cleared for minors");

        form.set(Field::Phone, "555".into());
        assert!(form.phone.is_empty(), "disabled inputs ignore edits");

        form.set(Field::GuardianName, "Pat".into());
        form.set(Field::Age, "19".into());
        assert!(form.layout().participant_contact_enabled);
        assert!(form.guardian_name.is_empty(), "guardian cleared for adults");
    }

    #[test]
    fn reset_restores_blank_age_layout() {
        let mut form = applicant("40");
        form.reset();
        assert_eq!(form, ProgramForm::default());
        assert!(form.layout().guardian_visible);
        assert!(!form.layout().participant_contact_enabled);
    }
}
