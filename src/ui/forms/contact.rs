// SPDX-License-Identifier: MPL-2.0
//! Contact screen.

use super::{input, notes, page, status_line, submit, submit_button};
use crate::forms::contact::Field;
use crate::forms::{ContactForm, SubmitState};
use crate::i18n::fluent::I18n;
use crate::store::{DocumentStore, StoreError, StoredRecord};
use crate::ui::design_tokens::spacing;
use iced::widget::{Column, Row};
use iced::{Element, Task};

#[derive(Debug, Default)]
pub struct State {
    pub form: ContactForm,
    pub submit: SubmitState,
}

#[derive(Debug, Clone)]
pub enum Message {
    Edit(Field, String),
    Submit,
    Submitted(Result<StoredRecord, StoreError>),
}

impl State {
    pub fn update<S: DocumentStore>(&mut self, message: Message, store: &S) -> Task<Message> {
        match message {
            Message::Edit(field, value) => {
                self.form.set(field, value);
                Task::none()
            }
            Message::Submit => submit(&mut self.submit, &self.form, store, Message::Submitted),
            Message::Submitted(result) => {
                self.submit.finish(&mut self.form, result);
                Task::none()
            }
        }
    }
}

pub fn view<'a>(i18n: &'a I18n, state: &'a State) -> Element<'a, Message> {
    let form = &state.form;
    let edit = |field: Field| move |value: String| Message::Edit(field, value);

    let names = Row::new()
        .spacing(spacing::SM)
        .push(input(i18n.tr("field-first-name"), &form.first_name, true, edit(Field::FirstName)))
        .push(input(i18n.tr("field-last-name"), &form.last_name, true, edit(Field::LastName)));

    let reach = Row::new()
        .spacing(spacing::SM)
        .push(input(i18n.tr("field-phone"), &form.phone, true, edit(Field::Phone)))
        .push(input(i18n.tr("field-email"), &form.email, true, edit(Field::Email)));

    let body = Column::new()
        .push(names)
        .push(reach)
        .push(input(i18n.tr("field-company"), &form.company, true, edit(Field::Company)))
        .push(notes(i18n.tr("field-message"), &form.message, edit(Field::Message)))
        .push(submit_button(i18n, &state.submit, Message::Submit))
        .push(status_line(i18n, state.submit.status.as_ref()));

    page(i18n.tr("contact-title"), body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::Tone;
    use crate::store::MemoryStore;
    use chrono::Utc;

    fn stored() -> StoredRecord {
        StoredRecord {
            id: "abc".into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn successful_write_clears_the_form() {
        let store = MemoryStore::new();
        let mut state = State::default();
        let _ = state.update(Message::Edit(Field::FirstName, "Grace".into()), &store);
        let _ = state.update(Message::Edit(Field::Phone, "555-0100".into()), &store);
        let _ = state.update(Message::Submit, &store);
        assert!(state.submit.submitting);

        let _ = state.update(Message::Submitted(Ok(stored())), &store);
        assert!(!state.submit.submitting);
        assert_eq!(state.form, ContactForm::default());
        assert_eq!(state.submit.status.map(|s| s.key), Some("contact-status-ok"));
    }

    #[test]
    fn failed_write_keeps_the_input() {
        let store = MemoryStore::new();
        let mut state = State::default();
        let _ = state.update(Message::Edit(Field::LastName, "Hopper".into()), &store);
        let _ = state.update(Message::Edit(Field::Email, "g@example.org".into()), &store);
        let _ = state.update(Message::Submit, &store);
        let _ = state.update(
            Message::Submitted(Err(StoreError::Transport("offline".into()))),
            &store,
        );

        assert_eq!(state.form.last_name, "Hopper");
        let status = state.submit.status.expect("status");
        assert_eq!(status.tone, Tone::Err);
        assert_eq!(status.key, "contact-status-failed");
    }

    #[test]
    fn filled_trap_drops_the_submission_silently() {
        let store = MemoryStore::new();
        let mut state = State::default();
        let _ = state.update(Message::Edit(Field::FirstName, "Bot".into()), &store);
        let _ = state.update(Message::Edit(Field::Email, "bot@example.org".into()), &store);
        let _ = state.update(Message::Edit(Field::CompanyTrap, "spam inc".into()), &store);
        let _ = state.update(Message::Submit, &store);

        assert!(!state.submit.submitting);
        assert_eq!(state.submit.status, None);
    }
}
