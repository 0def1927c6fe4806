// SPDX-License-Identifier: MPL-2.0
//! Program application screen.
//!
//! The age field drives the layout: a minor's own phone and email are
//! disabled and the guardian section is shown instead.

use super::{input, notes, page, section_title, status_line, submit, submit_button};
use crate::config::FormsConfig;
use crate::forms::program::Field;
use crate::forms::{ProgramForm, SubmitState};
use crate::i18n::fluent::I18n;
use crate::store::{DocumentStore, StoreError, StoredRecord};
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{pick_list, Column, Row, Text};
use iced::{Element, Length, Task};

#[derive(Debug, Default)]
pub struct State {
    pub form: ProgramForm,
    pub submit: SubmitState,
    programs: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Edit(Field, String),
    ProgramSelected(String),
    Submit,
    Submitted(Result<StoredRecord, StoreError>),
}

impl State {
    pub fn new(options: &FormsConfig) -> Self {
        Self {
            programs: options.programs.clone(),
            ..Self::default()
        }
    }

    pub fn update<S: DocumentStore>(&mut self, message: Message, store: &S) -> Task<Message> {
        match message {
            Message::Edit(field, value) => self.form.set(field, value),
            Message::ProgramSelected(program) => {
                if self.programs.contains(&program) {
                    self.form.select_program(program);
                }
            }
            Message::Submit => {
                return submit(&mut self.submit, &self.form, store, Message::Submitted)
            }
            Message::Submitted(result) => self.submit.finish(&mut self.form, result),
        }
        Task::none()
    }
}

pub fn view<'a>(i18n: &'a I18n, state: &'a State) -> Element<'a, Message> {
    let form = &state.form;
    let layout = form.layout();
    let edit = |field: Field| move |value: String| Message::Edit(field, value);

    let names = Row::new()
        .spacing(spacing::SM)
        .push(input(i18n.tr("field-first-name"), &form.first_name, true, edit(Field::FirstName)))
        .push(input(i18n.tr("field-last-name"), &form.last_name, true, edit(Field::LastName)));

    let program = pick_list(
        state.programs.as_slice(),
        form.program.as_ref(),
        Message::ProgramSelected,
    )
    .placeholder(i18n.tr("program-placeholder"))
    .padding(spacing::XS)
    .width(Length::Fill);

    let contact_enabled = layout.participant_contact_enabled;
    let reach = Row::new()
        .spacing(spacing::SM)
        .push(input(i18n.tr("field-phone"), &form.phone, contact_enabled, edit(Field::Phone)))
        .push(input(i18n.tr("field-email"), &form.email, contact_enabled, edit(Field::Email)));

    let mut body = Column::new()
        .push(names)
        .push(input(i18n.tr("program-age"), &form.age, true, edit(Field::Age)))
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(i18n.tr("program-program")).size(typography::BODY_SM))
                .push(program),
        )
        .push(reach);

    if layout.guardian_visible {
        body = body
            .push(section_title(i18n.tr("program-guardian")))
            .push(input(
                i18n.tr("program-guardian-name"),
                &form.guardian_name,
                true,
                edit(Field::GuardianName),
            ))
            .push(
                Row::new()
                    .spacing(spacing::SM)
                    .push(input(
                        i18n.tr("field-phone"),
                        &form.guardian_phone,
                        true,
                        edit(Field::GuardianPhone),
                    ))
                    .push(input(
                        i18n.tr("field-email"),
                        &form.guardian_email,
                        true,
                        edit(Field::GuardianEmail),
                    )),
            );
    }

    let body = body
        .push(notes(i18n.tr("field-notes"), &form.notes, edit(Field::Notes)))
        .push(submit_button(i18n, &state.submit, Message::Submit))
        .push(status_line(i18n, state.submit.status.as_ref()));

    page(i18n.tr("program-title"), body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn minor_age_switches_to_guardian_layout() {
        let store = MemoryStore::new();
        let mut state = State::new(&FormsConfig::default());
        let _ = state.update(Message::Edit(Field::Age, "30".into()), &store);
        let _ = state.update(Message::Edit(Field::Email, "kid@example.org".into()), &store);
        assert_eq!(state.form.email, "kid@example.org");
        let _ = state.update(Message::Edit(Field::Age, "12".into()), &store);

        let layout = state.form.layout();
        assert!(layout.guardian_visible);
        assert!(!layout.participant_contact_enabled);
        assert!(state.form.email.is_empty());

        let _ = state.update(Message::Edit(Field::Phone, "555".into()), &store);
        assert!(state.form.phone.is_empty());
    }

    #[test]
    fn only_offered_programs_can_be_selected() {
        let store = MemoryStore::new();
        let mut state = State::new(&FormsConfig::default());
        let offered = state.programs[0].clone();

        let _ = state.update(Message::ProgramSelected("Juggling".into()), &store);
        assert_eq!(state.form.program, None);
        let _ = state.update(Message::ProgramSelected(offered.clone()), &store);
        assert_eq!(state.form.program, Some(offered));
    }

    #[test]
    fn missing_guardian_is_reported_for_minors() {
        let store = MemoryStore::new();
        let mut state = State::new(&FormsConfig::default());
        let program = state.programs[0].clone();
        for message in [
            Message::Edit(Field::FirstName, "Sam".into()),
            Message::Edit(Field::LastName, "Lee".into()),
            Message::Edit(Field::Age, "9".into()),
            Message::ProgramSelected(program),
        ] {
            let _ = state.update(message, &store);
        }
        let _ = state.update(Message::Submit, &store);
        assert_eq!(
            state.submit.status.map(|s| s.key),
            Some("program-error-guardian")
        );
    }
}
