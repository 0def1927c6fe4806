// SPDX-License-Identifier: MPL-2.0
//! Volunteer sign-up screen.

use super::{input, notes, page, section_title, status_line, submit, submit_button};
use crate::config::FormsConfig;
use crate::forms::volunteer::Field;
use crate::forms::{SubmitState, VolunteerForm};
use crate::i18n::fluent::I18n;
use crate::store::{DocumentStore, StoreError, StoredRecord};
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{checkbox, pick_list, Column, Row, Text};
use iced::{Element, Length, Task};

#[derive(Debug, Default)]
pub struct State {
    pub form: VolunteerForm,
    pub submit: SubmitState,
    interests: Vec<String>,
    frequencies: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Edit(Field, String),
    ToggleInterest(String, bool),
    FrequencySelected(String),
    ConsentToggled(bool),
    Submit,
    Submitted(Result<StoredRecord, StoreError>),
}

impl State {
    pub fn new(options: &FormsConfig) -> Self {
        Self {
            interests: options.interests.clone(),
            frequencies: options.frequencies.clone(),
            ..Self::default()
        }
    }

    pub fn update<S: DocumentStore>(&mut self, message: Message, store: &S) -> Task<Message> {
        match message {
            Message::Edit(field, value) => self.form.set(field, value),
            Message::ToggleInterest(interest, checked) => {
                self.form.toggle_interest(&interest, checked, &self.interests)
            }
            Message::FrequencySelected(frequency) => {
                if self.frequencies.contains(&frequency) {
                    self.form.frequency = Some(frequency);
                }
            }
            Message::ConsentToggled(consent) => self.form.consent = consent,
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
    let edit = |field: Field| move |value: String| Message::Edit(field, value);

    let names = Row::new()
        .spacing(spacing::SM)
        .push(input(i18n.tr("field-first-name"), &form.first_name, true, edit(Field::FirstName)))
        .push(input(i18n.tr("field-last-name"), &form.last_name, true, edit(Field::LastName)));

    let reach = Row::new()
        .spacing(spacing::SM)
        .push(input(i18n.tr("field-email"), &form.email, true, edit(Field::Email)))
        .push(input(i18n.tr("field-phone"), &form.phone, true, edit(Field::Phone)));

    let interests = state.interests.iter().map(|interest| -> Element<'a, Message> {
        let name = interest.clone();
        checkbox(form.has_interest(interest))
            .label(interest.as_str())
            .on_toggle(move |checked| Message::ToggleInterest(name.clone(), checked))
            .text_size(typography::BODY)
            .into()
    });

    let frequency = pick_list(
        state.frequencies.as_slice(),
        form.frequency.as_ref(),
        Message::FrequencySelected,
    )
    .placeholder(i18n.tr("volunteer-frequency-placeholder"))
    .padding(spacing::XS)
    .width(Length::Fill);

    let consent = checkbox(form.consent)
        .label(i18n.tr("volunteer-consent"))
        .on_toggle(Message::ConsentToggled)
        .text_size(typography::BODY);

    let body = Column::new()
        .push(names)
        .push(reach)
        .push(section_title(i18n.tr("volunteer-interests")))
        .push(Column::with_children(interests).spacing(spacing::XXS))
        .push(input(
            i18n.tr("volunteer-availability"),
            &form.availability,
            true,
            edit(Field::Availability),
        ))
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(i18n.tr("volunteer-frequency")).size(typography::BODY_SM))
                .push(frequency),
        )
        .push(notes(i18n.tr("field-notes"), &form.notes, edit(Field::Notes)))
        .push(consent)
        .push(submit_button(i18n, &state.submit, Message::Submit))
        .push(status_line(i18n, state.submit.status.as_ref()));

    page(i18n.tr("volunteer-title"), body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::Tone;
    use crate::store::MemoryStore;

    fn filled(store: &MemoryStore) -> State {
        let mut state = State::new(&FormsConfig::default());
        let offered = state.interests.clone();
        let frequency = state.frequencies[0].clone();
        for message in [
            Message::Edit(Field::FirstName, "Ada".into()),
            Message::Edit(Field::LastName, "Lovelace".into()),
            Message::Edit(Field::Email, "ada@example.org".into()),
            Message::Edit(Field::Phone, "555-0101".into()),
            Message::ToggleInterest(offered[1].clone(), true),
            Message::ToggleInterest(offered[0].clone(), true),
            Message::Edit(Field::Availability, "Weekends".into()),
            Message::FrequencySelected(frequency),
        ] {
            let _ = state.update(message, store);
        }
        state
    }

    #[test]
    fn interests_follow_the_offered_order() {
        let store = MemoryStore::new();
        let state = filled(&store);
        assert_eq!(state.form.interests, state.interests[..2].to_vec());
    }

    #[test]
    fn consent_is_required() {
        let store = MemoryStore::new();
        let mut state = filled(&store);
        let _ = state.update(Message::Submit, &store);
        let status = state.submit.status.expect("status");
        assert_eq!(status.tone, Tone::Err);
        assert_eq!(status.key, "volunteer-error-consent");

        let _ = state.update(Message::ConsentToggled(true), &store);
        let _ = state.update(Message::Submit, &store);
        assert!(state.submit.submitting);
    }

    #[test]
    fn unknown_frequency_is_ignored() {
        let store = MemoryStore::new();
        let mut state = State::new(&FormsConfig::default());
        let _ = state.update(Message::FrequencySelected("hourly-ish".into()), &store);
        assert_eq!(state.form.frequency, None);
    }
}
