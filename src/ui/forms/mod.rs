// SPDX-License-Identifier: MPL-2.0
//! Form screens and the widgets they share.
//!
//! Each form screen owns its form model and a [`SubmitState`]. Submitting
//! validates the model, writes the record through the document store and
//! reports the outcome in a status line under the submit button.

pub mod contact;
pub mod program;
pub mod volunteer;

use crate::forms::{Form, Status, SubmitState, Submission};
use crate::i18n::fluent::I18n;
use crate::store::{DocumentStore, StoreError, StoredRecord};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Text};
use iced::{Element, Length, Task};

/// Starts a submission and, when the form is valid, the store write.
pub fn submit<F, S, M>(
    submit: &mut SubmitState,
    form: &F,
    store: &S,
    on_done: fn(Result<StoredRecord, StoreError>) -> M,
) -> Task<M>
where
    F: Form,
    S: DocumentStore,
    M: Send + 'static,
{
    match submit.begin(form) {
        Submission::Write(record) => {
            let store = store.clone();
            Task::perform(async move { store.add(record).await }, on_done)
        }
        Submission::Busy | Submission::Trapped | Submission::Invalid => Task::none(),
    }
}

/// Labelled single-line input. A disabled input ignores typing.
pub fn input<'a, M: Clone + 'a>(
    label: String,
    value: &'a str,
    enabled: bool,
    on_input: impl Fn(String) -> M + 'a,
) -> Element<'a, M> {
    let field = text_input(label.as_str(), value)
        .on_input_maybe(enabled.then_some(on_input))
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(Length::Fill);

    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY_SM))
        .push(field)
        .into()
}

/// Multi-line free text, rendered as a taller input.
pub fn notes<'a, M: Clone + 'a>(
    label: String,
    value: &'a str,
    on_input: impl Fn(String) -> M + 'a,
) -> Element<'a, M> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label.clone()).size(typography::BODY_SM))
        .push(
            Container::new(
                text_input(label.as_str(), value)
                    .on_input(on_input)
                    .padding(spacing::XS)
                    .size(typography::BODY),
            )
            .height(Length::Fixed(sizing::TEXT_AREA_HEIGHT)),
        )
        .into()
}

pub fn section_title<'a, M: 'a>(label: String) -> Element<'a, M> {
    Text::new(label).size(typography::TITLE_SM).into()
}

/// Submit button, disabled while a write is in flight.
pub fn submit_button<'a, M: Clone + 'a>(
    i18n: &I18n,
    state: &SubmitState,
    on_press: M,
) -> Element<'a, M> {
    button(Text::new(i18n.tr("form-submit")).size(typography::BODY))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary)
        .on_press_maybe((!state.submitting).then_some(on_press))
        .into()
}

/// Status line under the submit button; empty when there is nothing to say.
pub fn status_line<'a, M: 'a>(i18n: &I18n, status: Option<&Status>) -> Element<'a, M> {
    match status {
        Some(status) => Container::new(Text::new(i18n.tr(status.key)).size(typography::BODY))
            .width(Length::Fill)
            .padding(spacing::XS)
            .style(styles::container::status(status.tone))
            .into(),
        None => Column::new().into(),
    }
}

/// Centers a form column at a readable width.
pub fn page<'a, M: 'a>(title: String, body: Column<'a, M>) -> Element<'a, M> {
    let content = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::FORM_MAX_WIDTH)
        .push(Text::new(title).size(typography::TITLE_LG))
        .push(body.spacing(spacing::SM));

    Container::new(
        Container::new(content)
            .padding(spacing::LG)
            .style(styles::container::panel),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .center_x(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{ContactForm, Tone};
    use crate::store::MemoryStore;

    fn done(_: Result<StoredRecord, StoreError>) {}

    #[test]
    fn invalid_form_reports_without_writing() {
        let store = MemoryStore::new();
        let mut state = SubmitState::default();
        let _task = submit(&mut state, &ContactForm::default(), &store, done);

        assert!(!state.submitting);
        let status = state.status.expect("status set");
        assert_eq!(status.tone, Tone::Err);
        assert_eq!(status.key, "contact-error-name");
    }

    #[test]
    fn valid_form_starts_a_write() {
        let store = MemoryStore::new();
        let mut state = SubmitState::default();
        let form = ContactForm {
            first_name: "Ada".into(),
            email: "ada@example.org".into(),
            ..ContactForm::default()
        };

        let _task = submit(&mut state, &form, &store, done);
        assert!(state.submitting);
        assert_eq!(state.status.map(|s| s.tone), Some(Tone::Pending));

        // A second press while the write is in flight changes nothing.
        let _task = submit(&mut state, &form, &store, done);
        assert!(state.submitting);
    }
}
