//! Contact form state machine
//!
//! `Idle -> Submitting -> Succeeded -> (reset delay) -> Idle`, or
//! `Submitting -> Failed` with the fields kept for another attempt. The
//! request itself runs elsewhere; results come back through `complete()`
//! tagged with the generation of the ticket that started them.

use std::time::Duration;

use folio_core::ContactSubmission;

use crate::motion::timing::Timeout;
use crate::notification::Notification;

pub const SENT_TITLE: &str = "Message Sent!";
pub const SENT_DESCRIPTION: &str = "Thank you for reaching out. I'll get back to you soon!";
pub const FAILED_TITLE: &str = "Failed to Send";
pub const FAILED_DESCRIPTION: &str = "Please try again or contact me directly via email.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn next(self) -> Field {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Subject,
            Field::Subject => Field::Message,
            Field::Message => Field::Name,
        }
    }

    pub fn prev(self) -> Field {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Subject => Field::Email,
            Field::Message => Field::Subject,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    fn to_submission(&self) -> ContactSubmission {
        ContactSubmission::new(
            self.name.trim(),
            self.email.trim(),
            Some(self.subject.trim().to_string()),
            self.message.trim(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Handed out by `begin_submit()`; the caller sends `submission` and reports
/// back with `generation`
#[derive(Debug, Clone)]
pub struct SubmitTicket {
    pub generation: u64,
    pub submission: ContactSubmission,
}

#[derive(Debug)]
pub struct ContactForm {
    fields: ContactFields,
    focus: Field,
    state: SubmissionState,
    generation: u64,
    reset_delay: Duration,
    reset_timer: Timeout,
}

impl ContactForm {
    pub fn new(reset_delay: Duration) -> Self {
        Self {
            fields: ContactFields::default(),
            focus: Field::Name,
            state: SubmissionState::Idle,
            generation: 0,
            reset_delay,
            reset_timer: Timeout::new(),
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn focus_field(&mut self, field: Field) {
        self.focus = field;
    }

    /// Fields accept input only before a send and after a failed one; a sent
    /// form stays locked until the reset clears it
    pub fn editable(&self) -> bool {
        matches!(self.state, SubmissionState::Idle | SubmissionState::Failed)
    }

    pub fn insert_char(&mut self, c: char) {
        if self.editable() && !c.is_control() {
            self.fields.get_mut(self.focus).push(c);
        }
    }

    pub fn insert_newline(&mut self) {
        if self.editable() && self.focus == Field::Message {
            self.fields.message.push('\n');
        }
    }

    pub fn backspace(&mut self) {
        if self.editable() {
            self.fields.get_mut(self.focus).pop();
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if self.editable() {
            *self.fields.get_mut(field) = value.into();
        }
    }

    /// Fields left blank; every field is required before submitting
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.fields.get(*f).trim().is_empty())
            .collect()
    }

    pub fn can_submit(&self) -> bool {
        self.editable() && self.missing_fields().is_empty()
    }

    pub fn begin_submit(&mut self) -> Option<SubmitTicket> {
        if !self.can_submit() {
            return None;
        }
        self.reset_timer.cancel();
        self.state = SubmissionState::Submitting;
        Some(SubmitTicket {
            generation: self.generation,
            submission: self.fields.to_submission(),
        })
    }

    /// Apply the outcome of a request. Outcomes from a stale generation, or
    /// arriving when nothing is in flight, are dropped.
    pub fn complete(
        &mut self,
        generation: u64,
        outcome: Result<String, String>,
    ) -> Option<Notification> {
        if generation != self.generation || self.state != SubmissionState::Submitting {
            tracing::debug!(generation, current = self.generation, "dropping stale contact outcome");
            return None;
        }
        match outcome {
            Ok(message) => {
                tracing::info!(%message, "contact message sent");
                self.state = SubmissionState::Succeeded;
                self.reset_timer.arm(self.reset_delay);
                Some(Notification::success(SENT_TITLE, SENT_DESCRIPTION))
            }
            Err(error) => {
                tracing::warn!(%error, "contact message failed");
                self.state = SubmissionState::Failed;
                Some(Notification::error(FAILED_TITLE, FAILED_DESCRIPTION))
            }
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        if self.reset_timer.advance(dt).is_some() {
            self.fields = ContactFields::default();
            self.focus = Field::Name;
            self.state = SubmissionState::Idle;
        }
    }

    /// Clear the form and abandon whatever is in flight; its outcome will be
    /// ignored when it arrives
    pub fn reset(&mut self) {
        self.generation += 1;
        self.reset_timer.cancel();
        self.fields = ContactFields::default();
        self.focus = Field::Name;
        self.state = SubmissionState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new(Duration::from_millis(3000));
        form.set_field(Field::Name, "Jamie");
        form.set_field(Field::Email, "jamie@example.com");
        form.set_field(Field::Subject, "Hello");
        form.set_field(Field::Message, "Let's build something");
        form
    }

    #[test]
    fn test_success_then_reset() {
        let mut form = filled();
        let ticket = form.begin_submit().unwrap();
        assert_eq!(form.state(), SubmissionState::Submitting);
        assert_eq!(ticket.submission.name, "Jamie");
        assert_eq!(ticket.submission.subject.as_deref(), Some("Hello"));

        let note = form.complete(ticket.generation, Ok("ok".into())).unwrap();
        assert_eq!(note.title, SENT_TITLE);
        assert_eq!(form.state(), SubmissionState::Succeeded);

        form.advance(Duration::from_millis(2999));
        assert_eq!(form.state(), SubmissionState::Succeeded);
        assert_eq!(form.fields().name, "Jamie");

        form.advance(Duration::from_millis(1));
        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(form.fields(), &ContactFields::default());
    }

    #[test]
    fn test_sent_form_is_locked_until_reset() {
        let mut form = filled();
        let ticket = form.begin_submit().unwrap();
        form.complete(ticket.generation, Ok("ok".into())).unwrap();

        form.focus_field(Field::Message);
        form.insert_char('X');
        form.insert_newline();
        form.backspace();
        form.set_field(Field::Name, "Other");
        assert_eq!(form.fields().message, "Let's build something");
        assert_eq!(form.fields().name, "Jamie");
        assert!(!form.editable());
        assert!(!form.can_submit());
        assert!(form.begin_submit().is_none());
        assert_eq!(form.state(), SubmissionState::Succeeded);

        form.advance(Duration::from_millis(3000));
        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(form.focus(), Field::Name);
        form.insert_char('J');
        assert_eq!(form.fields().name, "J");
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut form = filled();
        let ticket = form.begin_submit().unwrap();
        let note = form
            .complete(ticket.generation, Err("500".into()))
            .unwrap();

        assert_eq!(note.title, FAILED_TITLE);
        assert_eq!(note.description, FAILED_DESCRIPTION);
        assert_eq!(form.state(), SubmissionState::Failed);
        assert_eq!(form.fields().email, "jamie@example.com");
        assert!(form.can_submit());

        form.advance(Duration::from_secs(10));
        assert_eq!(form.state(), SubmissionState::Failed);
    }

    #[test]
    fn test_no_double_submit() {
        let mut form = filled();
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
        form.insert_char('x');
        assert_eq!(form.fields().name, "Jamie");
    }

    #[test]
    fn test_missing_fields_block_submit() {
        let mut form = ContactForm::new(Duration::from_secs(3));
        form.set_field(Field::Name, "Jamie");
        form.set_field(Field::Subject, "   ");
        assert_eq!(
            form.missing_fields(),
            vec![Field::Email, Field::Subject, Field::Message]
        );
        assert!(form.begin_submit().is_none());
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_stale_outcome_ignored() {
        let mut form = filled();
        let ticket = form.begin_submit().unwrap();
        form.reset();
        assert!(form.complete(ticket.generation, Ok("late".into())).is_none());
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_typing_and_focus() {
        let mut form = ContactForm::new(Duration::from_secs(3));
        for c in "Al".chars() {
            form.insert_char(c);
        }
        form.backspace();
        form.focus_next();
        form.insert_char('a');
        form.focus_prev();
        form.focus_prev();
        assert_eq!(form.focus(), Field::Message);
        form.insert_newline();
        assert_eq!(form.fields().name, "A");
        assert_eq!(form.fields().email, "a");
        assert_eq!(form.fields().message, "\n");
    }
}
