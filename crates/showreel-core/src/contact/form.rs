//! Editable contact form state
//!
//! Mirrors what the site's form does: validate before sending, clear a
//! field's error as soon as that field is edited, lock while a request is in
//! flight and reset after a successful send. A failure leaves the input in
//! place and shows one message. There is no automatic retry.

use tracing::{debug, warn};

use super::models::{ContactAck, ContactField, ContactSubmission, FieldErrors};
use crate::Result;

pub const SENT_MESSAGE: &str = "Message sent! Thanks for reaching out. We'll get back to you shortly.";
pub const FAILED_MESSAGE: &str = "There was an error sending your message. Please try again later.";

/// Outcome shown to the user after a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormNotice {
    Sent,
    Failed,
}

impl FormNotice {
    pub fn message(&self) -> &'static str {
        match self {
            FormNotice::Sent => SENT_MESSAGE,
            FormNotice::Failed => FAILED_MESSAGE,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FormNotice::Failed)
    }
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    name: String,
    email: String,
    phone: String,
    message: String,
    focus: ContactField,
    errors: FieldErrors,
    submitting: bool,
    notice: Option<FormNotice>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            message: String::new(),
            focus: ContactField::Name,
            errors: FieldErrors::default(),
            submitting: false,
            notice: None,
        }
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    #[inline]
    pub fn focus(&self) -> ContactField {
        self.focus
    }

    pub fn set_focus(&mut self, field: ContactField) {
        self.focus = field;
    }

    pub fn focus_next(&mut self) {
        let i = field_position(self.focus);
        self.focus = ContactField::ALL[(i + 1) % ContactField::ALL.len()];
    }

    pub fn focus_prev(&mut self) {
        let len = ContactField::ALL.len();
        let i = field_position(self.focus);
        self.focus = ContactField::ALL[(i + len - 1) % len];
    }

    #[inline]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[inline]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[inline]
    pub fn notice(&self) -> Option<FormNotice> {
        self.notice
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Replace a field's value
    pub fn set_value(&mut self, field: ContactField, value: &str) {
        if self.submitting {
            return;
        }
        *self.value_mut(field) = value.to_string();
        self.errors.clear(field);
    }

    /// Type a character into the focused field. Newlines are only kept in the message.
    pub fn insert_char(&mut self, c: char) {
        if self.submitting || (c == '\n' && self.focus != ContactField::Message) {
            return;
        }
        let field = self.focus;
        self.value_mut(field).push(c);
        self.errors.clear(field);
    }

    pub fn backspace(&mut self) {
        if self.submitting {
            return;
        }
        let field = self.focus;
        if self.value_mut(field).pop().is_some() {
            self.errors.clear(field);
        }
    }

    /// Current input as a submission; a blank phone is omitted
    pub fn submission(&self) -> ContactSubmission {
        let phone = self.phone.trim();
        ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: (!phone.is_empty()).then(|| self.phone.clone()),
            message: self.message.clone(),
        }
    }

    /// Validate and lock the form for sending.
    /// Returns `None` if a send is already in flight or validation failed.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.submitting {
            return None;
        }
        let submission = self.submission();
        let errors = submission.field_errors();
        if !errors.is_empty() {
            debug!(errors = %errors, "Contact form has validation errors");
            if let Some((first, _)) = errors.iter().next() {
                self.focus = first;
            }
            self.errors = errors;
            return None;
        }

        self.errors = FieldErrors::default();
        self.notice = None;
        self.submitting = true;
        Some(submission)
    }

    /// Record the result of the send started by `begin_submit`
    pub fn finish_submit(&mut self, result: Result<ContactAck>) {
        self.submitting = false;
        match result {
            Ok(ack) if ack.ok => {
                self.name.clear();
                self.email.clear();
                self.phone.clear();
                self.message.clear();
                self.focus = ContactField::Name;
                self.notice = Some(FormNotice::Sent);
            }
            Ok(ack) => {
                warn!(id = %ack.id, "Contact endpoint answered without ok");
                self.notice = Some(FormNotice::Failed);
            }
            Err(e) => {
                warn!(error = %e, "Error sending message");
                self.notice = Some(FormNotice::Failed);
            }
        }
    }

    fn value_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Message => &mut self.message,
        }
    }
}

fn field_position(field: ContactField) -> usize {
    ContactField::ALL
        .iter()
        .position(|f| *f == field)
        .unwrap_or(0)
}
