//! Contact form validation and the simulated submission state machine.
//!
//! Nothing here talks to the network; the frontend waits out
//! [`crate::config::ContactConfig::simulated_delay`] between
//! [`ContactSubmission::begin`] and [`ContactSubmission::complete`].

use thiserror::Error;

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I will get back to you soon.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("a message is already being sent")]
    AlreadySubmitting,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::MissingField("email"));
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.trim().to_string()));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingField("message"));
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// One `@`, a non-empty local part and a dotted domain without empty labels.
pub fn is_plausible_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = s.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && domain.split('.').all(|l| !l.is_empty())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Sent,
}

#[derive(Debug, Default)]
pub struct ContactSubmission {
    state: SubmissionState,
}

impl ContactSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Validate `form` and enter the submitting state.
    pub fn begin(&mut self, form: &ContactForm) -> Result<(), ContactError> {
        if self.is_submitting() {
            return Err(ContactError::AlreadySubmitting);
        }
        form.validate()?;
        self.state = SubmissionState::Submitting;
        log::info!("[contact] sending message from {}", form.email.trim());
        Ok(())
    }

    /// Finish an in-flight submission and clear the form. Returns the message to show.
    pub fn complete(&mut self, form: &mut ContactForm) -> Option<&'static str> {
        if !self.is_submitting() {
            return None;
        }
        form.clear();
        self.state = SubmissionState::Sent;
        Some(SUCCESS_MESSAGE)
    }
}
