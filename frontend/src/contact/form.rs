use once_cell::sync::Lazy;
use regex::Regex;

use crate::contact::api::ContactRequest;

pub const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email pattern compiles"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Submitted,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationMode {
    /// Required fields, email shape and minimum message length checked locally.
    Strict,
    /// Everything is left to the relay endpoint.
    Relaxed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }

    fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Message => self.message = None,
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

fn check_name(name: &str) -> Option<&'static str> {
    name.trim().is_empty().then_some("Please enter your name")
}

fn check_email(email: &str) -> Option<&'static str> {
    if email.trim().is_empty() {
        Some("Please enter your email")
    } else if !is_valid_email(email) {
        Some("Please enter a valid email address")
    } else {
        None
    }
}

fn check_message(message: &str) -> Option<&'static str> {
    let message = message.trim();
    if message.is_empty() {
        Some("Please enter a message")
    } else if message.chars().count() < MIN_MESSAGE_CHARS {
        Some("Message must be at least 10 characters")
    } else {
        None
    }
}

/// Contact form state plus its submit lifecycle.
///
/// `Submitting` freezes the fields: edits and further submits are ignored
/// until `finish` is called with the relay's outcome.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: SubmitStatus,
    pub error_message: Option<String>,
    pub field_errors: FieldErrors,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            status: SubmitStatus::Idle,
            error_message: None,
            field_errors: FieldErrors::default(),
        }
    }
}

impl ContactForm {
    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Returns false when the edit was ignored.
    pub fn set_field(&mut self, field: Field, value: String) -> bool {
        if self.is_submitting() {
            return false;
        }
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
        self.field_errors.clear(field);
        true
    }

    pub fn validate(&self, mode: ValidationMode) -> FieldErrors {
        match mode {
            ValidationMode::Relaxed => FieldErrors::default(),
            ValidationMode::Strict => FieldErrors {
                name: check_name(&self.name),
                email: check_email(&self.email),
                message: check_message(&self.message),
            },
        }
    }

    /// Moves to `Submitting` and returns the payload to send, or `None` when
    /// validation failed (errors are recorded) or a submit is already in flight.
    pub fn begin_submit(&mut self, mode: ValidationMode) -> Option<ContactRequest> {
        if self.is_submitting() {
            return None;
        }

        let errors = self.validate(mode);
        if !errors.is_empty() {
            self.field_errors = errors;
            return None;
        }

        self.field_errors = FieldErrors::default();
        self.error_message = None;
        self.status = SubmitStatus::Submitting;

        Some(ContactRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }

    pub fn finish(&mut self, outcome: Result<(), String>) {
        if !self.is_submitting() {
            return;
        }
        match outcome {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.status = SubmitStatus::Submitted;
            }
            Err(message) => {
                self.error_message = Some(message);
                self.status = SubmitStatus::Error;
            }
        }
    }

    /// "Send another message": back to an empty, idle form.
    pub fn send_another(&mut self) {
        self.status = SubmitStatus::Idle;
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(message: &str) -> ContactForm {
        let mut form = ContactForm::default();
        form.set_field(Field::Name, "Ada Lovelace".into());
        form.set_field(Field::Email, "ada@example.com".into());
        form.set_field(Field::Message, message.into());
        form
    }

    #[test]
    fn successful_submit_clears_fields() {
        let mut form = filled("I have a project for you.");
        assert_eq!(form.status, SubmitStatus::Idle);

        let request = form.begin_submit(ValidationMode::Strict).unwrap();
        assert_eq!(request.email, "ada@example.com");
        assert_eq!(form.status, SubmitStatus::Submitting);

        form.finish(Ok(()));
        assert_eq!(form.status, SubmitStatus::Submitted);
        assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
        assert!(form.error_message.is_none());
    }

    #[test]
    fn failed_submit_keeps_fields_for_retry() {
        let mut form = filled("I have a project for you.");
        form.begin_submit(ValidationMode::Strict).unwrap();

        form.finish(Err("Mailbox unavailable".to_string()));

        assert_eq!(form.status, SubmitStatus::Error);
        assert_eq!(form.error_message.as_deref(), Some("Mailbox unavailable"));
        assert_eq!(form.name, "Ada Lovelace");
        assert_eq!(form.email, "ada@example.com");
        assert_eq!(form.message, "I have a project for you.");

        assert!(form.begin_submit(ValidationMode::Strict).is_some());
        assert!(form.error_message.is_none());
    }

    #[test]
    fn invalid_email_is_rejected_before_sending() {
        let mut form = filled("I have a project for you.");
        form.set_field(Field::Email, "not-an-email".into());

        assert!(form.begin_submit(ValidationMode::Strict).is_none());
        assert_eq!(form.status, SubmitStatus::Idle);
        assert_eq!(form.field_errors.email, Some("Please enter a valid email address"));
    }

    #[test]
    fn domain_labels_must_not_be_empty() {
        for email in ["a@b..com", "a@.b.com", "a@b.com."] {
            assert!(!is_valid_email(email), "{email} should be rejected");
        }
        assert!(is_valid_email("ada@mail.example.org"));
    }

    #[test]
    fn message_needs_ten_characters() {
        let mut short = filled("123456789");
        assert!(short.begin_submit(ValidationMode::Strict).is_none());
        assert_eq!(short.field_errors.get(Field::Message), Some("Message must be at least 10 characters"));

        let mut enough = filled("1234567890");
        assert!(enough.begin_submit(ValidationMode::Strict).is_some());
    }

    #[test]
    fn relaxed_mode_defers_to_server() {
        let mut form = ContactForm::default();
        assert!(form.begin_submit(ValidationMode::Relaxed).is_some());
        assert_eq!(form.status, SubmitStatus::Submitting);
    }

    #[test]
    fn submitting_freezes_the_form() {
        let mut form = filled("I have a project for you.");
        form.begin_submit(ValidationMode::Strict).unwrap();

        assert!(!form.set_field(Field::Name, "Someone else".into()));
        assert_eq!(form.name, "Ada Lovelace");
        assert!(form.begin_submit(ValidationMode::Strict).is_none());
        assert_eq!(form.status, SubmitStatus::Submitting);
    }

    #[test]
    fn editing_clears_that_fields_error() {
        let mut form = ContactForm::default();
        assert!(form.begin_submit(ValidationMode::Strict).is_none());
        assert!(form.field_errors.name.is_some());
        assert!(form.field_errors.email.is_some());

        form.set_field(Field::Name, "Ada".into());
        assert!(form.field_errors.name.is_none());
        assert!(form.field_errors.email.is_some());
    }

    #[test]
    fn send_another_returns_to_idle_with_empty_fields() {
        let mut form = filled("I have a project for you.");
        form.begin_submit(ValidationMode::Strict).unwrap();
        form.finish(Ok(()));

        form.send_another();
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn finish_outside_submitting_is_ignored() {
        let mut form = filled("I have a project for you.");
        form.finish(Ok(()));
        assert_eq!(form.status, SubmitStatus::Idle);
        assert_eq!(form.name, "Ada Lovelace");
    }
}
