use once_cell::sync::Lazy;
use regex::Regex;

use crate::handlers::contact_dtos::ContactRequest;

pub const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

/// Returns the message of the first rule the request breaks, checked in form order.
pub fn validate_contact(req: &ContactRequest) -> Result<(), &'static str> {
    if req.name.trim().is_empty() {
        return Err("Please enter your name");
    }
    if req.email.trim().is_empty() {
        return Err("Please enter your email");
    }
    if !is_valid_email(&req.email) {
        return Err("Please enter a valid email address");
    }
    let message = req.message.trim();
    if message.is_empty() {
        return Err("Please enter a message");
    }
    if message.chars().count() < MIN_MESSAGE_CHARS {
        return Err("Message must be at least 10 characters");
    }
    Ok(())
}
