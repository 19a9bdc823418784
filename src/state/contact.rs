//! Contact form validation.
//!
//! Rules run on the trimmed value. Only the first failing rule is reported;
//! the `Display` text of [`FieldError`] is what the page shows under the field.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use regex::Regex;

pub const SUBMIT_INVALID: &str = "Please fix the errors below.";
pub const SUBMIT_SENT: &str = "Thank you! Your message has been sent successfully. I'll get back to you soon.";
pub const SENDING_LABEL: &str = "Sending...";

/// Minimum message length, in characters.
pub const MESSAGE_MIN_CHARS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{label} is required.")]
    Required { label: String },
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a valid phone number.")]
    InvalidPhone,
    #[error("Message must be at least 10 characters long.")]
    MessageTooShort,
}

/// Human label for a form field name; unknown names are shown as-is.
#[must_use]
pub fn field_label(name: &str) -> String {
    match name {
        "name" => "Name",
        "email" => "Email",
        "phone" => "Phone",
        "message" => "Message",
        "service" => "Service",
        "budget" => "Budget",
        other => other,
    }
    .to_owned()
}

/// DOM id of the element that shows a field's error.
#[must_use]
pub fn error_slot_id(name: &str) -> String {
    format!("{name}-error")
}

/// One form control as read from the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInput<'a> {
    pub name: &'a str,
    pub value: &'a str,
    pub required: bool,
}

pub struct Validator {
    email: Regex,
    phone: Regex,
}

impl Validator {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            email: Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")?,
            phone: Regex::new(r"^\+?[1-9][0-9]{0,15}$")?,
        })
    }

    pub fn validate(&self, field: &FieldInput<'_>) -> Result<(), FieldError> {
        let value = field.value.trim();
        if value.is_empty() {
            return if field.required {
                Err(FieldError::Required { label: field_label(field.name) })
            } else {
                Ok(())
            };
        }
        match field.name {
            "email" if !self.email.is_match(value) => Err(FieldError::InvalidEmail),
            "phone" => {
                let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
                if self.phone.is_match(&compact) { Ok(()) } else { Err(FieldError::InvalidPhone) }
            }
            "message" if value.chars().count() < MESSAGE_MIN_CHARS => Err(FieldError::MessageTooShort),
            _ => Ok(()),
        }
    }

    /// Validate every required field; returns the failures by field name.
    #[must_use]
    pub fn validate_submission<'a>(&self, fields: &[FieldInput<'a>]) -> Vec<(&'a str, FieldError)> {
        fields
            .iter()
            .filter(|f| f.required)
            .filter_map(|f| self.validate(f).err().map(|e| (f.name, e)))
            .collect()
    }
}
