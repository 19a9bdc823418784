//! Cookie consent banner.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Stored value once the visitor accepts.
pub const CONSENT_ACCEPTED: &str = "accepted";

pub const SAVED_MESSAGE: &str = "Cookie preferences saved.";
pub const MANAGE_MESSAGE: &str = "Cookie management panel would open here.";

/// Whether the banner should appear for a stored consent value.
#[must_use]
pub fn should_show(stored: Option<&str>) -> bool {
    stored.is_none_or(str::is_empty)
}
