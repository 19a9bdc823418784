//! Progress bar helpers.
//!
//! The engine never interpolates width itself. It writes a CSS transition,
//! waits a short pre-delay, then writes the final width once; the browser
//! animates between the two.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

/// Normalize a `data-width` value into a percentage string.
///
/// `"80%"` and `"80"` both become `"80%"`; absent or non-numeric values become `"0%"`.
#[must_use]
pub fn normalize_width(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim) else {
        return "0%".to_owned();
    };
    let number = raw.strip_suffix('%').unwrap_or(raw).trim();
    match number.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => format!("{number}%"),
        _ => "0%".to_owned(),
    }
}

/// CSS `transition` value for a width animation.
#[must_use]
pub fn transition_directive(duration_ms: u32, easing: &str) -> String {
    format!("width {duration_ms}ms {easing}")
}
