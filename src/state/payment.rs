//! Simulated course checkout.
//!
//! No money moves: the landing page stores the chosen course in session
//! storage, and the payment page builds a UPI deep link, fakes a card
//! gateway with a toast, and confirms once a screenshot is uploaded.

#[cfg(test)]
#[path = "payment_test.rs"]
mod payment_test;

use serde::{Deserialize, Serialize};

pub const PAYMENT_PAGE: &str = "payment.html";

pub const UPI_HINT: &str =
    "If the UPI app didn't open, please use the QR code or upload payment screenshot below.";
pub const UPI_COPIED: &str = "UPI ID copied to clipboard!";
pub const UPLOAD_OK: &str = "Screenshot uploaded! Please click \"Confirm Payment\" below.";
pub const GATEWAY_DEMO: &str =
    "Razorpay integration would be implemented here. For demo purposes, please use UPI payment option.";

#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("Please upload a payment screenshot first.")]
    MissingScreenshot,
    #[error("Please upload an image file.")]
    NotAnImage { mime: String },
    #[error("stored course selection is unreadable: {0}")]
    StoredCourse(#[from] serde_json::Error),
}

/// Course picked with "Buy now", kept in session storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSelection {
    pub id: String,
    pub name: String,
    pub price: f64,
    /// Milliseconds since the epoch when the course was picked.
    pub timestamp: f64,
}

impl CourseSelection {
    pub fn to_json(&self) -> Result<String, PaymentError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, PaymentError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Price as shown on the summary, e.g. `₹1999`.
    #[must_use]
    pub fn price_label(&self) -> String {
        rupees(self.price)
    }
}

#[must_use]
pub fn rupees(amount: f64) -> String {
    format!("₹{amount}")
}

/// Amount to charge: the selected course's price or the default.
#[must_use]
pub fn amount(selection: Option<&CourseSelection>, default_price: f64) -> f64 {
    selection.map_or(default_price, |s| s.price)
}

/// Gateway amount in paise.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn amount_paise(selection: Option<&CourseSelection>, default_price: f64) -> u64 {
    (amount(selection, default_price) * 100.0).round().max(0.0) as u64
}

/// UPI deep link opened by the app buttons.
#[must_use]
pub fn upi_url(upi_id: &str, amount: f64) -> String {
    format!("upi://pay?pa={upi_id}&am={amount}&cu=INR&tn=Course%20Purchase")
}

/// Accept only image uploads.
pub fn check_upload(mime: &str) -> Result<(), PaymentError> {
    if mime.starts_with("image/") {
        Ok(())
    } else {
        Err(PaymentError::NotAnImage { mime: mime.to_owned() })
    }
}

/// Payment page state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Checkout {
    pub selection: Option<CourseSelection>,
    screenshot: bool,
    active_option: Option<usize>,
}

impl Checkout {
    #[must_use]
    pub fn new(selection: Option<CourseSelection>) -> Self {
        Self { selection, ..Self::default() }
    }

    /// Payment option header clicked; exactly one option is active.
    pub fn select_option(&mut self, index: usize) {
        self.active_option = Some(index);
    }

    #[must_use]
    pub fn active_option(&self) -> Option<usize> {
        self.active_option
    }

    /// Record an upload. Non-images are rejected and leave the state unchanged.
    pub fn upload(&mut self, mime: &str) -> Result<(), PaymentError> {
        check_upload(mime)?;
        self.screenshot = true;
        Ok(())
    }

    /// "Confirm payment": requires a screenshot.
    pub fn complete(&self) -> Result<(), PaymentError> {
        if self.screenshot { Ok(()) } else { Err(PaymentError::MissingScreenshot) }
    }
}
