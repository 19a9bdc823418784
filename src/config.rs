//! Site configuration.
//!
//! The page may embed a `<script type="application/json" id="folio-config">`
//! island; anything it omits keeps the defaults below. The nested `reveal`
//! object is handed to [`reveal::RevealCore`] unchanged.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use reveal::{ConfigError, RevealConfig};

/// DOM id of the JSON island.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

#[derive(Debug, thiserror::Error)]
pub enum SiteConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Reveal(#[from] ConfigError),
    #[error("site config field `{0}` must not be empty or zero")]
    Empty(&'static str),
}

/// Typing hero phrases and pacing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypingConfig {
    pub phrases: Vec<String>,
    pub type_ms: u32,
    pub delete_ms: u32,
    /// Pause with the full phrase shown.
    pub hold_ms: u32,
    /// Pause on an empty line before the next phrase.
    pub next_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            phrases: ["Web Developer", "Video Editor", "Graphic Designer", "Digital Marketer", "Course Creator"]
                .map(str::to_owned)
                .to_vec(),
            type_ms: 100,
            delete_ms: 50,
            hold_ms: 2000,
            next_ms: 500,
        }
    }
}

/// Browser storage keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorageKeys {
    /// localStorage: `light` / `dark`.
    pub theme: String,
    /// localStorage: cookie consent flag.
    pub cookie_consent: String,
    /// sessionStorage: course picked on the landing page.
    pub selected_course: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            theme: "theme".to_owned(),
            cookie_consent: "cookieConsent".to_owned(),
            selected_course: "selectedCourse".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// `log` level name for the console logger (`error` .. `trace`).
    pub log_level: String,
    pub typing: TypingConfig,
    pub storage: StorageKeys,
    pub upi_id: String,
    /// Price used when no course was selected.
    pub default_price: f64,
    pub toast_ms: u32,
    pub toast_exit_ms: u32,
    pub loading_hide_ms: u32,
    pub loading_remove_ms: u32,
    pub cookie_banner_delay_ms: u32,
    pub filter_hide_ms: u32,
    pub contact_submit_ms: u32,
    pub upi_hint_ms: u32,
    pub reveal: RevealConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            typing: TypingConfig::default(),
            storage: StorageKeys::default(),
            upi_id: "ankit@paytm".to_owned(),
            default_price: 1999.0,
            toast_ms: 5000,
            toast_exit_ms: 300,
            loading_hide_ms: 1500,
            loading_remove_ms: 500,
            cookie_banner_delay_ms: 2000,
            filter_hide_ms: 300,
            contact_submit_ms: 2000,
            upi_hint_ms: 3000,
            reveal: RevealConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate the JSON island contents.
    pub fn from_json(raw: &str) -> Result<Self, SiteConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SiteConfigError> {
        self.reveal.validate()?;
        if self.typing.phrases.iter().all(|p| p.trim().is_empty()) {
            return Err(SiteConfigError::Empty("typing.phrases"));
        }
        if self.typing.type_ms == 0 || self.typing.delete_ms == 0 {
            return Err(SiteConfigError::Empty("typing.typeMs"));
        }
        if self.upi_id.trim().is_empty() {
            return Err(SiteConfigError::Empty("upiId"));
        }
        Ok(())
    }

    /// Console log level; unknown names fall back to `Info`.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
