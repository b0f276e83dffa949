//! Creation form input and its rendered state.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for custom code validation.
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Form-encoded body of `POST /links`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLinkForm {
    /// The destination URL to shorten (required, must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Optional custom short code; blank means backend-generated.
    #[serde(default)]
    pub short_code: String,
}

impl CreateLinkForm {
    /// The custom code the user entered, or `None` when left blank.
    pub fn custom_code(&self) -> Option<String> {
        let trimmed = self.short_code.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Validates the form before any backend call is made.
    ///
    /// Returns the user-facing message on failure.
    pub fn check(&self) -> Result<(), &'static str> {
        if Validate::validate(self).is_err() {
            return Err("Invalid URL format");
        }

        if let Some(code) = self.custom_code() {
            if !CUSTOM_CODE_REGEX.is_match(&code) {
                return Err("Short code may only contain letters, digits, '-' and '_'");
            }
        }

        Ok(())
    }
}

/// Rendered state of the creation form panel.
#[derive(Debug, Clone)]
pub struct CreateFormView {
    /// Whether the panel renders open (after a failed submit).
    pub open: bool,
    pub url: String,
    pub short_code: String,
    pub error: Option<String>,
}

impl CreateFormView {
    /// A pristine, closed form.
    pub fn closed() -> Self {
        Self {
            open: false,
            url: String::new(),
            short_code: String::new(),
            error: None,
        }
    }

    /// Re-opens the form with the entered values intact and an error message.
    pub fn reopened(form: &CreateLinkForm, error: impl Into<String>) -> Self {
        Self {
            open: true,
            url: form.url.clone(),
            short_code: form.short_code.clone(),
            error: Some(error.into()),
        }
    }
}
