//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Required Variables
//!
//! None — every variable has a development default.
//!
//! ## Variables
//!
//! - `BACKEND_URL` - Origin of the shortener backend API
//!   (default: `http://localhost:5000`)
//! - `SHORT_BASE_URL` - Origin used when displaying and copying short URLs;
//!   falls back to `BACKEND_URL` when unset. Set this when the backend sits
//!   behind a public domain that differs from the API address.
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `HTTP_TIMEOUT_SECONDS` - Backend request timeout (default: 10)

use anyhow::Result;
use std::env;
use url::Url;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Origin of the shortener backend the dashboard calls.
    pub backend_url: String,
    /// Origin used to build displayed short URLs. `None` means `backend_url`.
    pub short_base_url: Option<String>,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Timeout for each backend request in seconds (`HTTP_TIMEOUT_SECONDS`).
    pub http_timeout_seconds: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let backend_url =
            env::var("BACKEND_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());
        let short_base_url = env::var("SHORT_BASE_URL").ok().filter(|v| !v.is_empty());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let http_timeout_seconds = env::var("HTTP_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Self {
            backend_url,
            short_base_url,
            listen_addr,
            log_level,
            log_format,
            http_timeout_seconds,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `BACKEND_URL` or `SHORT_BASE_URL` is not a valid http(s) URL
    /// - `LOG_FORMAT` is not `text` or `json`
    /// - `LISTEN` is not in `host:port` form
    /// - `HTTP_TIMEOUT_SECONDS` is outside 1..=120
    pub fn validate(&self) -> Result<()> {
        validate_http_origin("BACKEND_URL", &self.backend_url)?;

        if let Some(ref base) = self.short_base_url {
            validate_http_origin("SHORT_BASE_URL", base)?;
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.http_timeout_seconds == 0 || self.http_timeout_seconds > 120 {
            anyhow::bail!(
                "HTTP_TIMEOUT_SECONDS must be between 1 and 120, got {}",
                self.http_timeout_seconds
            );
        }

        Ok(())
    }

    /// Origin used for displayed short URLs.
    ///
    /// Falls back to the backend API origin when `SHORT_BASE_URL` is unset,
    /// which matches a backend that serves redirects on the same address.
    pub fn short_base(&self) -> &str {
        self.short_base_url.as_deref().unwrap_or(&self.backend_url)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Backend: {}", self.backend_url);
        tracing::info!("  Short URL base: {}", self.short_base());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Backend timeout: {}s", self.http_timeout_seconds);
    }
}

/// Checks that a configured origin parses as an absolute http(s) URL.
fn validate_http_origin(name: &str, value: &str) -> Result<()> {
    let url = Url::parse(value)
        .map_err(|e| anyhow::anyhow!("{} is not a valid URL ('{}'): {}", name, value, e))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!(
            "{} must use http or https, got '{}'",
            name,
            url.scheme()
        );
    }

    Ok(())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
