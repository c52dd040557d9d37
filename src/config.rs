// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! A `.env` file is honored for local development.

use std::env;

/// Google's reCAPTCHA verification endpoint.
pub const DEFAULT_RECAPTCHA_VERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";

/// Origin of the hosted landing page allowed to call this server cross-origin.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://fit-script-website.vercel.app";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Environment Variables (non-sensitive) ---
    /// Base URL of the FitScript API
    pub api_url: String,
    /// reCAPTCHA site key embedded in the landing page
    pub recaptcha_public: String,
    /// reCAPTCHA verification endpoint
    pub recaptcha_verify_url: String,
    /// Public URL this site is served from (decides cookie `Secure`)
    pub site_url: String,
    /// Extra origin allowed by CORS
    pub allowed_origin: String,
    /// Server port
    pub port: u16,

    // --- Secrets ---
    /// reCAPTCHA secret key, never sent to the browser
    pub recaptcha_private: String,
    /// Shared signature presented to the login endpoint
    pub website_signature: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            api_url: env::var("API_URL")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .map_err(|_| ConfigError::Missing("API_URL"))?,
            recaptcha_public: env::var("RECAPTCHA_PUBLIC").unwrap_or_default(),
            recaptcha_verify_url: env::var("RECAPTCHA_VERIFY_URL")
                .unwrap_or_else(|_| DEFAULT_RECAPTCHA_VERIFY_URL.to_string()),
            site_url: env::var("SITE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string()),
            allowed_origin: env::var("ALLOWED_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),

            recaptcha_private: env::var("RECAPTCHA_PRIVATE")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("RECAPTCHA_PRIVATE"))?,
            website_signature: env::var("WEBSITE_SIGNATURE")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("WEBSITE_SIGNATURE"))?,
        })
    }

    /// Config for tests, pointed at a fake API.
    pub fn test_default() -> Self {
        Self {
            api_url: "http://127.0.0.1:9".to_string(),
            recaptcha_public: "test_site_key".to_string(),
            recaptcha_verify_url: "http://127.0.0.1:9/recaptcha/api/siteverify".to_string(),
            site_url: "http://localhost:3000".to_string(),
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
            port: 3000,
            recaptcha_private: "test_recaptcha_secret".to_string(),
            website_signature: "test_signature".to_string(),
        }
    }

    /// Whether cookies should carry the `Secure` attribute.
    pub fn secure_cookies(&self) -> bool {
        self.site_url.starts_with("https://")
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("API_URL", "https://api.fitscript.test/");
        env::set_var("RECAPTCHA_PRIVATE", " secret ");
        env::set_var("WEBSITE_SIGNATURE", "signature");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.api_url, "https://api.fitscript.test");
        assert_eq!(config.recaptcha_private, "secret");
        assert_eq!(config.website_signature, "signature");
        assert_eq!(config.recaptcha_verify_url, DEFAULT_RECAPTCHA_VERIFY_URL);
    }

    #[test]
    fn test_secure_cookies_follow_site_scheme() {
        let mut config = Config::test_default();
        assert!(!config.secure_cookies());

        config.site_url = "https://fitscript.app".to_string();
        assert!(config.secure_cookies());
    }
}
