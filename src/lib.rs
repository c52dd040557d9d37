// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! FitScript website: landing page, signup and customer dashboard
//!
//! This crate serves the server-rendered FitScript site. Customer data lives
//! in the FitScript API; this server renders pages and forwards form
//! submissions on the customer's behalf.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;
pub mod toast;
pub mod views;

use config::Config;
use services::{FitScriptClient, RecaptchaVerifier};
use std::time::Duration;

/// Timeout for every outbound request (API and reCAPTCHA).
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub api: FitScriptClient,
    pub recaptcha: RecaptchaVerifier,
}

impl AppState {
    /// Build state with one HTTP client shared by all outbound services.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;

        let api = FitScriptClient::new(http.clone(), &config.api_url, &config.website_signature);
        let recaptcha = RecaptchaVerifier::new(
            http,
            &config.recaptcha_verify_url,
            &config.recaptcha_private,
        );

        Ok(Self {
            config,
            api,
            recaptcha,
        })
    }
}
