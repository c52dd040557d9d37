// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! reCAPTCHA verification.
//!
//! The browser only ever sees the site key; challenge responses are checked
//! here with the server-held secret.

use crate::error::AppError;
use serde::Deserialize;

/// Verifies reCAPTCHA challenge responses.
#[derive(Clone)]
pub struct RecaptchaVerifier {
    http: reqwest::Client,
    verify_url: String,
    secret: String,
}

#[derive(Debug, Deserialize)]
struct SiteVerifyResponse {
    success: bool,
    #[serde(default, rename = "error-codes")]
    error_codes: Vec<String>,
}

impl RecaptchaVerifier {
    pub fn new(http: reqwest::Client, verify_url: &str, secret: &str) -> Self {
        Self {
            http,
            verify_url: verify_url.to_string(),
            secret: secret.to_string(),
        }
    }

    /// Forward a challenge response to the verification service.
    ///
    /// Returns `Ok(false)` when the service rejects the response and an error
    /// only when the service could not be reached or answered garbage.
    pub async fn verify(&self, response: &str) -> Result<bool, AppError> {
        if response.trim().is_empty() {
            return Ok(false);
        }

        let reply = self
            .http
            .post(&self.verify_url)
            .form(&[("secret", self.secret.as_str()), ("response", response)])
            .send()
            .await
            .map_err(|e| AppError::Recaptcha(format!("Verification request failed: {}", e)))?;

        if !reply.status().is_success() {
            return Err(AppError::Recaptcha(format!(
                "Verification service returned HTTP {}",
                reply.status()
            )));
        }

        let verified: SiteVerifyResponse = reply
            .json()
            .await
            .map_err(|e| AppError::Recaptcha(format!("Invalid verification response: {}", e)))?;

        if !verified.success {
            tracing::info!(error_codes = ?verified.error_codes, "reCAPTCHA response rejected");
        }
        Ok(verified.success)
    }
}
