// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! FitScript API client.
//!
//! Handles:
//! - Login with the website signature
//! - Session token verification
//! - Signup and phone lookups
//! - Goal, frequency and benchmark updates
//! - Dashboard data retrieval

use crate::error::AppError;
use crate::models::DashboardData;
use anyhow::Context;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

/// FitScript API client.
#[derive(Clone)]
pub struct FitScriptClient {
    http: reqwest::Client,
    base_url: String,
    website_signature: String,
}

/// Generic `{ message }` acknowledgement.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// Successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Claims the API decoded from a session token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VerifiedToken {
    pub phone: String,
}

#[derive(Deserialize)]
struct VerifyTokenResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    decoded: Option<VerifiedToken>,
}

#[derive(Deserialize)]
struct CheckPhoneResponse {
    valid: bool,
}

/// Which goal field an update targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalSetting {
    Value,
    Frequency,
}

#[derive(Serialize)]
struct UpdateGoalRequest<'a> {
    setting: GoalSetting,
    #[serde(rename = "newValue")]
    new_value: &'a str,
}

#[derive(Serialize)]
struct UpdateBenchmarkRequest<'a> {
    #[serde(rename = "type")]
    exercise_type: &'a str,
    value: &'a str,
    units: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl FitScriptClient {
    /// Create a client for the API at `base_url`.
    pub fn new(http: reqwest::Client, base_url: &str, website_signature: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            website_signature: website_signature.to_string(),
        }
    }

    /// Exchange phone + password for a session token.
    ///
    /// The request is authorized with the base64-encoded website signature
    /// rather than a customer token.
    pub async fn login(&self, phone: &str, password: &str) -> Result<LoginResponse, AppError> {
        let url = format!("{}/auth/login", self.base_url);
        let body = serde_json::json!({
            "phone": phone,
            "password": password,
        });

        let response = self
            .http
            .post(&url)
            .bearer_auth(STANDARD.encode(self.website_signature.as_bytes()))
            .json(&body)
            .send()
            .await
            .context("Login request failed")?;

        self.check_response_json(response).await
    }

    /// Ask the API to verify a session token and return its phone claim.
    pub async fn verify_token(&self, token: &str) -> Result<VerifiedToken, AppError> {
        let url = format!("{}/auth/verify-token", self.base_url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .send()
            .await
            .context("Token verification request failed")?;

        let verified: VerifyTokenResponse = self.check_response_json(response).await?;
        match verified.decoded {
            Some(claims) if verified.success => Ok(claims),
            _ => {
                tracing::debug!(message = ?verified.message, "Token rejected by API");
                Err(AppError::Unauthorized)
            }
        }
    }

    /// Whether `phone` belongs to a registered customer.
    pub async fn check_phone(&self, phone: &str) -> Result<bool, AppError> {
        let url = format!(
            "{}/customer/check-phone/{}",
            self.base_url,
            urlencoding::encode(phone)
        );

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .context("Phone check request failed")?;

        let checked: CheckPhoneResponse = self.check_response_json(response).await?;
        Ok(checked.valid)
    }

    /// Register a new customer.
    pub async fn signup(&self, phone: &str, firstname: &str) -> Result<ApiMessage, AppError> {
        let url = format!("{}/signup", self.base_url);
        let body = serde_json::json!({
            "phone": phone,
            "firstname": firstname,
        });

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("Signup request failed")?;

        self.check_response_json(response).await
    }

    /// Update the goal text or the workout frequency.
    pub async fn update_goal(
        &self,
        token: &str,
        setting: GoalSetting,
        new_value: &str,
    ) -> Result<ApiMessage, AppError> {
        let url = format!("{}/customer/update-goal", self.base_url);

        let response = self
            .http
            .put(&url)
            .bearer_auth(token)
            .json(&UpdateGoalRequest { setting, new_value })
            .send()
            .await
            .context("Goal update request failed")?;

        self.check_response_json(response).await
    }

    /// Record a new value for one benchmark.
    pub async fn update_benchmark(
        &self,
        token: &str,
        exercise_type: &str,
        value: &str,
        units: &str,
    ) -> Result<ApiMessage, AppError> {
        let url = format!("{}/customer/update-benchmark", self.base_url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(&UpdateBenchmarkRequest {
                exercise_type,
                value,
                units,
            })
            .send()
            .await
            .context("Benchmark update request failed")?;

        self.check_response_json(response).await
    }

    /// Fetch everything the dashboard shows for `phone`.
    pub async fn dashboard_data(&self, token: &str, phone: &str) -> Result<DashboardData, AppError> {
        let url = format!(
            "{}/dashboard/data/{}",
            self.base_url,
            urlencoding::encode(phone)
        );

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .context("Dashboard data request failed")?;

        self.check_response_json(response).await
    }

    /// Check response and parse JSON body.
    ///
    /// Non-2xx responses become [`AppError::Upstream`] carrying the API's
    /// `message` field when the body has one.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .filter(|m| !m.is_empty());

            tracing::warn!(
                status = status.as_u16(),
                message = ?message,
                "FitScript API rejected request"
            );
            return Err(AppError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let parsed = response
            .json::<T>()
            .await
            .context("Failed to parse FitScript API response")?;
        Ok(parsed)
    }
}
