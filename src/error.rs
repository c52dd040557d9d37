// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication required")]
    Unauthorized,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// The FitScript API rejected the call. `message` is the API's own
    /// `message` field when it sent one.
    #[error("FitScript API error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Upstream {
        status: u16,
        message: Option<String>,
    },

    #[error("reCAPTCHA error: {0}")]
    Recaptcha(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Message suitable for showing to the user in a toast, if the error
    /// carries one.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            AppError::Upstream { message, .. } => message.as_deref(),
            AppError::BadRequest(msg) => Some(msg),
            _ => None,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    /// Keeps the first human-readable message from the failed rules.
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid input".to_string());
        AppError::BadRequest(message)
    }
}

/// JSON error body, same shape as the FitScript API's own replies.
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, self.to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Upstream { message, .. } => (
                StatusCode::BAD_GATEWAY,
                message.clone().unwrap_or_else(|| "FitScript API error".to_string()),
            ),
            AppError::Recaptcha(msg) => {
                tracing::error!(error = %msg, "reCAPTCHA verification error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error verifying ReCAPTCHA".to_string(),
                )
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            success: false,
            message,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
