// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! reCAPTCHA verification proxy for browser-side checks.

use axum::{
    extract::{Path, State},
    http::Method,
    routing::any,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/validateRecaptcha/{response}", any(validate_recaptcha))
}

#[derive(Debug, Serialize)]
pub struct RecaptchaReply {
    pub success: bool,
}

/// GET only; the challenge response is the last path segment.
///
/// Rejections answer 400 and verifier outages 500, both with the usual
/// `{ success: false, message }` body.
async fn validate_recaptcha(
    State(state): State<Arc<AppState>>,
    method: Method,
    Path(response): Path<String>,
) -> Result<Json<RecaptchaReply>> {
    if method != Method::GET {
        return Err(AppError::MethodNotAllowed);
    }

    if state.recaptcha.verify(&response).await? {
        Ok(Json(RecaptchaReply { success: true }))
    } else {
        tracing::info!("reCAPTCHA rejected");
        Err(AppError::BadRequest("Invalid captcha".to_string()))
    }
}
