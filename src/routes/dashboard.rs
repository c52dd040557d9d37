// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session-gated dashboard routes.
//!
//! The session gate is applied in routes/mod.rs; every handler here sees a
//! verified [`Session`] for the `{phone}` in the path.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Extension, Form, Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

use crate::error::AppError;
use crate::middleware::session::{dashboard_path, Session, NOT_FOUND_PATH};
use crate::models::{Exercise, FrequencyBitmap};
use crate::services::{ApiMessage, EditableField, GoalSetting};
use crate::time_utils::current_greeting;
use crate::toast::{self, Toast};
use crate::views::{self, DashboardView, EditTarget};
use crate::AppState;

/// Dashboard routes (require a session).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard/{phone}", get(dashboard))
        .route("/dashboard/{phone}/goal", post(update_goal))
        .route("/dashboard/{phone}/frequency", post(update_frequency))
        .route("/dashboard/{phone}/benchmark", post(update_benchmark))
}

/// Edit-mode selection from the query string.
#[derive(Deserialize, Default)]
pub struct DashboardQuery {
    edit: Option<String>,
    draft: Option<String>,
    exercise: Option<String>,
}

impl DashboardQuery {
    /// Unknown `edit` values and malformed drafts are ignored.
    pub fn edit_target(&self) -> Option<EditTarget> {
        match self.edit.as_deref()? {
            "goal" => Some(EditTarget::Goal),
            "frequency" => Some(EditTarget::Frequency {
                draft: self.draft.as_deref().and_then(|d| d.parse().ok()),
            }),
            "benchmark" => self.exercise.as_ref().map(|e| EditTarget::Benchmark {
                exercise_type: e.clone(),
            }),
            _ => None,
        }
    }
}

/// Render the dashboard, or send the visitor to the not-found page when the
/// data can't be fetched.
async fn dashboard(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    Query(query): Query<DashboardQuery>,
    jar: CookieJar,
) -> Response {
    let data = match state.api.dashboard_data(&session.token, &session.phone).await {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!(phone = %session.phone, error = %e, "Dashboard data fetch failed");
            return Redirect::to(NOT_FOUND_PATH).into_response();
        }
    };

    let (jar, toast) = toast::take(jar);
    let view = DashboardView::new(
        &session.phone,
        current_greeting(),
        &data,
        query.edit_target(),
        toast.as_ref(),
    );

    (jar, views::dashboard::page(&view)).into_response()
}

/// Which editor button submitted the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    #[default]
    Confirm,
    Cancel,
}

/// Run a posted draft through the editor. `None` when the customer cancelled.
fn posted_draft<T: Clone>(draft: T, intent: Intent) -> Option<T> {
    let mut field = EditableField::from_posted(draft);
    if intent == Intent::Cancel {
        field.cancel();
    }
    field.confirm()
}

/// Back to the viewing dashboard without touching the API.
fn cancelled(session: &Session) -> Response {
    tracing::debug!(phone = %session.phone, "Edit cancelled");
    Redirect::to(&dashboard_path(&session.phone)).into_response()
}

#[derive(Deserialize, Validate)]
pub struct GoalForm {
    #[validate(length(min = 1, max = 500, message = "Goal must be between 1 and 500 characters"))]
    #[serde(default)]
    value: String,
    #[serde(default)]
    intent: Intent,
}

async fn update_goal(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    jar: CookieJar,
    Form(mut form): Form<GoalForm>,
) -> Response {
    form.value = form.value.trim().to_string();
    let Some(value) = posted_draft(form.value.clone(), form.intent) else {
        return cancelled(&session);
    };
    if let Err(errors) = form.validate() {
        return finish(&state, &session, jar, Err(errors.into()), "Goal updated");
    }

    let result = state
        .api
        .update_goal(&session.token, GoalSetting::Value, &value)
        .await;
    finish(&state, &session, jar, result, "Goal updated")
}

#[derive(Deserialize)]
pub struct FrequencyForm {
    #[serde(default)]
    frequency: String,
    #[serde(default)]
    intent: Intent,
}

async fn update_frequency(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    jar: CookieJar,
    Form(form): Form<FrequencyForm>,
) -> Response {
    let Some(draft) = posted_draft(form.frequency, form.intent) else {
        return cancelled(&session);
    };
    let bitmap = match draft.parse::<FrequencyBitmap>() {
        Ok(bitmap) => bitmap,
        Err(e) => {
            let err = AppError::BadRequest(format!("Invalid workout frequency: {}", e));
            return finish(&state, &session, jar, Err(err), "Workout frequency updated");
        }
    };

    let result = state
        .api
        .update_goal(&session.token, GoalSetting::Frequency, &bitmap.to_string())
        .await;
    finish(&state, &session, jar, result, "Workout frequency updated")
}

#[derive(Deserialize, Validate)]
pub struct BenchmarkForm {
    #[validate(length(min = 1, max = 32, message = "Unknown exercise"))]
    #[serde(default)]
    exercise: String,
    #[validate(length(min = 1, max = 32, message = "Benchmark must be between 1 and 32 characters"))]
    #[serde(default)]
    value: String,
    #[validate(length(max = 16, message = "Units must be at most 16 characters"))]
    #[serde(default)]
    units: String,
    #[serde(default)]
    intent: Intent,
}

impl BenchmarkForm {
    /// Trim every field and fill in the exercise's default units.
    fn normalize(&mut self) {
        self.exercise = self.exercise.trim().to_string();
        self.value = self.value.trim().to_string();
        self.units = match self.units.trim() {
            "" => Exercise::from_type(&self.exercise)
                .map(|e| e.default_units())
                .unwrap_or_default()
                .to_string(),
            units => units.to_string(),
        };
    }
}

async fn update_benchmark(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<Session>,
    jar: CookieJar,
    Form(mut form): Form<BenchmarkForm>,
) -> Response {
    form.normalize();
    let Some(value) = posted_draft(form.value.clone(), form.intent) else {
        return cancelled(&session);
    };
    if let Err(errors) = form.validate() {
        return finish(&state, &session, jar, Err(errors.into()), "Benchmark updated");
    }

    let result = state
        .api
        .update_benchmark(&session.token, &form.exercise, &value, &form.units)
        .await;
    finish(&state, &session, jar, result, "Benchmark updated")
}

/// Toast the outcome of an update and go back to the (viewing) dashboard.
fn finish(
    state: &AppState,
    session: &Session,
    jar: CookieJar,
    result: Result<ApiMessage, AppError>,
    fallback: &str,
) -> Response {
    let toast = match result {
        Ok(ack) => {
            tracing::info!(phone = %session.phone, "{}", fallback);
            Toast::api_success(ack.message.as_deref(), fallback)
        }
        Err(e) => {
            tracing::warn!(phone = %session.phone, error = %e, "Update rejected");
            Toast::error(e.user_message())
        }
    };

    let jar = toast::set(jar, &toast, state.config.secure_cookies());
    (jar, Redirect::to(&dashboard_path(&session.phone))).into_response()
}
