// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard login and logout.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use std::sync::Arc;

use crate::middleware::session::{
    check_session, dashboard_path, login_redirect, session_cookie, session_removal_cookie,
    session_token, GateOutcome,
};
use crate::toast::{self, Toast};
use crate::views::{self, LoginView};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard/login", get(login_page).post(login))
        .route("/dashboard/logout", post(logout))
}

#[derive(Deserialize, Default)]
pub struct LoginParams {
    #[serde(default)]
    phone: Option<String>,
}

/// Undo query-string decoding of a leading `+` (which arrives as a space).
pub fn normalize_phone(raw: Option<&str>) -> String {
    match raw {
        Some(p) if p.starts_with(' ') => format!("+{}", p.trim()),
        Some(p) => p.trim().to_string(),
        None => String::new(),
    }
}

/// Login page. `/dashboard/login?phone=...` prefills the phone; without it
/// this is the generic login page.
async fn login_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LoginParams>,
    jar: CookieJar,
) -> Response {
    let phone = normalize_phone(params.phone.as_deref());

    // Already signed in as this phone: skip the form
    if !phone.is_empty() && session_token(&jar).is_some() {
        if let GateOutcome::Granted(session) = check_session(&state.api, &jar, &phone).await {
            tracing::debug!(phone = %session.phone, "Valid session on login page");
            return Redirect::to(&dashboard_path(&session.phone)).into_response();
        }
    }

    let unknown_phone = if phone.is_empty() {
        false
    } else {
        match state.api.check_phone(&phone).await {
            Ok(valid) => !valid,
            Err(e) => {
                tracing::warn!(error = %e, "Phone check failed");
                false
            }
        }
    };

    let (jar, toast) = toast::take(jar);
    let view = LoginView {
        phone: &phone,
        unknown_phone,
        toast: toast.as_ref(),
    };

    (jar, views::login::page(&view)).into_response()
}

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    phone: String,
    #[serde(default)]
    password: String,
}

/// Exchange credentials for a session token and store it in the cookie.
async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let secure = state.config.secure_cookies();
    let phone = form.phone.trim();

    match state.api.login(phone, &form.password).await {
        Ok(login) => {
            tracing::info!(phone = %phone, "Customer logged in");
            let jar = jar.add(session_cookie(login.token, secure));
            (jar, Redirect::to(&dashboard_path(phone))).into_response()
        }
        Err(e) => {
            tracing::info!(phone = %phone, error = %e, "Login rejected");
            let toast = Toast::error(e.user_message());
            (toast::set(jar, &toast, secure), Redirect::to(&login_redirect(phone))).into_response()
        }
    }
}

/// Drop the session cookie.
async fn logout(State(state): State<Arc<AppState>>, jar: CookieJar) -> (CookieJar, Redirect) {
    let secure = state.config.secure_cookies();
    let jar = jar.remove(session_removal_cookie(secure));
    let jar = toast::set(jar, &Toast::success("You have been logged out"), secure);
    (jar, Redirect::to("/"))
}
