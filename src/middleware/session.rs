// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session gate for dashboard pages.
//!
//! The bearer token lives in the `access_token` cookie. The API verifies it
//! and reports which phone it was issued for; a dashboard is only served when
//! that phone matches the one in the URL.

use crate::services::FitScriptClient;
use crate::AppState;
use axum::{
    extract::{Path, Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use std::sync::Arc;

/// Cookie holding the session bearer token.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Where the generic not-found page lives.
pub const NOT_FOUND_PATH: &str = "/404";

/// Authenticated dashboard session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Phone from the URL, confirmed by the API
    pub phone: String,
    /// Bearer token for API calls made on the customer's behalf
    pub token: String,
}

/// What the gate decided for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    Granted(Session),
    /// Redirect to the given location.
    Redirect(String),
}

/// Phone-scoped login page.
pub fn login_redirect(phone: &str) -> String {
    format!("/dashboard/login?phone={}", urlencoding::encode(phone))
}

/// Dashboard page for `phone`.
pub fn dashboard_path(phone: &str) -> String {
    format!("/dashboard/{}", urlencoding::encode(phone))
}

/// Decide the outcome once the API has (or hasn't) verified the token.
///
/// `verified_phone` is the phone claim the API decoded, `None` if
/// verification failed.
pub fn gate_decision(
    requested_phone: &str,
    token: String,
    verified_phone: Option<&str>,
) -> GateOutcome {
    match verified_phone {
        Some(phone) if phone == requested_phone => GateOutcome::Granted(Session {
            phone: requested_phone.to_string(),
            token,
        }),
        _ => GateOutcome::Redirect(login_redirect(requested_phone)),
    }
}

/// Session token from the request cookies, if present and non-empty.
pub fn session_token(jar: &CookieJar) -> Option<String> {
    jar.get(ACCESS_TOKEN_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|t| !t.is_empty())
}

/// Run the gate for `phone`: one verification round trip, no retry.
pub async fn check_session(api: &FitScriptClient, jar: &CookieJar, phone: &str) -> GateOutcome {
    let Some(token) = session_token(jar) else {
        tracing::debug!(phone = %phone, "No session cookie, redirecting to login");
        return GateOutcome::Redirect(login_redirect(phone));
    };

    let verified = match api.verify_token(&token).await {
        Ok(claims) => Some(claims.phone),
        Err(e) => {
            tracing::info!(phone = %phone, error = %e, "Session token verification failed");
            None
        }
    };

    if let Some(claimed) = verified.as_deref().filter(|p| *p != phone) {
        tracing::warn!(
            requested = %phone,
            claimed = %claimed,
            "Session token belongs to a different phone"
        );
    }

    gate_decision(phone, token, verified.as_deref())
}

/// Middleware that requires a verified session for the `{phone}` in the path.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    Path(phone): Path<String>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    match check_session(&state.api, &jar, &phone).await {
        GateOutcome::Granted(session) => {
            request.extensions_mut().insert(session);
            next.run(request).await
        }
        GateOutcome::Redirect(location) => Redirect::to(&location).into_response(),
    }
}

/// Session cookie as issued after login (valid for one day, like the token).
pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((ACCESS_TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(time::Duration::days(1))
        .build()
}

/// Cookie that clears the session on logout. Attributes match
/// [`session_cookie`] so browsers drop the right cookie.
pub fn session_removal_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((ACCESS_TOKEN_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}
