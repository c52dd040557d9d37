// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! One-shot notifications carried across a redirect in a cookie.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};

pub const TOAST_COOKIE: &str = "fitscript_toast";

const UNKNOWN_ERROR: &str = "Unknown error occurred";
const SIGNUP_ERROR: &str = "Error signing up!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

/// A transient notification shown on the next page render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    /// Success toast showing the API's message, or `fallback` without one.
    pub fn api_success(message: Option<&str>, fallback: &str) -> Self {
        Self::success(message.filter(|m| !m.is_empty()).unwrap_or(fallback))
    }

    /// Dashboard edit failure.
    pub fn error(message: Option<&str>) -> Self {
        let message = match message.filter(|m| !m.is_empty()) {
            Some(m) => format!("Error: {}", m),
            None => UNKNOWN_ERROR.to_string(),
        };
        Self {
            kind: ToastKind::Error,
            message,
        }
    }

    /// Signup failure.
    pub fn signup_error(message: Option<&str>) -> Self {
        let message = match message.filter(|m| !m.is_empty()) {
            Some(m) => format!("Error signing up: {}", m),
            None => SIGNUP_ERROR.to_string(),
        };
        Self {
            kind: ToastKind::Error,
            message,
        }
    }

    fn encode(&self) -> Option<String> {
        let json = serde_json::to_vec(self).ok()?;
        Some(URL_SAFE_NO_PAD.encode(json))
    }

    fn decode(raw: &str) -> Option<Self> {
        let bytes = URL_SAFE_NO_PAD.decode(raw).ok()?;
        serde_json::from_slice(&bytes).ok()
    }
}

/// Stash `toast` for the next page render.
pub fn set(jar: CookieJar, toast: &Toast, secure: bool) -> CookieJar {
    let Some(value) = toast.encode() else {
        return jar;
    };

    jar.add(
        Cookie::build((TOAST_COOKIE, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(secure),
    )
}

/// Take the pending toast, if any, clearing the cookie.
pub fn take(jar: CookieJar) -> (CookieJar, Option<Toast>) {
    let Some(raw) = jar.get(TOAST_COOKIE).map(|c| c.value().to_string()) else {
        return (jar, None);
    };

    let toast = Toast::decode(&raw);
    if toast.is_none() {
        tracing::debug!("Discarding malformed toast cookie");
    }

    (jar.remove(Cookie::build(TOAST_COOKIE).path("/")), toast)
}
