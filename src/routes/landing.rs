// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Landing page and signup form.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use axum_extra::extract::cookie::CookieJar;
use maud::Markup;
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

use crate::error::AppError;
use crate::services::{phone_input_accepted, validate_signup};
use crate::toast::{self, Toast};
use crate::views::{self, LandingView};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(landing))
        .route("/signup", post(signup))
}

/// Values echoed back into the form after a rejected submit.
#[derive(Deserialize, Default)]
pub struct LandingParams {
    #[serde(default)]
    phone: String,
    #[serde(default)]
    firstname: String,
}

async fn landing(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LandingParams>,
    jar: CookieJar,
) -> (CookieJar, Markup) {
    let (jar, toast) = toast::take(jar);

    let view = LandingView {
        recaptcha_site_key: &state.config.recaptcha_public,
        phone: &params.phone,
        firstname: &params.firstname,
        check: validate_signup(&params.phone, false),
        toast: toast.as_ref(),
    };

    (jar, views::landing::page(&view))
}

#[derive(Deserialize, Validate)]
pub struct SignupForm {
    #[serde(default)]
    phone: String,
    #[validate(length(min = 1, max = 64, message = "Please enter your first name"))]
    #[serde(default)]
    firstname: String,
    /// Filled in by the reCAPTCHA widget
    #[serde(default, rename = "g-recaptcha-response")]
    recaptcha_response: String,
}

/// Validate the form, verify the reCAPTCHA, then register with the API.
///
/// The reCAPTCHA token is single use, so it is only spent once everything
/// else on the form checks out.
async fn signup(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(mut form): Form<SignupForm>,
) -> Response {
    let secure = state.config.secure_cookies();
    form.phone = form.phone.trim().to_string();
    form.firstname = form.firstname.trim().to_string();

    if !phone_input_accepted(&form.phone) {
        let toast = Toast::signup_error(Some("Phone # may only contain digits, +, ( and )"));
        return (toast::set(jar, &toast, secure), Redirect::to("/")).into_response();
    }

    let blocked = |jar: CookieJar, toast: Toast, form: &SignupForm| {
        (
            toast::set(jar, &toast, secure),
            Redirect::to(&refill_url(&form.phone, &form.firstname)),
        )
            .into_response()
    };

    // Phone format first, as if the reCAPTCHA were already solved
    let phone_check = validate_signup(&form.phone, true);
    if !phone_check.allowed {
        tracing::info!(reason = phone_check.reason, "Signup blocked");
        return blocked(jar, Toast::signup_error(Some(phone_check.reason)), &form);
    }

    if let Err(errors) = form.validate() {
        let toast = Toast::signup_error(AppError::from(errors).user_message());
        return blocked(jar, toast, &form);
    }

    let recaptcha_ok = match state.recaptcha.verify(&form.recaptcha_response).await {
        Ok(ok) => ok,
        Err(e) => {
            tracing::error!(error = %e, "reCAPTCHA verification unavailable");
            false
        }
    };

    let check = validate_signup(&form.phone, recaptcha_ok);
    if !check.allowed {
        tracing::info!(reason = check.reason, "Signup blocked");
        return blocked(jar, Toast::signup_error(Some(check.reason)), &form);
    }

    let toast = match state.api.signup(&form.phone, &form.firstname).await {
        Ok(ack) => {
            tracing::info!("Customer signed up");
            Toast::api_success(ack.message.as_deref(), "Welcome to FitScript!")
        }
        Err(e) => {
            tracing::warn!(error = %e, "Signup rejected");
            Toast::signup_error(e.user_message())
        }
    };

    (toast::set(jar, &toast, secure), Redirect::to("/")).into_response()
}

fn refill_url(phone: &str, firstname: &str) -> String {
    format!(
        "/?phone={}&firstname={}",
        urlencoding::encode(phone),
        urlencoding::encode(firstname)
    )
}
