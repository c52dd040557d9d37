// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared test harness: an in-process fake FitScript API and reCAPTCHA
//! service, plus helpers for driving the router.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Form, Json, Router,
};
use fitscript_web::config::Config;
use fitscript_web::routes::create_router;
use fitscript_web::AppState;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};
use tower::ServiceExt;

pub const PHONE: &str = "+15551234567";
pub const OTHER_PHONE: &str = "+15557654321";
pub const PASSWORD: &str = "hunter22";
pub const WEBSITE_SIGNATURE: &str = "test_signature";
/// reCAPTCHA response the fake verifier accepts.
pub const GOOD_CAPTCHA: &str = "good-captcha";
/// reCAPTCHA response that makes the fake verifier fail with HTTP 500.
pub const BROKEN_CAPTCHA: &str = "broken-captcha";

const SIGNING_KEY: &[u8] = b"fake-api-signing-key";

#[derive(Serialize, Deserialize)]
struct Claims {
    phone: String,
    exp: usize,
}

/// Issue a session token the fake API will accept for `phone`.
#[allow(dead_code)]
pub fn token_for(phone: &str) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as usize;

    encode(
        &Header::new(Algorithm::HS256),
        &Claims {
            phone: phone.to_string(),
            exp: now + 86400,
        },
        &EncodingKey::from_secret(SIGNING_KEY),
    )
    .unwrap()
}

/// Knobs and recorded traffic for the fake API.
#[derive(Default)]
pub struct FakeApi {
    /// Every update-goal / update-benchmark body received, in order
    pub updates: Mutex<Vec<Value>>,
    /// Every signup body received
    pub signups: Mutex<Vec<Value>>,
    /// When set, updates fail with HTTP 400 and this message
    pub reject_updates: Mutex<Option<String>>,
    /// When set, dashboard data requests fail with HTTP 500
    pub fail_dashboard: Mutex<bool>,
    /// Number of reCAPTCHA responses submitted for verification
    pub captcha_checks: Mutex<usize>,
}

impl FakeApi {
    #[allow(dead_code)]
    pub fn updates(&self) -> Vec<Value> {
        self.updates.lock().unwrap().clone()
    }

    #[allow(dead_code)]
    pub fn signups(&self) -> Vec<Value> {
        self.signups.lock().unwrap().clone()
    }

    #[allow(dead_code)]
    pub fn captcha_checks(&self) -> usize {
        *self.captcha_checks.lock().unwrap()
    }
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn verified_phone(headers: &HeaderMap) -> Option<String> {
    let token = bearer(headers)?;
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(SIGNING_KEY),
        &Validation::new(Algorithm::HS256),
    )
    .ok()
    .map(|data| data.claims.phone)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"success": false, "message": "Invalid token"})),
    )
        .into_response()
}

async fn login(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    use base64::{engine::general_purpose::STANDARD, Engine as _};

    if bearer(&headers) != Some(STANDARD.encode(WEBSITE_SIGNATURE).as_str()) {
        return unauthorized();
    }
    let phone = body["phone"].as_str().unwrap_or_default();
    if phone != PHONE || body["password"] != PASSWORD {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Incorrect phone or password"})),
        )
            .into_response();
    }
    Json(json!({"token": token_for(phone), "message": "Logged in"})).into_response()
}

async fn verify_token(headers: HeaderMap) -> Response {
    match verified_phone(&headers) {
        Some(phone) => Json(json!({
            "success": true,
            "message": "Token is valid",
            "decoded": {"phone": phone}
        }))
        .into_response(),
        None => unauthorized(),
    }
}

async fn check_phone(Path(phone): Path<String>) -> Json<Value> {
    Json(json!({"valid": phone == PHONE}))
}

async fn signup(State(fake): State<Arc<FakeApi>>, Json(body): Json<Value>) -> Response {
    let taken = body["phone"] == PHONE;
    fake.signups.lock().unwrap().push(body);
    if taken {
        return (
            StatusCode::CONFLICT,
            Json(json!({"message": "Phone number already registered"})),
        )
            .into_response();
    }
    Json(json!({"message": "Signed up! Check your texts."})).into_response()
}

async fn record_update(fake: &FakeApi, headers: &HeaderMap, body: Value) -> Response {
    if verified_phone(headers).is_none() {
        return unauthorized();
    }
    if let Some(message) = fake.reject_updates.lock().unwrap().clone() {
        return (StatusCode::BAD_REQUEST, Json(json!({"message": message}))).into_response();
    }
    fake.updates.lock().unwrap().push(body);
    Json(json!({"message": "Saved"})).into_response()
}

async fn update_goal(
    State(fake): State<Arc<FakeApi>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    record_update(&fake, &headers, body).await
}

async fn update_benchmark(
    State(fake): State<Arc<FakeApi>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    record_update(&fake, &headers, body).await
}

async fn dashboard_data(
    State(fake): State<Arc<FakeApi>>,
    headers: HeaderMap,
    Path(phone): Path<String>,
) -> Response {
    if verified_phone(&headers).as_deref() != Some(phone.as_str()) {
        return unauthorized();
    }
    if *fake.fail_dashboard.lock().unwrap() {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"message": "Database unavailable"})),
        )
            .into_response();
    }
    Json(json!({
        "success": true,
        "message": "Dashboard data",
        "customer": {
            "phone": phone,
            "firstname": "Joe",
            "is_admin": false,
            "date_registered": "2023-04-01T09:30:00Z",
            "premium": false,
            "dashboard_secret": "s3cret",
            "recent_code_refresh": null
        },
        "goal": {
            "id": "g1",
            "value": "Run a 5k",
            "frequency": "1010100",
            "phone": phone,
            "timestamp": "2023-04-02T10:00:00Z"
        },
        "benchmarks": [
            {"id": "b1", "customer_phone": phone, "type": "bench", "value": "185", "units": "lbs",
             "timestamp": "2023-04-03T10:00:00Z"}
        ]
    }))
    .into_response()
}

async fn siteverify(
    State(fake): State<Arc<FakeApi>>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    *fake.captcha_checks.lock().unwrap() += 1;
    let response = form.get("response").map(String::as_str).unwrap_or_default();
    if response == BROKEN_CAPTCHA {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let success = response == GOOD_CAPTCHA && form.get("secret").is_some();
    Json(json!({"success": success})).into_response()
}

/// Start the fake API on an ephemeral port. Returns its base URL.
pub async fn spawn_fake_api(fake: Arc<FakeApi>) -> String {
    let app = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/verify-token", post(verify_token))
        .route("/customer/check-phone/{phone}", get(check_phone))
        .route("/signup", post(signup))
        .route("/customer/update-goal", put(update_goal))
        .route("/customer/update-benchmark", post(update_benchmark))
        .route("/dashboard/data/{phone}", get(dashboard_data))
        .route("/recaptcha/api/siteverify", post(siteverify))
        .with_state(fake);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Create the site backed by a fresh fake API.
/// Returns the router and the fake's recorded state.
#[allow(dead_code)]
pub async fn create_test_app() -> (Router, Arc<FakeApi>) {
    let fake = Arc::new(FakeApi::default());
    let api_url = spawn_fake_api(fake.clone()).await;

    let mut config = Config::test_default();
    config.recaptcha_verify_url = format!("{}/recaptcha/api/siteverify", api_url);
    config.api_url = api_url;

    let state = Arc::new(AppState::new(config).unwrap());
    (create_router(state), fake)
}

/// Send one request through the router.
#[allow(dead_code)]
pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

#[allow(dead_code)]
pub fn get_request(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

#[allow(dead_code)]
pub fn form_request(uri: &str, cookie: Option<&str>, form: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(form.to_string())).unwrap()
}

/// `access_token=...` cookie header for `phone`.
#[allow(dead_code)]
pub fn session_cookie_for(phone: &str) -> String {
    format!("access_token={}", token_for(phone))
}

#[allow(dead_code)]
pub fn location(response: &Response) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default()
}

#[allow(dead_code)]
pub fn set_cookie_headers(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|value| value.to_str().unwrap().to_string())
        .collect()
}

/// Set-Cookie header for `name`, if the response sets one.
#[allow(dead_code)]
pub fn find_cookie(response: &Response, name: &str) -> Option<String> {
    set_cookie_headers(response)
        .into_iter()
        .find(|value| value.starts_with(&format!("{name}=")))
}

/// Decode the toast carried by a response's flash cookie.
#[allow(dead_code)]
pub fn toast_of(response: &Response) -> Option<Value> {
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

    let cookie = find_cookie(response, "fitscript_toast")?;
    let value = cookie
        .split(';')
        .next()?
        .trim_start_matches("fitscript_toast=")
        .to_string();
    let bytes = URL_SAFE_NO_PAD.decode(value).ok()?;
    serde_json::from_slice(&bytes).ok()
}

#[allow(dead_code)]
pub async fn body_string(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}
