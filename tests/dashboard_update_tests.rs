// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard edit tests: each confirmed edit makes exactly one update call
//! and comes back to the dashboard with a toast.

use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::*;

const DASHBOARD: &str = "/dashboard/%2B15551234567";

#[tokio::test]
async fn test_goal_update_sends_edited_value_once() {
    let (app, fake) = create_test_app().await;
    let cookie = session_cookie_for(PHONE);

    let response = send(
        &app,
        form_request(
            &format!("{DASHBOARD}/goal"),
            Some(&cookie),
            "value=Run+a+marathon&intent=confirm",
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), DASHBOARD);
    assert_eq!(
        fake.updates(),
        vec![json!({"setting": "value", "newValue": "Run a marathon"})]
    );
    let toast = toast_of(&response).unwrap();
    assert_eq!(toast["kind"], "success");
    assert_eq!(toast["message"], "Saved");
}

#[tokio::test]
async fn test_frequency_update_sends_bitmap() {
    let (app, fake) = create_test_app().await;
    let cookie = session_cookie_for(PHONE);

    let response = send(
        &app,
        form_request(
            &format!("{DASHBOARD}/frequency"),
            Some(&cookie),
            "frequency=1110100",
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        fake.updates(),
        vec![json!({"setting": "frequency", "newValue": "1110100"})]
    );
}

#[tokio::test]
async fn test_malformed_frequency_is_not_sent() {
    let (app, fake) = create_test_app().await;
    let cookie = session_cookie_for(PHONE);

    let response = send(
        &app,
        form_request(
            &format!("{DASHBOARD}/frequency"),
            Some(&cookie),
            "frequency=11x",
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(fake.updates().is_empty());
    let toast = toast_of(&response).unwrap();
    assert_eq!(toast["kind"], "error");
    assert!(toast["message"]
        .as_str()
        .unwrap()
        .starts_with("Error: Invalid workout frequency"));
}

#[tokio::test]
async fn test_benchmark_update_defaults_units() {
    let (app, fake) = create_test_app().await;
    let cookie = session_cookie_for(PHONE);

    let response = send(
        &app,
        form_request(
            &format!("{DASHBOARD}/benchmark"),
            Some(&cookie),
            "exercise=mile&value=7%3A30&units=",
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        fake.updates(),
        vec![json!({"type": "mile", "value": "7:30", "units": "minutes"})]
    );
}

#[tokio::test]
async fn test_rejected_update_toasts_api_message() {
    let (app, fake) = create_test_app().await;
    *fake.reject_updates.lock().unwrap() = Some("Goal too vague".to_string());
    let cookie = session_cookie_for(PHONE);

    let response = send(
        &app,
        form_request(&format!("{DASHBOARD}/goal"), Some(&cookie), "value=Stuff"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), DASHBOARD);
    let toast = toast_of(&response).unwrap();
    assert_eq!(toast["kind"], "error");
    assert_eq!(toast["message"], "Error: Goal too vague");
}

#[tokio::test]
async fn test_empty_goal_is_rejected_locally() {
    let (app, fake) = create_test_app().await;
    let cookie = session_cookie_for(PHONE);

    let response = send(
        &app,
        form_request(&format!("{DASHBOARD}/goal"), Some(&cookie), "value="),
    )
    .await;

    assert!(fake.updates().is_empty());
    let toast = toast_of(&response).unwrap();
    assert_eq!(
        toast["message"],
        "Error: Goal must be between 1 and 500 characters"
    );
}

#[tokio::test]
async fn test_blank_goal_is_rejected_after_trimming() {
    let (app, fake) = create_test_app().await;
    let cookie = session_cookie_for(PHONE);

    let response = send(
        &app,
        form_request(&format!("{DASHBOARD}/goal"), Some(&cookie), "value=+++"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(fake.updates().is_empty());
    let toast = toast_of(&response).unwrap();
    assert_eq!(toast["kind"], "error");
    assert_eq!(
        toast["message"],
        "Error: Goal must be between 1 and 500 characters"
    );
}

#[tokio::test]
async fn test_goal_sent_as_validated() {
    let (app, fake) = create_test_app().await;
    let cookie = session_cookie_for(PHONE);

    send(
        &app,
        form_request(
            &format!("{DASHBOARD}/goal"),
            Some(&cookie),
            "value=+Run+a+5k%0A",
        ),
    )
    .await;

    assert_eq!(
        fake.updates(),
        vec![json!({"setting": "value", "newValue": "Run a 5k"})]
    );
}

#[tokio::test]
async fn test_blank_benchmark_value_is_rejected() {
    let (app, fake) = create_test_app().await;
    let cookie = session_cookie_for(PHONE);

    let response = send(
        &app,
        form_request(
            &format!("{DASHBOARD}/benchmark"),
            Some(&cookie),
            "exercise=bench&value=++&units=lbs",
        ),
    )
    .await;

    assert!(fake.updates().is_empty());
    assert_eq!(
        toast_of(&response).unwrap()["message"],
        "Error: Benchmark must be between 1 and 32 characters"
    );
}

#[tokio::test]
async fn test_cancel_makes_no_calls() {
    let (app, fake) = create_test_app().await;
    let cookie = session_cookie_for(PHONE);

    for (path, form) in [
        ("goal", "value=Something+else&intent=cancel"),
        ("frequency", "frequency=1111111&intent=cancel"),
        ("benchmark", "exercise=bench&value=999&units=lbs&intent=cancel"),
    ] {
        let response = send(
            &app,
            form_request(&format!("{DASHBOARD}/{path}"), Some(&cookie), form),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), DASHBOARD);
        assert!(toast_of(&response).is_none());
    }
    assert!(fake.updates().is_empty());
}

#[tokio::test]
async fn test_edit_mode_has_cancel_and_makes_no_calls() {
    let (app, fake) = create_test_app().await;
    let cookie = session_cookie_for(PHONE);

    let response = send(
        &app,
        get_request(&format!("{DASHBOARD}?edit=goal"), Some(&cookie)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains(r#"action="/dashboard/%2B15551234567/goal""#));
    assert!(body.contains(r#"name="intent" value="cancel""#));
    assert!(body.contains("Run a 5k</textarea>"));
    assert!(fake.updates().is_empty());
}

#[tokio::test]
async fn test_toast_shown_once_then_cleared() {
    let (app, _) = create_test_app().await;
    let cookie = session_cookie_for(PHONE);

    let response = send(
        &app,
        form_request(&format!("{DASHBOARD}/goal"), Some(&cookie), "value=Lift"),
    )
    .await;
    let toast_cookie = find_cookie(&response, "fitscript_toast").unwrap();
    let toast_pair = toast_cookie.split(';').next().unwrap().to_string();

    let response = send(
        &app,
        get_request(DASHBOARD, Some(&format!("{cookie}; {toast_pair}"))),
    )
    .await;

    let removal = find_cookie(&response, "fitscript_toast").unwrap();
    assert!(removal.contains("Max-Age=0"));
    let body = body_string(response).await;
    assert!(body.contains(r#"data-toast="success""#));
    assert!(body.contains("Saved"));
}
