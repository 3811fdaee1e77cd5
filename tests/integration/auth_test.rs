//! Sign-up and sign-in over HTTP.

use axum::http::StatusCode;

use super::helpers::TestApp;

#[tokio::test]
async fn test_sign_up_returns_account() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/sign-up",
            Some(serde_json::json!({ "email": "a@x.com" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.data()["email"], "a@x.com");
    assert_eq!(response.data()["has_session"], false);
    assert!(response.data().get("session").is_none());
}

#[tokio::test]
async fn test_sign_up_empty_email() {
    let app = TestApp::new();

    for email in ["", "   "] {
        let response = app
            .request(
                "POST",
                "/api/auth/sign-up",
                Some(serde_json::json!({ "email": email })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["error"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_sign_up_duplicate_email() {
    let app = TestApp::new();
    app.sign_up("a@x.com").await;

    let response = app
        .request(
            "POST",
            "/api/auth/sign-up",
            Some(serde_json::json!({ "email": "a@x.com" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "DUPLICATE_EMAIL");
}

#[tokio::test]
async fn test_sign_in_issues_pair() {
    let app = TestApp::new();
    let id = app.sign_up("a@x.com").await;

    let pair = app.sign_in(&id, "10.0.0.1").await;

    assert_eq!(pair.access_token.split('.').count(), 3);
    assert!(!pair.refresh_token.is_empty());
}

#[tokio::test]
async fn test_sign_in_unknown_account_is_generic() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/sign-in",
            Some(serde_json::json!({ "account_id": uuid::Uuid::new_v4() })),
            Some("10.0.0.1"),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_sign_in_requires_client_address() {
    let app = TestApp::new();
    let id = app.sign_up("a@x.com").await;

    let response = app
        .request(
            "POST",
            "/api/auth/sign-in",
            Some(serde_json::json!({ "account_id": id })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let response = app.request("GET", "/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "ok");
    assert_eq!(response.data()["store"], "ok");
}

#[tokio::test]
async fn test_malformed_body_uses_error_envelope() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/sign-in",
            Some(serde_json::json!({ "account_id": "not-a-uuid" })),
            Some("10.0.0.1"),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    let response = app
        .request("POST", "/api/auth/sign-up", Some(serde_json::json!({})), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}
