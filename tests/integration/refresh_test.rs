//! Refresh rotation and IP-change handling over HTTP.

use axum::http::StatusCode;
use tokenward_core::types::AccountId;
use tokenward_database::AccountStore;
use tokenward_service::MemoryNotifier;

use super::helpers::{Pair, TestApp, pair_from};

#[tokio::test]
async fn test_refresh_rotates_and_old_pair_stops_working() {
    let app = TestApp::new();
    let id = app.sign_up("a@x.com").await;
    let first = app.sign_in(&id, "10.0.0.1").await;

    let response = app.refresh(&first, "10.0.0.1").await;
    assert_eq!(response.status, StatusCode::OK);
    let second = pair_from(&response);
    assert_ne!(second.access_token, first.access_token);
    assert_ne!(second.refresh_token, first.refresh_token);

    let replay = app.refresh(&first, "10.0.0.1").await;
    assert_eq!(replay.status, StatusCode::UNAUTHORIZED);
    assert_eq!(replay.body["error"], "INVALID_CREDENTIALS");

    let next = app.refresh(&second, "10.0.0.1").await;
    assert_eq!(next.status, StatusCode::OK);
}

#[tokio::test]
async fn test_second_sign_in_invalidates_first() {
    let app = TestApp::new();
    let id = app.sign_up("a@x.com").await;
    let first = app.sign_in(&id, "10.0.0.1").await;
    let _second = app.sign_in(&id, "10.0.0.1").await;

    let response = app.refresh(&first, "10.0.0.1").await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_garbage_access_token() {
    let app = TestApp::new();
    let pair = Pair {
        access_token: "garbage".to_string(),
        refresh_token: "garbage".to_string(),
    };

    let response = app.refresh(&pair, "10.0.0.1").await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_ip_change_revokes_session_and_warns() {
    let app = TestApp::new();
    let id = app.sign_up("a@x.com").await;
    let pair = app.sign_in(&id, "10.0.0.1").await;

    let response = app.refresh(&pair, "10.0.0.2").await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "SECURITY_ANOMALY");

    let sent = app.notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "a@x.com");
    assert_eq!(
        sent[0].body,
        "Your IP address has changed from 10.0.0.1 to 10.0.0.2."
    );

    let retry = app.refresh(&pair, "10.0.0.1").await;
    assert_eq!(retry.status, StatusCode::UNAUTHORIZED);
    assert_eq!(retry.body["error"], "SESSION_EXPIRED");
}

#[tokio::test]
async fn test_ip_change_with_failing_notifier_is_still_forbidden() {
    let app = TestApp::with_notifier(MemoryNotifier::failing());
    let id = app.sign_up("a@x.com").await;
    let pair = app.sign_in(&id, "10.0.0.1").await;

    let response = app.refresh(&pair, "10.0.0.2").await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let account_id: AccountId = id.parse().unwrap();
    let stored = app.store.find_by_id(account_id).await.unwrap().unwrap();
    assert!(!stored.has_session());
}

#[tokio::test]
async fn test_expired_session() {
    let app = TestApp::new();
    let id = app.sign_up("a@x.com").await;
    let pair = app.sign_in(&id, "10.0.0.1").await;

    let account_id: AccountId = id.parse().unwrap();
    let mut stored = app.store.find_by_id(account_id).await.unwrap().unwrap();
    if let Some(session) = stored.session.as_mut() {
        session.expires_at = chrono::Utc::now() - chrono::Duration::minutes(1);
    }
    app.store.update(&stored).await.unwrap();

    let response = app.refresh(&pair, "10.0.0.1").await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "SESSION_EXPIRED");
}

#[tokio::test]
async fn test_scenario() {
    let app = TestApp::new();
    let u1 = app.sign_up("a@x.com").await;
    let first = app.sign_in(&u1, "10.0.0.1").await;

    let response = app.refresh(&first, "10.0.0.1").await;
    assert_eq!(response.status, StatusCode::OK);
    let second = pair_from(&response);
    assert_ne!(second.access_token, first.access_token);
    assert_ne!(second.refresh_token, first.refresh_token);

    let replay = app.refresh(&first, "10.0.0.1").await;
    assert_eq!(replay.status, StatusCode::UNAUTHORIZED);

    let stolen = app.refresh(&second, "10.0.0.2").await;
    assert_eq!(stolen.status, StatusCode::FORBIDDEN);
    assert_eq!(app.notifier.sent()[0].to, "a@x.com");
}
