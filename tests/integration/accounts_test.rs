//! Account listing over HTTP.

use axum::http::StatusCode;

use super::helpers::TestApp;

#[tokio::test]
async fn test_list_defaults() {
    let app = TestApp::new();
    for i in 0..12 {
        app.sign_up(&format!("user{i}@x.com")).await;
    }

    let response = app.request("GET", "/api/accounts", None, None).await;
    assert_eq!(response.status, StatusCode::OK);

    let data = response.data();
    assert_eq!(data["total"], 12);
    assert_eq!(data["page"], 1);
    assert_eq!(data["limit"], 10);
    assert_eq!(data["accounts"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_list_second_page_in_id_order() {
    let app = TestApp::new();
    for i in 0..5 {
        app.sign_up(&format!("user{i}@x.com")).await;
    }

    let first = app
        .request("GET", "/api/accounts?page=1&limit=3", None, None)
        .await;
    let second = app
        .request("GET", "/api/accounts?page=2&limit=3", None, None)
        .await;

    let first = first.data()["accounts"].as_array().unwrap().clone();
    let second = second.data()["accounts"].as_array().unwrap().clone();
    assert_eq!(first.len(), 3);
    assert_eq!(second.len(), 2);

    let ids: Vec<String> = first
        .iter()
        .chain(second.iter())
        .map(|a| a["id"].as_str().unwrap().to_string())
        .collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

#[tokio::test]
async fn test_list_reports_session_presence() {
    let app = TestApp::new();
    let id = app.sign_up("a@x.com").await;
    app.sign_in(&id, "10.0.0.1").await;

    let response = app.request("GET", "/api/accounts", None, None).await;
    let account = &response.data()["accounts"][0];
    assert_eq!(account["has_session"], true);
    assert!(account.get("refresh_hash").is_none());
}

#[tokio::test]
async fn test_list_out_of_range_inputs_pass_through() {
    let app = TestApp::new();
    app.sign_up("a@x.com").await;

    let response = app
        .request("GET", "/api/accounts?page=0&limit=5", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["page"], 0);
    assert_eq!(response.data()["total"], 1);
    assert!(response.data()["accounts"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_unparsable_query_falls_back_to_defaults() {
    let app = TestApp::new();
    for i in 0..3 {
        app.sign_up(&format!("user{i}@x.com")).await;
    }

    let response = app
        .request("GET", "/api/accounts?page=abc&limit=2", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["page"], 1);
    assert_eq!(response.data()["limit"], 2);
    assert_eq!(response.data()["accounts"].as_array().unwrap().len(), 2);

    let response = app
        .request("GET", "/api/accounts?page=1&limit=lots", None, None)
        .await;
    assert_eq!(response.data()["limit"], 10);
    assert_eq!(response.data()["total"], 3);
}
