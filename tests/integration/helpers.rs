//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use tokenward_core::config::AppConfig;
use tokenward_database::MemoryAccountStore;
use tokenward_service::MemoryNotifier;

/// Header the test app reads the client address from.
pub const CLIENT_IP_HEADER: &str = "x-forwarded-for";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Backing store, for inspecting account state directly
    pub store: Arc<MemoryAccountStore>,
    /// Outbox of delivered warnings
    pub notifier: Arc<MemoryNotifier>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `data` field of a success envelope.
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }
}

/// Issued credentials as returned by sign-in and refresh.
#[derive(Debug, Clone)]
pub struct Pair {
    pub access_token: String,
    pub refresh_token: String,
}

impl TestApp {
    /// Create a new test application with a working notifier
    pub fn new() -> Self {
        Self::with_notifier(MemoryNotifier::new())
    }

    /// Create a new test application around the given notifier
    pub fn with_notifier(notifier: MemoryNotifier) -> Self {
        let mut config: AppConfig = serde_json::from_value(serde_json::json!({
            "server": { "client_ip_header": CLIENT_IP_HEADER },
            "auth": { "jwt_secret": "integration-test-secret" },
            "database": { "provider": "memory" },
        }))
        .expect("Failed to build test config");
        config.auth.refresh_hash.memory_kib = 8;
        config.auth.refresh_hash.iterations = 1;

        let store = Arc::new(MemoryAccountStore::new());
        let notifier = Arc::new(notifier);
        let state = tokenward_api::build_state(config, store.clone(), notifier.clone())
            .expect("Failed to build app state");

        Self {
            router: tokenward_api::build_app(state),
            store,
            notifier,
        }
    }

    /// Send a JSON request from the given client address
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        ip: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(ip) = ip {
            req = req.header(CLIENT_IP_HEADER, ip);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Sign up and return the new account id
    pub async fn sign_up(&self, email: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/sign-up",
                Some(serde_json::json!({ "email": email })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.data()["id"]
            .as_str()
            .expect("id in sign-up response")
            .to_string()
    }

    /// Sign in from `ip` and return the issued pair
    pub async fn sign_in(&self, account_id: &str, ip: &str) -> Pair {
        let response = self
            .request(
                "POST",
                "/api/auth/sign-in",
                Some(serde_json::json!({ "account_id": account_id })),
                Some(ip),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        pair_from(&response)
    }

    /// Refresh from `ip`, returning the raw response
    pub async fn refresh(&self, pair: &Pair, ip: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/auth/refresh",
            Some(serde_json::json!({
                "access_token": pair.access_token,
                "refresh_token": pair.refresh_token,
            })),
            Some(ip),
        )
        .await
    }
}

/// Extract the credential pair from a successful response
pub fn pair_from(response: &TestResponse) -> Pair {
    let data = response.data();
    Pair {
        access_token: data["access_token"]
            .as_str()
            .expect("access_token")
            .to_string(),
        refresh_token: data["refresh_token"]
            .as_str()
            .expect("refresh_token")
            .to_string(),
    }
}
