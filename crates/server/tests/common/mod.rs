//! Common test utilities for E2E testing with mocks.
//!
//! This module provides a test fixture that creates an in-process server
//! with a scripted meal source injected, so the API can be exercised
//! without reaching TheMealDB.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use supper_core::{testing::MockMealSource, Config, MealSource, PrintConfig};

/// Re-export fixtures for test convenience
pub use supper_core::testing::fixtures;

/// Test fixture for E2E testing with a mock meal source.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_plan_generation() {
///     let fixture = TestFixture::new();
///     fixture.source.push_meal(fixtures::veggie_stew()).await;
///
///     let response = fixture.post("/api/v1/plan", json!({
///         "days": ["Monday"]
///     })).await;
///
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock meal source - script meals and failures
    pub source: Arc<MockMealSource>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    /// Raw body text, for non-JSON responses
    pub text: String,
    pub content_type: Option<String>,
}

impl TestFixture {
    /// Create a new test fixture with default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a test fixture whose printed plans carry a custom brand.
    pub fn with_brand(brand: &str) -> Self {
        Self::with_config(Config {
            print: PrintConfig {
                brand: brand.to_string(),
            },
            ..Default::default()
        })
    }

    /// Create a test fixture with custom configuration.
    pub fn with_config(config: Config) -> Self {
        let source = Arc::new(MockMealSource::new());

        let state = Arc::new(supper_server::state::AppState::new(
            config,
            Arc::clone(&source) as Arc<dyn MealSource>,
        ));

        let router = supper_server::api::create_router(state);

        Self { router, source }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Send a POST request with raw string body (for testing malformed JSON).
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// Send a request to the test server.
    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut request_builder = Request::builder().method(method).uri(path);

        let body = if let Some(json_body) = body {
            request_builder = request_builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&json_body).unwrap())
        } else {
            Body::empty()
        };

        let request = request_builder.body(body).unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            body,
            text,
            content_type,
        }
    }
}

/// Assert that a response has the expected status code.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status,
            $response.status,
            serde_json::to_string_pretty(&$response.body).unwrap_or_default()
        );
    };
}
