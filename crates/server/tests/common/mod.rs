//! Common test utilities for exercising pages with mocks.
//!
//! Provides an in-process router with an in-memory catalog and a mock
//! metadata client injected, so every page can be driven end to end
//! without external infrastructure.

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use marquee_core::testing::MockMetadata;
use marquee_core::{MovieMetadata, MovieStore, SqliteStore};
use marquee_server::state::AppState;
use marquee_server::web::views::Pages;
use marquee_server::web::create_router;

/// Re-export fixtures for test convenience
pub use marquee_core::testing::fixtures;

/// Test fixture with an in-process router and controllable mocks.
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Direct handle on the catalog for seeding and assertions
    pub store: Arc<SqliteStore>,
    /// Mock metadata client - configure search results and details
    pub metadata: Arc<MockMetadata>,
    /// Shared state, kept for token access
    pub state: Arc<AppState>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl TestFixture {
    /// Create a new test fixture with an empty catalog.
    pub fn new() -> Self {
        let store = Arc::new(SqliteStore::in_memory().expect("Failed to create store"));
        let metadata = Arc::new(MockMetadata::new());
        let pages = Pages::new().expect("Failed to load templates");

        let state = Arc::new(AppState::new(
            "not-a-real-secret",
            Arc::clone(&store) as Arc<dyn MovieStore>,
            Arc::clone(&metadata) as Arc<dyn MovieMetadata>,
            pages,
        ));

        state
            .snapshot()
            .refresh(state.store())
            .expect("Failed to build initial snapshot");

        let router = create_router(Arc::clone(&state));

        Self {
            router,
            store,
            metadata,
            state,
        }
    }

    /// The form token every mutating POST must carry.
    pub fn token(&self) -> &str {
        self.state.form_token()
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// Send a POST request with an urlencoded form body.
    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields)
            .finish();

        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap();
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
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        TestResponse {
            status,
            location,
            body: String::from_utf8_lossy(&body_bytes).into_owned(),
        }
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status, $response.status, $response.body
        );
    };
}
