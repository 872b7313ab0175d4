//! REST API test harness.

use std::sync::Arc;

use axum::http::{HeaderValue, header::ACCEPT};
use axum_test::{TestRequest, TestServer};
use recollectable_persistence::backends::memory::InMemoryBackend;
use recollectable_rest::{AppState, ServerConfig, create_app_with_config, routing};

/// `Accept` value for the plain JSON representation.
pub const PLAIN: HeaderValue = HeaderValue::from_static("application/json");

/// `Accept` value for the hypermedia representation.
pub const HATEOAS: HeaderValue = HeaderValue::from_static("application/json+hateoas");

/// A test server over the sample catalogue.
pub struct RestTestHarness {
    /// The test server instance.
    pub server: TestServer,

    /// The storage backend, shared with the server.
    pub backend: Arc<InMemoryBackend>,
}

impl RestTestHarness {
    /// Serves the sample catalogue from a backend the test can inspect.
    pub fn new() -> Self {
        let backend =
            Arc::new(InMemoryBackend::with_sample_data().expect("Failed to seed backend"));
        let state = AppState::new(Arc::clone(&backend), ServerConfig::for_testing());
        let server =
            TestServer::new(routing::create_routes(state)).expect("Failed to create test server");

        Self { server, backend }
    }

    /// Serves the sample catalogue through the full middleware stack.
    ///
    /// The app owns this backend, so [`Self::backend`] is a fresh empty store.
    pub fn full_stack(config: ServerConfig) -> Self {
        let backend = InMemoryBackend::with_sample_data().expect("Failed to seed backend");
        let server = TestServer::new(create_app_with_config(backend, config))
            .expect("Failed to create test server");

        Self {
            server,
            backend: Arc::new(InMemoryBackend::new()),
        }
    }

    /// `GET` with no `Accept` header.
    pub fn get(&self, path: &str) -> TestRequest {
        self.server.get(path)
    }

    /// `GET` asking for plain JSON.
    pub fn get_plain(&self, path: &str) -> TestRequest {
        self.server.get(path).add_header(ACCEPT, PLAIN)
    }

    /// `GET` asking for hypermedia.
    pub fn get_hateoas(&self, path: &str) -> TestRequest {
        self.server.get(path).add_header(ACCEPT, HATEOAS)
    }
}
