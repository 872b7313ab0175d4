//! # recollectable-rest - REST API for the Recollectable catalogue
//!
//! This crate serves the collectibles catalogue over HTTP: coins, banknotes,
//! user collections and the collectables inside them, users, countries, and
//! coin conditions. Every list endpoint runs the same pipeline.
//!
//! 1. `search` and the resource's equality filters become a specification
//! 2. `orderBy` is resolved to attribute paths through the resource's sort table
//! 3. The matching sequence is sliced into the requested page
//! 4. `fields` shapes each item
//! 5. Links and the `X-Pagination` header are added, depending on `Accept`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use recollectable_rest::{create_app_with_config, ServerConfig};
//! use recollectable_persistence::backends::memory::InMemoryBackend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = InMemoryBackend::with_sample_data()?;
//!     let config = ServerConfig::default();
//!     let app = create_app_with_config(backend, config);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Interaction | HTTP Method | URL Pattern |
//! |------------|-------------|-------------|
//! | list | GET | `/api/[resource]` |
//! | create | POST | `/api/[resource]` |
//! | read | GET | `/api/[resource]/[id]` |
//! | update | PUT | `/api/[resource]/[id]` |
//! | patch | PATCH | `/api/[resource]/[id]` (JSON Patch) |
//! | delete | DELETE | `/api/[resource]/[id]` |
//! | create at id | POST | `/api/[resource]/[id]` (always rejected) |
//! | list collectables | GET | `/api/collections/[id]/collectables` |
//! | create collectable | POST | `/api/collections/[id]/collectables` |
//! | read, update, patch, delete collectable | GET, PUT, PATCH, DELETE | `/api/collections/[id]/collectables/[id]` |
//! | health | GET | `/health` |
//!
//! `[resource]` is one of `coins`, `banknotes`, `collections`, `users`,
//! `countries`, `conditions`, or `collectorvalues`.
//!
//! ## Query Parameters
//!
//! | Parameter | Description |
//! |-----------|-------------|
//! | `page` | 1-based page number (default 1) |
//! | `pageSize` | Items per page, clamped to the resource's maximum |
//! | `search` | Case-insensitive substring over the resource's search attributes |
//! | `orderBy` | Comma-separated public sort keys, each optionally `asc` or `desc` |
//! | `fields` | Comma-separated public field names to return |
//! | `type`, `country` | Case-insensitive equality filters, where the resource has them |
//!
//! ## Representations
//!
//! The `Accept` header selects one of three renderings:
//!
//! | `Accept` | Body | `X-Pagination` |
//! |----------|------|----------------|
//! | `application/json+hateoas` | `{value, links}`, items carry `links` | counts only |
//! | `application/json` | shaped items | counts plus previous/next page links |
//! | anything else | full items | none |
//!
//! ## Error Handling
//!
//! Errors are JSON bodies `{status, code, message}`:
//!
//! | HTTP Status | Code | Description |
//! |-------------|------|-------------|
//! | 400 | invalid | Malformed query parameter |
//! | 400 | unknown-sort-key | `orderBy` names an unmapped key |
//! | 400 | unknown-field | `fields` names an unknown field |
//! | 404 | not-found | No such resource or parent collection |
//! | 409 | conflict | Resource already exists |
//! | 500 | exception | Internal server error |
//!
//! ## Configuration
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `RECOLLECTABLE_PORT` | 8080 | Server port |
//! | `RECOLLECTABLE_HOST` | 127.0.0.1 | Host to bind |
//! | `RECOLLECTABLE_LOG_LEVEL` | info | Log level (error, warn, info, debug, trace) |
//! | `RECOLLECTABLE_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `RECOLLECTABLE_ENABLE_CORS` | true | Enable CORS |
//! | `RECOLLECTABLE_CORS_ORIGINS` | * | Allowed CORS origins |
//! | `RECOLLECTABLE_BASE_URL` | http://localhost:8080 | Base of generated links |
//! | `RECOLLECTABLE_SEED_SAMPLE_DATA` | true | Load the sample catalogue at startup |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and problem bodies
//! - [`config`] - Server configuration
//! - [`state`] - Application state (storage, configuration, catalog)
//! - [`resources`] - Per-resource paging limits, filters, sort tables, and schemas
//! - [`query`] - Query parameters and sort key resolution
//! - [`handlers`] - HTTP request handlers
//! - [`extractors`] - Axum extractors for query parameters and `Accept`
//! - [`responses`] - Field projection, links, pagination header, and bodies
//! - [`dto`] - Transfer objects and request bodies
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
#[allow(missing_docs)]
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod query;
pub mod resources;
pub mod responses;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use extractors::Representation;
pub use resources::{ResourceCatalog, ResourceKind};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use recollectable_persistence::core::ResourceStorage;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(storage: S) -> Router
where
    S: ResourceStorage + Send + Sync + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// # Arguments
///
/// * `storage` - The storage backend to use
/// * `config` - Server configuration
///
/// # Example
///
/// ```
/// use recollectable_persistence::backends::memory::InMemoryBackend;
/// use recollectable_rest::{create_app_with_config, ServerConfig};
///
/// let config = ServerConfig {
///     port: 3000,
///     enable_cors: false,
///     ..Default::default()
/// };
/// let app = create_app_with_config(InMemoryBackend::new(), config);
/// # drop(app);
/// ```
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: ResourceStorage + Send + Sync + 'static,
{
    info!(
        "Creating REST API server with backend: {}",
        storage.backend_name()
    );

    let state = AppState::new(Arc::new(storage), config.clone());
    let router = routing::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
///
/// `X-Pagination` is exposed so browser clients can read it.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new().expose_headers([responses::X_PAGINATION]);

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG` overrides
/// `level` when set.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "recollectable_rest={level},recollectable_persistence={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
