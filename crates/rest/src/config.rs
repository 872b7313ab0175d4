//! Server configuration for the Recollectable REST API.
//!
//! Configuration comes from command line arguments, with environment
//! variable fallbacks, or can be built programmatically.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `RECOLLECTABLE_PORT` | 8080 | Server port |
//! | `RECOLLECTABLE_HOST` | 127.0.0.1 | Host to bind |
//! | `RECOLLECTABLE_LOG_LEVEL` | info | Log level |
//! | `RECOLLECTABLE_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `RECOLLECTABLE_ENABLE_CORS` | true | Enable CORS |
//! | `RECOLLECTABLE_CORS_ORIGINS` | * | Allowed origins |
//! | `RECOLLECTABLE_CORS_METHODS` | GET,POST,PUT,PATCH,DELETE,OPTIONS | Allowed methods |
//! | `RECOLLECTABLE_CORS_HEADERS` | Content-Type,Authorization,Accept | Allowed headers |
//! | `RECOLLECTABLE_BASE_URL` | http://localhost:8080 | Prefix for hypermedia links |
//! | `RECOLLECTABLE_SEED_SAMPLE_DATA` | true | Load the sample catalogue at startup |
//!
//! # Example
//!
//! ```rust
//! use recollectable_rest::ServerConfig;
//!
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     ..Default::default()
//! };
//! assert_eq!(config.socket_addr(), "0.0.0.0:3000");
//! ```

use clap::Parser;

/// Server configuration for the Recollectable REST API.
#[derive(Debug, Clone, Parser)]
#[command(name = "recollectable")]
#[command(about = "Recollectable collectibles catalogue API")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "RECOLLECTABLE_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "RECOLLECTABLE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "RECOLLECTABLE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "RECOLLECTABLE_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "RECOLLECTABLE_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "RECOLLECTABLE_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(
        long,
        env = "RECOLLECTABLE_CORS_METHODS",
        default_value = "GET,POST,PUT,PATCH,DELETE,OPTIONS"
    )]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(
        long,
        env = "RECOLLECTABLE_CORS_HEADERS",
        default_value = "Content-Type,Authorization,Accept"
    )]
    pub cors_headers: String,

    /// Base URL for the server (prefix of every hypermedia link).
    #[arg(long, env = "RECOLLECTABLE_BASE_URL", default_value = "http://localhost:8080")]
    pub base_url: String,

    /// Load the sample catalogue into the in-memory store at startup.
    #[arg(long, env = "RECOLLECTABLE_SEED_SAMPLE_DATA", default_value = "true")]
    pub seed_sample_data: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,POST,PUT,PATCH,DELETE,OPTIONS".to_string(),
            cors_headers: "Content-Type,Authorization,Accept".to_string(),
            base_url: "http://localhost:8080".to_string(),
            seed_sample_data: true,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// Falls back to defaults when the environment does not parse.
    pub fn from_env() -> Self {
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the base URL without a trailing slash.
    pub fn link_base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if url::Url::parse(&self.base_url).is_err() {
            errors.push(format!("Base URL '{}' is not a valid URL", self.base_url));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// Uses an ephemeral port and a fixed base URL so link assertions are stable.
    pub fn for_testing() -> Self {
        Self {
            port: 0,
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            request_timeout: 5,
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            base_url: "http://localhost".to_string(),
            seed_sample_data: true,
        }
    }
}
