//! Server configuration for the tenancy REST API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `TENANCY_SERVER_PORT` | 8080 | Server port |
//! | `TENANCY_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `TENANCY_LOG_LEVEL` | info | Log level |
//! | `TENANCY_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `TENANCY_ENABLE_CORS` | true | Enable CORS |
//! | `TENANCY_CORS_ORIGINS` | * | Allowed origins |
//! | `TENANCY_CORS_METHODS` | GET,POST,OPTIONS | Allowed methods |
//! | `TENANCY_CORS_HEADERS` | Content-Type,Authorization,X-Tenant-Id,X-Api-Key | Allowed headers |
//! | `TENANCY_SEED_DEMO` | false | Seed a demo tenant at startup |
//! | `TENANCY_DEMO_API_KEY` | demo_api_key_12345 | API key of the demo tenant |
//! | `TENANCY_DEMO_SUBDOMAIN` | demo | Subdomain of the demo tenant |
//!
//! # Example
//!
//! ```rust
//! use tenancy_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     seed_demo: true,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use clap::Parser;

const DEFAULT_CORS_METHODS: &str = "GET,POST,OPTIONS";
const DEFAULT_CORS_HEADERS: &str = "Content-Type,Authorization,X-Tenant-Id,X-Api-Key";
const DEFAULT_DEMO_API_KEY: &str = "demo_api_key_12345";
const DEFAULT_DEMO_SUBDOMAIN: &str = "demo";

/// Server configuration for the tenancy REST API.
///
/// This struct can be constructed from environment variables using [`ServerConfig::from_env`],
/// from command line arguments using [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "tenancy-server")]
#[command(about = "Tenant identification and quota control plane")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "TENANCY_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "TENANCY_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "TENANCY_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "TENANCY_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "TENANCY_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "TENANCY_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(long, env = "TENANCY_CORS_METHODS", default_value = DEFAULT_CORS_METHODS)]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(long, env = "TENANCY_CORS_HEADERS", default_value = DEFAULT_CORS_HEADERS)]
    pub cors_headers: String,

    /// Seed a demo tenant with storage and API capabilities at startup.
    #[arg(long, env = "TENANCY_SEED_DEMO", default_value = "false")]
    pub seed_demo: bool,

    /// API key registered for the demo tenant.
    #[arg(long, env = "TENANCY_DEMO_API_KEY", default_value = DEFAULT_DEMO_API_KEY)]
    pub demo_api_key: String,

    /// Subdomain registered for the demo tenant.
    #[arg(long, env = "TENANCY_DEMO_SUBDOMAIN", default_value = DEFAULT_DEMO_SUBDOMAIN)]
    pub demo_subdomain: String,
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
            cors_methods: DEFAULT_CORS_METHODS.to_string(),
            cors_headers: DEFAULT_CORS_HEADERS.to_string(),
            seed_demo: false,
            demo_api_key: DEFAULT_DEMO_API_KEY.to_string(),
            demo_subdomain: DEFAULT_DEMO_SUBDOMAIN.to_string(),
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        // Try to parse from environment, falling back to defaults
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
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

        if self.seed_demo {
            if self.demo_api_key.trim().is_empty() {
                errors.push("Demo API key cannot be empty when seeding".to_string());
            }
            if self.demo_subdomain.trim().is_empty() {
                errors.push("Demo subdomain cannot be empty when seeding".to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0 and disables features that might interfere
    /// with tests.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            log_level: "debug".to_string(),
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            ..Default::default()
        }
    }
}
