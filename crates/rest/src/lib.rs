//! # tenancy-rest - HTTP boundary of the tenancy control plane
//!
//! This crate exposes the [`ControlPlane`] over HTTP with axum. It turns
//! requests into the engine's neutral request view, runs tenant
//! identification in front of every protected route, and maps engine
//! outcomes to status codes.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tenancy_control::ControlPlane;
//! use tenancy_rest::{ServerConfig, create_app_with_config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::default();
//!     let app = create_app_with_config(ControlPlane::in_memory(), config.clone());
//!
//!     let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Operation | HTTP Method | URL Pattern | Identification |
//! |-----------|-------------|-------------|----------------|
//! | onboard | POST | `/api/v1/tenants` | no |
//! | activate | POST | `/api/v1/tenants/{tenant_id}/activate` | no |
//! | suspend | POST | `/api/v1/tenants/{tenant_id}/suspend` | no |
//! | read tenant | GET | `/api/v1/tenant` | yes |
//! | list capabilities | GET | `/api/v1/capabilities` | yes |
//! | provision capability | POST | `/api/v1/capabilities` | yes |
//! | authorize | POST | `/api/v1/authorize` | yes |
//! | record usage | POST | `/api/v1/usage` | yes |
//! | health | GET | `/health` | no |
//!
//! ## Tenant Identification
//!
//! Protected routes identify the tenant from, in order: the `X-Tenant-Id`
//! header, the `tenant_id` claim of an `Authorization: Bearer` token, a
//! registered `X-Api-Key`, a registered custom domain, a registered
//! subdomain, and finally a `/tenants/{id}` path prefix. Requests matching
//! none of these get `401 Unauthorized`.
//!
//! The bearer token is **not** verified. Put an authenticating proxy in
//! front of this service if callers are not trusted.
//!
//! ## Error Handling
//!
//! Errors are returned as `{"error": "<message>"}`:
//!
//! | HTTP Status | Cause |
//! |-------------|-------|
//! | 400 | Malformed body or invalid field |
//! | 401 | Tenant could not be identified |
//! | 404 | Unknown tenant or capability |
//! | 412 | Tenant is not active |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and status mapping
//! - [`config`] - Server configuration
//! - [`state`] - Application state (control plane, configuration)
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tenant identification middleware
//! - [`extractors`] - Axum extractors
//! - [`types`] - Request and response bodies
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routing;
pub mod state;
pub mod types;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use axum::Router;
use tenancy_control::ControlPlane;
use tenancy_persistence::core::TenantStore;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// This is a convenience function that creates the app with default settings.
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(control_plane: ControlPlane<S>) -> Router
where
    S: TenantStore + 'static,
{
    create_app_with_config(control_plane, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// This function sets up the complete REST API with all handlers,
/// middleware, and configuration.
///
/// # Example
///
/// ```rust
/// use tenancy_control::ControlPlane;
/// use tenancy_rest::{ServerConfig, create_app_with_config};
///
/// let config = ServerConfig {
///     port: 3000,
///     enable_cors: false,
///     ..Default::default()
/// };
/// let app = create_app_with_config(ControlPlane::in_memory(), config);
/// ```
pub fn create_app_with_config<S>(control_plane: ControlPlane<S>, config: ServerConfig) -> Router
where
    S: TenantStore + 'static,
{
    info!(
        "Creating REST API server with backend: {}",
        control_plane.store().backend_name()
    );

    // Create application state
    let state = AppState::new(control_plane, config.clone());

    // Build the router with all API routes
    let router = routing::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    // Add CORS if enabled
    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    // Apply remaining middleware
    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    // Configure origins
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

    // Configure methods
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

    // Configure headers
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
/// This should be called once at application startup. `RUST_LOG`, when
/// set, overrides `level`.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "tenancy_rest={level},tenancy_control={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
