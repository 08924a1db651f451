//! Health check endpoint handler.
//!
//! Provides a simple health check endpoint for monitoring and load balancers.

use axum::Json;
use tracing::debug;

use crate::types::HealthResponse;

/// Handler for the health check endpoint.
///
/// # HTTP Request
///
/// `GET [base]/health`
///
/// # Response
///
/// - `200 OK` - `{"status": "healthy", "service": "tenant-control-plane"}`
pub async fn health_handler() -> Json<HealthResponse> {
    debug!("Processing health check request");
    Json(HealthResponse::default())
}
