//! Control plane route configuration.
//!
//! Defines all routes for the tenancy REST API.

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tenancy_persistence::core::TenantStore;

use crate::handlers;
use crate::middleware::identification_middleware;
use crate::state::AppState;

/// Prefix of every API route.
pub const API_PREFIX: &str = "/api/v1";

/// Creates all tenancy REST API routes.
///
/// # Routes
///
/// ## Public
/// - `GET /health` - Health check
/// - `POST /api/v1/tenants` - Onboard a tenant
/// - `POST /api/v1/tenants/{tenant_id}/activate` - Activate a tenant
/// - `POST /api/v1/tenants/{tenant_id}/suspend` - Suspend a tenant
///
/// ## Protected (tenant identification required)
/// - `GET /api/v1/tenant` - The identified tenant
/// - `GET /api/v1/capabilities` - List capabilities
/// - `POST /api/v1/capabilities` - Provision a capability
/// - `POST /api/v1/authorize` - Authorization decision
/// - `POST /api/v1/usage` - Record usage
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: TenantStore + 'static,
{
    let public = Router::new()
        .route("/tenants", post(handlers::create_tenant_handler::<S>))
        .route(
            "/tenants/{tenant_id}/activate",
            post(handlers::activate_tenant_handler::<S>),
        )
        .route(
            "/tenants/{tenant_id}/suspend",
            post(handlers::suspend_tenant_handler::<S>),
        );

    let protected = Router::new()
        .route("/tenant", get(handlers::get_tenant_handler::<S>))
        .route(
            "/capabilities",
            get(handlers::list_capabilities_handler::<S>)
                .post(handlers::provision_capability_handler::<S>),
        )
        .route("/authorize", post(handlers::authorize_handler::<S>))
        .route("/usage", post(handlers::record_usage_handler::<S>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            identification_middleware::<S>,
        ));

    Router::new()
        .route("/health", get(handlers::health_handler))
        .nest(API_PREFIX, public.merge(protected))
        .with_state(state)
}
