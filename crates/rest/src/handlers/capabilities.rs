//! Capability handlers.
//!
//! `GET` and `POST [base]/api/v1/capabilities`, both scoped to the
//! identified tenant.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tenancy_persistence::core::TenantStore;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::{JsonBody, ResolvedTenant};
use crate::state::AppState;
use crate::types::{ProvisionCapabilityRequest, StatusResponse};

/// Handler listing the identified tenant's capabilities.
///
/// # HTTP Request
///
/// `GET [base]/api/v1/capabilities`
///
/// # Response
///
/// - `200 OK` - Array of capabilities, possibly empty
/// - `401 Unauthorized` - No tenant could be identified
pub async fn list_capabilities_handler<S>(
    State(state): State<AppState<S>>,
    tenant: ResolvedTenant,
) -> RestResult<Response>
where
    S: TenantStore,
{
    debug!(tenant_id = %tenant, "Processing capability list request");

    let capabilities = state.control_plane().get_capabilities(tenant.tenant_id());
    Ok((StatusCode::OK, Json(capabilities)).into_response())
}

/// Handler provisioning a capability for the identified tenant.
///
/// # HTTP Request
///
/// `POST [base]/api/v1/capabilities`
///
/// ```json
/// {"type": "STORAGE", "name": "storage", "quota": 1000}
/// ```
///
/// # Response
///
/// - `201 Created` - `{"status": "provisioned"}`
/// - `400 Bad Request` - Malformed body, unknown type or quota below 1
/// - `401 Unauthorized` - No tenant could be identified
/// - `404 Not Found` - The identified tenant does not exist
/// - `412 Precondition Failed` - The tenant is not active
pub async fn provision_capability_handler<S>(
    State(state): State<AppState<S>>,
    tenant: ResolvedTenant,
    JsonBody(body): JsonBody<ProvisionCapabilityRequest>,
) -> RestResult<Response>
where
    S: TenantStore,
{
    let capability_type = body.validate()?;
    debug!(
        tenant_id = %tenant,
        capability = %body.name,
        capability_type = %capability_type,
        quota = body.quota,
        "Processing capability provisioning request"
    );

    state.control_plane().provision_capability(
        tenant.tenant_id(),
        capability_type,
        body.name,
        body.quota,
    )?;
    Ok((StatusCode::CREATED, Json(StatusResponse::new("provisioned"))).into_response())
}
