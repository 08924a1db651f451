//! Tenant lifecycle handlers.
//!
//! `POST [base]/api/v1/tenants`, `POST [base]/api/v1/tenants/{tenant_id}/activate`,
//! `POST [base]/api/v1/tenants/{tenant_id}/suspend` and the protected
//! `GET [base]/api/v1/tenant`.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tenancy_persistence::core::TenantStore;
use tenancy_persistence::tenant::TenantId;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::{JsonBody, ResolvedTenant};
use crate::state::AppState;
use crate::types::{CreateTenantRequest, StatusResponse};

/// Handler for tenant onboarding.
///
/// # HTTP Request
///
/// `POST [base]/api/v1/tenants`
///
/// ```json
/// {"name": "Acme Corp"}
/// ```
///
/// # Response
///
/// - `201 Created` - The new tenant, in `PROVISIONING` status
/// - `400 Bad Request` - Malformed body or empty name
pub async fn create_tenant_handler<S>(
    State(state): State<AppState<S>>,
    JsonBody(body): JsonBody<CreateTenantRequest>,
) -> RestResult<Response>
where
    S: TenantStore,
{
    body.validate()?;
    debug!(name = %body.name, "Processing tenant creation request");

    let tenant = state.control_plane().onboard_tenant(body.name);
    Ok((StatusCode::CREATED, Json(tenant)).into_response())
}

/// Handler for tenant activation.
///
/// # HTTP Request
///
/// `POST [base]/api/v1/tenants/{tenant_id}/activate`
///
/// # Response
///
/// - `200 OK` - `{"status": "activated"}`
/// - `404 Not Found` - Unknown tenant
pub async fn activate_tenant_handler<S>(
    State(state): State<AppState<S>>,
    Path(tenant_id): Path<String>,
) -> RestResult<Json<StatusResponse>>
where
    S: TenantStore,
{
    debug!(tenant_id = %tenant_id, "Processing tenant activation request");

    state
        .control_plane()
        .activate_tenant(&TenantId::new(tenant_id))?;
    Ok(Json(StatusResponse::new("activated")))
}

/// Handler for tenant suspension.
///
/// # HTTP Request
///
/// `POST [base]/api/v1/tenants/{tenant_id}/suspend`
///
/// # Response
///
/// - `200 OK` - `{"status": "suspended"}`
/// - `404 Not Found` - Unknown tenant
pub async fn suspend_tenant_handler<S>(
    State(state): State<AppState<S>>,
    Path(tenant_id): Path<String>,
) -> RestResult<Json<StatusResponse>>
where
    S: TenantStore,
{
    debug!(tenant_id = %tenant_id, "Processing tenant suspension request");

    state
        .control_plane()
        .suspend_tenant(&TenantId::new(tenant_id))?;
    Ok(Json(StatusResponse::new("suspended")))
}

/// Handler returning the identified tenant.
///
/// # HTTP Request
///
/// `GET [base]/api/v1/tenant`
///
/// # Response
///
/// - `200 OK` - The tenant record
/// - `401 Unauthorized` - No tenant could be identified
/// - `404 Not Found` - The identified tenant does not exist
pub async fn get_tenant_handler<S>(
    State(state): State<AppState<S>>,
    tenant: ResolvedTenant,
) -> RestResult<Response>
where
    S: TenantStore,
{
    debug!(tenant_id = %tenant, "Processing tenant read request");

    let record = state.control_plane().get_tenant(tenant.tenant_id())?;
    Ok((StatusCode::OK, Json(record)).into_response())
}
