//! Authorization and usage handlers.

use axum::{Json, extract::State};
use tenancy_persistence::core::TenantStore;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::{JsonBody, ResolvedTenant};
use crate::state::AppState;
use crate::types::{AuthorizeRequest, AuthorizeResponse, RecordUsageRequest, StatusResponse};

/// Handler deciding whether the identified tenant may consume units.
///
/// A denial is a normal `200 OK` with `"authorized": false`. Nothing is
/// reserved; callers report what they consumed through the usage endpoint.
///
/// # HTTP Request
///
/// `POST [base]/api/v1/authorize`
///
/// ```json
/// {"capability": "api", "resource_units": 500}
/// ```
///
/// # Response
///
/// - `200 OK` - `{"authorized", "tenant_id", "capability", "units"}`
/// - `400 Bad Request` - Malformed body or fewer than 1 unit
/// - `401 Unauthorized` - No tenant could be identified
pub async fn authorize_handler<S>(
    State(state): State<AppState<S>>,
    tenant: ResolvedTenant,
    JsonBody(body): JsonBody<AuthorizeRequest>,
) -> RestResult<Json<AuthorizeResponse>>
where
    S: TenantStore,
{
    body.validate()?;

    let authorized = state.control_plane().authorize_request(
        tenant.tenant_id(),
        &body.capability,
        body.resource_units,
    );
    debug!(
        tenant_id = %tenant,
        capability = %body.capability,
        units = body.resource_units,
        authorized,
        "Processed authorization request"
    );

    Ok(Json(AuthorizeResponse {
        authorized,
        tenant_id: tenant.into_context().tenant_id,
        capability: body.capability,
        units: body.resource_units,
    }))
}

/// Handler recording absolute usage of a capability.
///
/// # HTTP Request
///
/// `POST [base]/api/v1/usage`
///
/// ```json
/// {"capability": "api", "usage": 1200}
/// ```
///
/// # Response
///
/// - `200 OK` - `{"status": "recorded"}`
/// - `400 Bad Request` - Malformed body
/// - `401 Unauthorized` - No tenant could be identified
/// - `404 Not Found` - The tenant holds no such capability
pub async fn record_usage_handler<S>(
    State(state): State<AppState<S>>,
    tenant: ResolvedTenant,
    JsonBody(body): JsonBody<RecordUsageRequest>,
) -> RestResult<Json<StatusResponse>>
where
    S: TenantStore,
{
    body.validate()?;
    debug!(
        tenant_id = %tenant,
        capability = %body.capability,
        usage = body.usage,
        "Processing usage request"
    );

    state
        .control_plane()
        .record_usage(tenant.tenant_id(), &body.capability, body.usage)?;
    Ok(Json(StatusResponse::new("recorded")))
}
