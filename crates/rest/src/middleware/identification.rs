//! Tenant identification middleware.
//!
//! Resolves the tenant of every protected request before its handler runs.
//! The request is reduced to a transport-neutral [`RequestContext`] and
//! passed to the control plane's resolver; the resulting
//! [`TenantContext`] is stored in the request extensions, where the
//! [`ResolvedTenant`](crate::extractors::ResolvedTenant) extractor picks it up.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, Uri, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tenancy_control::identification::{RequestContext, TenantContext};
use tenancy_persistence::core::TenantStore;
use tracing::{debug, warn};

use crate::error::RestError;
use crate::state::AppState;

/// Builds the neutral request view from HTTP request parts.
///
/// The host comes from the `Host` header, falling back to the URI
/// authority. Header names are lower-cased; when a header repeats, its
/// first value wins. Values are decoded as UTF-8, with invalid bytes
/// replaced by `U+FFFD`, so every header present on the request reaches the
/// resolver.
pub fn request_context(uri: &Uri, headers: &HeaderMap) -> RequestContext {
    let host = match headers.get(header::HOST) {
        Some(value) => String::from_utf8_lossy(value.as_bytes()).into_owned(),
        None => uri
            .authority()
            .map(|a| a.as_str().to_string())
            .unwrap_or_default(),
    };

    let mut context = RequestContext::new(host, uri.path());
    for (name, value) in headers {
        context.insert_header(name.as_str(), String::from_utf8_lossy(value.as_bytes()));
    }
    context
}

/// Middleware function for tenant identification.
///
/// Rejects the request with `401 Unauthorized` when no strategy matches.
/// This can be used with `axum::middleware::from_fn_with_state`.
pub async fn identification_middleware<S>(
    State(state): State<AppState<S>>,
    mut request: Request,
    next: Next,
) -> Response
where
    S: TenantStore + 'static,
{
    let context = request_context(request.uri(), request.headers());

    let tenant: TenantContext = match state.control_plane().require_tenant(&context) {
        Ok(tenant) => tenant,
        Err(e) => {
            warn!(host = %context.host(), path = %context.path(), "Tenant identification failed");
            return RestError::from(e).into_response();
        }
    };

    debug!(
        tenant_id = %tenant.tenant_id,
        strategy = %tenant.strategy,
        "Identified tenant"
    );
    request.extensions_mut().insert(tenant);

    next.run(request).await
}
