//! Tenant hint extraction from bearer tokens.
//!
//! This reads the `tenant_id` claim out of a JWT-shaped bearer token. The
//! signature, expiry and issuer are **not** checked: a client can put any
//! tenant id in a hand-made token. Treat the result as a routing hint, never
//! as proof of identity. Authentication belongs to a separate layer.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde_json::{Map, Value};
use tenancy_persistence::tenant::TenantId;
use tracing::trace;

use super::identifiers::TenantIdentifier;
use super::request::{AUTHORIZATION, RequestContext};
use super::strategy::IdentificationStrategy;

/// Scheme prefix of the `Authorization` header, including the space.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Name of the claim carrying the tenant identity.
pub const TENANT_CLAIM: &str = "tenant_id";

/// Identifies the tenant from the `tenant_id` claim of a bearer token.
#[derive(Debug, Default)]
pub struct JwtClaimTenantIdentifier;

impl JwtClaimTenantIdentifier {
    /// Extracts the tenant claim from a compact token (`header.payload.signature`).
    ///
    /// Returns `None` unless the token has exactly three segments, the middle
    /// one is unpadded base64url holding a JSON object, and that object has
    /// a string-valued `tenant_id`.
    pub fn tenant_from_token(token: &str) -> Option<TenantId> {
        let segments: Vec<&str> = token.split('.').collect();
        if segments.len() != 3 {
            return None;
        }

        let payload = match URL_SAFE_NO_PAD.decode(segments[1]) {
            Ok(bytes) => bytes,
            Err(e) => {
                trace!(error = %e, "Bearer token payload is not base64url");
                return None;
            }
        };

        let claims: Map<String, Value> = match serde_json::from_slice(&payload) {
            Ok(claims) => claims,
            Err(e) => {
                trace!(error = %e, "Bearer token payload is not a JSON object");
                return None;
            }
        };

        claims
            .get(TENANT_CLAIM)
            .and_then(Value::as_str)
            .map(TenantId::new)
    }
}

impl TenantIdentifier for JwtClaimTenantIdentifier {
    fn identify(&self, request: &RequestContext) -> Option<TenantId> {
        let token = request.header(AUTHORIZATION)?.strip_prefix(BEARER_PREFIX)?;
        Self::tenant_from_token(token)
    }

    fn strategy(&self) -> IdentificationStrategy {
        IdentificationStrategy::JwtClaim
    }
}
