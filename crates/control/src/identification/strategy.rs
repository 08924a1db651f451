//! Identification strategy kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The mechanism that identified a request's tenant.
///
/// Strategies are listed in resolution order (highest precedence first):
/// 1. `X-Tenant-Id` header
/// 2. `tenant_id` claim of a bearer token
/// 3. Registered API key
/// 4. Registered custom domain
/// 5. Registered subdomain
/// 6. `/tenants/{id}` path prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentificationStrategy {
    /// Explicit `X-Tenant-Id` header.
    #[serde(rename = "HEADER")]
    Header,
    /// `tenant_id` claim read from a bearer token (no signature check).
    #[serde(rename = "JWT_TOKEN")]
    JwtClaim,
    /// `X-Api-Key` header looked up in the API key registry.
    #[serde(rename = "API_KEY")]
    ApiKey,
    /// Request host looked up in the custom domain registry.
    #[serde(rename = "CUSTOM_DOMAIN")]
    CustomDomain,
    /// First host label looked up in the subdomain registry.
    #[serde(rename = "SUBDOMAIN")]
    Subdomain,
    /// Path segment after `/tenants/`.
    #[serde(rename = "PATH")]
    Path,
}

impl IdentificationStrategy {
    /// Fixed resolution order, highest precedence first.
    pub const RESOLUTION_ORDER: [IdentificationStrategy; 6] = [
        IdentificationStrategy::Header,
        IdentificationStrategy::JwtClaim,
        IdentificationStrategy::ApiKey,
        IdentificationStrategy::CustomDomain,
        IdentificationStrategy::Subdomain,
        IdentificationStrategy::Path,
    ];

    /// Returns the priority of this strategy (higher = consulted earlier).
    pub fn priority(&self) -> u8 {
        match self {
            IdentificationStrategy::Header => 6,
            IdentificationStrategy::JwtClaim => 5,
            IdentificationStrategy::ApiKey => 4,
            IdentificationStrategy::CustomDomain => 3,
            IdentificationStrategy::Subdomain => 2,
            IdentificationStrategy::Path => 1,
        }
    }

    /// Returns the wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentificationStrategy::Header => "HEADER",
            IdentificationStrategy::JwtClaim => "JWT_TOKEN",
            IdentificationStrategy::ApiKey => "API_KEY",
            IdentificationStrategy::CustomDomain => "CUSTOM_DOMAIN",
            IdentificationStrategy::Subdomain => "SUBDOMAIN",
            IdentificationStrategy::Path => "PATH",
        }
    }
}

impl fmt::Display for IdentificationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Ord for IdentificationStrategy {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for IdentificationStrategy {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
