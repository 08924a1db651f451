//! Tenant identification.
//!
//! Works out which tenant an inbound request belongs to. Six strategies are
//! tried in a fixed order and the first match wins:
//!
//! | Strategy | Reads | Registry |
//! |----------|-------|----------|
//! | [`Header`](IdentificationStrategy::Header) | `X-Tenant-Id` | no |
//! | [`JwtClaim`](IdentificationStrategy::JwtClaim) | `Authorization: Bearer` claim `tenant_id` | no |
//! | [`ApiKey`](IdentificationStrategy::ApiKey) | `X-Api-Key` | yes |
//! | [`CustomDomain`](IdentificationStrategy::CustomDomain) | whole host | yes |
//! | [`Subdomain`](IdentificationStrategy::Subdomain) | first host label | yes |
//! | [`Path`](IdentificationStrategy::Path) | `/tenants/{id}` | no |
//!
//! Identification never consults the tenant store. A resolved
//! [`TenantContext`] may name a tenant that does not exist.

mod context;
mod identifiers;
mod jwt;
mod registry;
mod request;
mod resolver;
mod strategy;

pub use context::TenantContext;
pub use identifiers::{
    ApiKeyTenantIdentifier, CustomDomainTenantIdentifier, HeaderTenantIdentifier,
    PathTenantIdentifier, SubdomainTenantIdentifier, TENANTS_PATH_PREFIX, TenantIdentifier,
};
pub use jwt::{BEARER_PREFIX, JwtClaimTenantIdentifier, TENANT_CLAIM};
pub use registry::{Registries, TenantRegistry};
pub use request::{AUTHORIZATION, RequestContext, X_API_KEY, X_TENANT_ID};
pub use resolver::TenantResolver;
pub use strategy::IdentificationStrategy;
