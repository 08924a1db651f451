//! HTTP request handlers for the tenancy REST API.
//!
//! - [`tenants`] - Tenant onboarding, lifecycle and lookup
//! - [`capabilities`] - Capability listing and provisioning
//! - [`quota`] - Authorization decisions and usage recording
//! - [`health`] - Health check endpoint

pub mod capabilities;
pub mod health;
pub mod quota;
pub mod tenants;

// Re-export handlers for convenience
pub use capabilities::{list_capabilities_handler, provision_capability_handler};
pub use health::health_handler;
pub use quota::{authorize_handler, record_usage_handler};
pub use tenants::{
    activate_tenant_handler, create_tenant_handler, get_tenant_handler, suspend_tenant_handler,
};
