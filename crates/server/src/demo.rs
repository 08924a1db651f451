//! Demo tenant seeding.

use tenancy_control::{ControlPlane, ControlPlaneResult};
use tenancy_persistence::capability::CapabilityType;
use tenancy_persistence::core::TenantStore;
use tenancy_persistence::tenant::Tenant;
use tenancy_rest::ServerConfig;
use tracing::info;

/// Display name of the seeded tenant.
pub const DEMO_TENANT_NAME: &str = "Demo Corp";

/// Capabilities granted to the demo tenant: type, name and quota.
pub const DEMO_CAPABILITIES: [(CapabilityType, &str, u64); 2] = [
    (CapabilityType::Storage, "storage", 1000),
    (CapabilityType::ApiCalls, "api", 10_000),
];

/// Onboards an active demo tenant reachable through the configured API key
/// and subdomain.
///
/// Returns the tenant as it was stored after activation.
pub fn seed_demo_tenant<S>(plane: &ControlPlane<S>, config: &ServerConfig) -> ControlPlaneResult<Tenant>
where
    S: TenantStore,
{
    let tenant = plane.onboard_tenant(DEMO_TENANT_NAME);
    info!(tenant_id = %tenant.id, "Created demo tenant");

    plane.activate_tenant(&tenant.id)?;
    info!(tenant_id = %tenant.id, "Activated demo tenant");

    for (capability_type, name, quota) in DEMO_CAPABILITIES {
        plane.provision_capability(&tenant.id, capability_type, name, quota)?;
        info!(
            tenant_id = %tenant.id,
            capability = name,
            quota,
            "Provisioned demo capability"
        );
    }

    plane.register_api_key(tenant.id.clone(), config.demo_api_key.as_str());
    plane.register_subdomain(tenant.id.clone(), config.demo_subdomain.as_str());
    info!(
        tenant_id = %tenant.id,
        subdomain = %config.demo_subdomain,
        "Registered demo API key and subdomain"
    );

    plane.get_tenant(&tenant.id)
}
