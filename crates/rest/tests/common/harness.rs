//! REST API test harness.
//!
//! Provides a test server wired to an in-memory control plane that tests
//! can also drive directly.

use axum::http::{HeaderName, HeaderValue};
use axum_test::TestServer;
use tenancy_control::ControlPlane;
use tenancy_persistence::capability::CapabilityType;
use tenancy_persistence::tenant::Tenant;
use tenancy_rest::{ServerConfig, create_app_with_config};

pub const X_TENANT_ID: HeaderName = HeaderName::from_static("x-tenant-id");
pub const X_API_KEY: HeaderName = HeaderName::from_static("x-api-key");

/// Test harness for REST API testing.
///
/// # Example
///
/// ```rust,ignore
/// let harness = RestTestHarness::new();
/// let tenant = harness.active_tenant("Acme");
///
/// let response = harness
///     .server
///     .get("/api/v1/tenant")
///     .add_header(X_TENANT_ID, harness.header_value(tenant.id.as_str()))
///     .await;
/// response.assert_status_ok();
/// ```
pub struct RestTestHarness {
    /// The test server instance.
    pub server: TestServer,

    /// The control plane behind the server.
    pub plane: ControlPlane,
}

impl RestTestHarness {
    /// Creates a harness with the testing configuration.
    pub fn new() -> Self {
        Self::with_config(ServerConfig::for_testing())
    }

    /// Creates a harness with a custom configuration.
    pub fn with_config(config: ServerConfig) -> Self {
        let plane = ControlPlane::in_memory();
        let app = create_app_with_config(plane.clone(), config);
        let server = TestServer::new(app).expect("Failed to create test server");
        Self { server, plane }
    }

    /// Onboards and activates a tenant.
    pub fn active_tenant(&self, name: &str) -> Tenant {
        let tenant = self.plane.onboard_tenant(name);
        self.plane
            .activate_tenant(&tenant.id)
            .expect("Failed to activate tenant");
        tenant
    }

    /// Onboards and activates a tenant holding an `API_CALLS` capability
    /// named `api` and reachable through `api_key`.
    pub fn api_tenant(&self, name: &str, limit: u64, api_key: &str) -> Tenant {
        let tenant = self.active_tenant(name);
        self.plane
            .provision_capability(&tenant.id, CapabilityType::ApiCalls, "api", limit)
            .expect("Failed to provision capability");
        self.plane.register_api_key(tenant.id.clone(), api_key);
        tenant
    }

    /// Converts a string into a header value.
    pub fn header_value(&self, value: &str) -> HeaderValue {
        HeaderValue::from_str(value).expect("Invalid header value")
    }
}
