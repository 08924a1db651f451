//! Request and response bodies of the tenancy REST API.
//!
//! Request bodies check their own field constraints through `validate`;
//! a violation becomes `400 Bad Request`.

use serde::{Deserialize, Serialize};
use tenancy_persistence::capability::CapabilityType;
use tenancy_persistence::tenant::TenantId;

use crate::error::{RestError, RestResult};

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "tenant-control-plane";

/// Body of `POST /api/v1/tenants`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTenantRequest {
    /// Display name of the new tenant.
    pub name: String,
}

impl CreateTenantRequest {
    /// Checks that the name is not empty.
    pub fn validate(&self) -> RestResult<()> {
        require_non_empty("name", &self.name)
    }
}

/// Body of `POST /api/v1/capabilities`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProvisionCapabilityRequest {
    /// Wire name of the capability type, e.g. `STORAGE`.
    #[serde(rename = "type")]
    pub capability_type: String,
    /// Capability name, unique lookup key within the tenant.
    pub name: String,
    /// Maximum limit of the new quota.
    pub quota: u64,
}

impl ProvisionCapabilityRequest {
    /// Validates the body and parses the capability type.
    pub fn validate(&self) -> RestResult<CapabilityType> {
        require_non_empty("name", &self.name)?;
        require_positive("quota", self.quota)?;
        Ok(self.capability_type.parse()?)
    }
}

/// Body of `POST /api/v1/authorize`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorizeRequest {
    /// Name of the capability to draw on.
    pub capability: String,
    /// Units the caller intends to consume.
    pub resource_units: u64,
}

impl AuthorizeRequest {
    /// Checks that a capability is named and at least one unit is requested.
    pub fn validate(&self) -> RestResult<()> {
        require_non_empty("capability", &self.capability)?;
        require_positive("resource_units", self.resource_units)
    }
}

/// Body of `POST /api/v1/usage`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordUsageRequest {
    /// Name of the capability.
    pub capability: String,
    /// New absolute usage.
    pub usage: u64,
}

impl RecordUsageRequest {
    /// Checks that a capability is named.
    pub fn validate(&self) -> RestResult<()> {
        require_non_empty("capability", &self.capability)
    }
}

/// `{"status": "..."}` acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Outcome keyword.
    pub status: String,
}

impl StatusResponse {
    /// Creates an acknowledgement.
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

/// Authorization decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizeResponse {
    /// Whether the units may be consumed.
    pub authorized: bool,
    /// The tenant the decision applies to.
    pub tenant_id: TenantId,
    /// The capability checked.
    pub capability: String,
    /// The units requested.
    pub units: u64,
}

/// Health check body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `healthy` while the process serves requests.
    pub status: String,
    /// Service name.
    pub service: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
        }
    }
}

fn require_non_empty(field: &str, value: &str) -> RestResult<()> {
    if value.is_empty() {
        return Err(RestError::bad_request(format!("{} is required", field)));
    }
    Ok(())
}

fn require_positive(field: &str, value: u64) -> RestResult<()> {
    if value == 0 {
        return Err(RestError::bad_request(format!("{} must be at least 1", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tenant_validation() {
        let ok: CreateTenantRequest = serde_json::from_str(r#"{"name":"Acme"}"#).unwrap();
        assert!(ok.validate().is_ok());

        let empty: CreateTenantRequest = serde_json::from_str(r#"{"name":""}"#).unwrap();
        assert_eq!(empty.validate().unwrap_err().message(), "name is required");

        let spaces: CreateTenantRequest = serde_json::from_str(r#"{"name":"  "}"#).unwrap();
        assert!(spaces.validate().is_ok());
    }

    #[test]
    fn test_provision_parses_type() {
        let req: ProvisionCapabilityRequest =
            serde_json::from_str(r#"{"type":"API_CALLS","name":"api","quota":10000}"#).unwrap();
        assert_eq!(req.validate().unwrap(), CapabilityType::ApiCalls);
    }

    #[test]
    fn test_provision_rejections() {
        let zero: ProvisionCapabilityRequest =
            serde_json::from_str(r#"{"type":"STORAGE","name":"s","quota":0}"#).unwrap();
        assert!(zero.validate().unwrap_err().message().contains("quota"));

        let unknown: ProvisionCapabilityRequest =
            serde_json::from_str(r#"{"type":"GPU","name":"g","quota":1}"#).unwrap();
        assert!(unknown.validate().unwrap_err().message().contains("GPU"));

        assert!(
            serde_json::from_str::<ProvisionCapabilityRequest>(
                r#"{"type":"STORAGE","name":"s","quota":-5}"#
            )
            .is_err()
        );
    }

    #[test]
    fn test_authorize_requires_units() {
        let req: AuthorizeRequest =
            serde_json::from_str(r#"{"capability":"api","resource_units":0}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_usage_allows_zero() {
        let req: RecordUsageRequest =
            serde_json::from_str(r#"{"capability":"api","usage":0}"#).unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_health_body() {
        let json = serde_json::to_value(HealthResponse::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "healthy", "service": "tenant-control-plane"})
        );
    }
}
