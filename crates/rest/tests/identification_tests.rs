//! Integration tests for tenant identification over HTTP.
//!
//! Each test registers identities on the control plane, sends a request
//! carrying one or more identification signals, and checks which tenant
//! the protected route saw.

mod common;

use axum::http::{HeaderName, HeaderValue, header};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde_json::{Value, json};

use common::assertions::{assert_error, assert_status};
use common::harness::{RestTestHarness, X_API_KEY, X_TENANT_ID};

fn bearer_token(tenant_id: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(json!({"sub": "user-1", "tenant_id": tenant_id}).to_string());
    format!("Bearer {}.{}.sig", header, payload)
}

async fn identified_tenant(
    harness: &RestTestHarness,
    headers: &[(HeaderName, &str)],
) -> (u16, Value) {
    let mut request = harness.server.get("/api/v1/tenant");
    for (name, value) in headers {
        request = request.add_header(name.clone(), harness.header_value(value));
    }
    let response = request.await;
    (response.status_code().as_u16(), response.json())
}

// =============================================================================
// Rejection
// =============================================================================

#[tokio::test]
async fn test_unidentified_request_is_rejected() {
    let harness = RestTestHarness::new();
    harness.active_tenant("Acme");

    for path in ["/api/v1/tenant", "/api/v1/capabilities"] {
        let response = harness.server.get(path).await;
        assert_error(&response, 401, "Tenant identification failed");
    }

    let response = harness
        .server
        .post("/api/v1/authorize")
        .json(&json!({"capability": "api", "resource_units": 1}))
        .await;
    assert_status(&response, 401);
}

#[tokio::test]
async fn test_unregistered_api_key_is_rejected() {
    let harness = RestTestHarness::new();
    harness.api_tenant("Acme", 100, "known");

    let response = harness
        .server
        .get("/api/v1/tenant")
        .add_header(X_API_KEY, harness.header_value("unknown"))
        .await;

    assert_status(&response, 401);
}

#[tokio::test]
async fn test_malformed_bearer_token_is_rejected() {
    let harness = RestTestHarness::new();

    for value in ["Bearer not-a-token", "Basic dXNlcjpwYXNz", "Bearer a.%%%.c"] {
        let response = harness
            .server
            .get("/api/v1/tenant")
            .add_header(header::AUTHORIZATION, harness.header_value(value))
            .await;
        assert_status(&response, 401);
    }
}

#[tokio::test]
async fn test_public_routes_skip_identification() {
    let harness = RestTestHarness::new();

    harness.server.get("/health").await.assert_status_ok();
    let response = harness
        .server
        .post("/api/v1/tenants")
        .json(&json!({"name": "Acme"}))
        .await;
    assert_status(&response, 201);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let harness = RestTestHarness::new();

    let response = harness.server.get("/api/v1/nothing-here").await;

    assert_status(&response, 404);
}

#[tokio::test]
async fn test_non_ascii_tenant_header_still_identifies() {
    let harness = RestTestHarness::new();

    let response = harness
        .server
        .post("/api/v1/authorize")
        .add_header(X_TENANT_ID, HeaderValue::from_bytes("acmé".as_bytes()).unwrap())
        .json(&json!({"capability": "api", "resource_units": 1}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["tenant_id"], "acmé");
    assert_eq!(body["authorized"], false);
}

#[tokio::test]
async fn test_non_ascii_first_api_key_is_not_skipped() {
    let harness = RestTestHarness::new();
    harness.api_tenant("Acme", 100, "second");

    let response = harness
        .server
        .get("/api/v1/tenant")
        .add_header(X_API_KEY, HeaderValue::from_bytes("kü".as_bytes()).unwrap())
        .add_header(X_API_KEY, harness.header_value("second"))
        .await;

    assert_status(&response, 401);
}

// =============================================================================
// Strategies
// =============================================================================

#[tokio::test]
async fn test_identifies_by_header() {
    let harness = RestTestHarness::new();
    let tenant = harness.active_tenant("Acme");

    let (status, body) = identified_tenant(&harness, &[(X_TENANT_ID, tenant.id.as_str())]).await;

    assert_eq!(status, 200);
    assert_eq!(body["tenant_id"], tenant.id.as_str());
}

#[tokio::test]
async fn test_identifies_by_bearer_claim() {
    let harness = RestTestHarness::new();
    let tenant = harness.active_tenant("Acme");
    let token = bearer_token(tenant.id.as_str());

    let (status, body) = identified_tenant(&harness, &[(header::AUTHORIZATION, token.as_str())]).await;

    assert_eq!(status, 200);
    assert_eq!(body["name"], "Acme");
}

#[tokio::test]
async fn test_identifies_by_api_key() {
    let harness = RestTestHarness::new();
    let tenant = harness.api_tenant("Acme", 100, "sk-live-1");

    let (status, body) = identified_tenant(&harness, &[(X_API_KEY, "sk-live-1")]).await;

    assert_eq!(status, 200);
    assert_eq!(body["tenant_id"], tenant.id.as_str());
}

#[tokio::test]
async fn test_identifies_by_custom_domain() {
    let harness = RestTestHarness::new();
    let tenant = harness.active_tenant("Acme");
    harness
        .plane
        .register_custom_domain(tenant.id.clone(), "api.acme.com");

    let (status, body) = identified_tenant(&harness, &[(header::HOST, "api.acme.com")]).await;

    assert_eq!(status, 200);
    assert_eq!(body["tenant_id"], tenant.id.as_str());
}

#[tokio::test]
async fn test_identifies_by_subdomain() {
    let harness = RestTestHarness::new();
    let tenant = harness.active_tenant("Demo Corp");
    harness.plane.register_subdomain(tenant.id.clone(), "demo");

    let (status, body) = identified_tenant(&harness, &[(header::HOST, "demo.platform.io")]).await;

    assert_eq!(status, 200);
    assert_eq!(body["tenant_id"], tenant.id.as_str());
}

#[tokio::test]
async fn test_unregistered_subdomain_is_rejected() {
    let harness = RestTestHarness::new();
    let tenant = harness.active_tenant("Demo Corp");
    harness.plane.register_subdomain(tenant.id.clone(), "demo");

    let (status, _) = identified_tenant(&harness, &[(header::HOST, "other.platform.io")]).await;

    assert_eq!(status, 401);
}

// =============================================================================
// Precedence
// =============================================================================

#[tokio::test]
async fn test_header_beats_api_key() {
    let harness = RestTestHarness::new();
    let keyed = harness.api_tenant("Keyed", 100, "k1");
    let direct = harness.active_tenant("Direct");

    let (_, body) = identified_tenant(
        &harness,
        &[(X_API_KEY, "k1"), (X_TENANT_ID, direct.id.as_str())],
    )
    .await;

    assert_eq!(body["tenant_id"], direct.id.as_str());
    assert_ne!(body["tenant_id"], keyed.id.as_str());
}

#[tokio::test]
async fn test_bearer_claim_beats_api_key() {
    let harness = RestTestHarness::new();
    harness.api_tenant("Keyed", 100, "k1");
    let claimed = harness.active_tenant("Claimed");
    let token = bearer_token(claimed.id.as_str());

    let (_, body) = identified_tenant(
        &harness,
        &[(X_API_KEY, "k1"), (header::AUTHORIZATION, token.as_str())],
    )
    .await;

    assert_eq!(body["tenant_id"], claimed.id.as_str());
}

#[tokio::test]
async fn test_api_key_beats_subdomain() {
    let harness = RestTestHarness::new();
    let keyed = harness.api_tenant("Keyed", 100, "k1");
    let hosted = harness.active_tenant("Hosted");
    harness.plane.register_subdomain(hosted.id.clone(), "hosted");

    let (_, body) = identified_tenant(
        &harness,
        &[(header::HOST, "hosted.platform.io"), (X_API_KEY, "k1")],
    )
    .await;

    assert_eq!(body["tenant_id"], keyed.id.as_str());
}

#[tokio::test]
async fn test_reregistered_api_key_moves_tenant() {
    let harness = RestTestHarness::new();
    let first = harness.api_tenant("First", 100, "shared");
    let second = harness.active_tenant("Second");

    let (_, body) = identified_tenant(&harness, &[(X_API_KEY, "shared")]).await;
    assert_eq!(body["tenant_id"], first.id.as_str());

    harness.plane.register_api_key(second.id.clone(), "shared");

    let (_, body) = identified_tenant(&harness, &[(X_API_KEY, "shared")]).await;
    assert_eq!(body["tenant_id"], second.id.as_str());
}

// =============================================================================
// End-to-End
// =============================================================================

#[tokio::test]
async fn test_demo_flow_over_api_key() {
    let harness = RestTestHarness::new();

    let response = harness
        .server
        .post("/api/v1/tenants")
        .json(&json!({"name": "Demo Corp"}))
        .await;
    let created: Value = response.json();
    let tenant_id = created["tenant_id"].as_str().unwrap().to_string();

    harness
        .server
        .post(&format!("/api/v1/tenants/{}/activate", tenant_id))
        .await
        .assert_status_ok();

    let response = harness
        .server
        .post("/api/v1/capabilities")
        .add_header(X_TENANT_ID, harness.header_value(&tenant_id))
        .json(&json!({"type": "API_CALLS", "name": "api", "quota": 10000}))
        .await;
    assert_status(&response, 201);

    harness
        .plane
        .register_api_key(tenant_id.as_str().into(), "demo-key-123");

    let authorize = |units: u64| {
        harness
            .server
            .post("/api/v1/authorize")
            .add_header(X_API_KEY, harness.header_value("demo-key-123"))
            .json(&json!({"capability": "api", "resource_units": units}))
    };

    let body: Value = authorize(500).await.json();
    assert_eq!(body["authorized"], true);
    assert_eq!(body["tenant_id"], tenant_id);

    let body: Value = authorize(10_001).await.json();
    assert_eq!(body["authorized"], false);

    harness
        .server
        .post(&format!("/api/v1/tenants/{}/suspend", tenant_id))
        .await
        .assert_status_ok();

    let body: Value = authorize(500).await.json();
    assert_eq!(body["authorized"], false);
}
