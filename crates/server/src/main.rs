//! Tenancy Control Plane Server
//!
//! Serves tenant onboarding, identification and quota authorization over
//! HTTP, backed by an in-memory store.

mod demo;

use clap::Parser;
use tenancy_control::ControlPlane;
use tenancy_rest::{ServerConfig, create_app_with_config, init_logging};
use tracing::info;

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        seed_demo = config.seed_demo,
        "Starting Tenancy Control Plane Server"
    );

    let plane = ControlPlane::in_memory();
    if config.seed_demo {
        let tenant = demo::seed_demo_tenant(&plane, &config)
            .map_err(|e| anyhow::anyhow!("Failed to seed demo tenant: {}", e))?;
        info!(tenant_id = %tenant.id, "Demo tenant ready");
    }

    let app = create_app_with_config(plane, config.clone());
    serve(app, &config).await
}
