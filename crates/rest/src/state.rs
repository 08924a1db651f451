//! Application state for the tenancy REST API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the control plane and the server configuration.

use std::sync::Arc;

use tenancy_control::ControlPlane;
use tenancy_persistence::core::TenantStore;

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The tenant store behind the control plane (must implement [`TenantStore`])
///
/// # Example
///
/// ```rust
/// use tenancy_control::ControlPlane;
/// use tenancy_rest::{AppState, ServerConfig};
///
/// let state = AppState::new(ControlPlane::in_memory(), ServerConfig::default());
/// assert_eq!(state.config().port, 8080);
/// ```
pub struct AppState<S> {
    /// The control plane.
    control_plane: ControlPlane<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            control_plane: self.control_plane.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: TenantStore> AppState<S> {
    /// Creates a new AppState with the given control plane and configuration.
    pub fn new(control_plane: ControlPlane<S>, config: ServerConfig) -> Self {
        Self {
            control_plane,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the control plane.
    pub fn control_plane(&self) -> &ControlPlane<S> {
        &self.control_plane
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new(ControlPlane::in_memory(), ServerConfig::for_testing());

        assert_eq!(state.control_plane().store().backend_name(), "memory");
        assert_eq!(state.config().port, 0);
    }

    #[test]
    fn test_app_state_clone_shares_control_plane() {
        let state = AppState::new(ControlPlane::in_memory(), ServerConfig::default());
        let cloned = state.clone();

        let tenant = cloned.control_plane().onboard_tenant("Acme");
        assert!(state.control_plane().get_tenant(&tenant.id).is_ok());
        assert_eq!(state.config().port, cloned.config().port);
    }
}
