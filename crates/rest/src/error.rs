//! Error types for the tenancy REST API.
//!
//! Every error is rendered as a JSON object with a single `error` field.
//!
//! # Error Mapping
//!
//! Control plane errors are mapped to HTTP status codes as follows:
//!
//! | Control Plane Error | HTTP Status |
//! |---------------------|-------------|
//! | TenantError::NotFound | 404 |
//! | CapabilityError::NotFound | 404 |
//! | TenantError::NotActive | 412 |
//! | IdentificationError::Unresolved | 401 |
//! | ValidationError | 400 |

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use tenancy_persistence::error::{
    CapabilityError, ControlPlaneError, IdentificationError, TenantError, ValidationError,
};

/// Body message for requests no strategy could identify.
pub const IDENTIFICATION_FAILED: &str = "Tenant identification failed";

/// Body message when a protected handler runs without a resolved tenant.
pub const TENANT_CONTEXT_MISSING: &str = "Tenant context not found";

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// Referenced tenant or capability does not exist (HTTP 404).
    NotFound {
        /// Error message.
        message: String,
    },

    /// Operation not allowed in the tenant's current status (HTTP 412).
    PreconditionFailed {
        /// Error message.
        message: String,
    },

    /// The request could not be tied to a tenant (HTTP 401).
    Unauthorized {
        /// Error message.
        message: String,
    },

    /// Malformed body or invalid field (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl RestError {
    /// Creates a 400 error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        RestError::BadRequest {
            message: message.into(),
        }
    }

    /// Creates a 401 error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        RestError::Unauthorized {
            message: message.into(),
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::PreconditionFailed { .. } => StatusCode::PRECONDITION_FAILED,
            RestError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the message placed in the response body.
    pub fn message(&self) -> &str {
        match self {
            RestError::NotFound { message }
            | RestError::PreconditionFailed { message }
            | RestError::Unauthorized { message }
            | RestError::BadRequest { message }
            | RestError::InternalError { message } => message,
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { message } => write!(f, "Not found: {}", message),
            RestError::PreconditionFailed { message } => {
                write!(f, "Precondition failed: {}", message)
            }
            RestError::Unauthorized { message } => write!(f, "Unauthorized: {}", message),
            RestError::BadRequest { message } => write!(f, "Bad request: {}", message),
            RestError::InternalError { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({ "error": self.message() });
        (status, Json(body)).into_response()
    }
}

// Conversions from control plane errors

impl From<ControlPlaneError> for RestError {
    fn from(err: ControlPlaneError) -> Self {
        match err {
            ControlPlaneError::Tenant(e) => e.into(),
            ControlPlaneError::Capability(e) => e.into(),
            ControlPlaneError::Identification(e) => e.into(),
            ControlPlaneError::Validation(e) => e.into(),
        }
    }
}

impl From<TenantError> for RestError {
    fn from(err: TenantError) -> Self {
        match err {
            TenantError::NotFound { .. } => RestError::NotFound {
                message: err.to_string(),
            },
            TenantError::NotActive { .. } => RestError::PreconditionFailed {
                message: err.to_string(),
            },
        }
    }
}

impl From<CapabilityError> for RestError {
    fn from(err: CapabilityError) -> Self {
        RestError::NotFound {
            message: err.to_string(),
        }
    }
}

impl From<IdentificationError> for RestError {
    fn from(err: IdentificationError) -> Self {
        match err {
            IdentificationError::Unresolved => RestError::unauthorized(IDENTIFICATION_FAILED),
        }
    }
}

impl From<ValidationError> for RestError {
    fn from(err: ValidationError) -> Self {
        RestError::bad_request(err.to_string())
    }
}

impl From<JsonRejection> for RestError {
    fn from(rejection: JsonRejection) -> Self {
        RestError::bad_request(format!("Invalid JSON body: {}", rejection.body_text()))
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;
