//! Tenant identifier type.
//!
//! This module defines the [`TenantId`] type, the opaque and stable identity
//! assigned to a tenant when it is onboarded.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix carried by every generated tenant identity.
pub const TENANT_ID_PREFIX: &str = "tenant-";

/// Number of hex characters taken from the random UUID when generating ids.
const GENERATED_SUFFIX_LEN: usize = 8;

/// An opaque tenant identifier.
///
/// Identities are generated once by [`TenantId::generate`] when a tenant is
/// created and are never reused. Identities that arrive from the outside
/// (request headers, path segments, token claims) are wrapped verbatim with
/// [`TenantId::new`]; whether such an identity refers to a known tenant is
/// decided later by the repository lookup.
///
/// # Examples
///
/// ```
/// use tenancy_persistence::tenant::TenantId;
///
/// let tenant = TenantId::new("tenant-1a2b3c4d");
/// assert_eq!(tenant.as_str(), "tenant-1a2b3c4d");
///
/// let generated = TenantId::generate();
/// assert!(generated.is_generated());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(String);

impl TenantId {
    /// Wraps the given string as a tenant ID without validation.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh identity of the form `tenant-<8 hex chars>`.
    ///
    /// The suffix comes from a random v4 UUID.
    pub fn generate() -> Self {
        let uuid = Uuid::new_v4().simple().to_string();
        Self(format!(
            "{}{}",
            TENANT_ID_PREFIX,
            &uuid[..GENERATED_SUFFIX_LEN]
        ))
    }

    /// Returns the tenant ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the ID and returns the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns `true` if the ID is empty.
    ///
    /// Some identification strategies accept any value verbatim, including
    /// the empty string, so callers that care must check.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if the ID has the shape produced by [`generate`](Self::generate).
    pub fn is_generated(&self) -> bool {
        self.0
            .strip_prefix(TENANT_ID_PREFIX)
            .is_some_and(|suffix| {
                suffix.len() == GENERATED_SUFFIX_LEN
                    && suffix.chars().all(|c| c.is_ascii_hexdigit())
            })
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TenantId({})", self.0)
    }
}

impl FromStr for TenantId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TenantId::new(s))
    }
}

impl From<&str> for TenantId {
    fn from(s: &str) -> Self {
        TenantId::new(s)
    }
}

impl From<String> for TenantId {
    fn from(s: String) -> Self {
        TenantId::new(s)
    }
}

impl AsRef<str> for TenantId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TenantId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
