//! Resource quota attached to a capability.

use serde::{Deserialize, Serialize};

/// Unit label used when none is given.
pub const DEFAULT_QUOTA_UNIT: &str = "units";

/// A usage limit and the counter tracking consumption against it.
///
/// `current_usage` is unsigned, so it can never go below zero. It is *not*
/// clamped to `max_limit`: usage is recorded as an absolute value supplied
/// by the caller, and a caller that skips [`can_allocate`](Self::can_allocate)
/// can push it past the limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceQuota {
    /// Maximum allowed cumulative usage.
    pub max_limit: u64,
    /// Usage recorded so far.
    pub current_usage: u64,
    /// Label for the unit of measure.
    pub unit: String,
}

impl ResourceQuota {
    /// Creates a quota with zero usage and the default unit label.
    pub fn new(max_limit: u64) -> Self {
        Self {
            max_limit,
            current_usage: 0,
            unit: DEFAULT_QUOTA_UNIT.to_string(),
        }
    }

    /// Returns `true` once usage has reached the limit.
    pub fn is_exceeded(&self) -> bool {
        self.current_usage >= self.max_limit
    }

    /// Returns `true` if `requested` more units fit under the limit.
    ///
    /// An addition that would overflow `u64` cannot fit.
    pub fn can_allocate(&self, requested: u64) -> bool {
        self.current_usage
            .checked_add(requested)
            .is_some_and(|total| total <= self.max_limit)
    }

    /// Units left before the limit, zero when already at or over it.
    pub fn remaining(&self) -> u64 {
        self.max_limit.saturating_sub(self.current_usage)
    }
}
