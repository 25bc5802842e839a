// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Status conditions carried by queued workloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Condition type set once a workload has reached a terminal state.
pub const FINISHED: &str = "Finished";
/// Condition type (and reason) set when a workload is admitted to a cluster queue.
pub const ADMITTED: &str = "Admitted";
/// Condition type set when a workload was preempted by another workload.
pub const PREEMPTED: &str = "Preempted";

/// `Finished` reason for a successful run.
pub const REASON_SUCCEEDED: &str = "Succeeded";
/// `Finished` reason for a failed run.
pub const REASON_FAILED: &str = "Failed";

/// A typed, timestamped status entry.
///
/// The message is free text and may encode auxiliary data such as a
/// preemptor UID; see [`crate::preempt`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub condition_type: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub message: String,
    pub last_transition_time: DateTime<Utc>,
}

impl Condition {
    pub fn new(
        condition_type: impl Into<String>,
        reason: impl Into<String>,
        last_transition_time: DateTime<Utc>,
    ) -> Self {
        Self {
            condition_type: condition_type.into(),
            reason: reason.into(),
            message: String::new(),
            last_transition_time,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Whether this condition has the given type and, if a reason filter is
    /// given, that reason.
    pub fn matches(&self, condition_type: &str, reason: Option<&str>) -> bool {
        if self.condition_type != condition_type {
            return false;
        }
        match reason {
            Some(r) if !r.is_empty() => self.reason == r,
            _ => true,
        }
    }
}

/// Find the first condition (in declaration order) with the given type and
/// optional reason. An empty or absent reason matches any reason.
pub fn find_condition<'a>(
    conditions: &'a [Condition],
    condition_type: &str,
    reason: Option<&str>,
) -> Option<&'a Condition> {
    conditions.iter().find(|c| c.matches(condition_type, reason))
}

#[cfg(test)]
#[path = "condition_tests.rs"]
mod tests;
