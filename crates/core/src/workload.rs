// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Point-in-time view of a queued workload.

use crate::condition::{self, find_condition, Condition};
use crate::owner::OwnerReference;
use chrono::{DateTime, Utc};

/// Admission record, present while the workload holds quota in a cluster queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admission {
    pub cluster_queue: String,
}

/// Immutable snapshot of a queued-workload record as delivered by the watch.
///
/// The core never mutates snapshots; it only compares an old/new pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadSnapshot {
    pub name: String,
    pub namespace: String,
    pub uid: String,
    pub creation_time: DateTime<Utc>,
    /// Local (namespaced) queue the workload was submitted to
    pub queue_name: String,
    pub priority_class: Option<String>,
    pub conditions: Vec<Condition>,
    /// Set iff the workload is currently admitted
    pub admission: Option<Admission>,
    pub owner_references: Vec<OwnerReference>,
}

impl WorkloadSnapshot {
    /// First condition of the given type, optionally filtered by reason.
    pub fn condition(&self, condition_type: &str, reason: Option<&str>) -> Option<&Condition> {
        find_condition(&self.conditions, condition_type, reason)
    }

    pub fn is_admitted(&self) -> bool {
        self.admission.is_some()
    }

    /// Cluster queue of the current admission, if any.
    pub fn cluster_queue(&self) -> Option<&str> {
        self.admission.as_ref().map(|a| a.cluster_queue.as_str())
    }

    pub fn finished_success(&self) -> Option<&Condition> {
        self.condition(condition::FINISHED, Some(condition::REASON_SUCCEEDED))
    }

    pub fn is_finished_success(&self) -> bool {
        self.finished_success().is_some()
    }

    pub fn is_finished_failed(&self) -> bool {
        self.condition(condition::FINISHED, Some(condition::REASON_FAILED)).is_some()
    }
}
