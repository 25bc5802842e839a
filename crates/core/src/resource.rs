// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The concrete object executing a workload's work (usually a batch Job).

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Label carrying the Kueue local queue of a job.
pub const LABEL_QUEUE_NAME: &str = "kueue.x-k8s.io/queue-name";
/// Label carrying the Kueue priority class of a job.
pub const LABEL_PRIORITY_CLASS: &str = "kueue.x-k8s.io/priority-class";
/// Kind of the only managed resource whose pods can be collected.
pub const KIND_JOB: &str = "Job";

/// Pod counters and completion stamp from a Job's status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceStatus {
    pub active: i32,
    pub succeeded: i32,
    pub failed: i32,
    pub completion_time: Option<DateTime<Utc>>,
}

/// Resolved managed resource.
///
/// Built either from an untyped object fetched through discovery (workload
/// mode) or from a typed Job (raw-Job mode); downstream code only needs
/// identity, metadata maps and the status counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManagedResource {
    pub kind: String,
    pub name: String,
    pub namespace: String,
    pub uid: String,
    pub annotations: BTreeMap<String, String>,
    pub labels: BTreeMap<String, String>,
    /// `spec.suspend`; `None` when the field is unset
    pub suspend: Option<bool>,
    pub status: ResourceStatus,
}

/// Kueue scheduling metadata carried as labels on a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueMetadata {
    pub queue_name: String,
    pub priority_class: String,
}

impl ManagedResource {
    pub fn is_job(&self) -> bool {
        self.kind == KIND_JOB
    }

    pub fn is_completed(&self) -> bool {
        self.status.completion_time.is_some()
    }

    pub fn has_failed_pods(&self) -> bool {
        self.status.failed > 0
    }

    /// `Kind/name`, as shown in notifications.
    pub fn display_ref(&self) -> String {
        format!("{}/{}", self.kind, self.name)
    }

    /// Queue metadata, or `None` if the job was not submitted through Kueue.
    pub fn queue_metadata(&self) -> Option<QueueMetadata> {
        let queue_name = self.labels.get(LABEL_QUEUE_NAME).filter(|q| !q.is_empty())?;
        Some(QueueMetadata {
            queue_name: queue_name.clone(),
            priority_class: self.labels.get(LABEL_PRIORITY_CLASS).cloned().unwrap_or_default(),
        })
    }
}

#[cfg(test)]
#[path = "resource_tests.rs"]
mod tests;
