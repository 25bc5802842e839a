// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::condition::{self, Condition};
use crate::notifier::{
    ANNOTATION_NOTIFY_CHANNEL, ANNOTATION_SLACK_CHANNEL_IDS, ANNOTATION_WEBHOOK_URLS,
};
use crate::owner::OwnerReference;
use crate::resource::{ManagedResource, ResourceStatus, KIND_JOB};
use crate::workload::{Admission, WorkloadSnapshot};
use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;

/// Fixed reference time used by all builders: 2024-05-01T12:00:00Z.
pub fn t0() -> DateTime<Utc> {
    DateTime::from_timestamp(1_714_564_800, 0).unwrap_or_default()
}

/// `t0()` plus the given number of minutes.
pub fn at_minute(minutes: i64) -> DateTime<Utc> {
    t0() + Duration::minutes(minutes)
}

// ── Workload snapshots ──────────────────────────────────────────────────────

/// Builder for [`WorkloadSnapshot`] with sensible test defaults.
#[derive(Debug, Clone)]
pub struct WorkloadBuilder {
    snapshot: WorkloadSnapshot,
}

impl WorkloadBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            snapshot: WorkloadSnapshot {
                name: name.to_string(),
                namespace: "default".to_string(),
                uid: format!("uid-{}", name),
                creation_time: t0(),
                queue_name: "user-queue".to_string(),
                priority_class: None,
                conditions: Vec::new(),
                admission: None,
                owner_references: Vec::new(),
            },
        }
    }

    pub fn namespace(mut self, namespace: &str) -> Self {
        self.snapshot.namespace = namespace.to_string();
        self
    }

    pub fn uid(mut self, uid: &str) -> Self {
        self.snapshot.uid = uid.to_string();
        self
    }

    pub fn queue(mut self, queue: &str) -> Self {
        self.snapshot.queue_name = queue.to_string();
        self
    }

    pub fn priority_class(mut self, class: &str) -> Self {
        self.snapshot.priority_class = Some(class.to_string());
        self
    }

    /// Set the current admission record (no condition is added).
    pub fn admitted(mut self, cluster_queue: &str) -> Self {
        self.snapshot.admission = Some(Admission { cluster_queue: cluster_queue.to_string() });
        self
    }

    /// Drop the current admission record.
    pub fn unadmitted(mut self) -> Self {
        self.snapshot.admission = None;
        self
    }

    pub fn condition(mut self, condition: Condition) -> Self {
        self.snapshot.conditions.push(condition);
        self
    }

    pub fn admitted_condition(self, minute: i64) -> Self {
        self.condition(Condition::new(condition::ADMITTED, condition::ADMITTED, at_minute(minute)))
    }

    pub fn finished_success(self, minute: i64) -> Self {
        self.condition(Condition::new(
            condition::FINISHED,
            condition::REASON_SUCCEEDED,
            at_minute(minute),
        ))
    }

    pub fn finished_failed(self, minute: i64) -> Self {
        let at = at_minute(minute);
        self.condition(Condition::new(condition::FINISHED, condition::REASON_FAILED, at))
    }

    pub fn preempted(self, message: &str, minute: i64) -> Self {
        self.condition(
            Condition::new(condition::PREEMPTED, "InClusterQueue", at_minute(minute))
                .with_message(message),
        )
    }

    pub fn owner(mut self, api_version: &str, kind: &str, name: &str) -> Self {
        self.snapshot.owner_references.push(OwnerReference::new(api_version, kind, name));
        self
    }

    /// Shortcut for a single `batch/v1 Job` owner.
    pub fn job_owner(self, name: &str) -> Self {
        self.owner("batch/v1", KIND_JOB, name)
    }

    pub fn build(self) -> WorkloadSnapshot {
        self.snapshot
    }
}

// ── Managed resources ───────────────────────────────────────────────────────

/// Builder for [`ManagedResource`].
#[derive(Debug, Clone)]
pub struct ResourceBuilder {
    resource: ManagedResource,
}

impl ResourceBuilder {
    pub fn job(name: &str) -> Self {
        Self {
            resource: ManagedResource {
                kind: KIND_JOB.to_string(),
                name: name.to_string(),
                namespace: "default".to_string(),
                uid: format!("job-uid-{}", name),
                annotations: BTreeMap::new(),
                labels: BTreeMap::new(),
                suspend: None,
                status: ResourceStatus::default(),
            },
        }
    }

    pub fn kind(mut self, kind: &str) -> Self {
        self.resource.kind = kind.to_string();
        self
    }

    pub fn namespace(mut self, namespace: &str) -> Self {
        self.resource.namespace = namespace.to_string();
        self
    }

    pub fn uid(mut self, uid: &str) -> Self {
        self.resource.uid = uid.to_string();
        self
    }

    pub fn label(mut self, key: &str, value: &str) -> Self {
        self.resource.labels.insert(key.to_string(), value.to_string());
        self
    }

    pub fn annotation(mut self, key: &str, value: &str) -> Self {
        self.resource.annotations.insert(key.to_string(), value.to_string());
        self
    }

    /// Route notifications to the given comma-separated Slack channel IDs.
    pub fn slack(self, channels: &str) -> Self {
        self.annotation(ANNOTATION_NOTIFY_CHANNEL, "slack")
            .annotation(ANNOTATION_SLACK_CHANNEL_IDS, channels)
    }

    /// Route notifications to the given comma-separated webhook URLs.
    pub fn webhook(self, urls: &str) -> Self {
        self.annotation(ANNOTATION_NOTIFY_CHANNEL, "webhook")
            .annotation(ANNOTATION_WEBHOOK_URLS, urls)
    }

    pub fn suspend(mut self, suspend: Option<bool>) -> Self {
        self.resource.suspend = suspend;
        self
    }

    pub fn active(mut self, count: i32) -> Self {
        self.resource.status.active = count;
        self
    }

    pub fn succeeded(mut self, count: i32) -> Self {
        self.resource.status.succeeded = count;
        self
    }

    pub fn failed(mut self, count: i32) -> Self {
        self.resource.status.failed = count;
        self
    }

    pub fn completed_at_minute(mut self, minute: i64) -> Self {
        self.resource.status.completion_time = Some(at_minute(minute));
        self
    }

    pub fn build(self) -> ManagedResource {
        self.resource
    }
}

// ── Proptest strategies ─────────────────────────────────────────────────────

/// Proptest strategies for snapshot types.
pub mod strategies {
    use super::{ResourceBuilder, WorkloadBuilder};
    use crate::resource::ManagedResource;
    use crate::workload::WorkloadSnapshot;
    use proptest::prelude::*;

    pub fn arb_workload() -> impl Strategy<Value = WorkloadSnapshot> {
        (
            proptest::option::of(prop_oneof![Just("cq-1"), Just("cq-2")]),
            any::<bool>(),
            any::<bool>(),
            any::<bool>(),
            any::<bool>(),
            0usize..3,
        )
            .prop_map(|(cq, admitted_cond, succeeded, failed, preempted, owners)| {
                let mut b = WorkloadBuilder::new("wl");
                if let Some(cq) = cq {
                    b = b.admitted(cq);
                }
                if admitted_cond {
                    b = b.admitted_condition(1);
                }
                if succeeded {
                    b = b.finished_success(5);
                }
                if failed {
                    b = b.finished_failed(6);
                }
                if preempted {
                    b = b.preempted("Preempted to accommodate a workload (UID: other)", 3);
                }
                for i in 0..owners {
                    b = b.job_owner(&format!("job-{}", i));
                }
                b.build()
            })
    }

    pub fn arb_job() -> impl Strategy<Value = ManagedResource> {
        (proptest::option::of(any::<bool>()), 0i32..3, any::<bool>()).prop_map(
            |(suspend, failed, completed)| {
                let mut b = ResourceBuilder::job("job").suspend(suspend).failed(failed);
                if completed {
                    b = b.completed_at_minute(5);
                }
                b.build()
            },
        )
    }
}
