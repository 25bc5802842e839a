// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lifecycle events derived from a snapshot pair.
//!
//! Events are transient classification results, never stored. "No event" is
//! expressed as `None` by the classifiers.

use std::fmt;

/// Transition observed on a queued workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// Admission was removed (preemption or eviction)
    Evicted,
    /// Admission was granted by a cluster queue
    Admitted,
    /// Finished with reason `Succeeded`
    Completed,
    /// Finished with reason `Failed`
    Failed,
}

/// Transition observed on a raw Job without a queueing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobEvent {
    /// `spec.suspend` flipped from true to false
    Unsuspended,
    /// Completion time newly set
    Completed,
    /// First failed pod observed
    Failed,
}

impl LifecycleEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleEvent::Evicted => "evicted",
            LifecycleEvent::Admitted => "admitted",
            LifecycleEvent::Completed => "completed",
            LifecycleEvent::Failed => "failed",
        }
    }
}

impl JobEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobEvent::Unsuspended => "unsuspended",
            JobEvent::Completed => "completed",
            JobEvent::Failed => "failed",
        }
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for JobEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
