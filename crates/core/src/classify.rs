// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Edge-triggered event classification.
//!
//! Every rule fires only on a transition between `old` and `new`; level state
//! is ignored. Redelivering an unchanged pair (a resync) therefore always
//! classifies as `None`. When several transitions land in one pair, the first
//! rule in priority order wins.

use crate::event::{JobEvent, LifecycleEvent};
use crate::resource::ManagedResource;
use crate::workload::WorkloadSnapshot;

/// Classify a workload update. Priority: Evicted, Admitted, Completed, Failed.
pub fn classify(old: &WorkloadSnapshot, new: &WorkloadSnapshot) -> Option<LifecycleEvent> {
    if was_evicted(old, new) {
        Some(LifecycleEvent::Evicted)
    } else if was_admitted(old, new) {
        Some(LifecycleEvent::Admitted)
    } else if !old.is_finished_success() && new.is_finished_success() {
        Some(LifecycleEvent::Completed)
    } else if !old.is_finished_failed() && new.is_finished_failed() {
        Some(LifecycleEvent::Failed)
    } else {
        None
    }
}

/// Classify a raw Job update. Priority: Unsuspended, Completed, Failed.
pub fn classify_job(old: &ManagedResource, new: &ManagedResource) -> Option<JobEvent> {
    if was_unsuspended(old, new) {
        Some(JobEvent::Unsuspended)
    } else if !old.is_completed() && new.is_completed() {
        Some(JobEvent::Completed)
    } else if !old.has_failed_pods() && new.has_failed_pods() {
        Some(JobEvent::Failed)
    } else {
        None
    }
}

fn was_admitted(old: &WorkloadSnapshot, new: &WorkloadSnapshot) -> bool {
    !old.is_admitted() && new.is_admitted()
}

fn was_evicted(old: &WorkloadSnapshot, new: &WorkloadSnapshot) -> bool {
    old.is_admitted() && !new.is_admitted()
}

/// An unset suspend flag on either side never counts as unsuspending.
fn was_unsuspended(old: &ManagedResource, new: &ManagedResource) -> bool {
    matches!((old.suspend, new.suspend), (Some(true), Some(false)))
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
