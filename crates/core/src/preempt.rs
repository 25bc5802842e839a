// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Preemptor identity recovered from a `Preempted` condition.
//!
//! The queueing layer only records the preempting workload inside the
//! condition's free-text message, e.g.
//! `Preempted to accommodate a workload (UID: 5f1c...) in the ClusterQueue`.
//! All parsing of that format lives here.

use crate::condition;
use crate::workload::WorkloadSnapshot;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Regex for the `UID: <token>` fragment of a preemption message.
#[allow(clippy::expect_used)]
static PREEMPTOR_UID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"UID: ([^),\s]+)").expect("constant regex pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreemptError {
    #[error("workload was not preempted: {0}")]
    NoPreemptionCondition(String),
    #[error("could not extract preemptor UID from condition message: {0:?}")]
    UnparseableMessage(String),
}

/// Extract the preemptor UID from a condition message.
pub fn extract_preemptor_uid(message: &str) -> Result<&str, PreemptError> {
    PREEMPTOR_UID
        .captures(message)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| PreemptError::UnparseableMessage(message.to_string()))
}

/// UID of the workload that preempted `workload`, read from its `Preempted` condition.
pub fn preemptor_uid(workload: &WorkloadSnapshot) -> Result<&str, PreemptError> {
    let preempted = workload
        .condition(condition::PREEMPTED, None)
        .ok_or_else(|| PreemptError::NoPreemptionCondition(workload.name.clone()))?;
    extract_preemptor_uid(&preempted.message)
}

#[cfg(test)]
#[path = "preempt_tests.rs"]
mod tests;
