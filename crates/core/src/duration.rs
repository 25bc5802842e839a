// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution durations derived from workload conditions.

use crate::condition;
use crate::workload::WorkloadSnapshot;
use chrono::TimeDelta;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("workload is not completed successfully: {0}")]
    NotFinished(String),
    #[error("workload finished but was never admitted: {0}")]
    NeverAdmitted(String),
}

/// Time from creation to successful finish.
pub fn total_execution_time(workload: &WorkloadSnapshot) -> Result<TimeDelta, DurationError> {
    let finished = workload
        .finished_success()
        .ok_or_else(|| DurationError::NotFinished(workload.name.clone()))?;
    Ok(finished.last_transition_time - workload.creation_time)
}

/// Time from admission to successful finish.
///
/// A finished workload without an `Admitted` condition is malformed; it is
/// reported as [`DurationError::NeverAdmitted`] rather than guessed at.
pub fn active_execution_time(workload: &WorkloadSnapshot) -> Result<TimeDelta, DurationError> {
    let finished = workload
        .finished_success()
        .ok_or_else(|| DurationError::NotFinished(workload.name.clone()))?;
    let admitted = workload
        .condition(condition::ADMITTED, Some(condition::ADMITTED))
        .ok_or_else(|| DurationError::NeverAdmitted(workload.name.clone()))?;
    Ok(finished.last_transition_time - admitted.last_transition_time)
}

/// Format a duration as `1h 2m 3s`, `4m 0s` or `12s`. Negative values clamp to zero.
pub fn format_elapsed(delta: TimeDelta) -> String {
    let secs = delta.num_seconds().max(0);
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if h > 0 {
        format!("{}h {}m {}s", h, m, s)
    } else if m > 0 {
        format!("{}m {}s", m, s)
    } else {
        format!("{}s", s)
    }
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
