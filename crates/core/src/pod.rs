// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pods owned by a managed Job.

use std::fmt;
use std::str::FromStr;

/// Label selecting the pods a Job controller created.
pub const CONTROLLER_UID_LABEL: &str = "controller-uid";

/// Build the exact-match selector for pods controlled by the given UID.
pub fn controller_selector(uid: &str) -> String {
    format!("{}={}", CONTROLLER_UID_LABEL, uid)
}

/// Pod lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PodPhase {
    Pending,
    Running,
    Succeeded,
    Failed,
    Unknown,
}

impl PodPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            PodPhase::Pending => "Pending",
            PodPhase::Running => "Running",
            PodPhase::Succeeded => "Succeeded",
            PodPhase::Failed => "Failed",
            PodPhase::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for PodPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PodPhase {
    type Err = std::convert::Infallible;

    /// Unrecognized phases map to `Unknown`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Pending" => PodPhase::Pending,
            "Running" => PodPhase::Running,
            "Succeeded" => PodPhase::Succeeded,
            "Failed" => PodPhase::Failed,
            _ => PodPhase::Unknown,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pod {
    pub name: String,
    pub namespace: String,
    pub phase: PodPhase,
}

impl Pod {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>, phase: PodPhase) -> Self {
        Self { name: name.into(), namespace: namespace.into(), phase }
    }
}

/// Log text collected from one pod.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodOutput {
    pub pod: String,
    pub logs: String,
}

#[cfg(test)]
#[path = "pod_tests.rs"]
mod tests;
