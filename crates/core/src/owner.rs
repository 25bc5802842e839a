// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Owner references and the group/version/kind they point at.
//!
//! A workload is only a queueing record; the object users care about (usually
//! a batch Job) is whatever its single owner reference points to. This module
//! validates that reference and splits it into a [`GroupVersionKind`] that the
//! discovery backend can resolve.

use crate::workload::WorkloadSnapshot;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised when a workload's owner cannot be pinned down.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorrelationError {
    #[error("workload {workload} has {count} owner references, expected exactly one")]
    OwnerCount { workload: String, count: usize },
    #[error("owner of workload {workload} has malformed apiVersion {api_version:?}")]
    MalformedApiVersion { workload: String, api_version: String },
}

/// Reference from a workload to the object that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerReference {
    pub api_version: String,
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub uid: String,
}

impl OwnerReference {
    pub fn new(
        api_version: impl Into<String>,
        kind: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            api_version: api_version.into(),
            kind: kind.into(),
            name: name.into(),
            uid: String::new(),
        }
    }

    /// Split `apiVersion` into group and version; the core group has no slash.
    pub fn group_version_kind(&self) -> Option<GroupVersionKind> {
        GroupVersionKind::parse(&self.api_version, &self.kind)
    }
}

/// A fully qualified kind, e.g. `batch/v1 Job`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupVersionKind {
    pub group: String,
    pub version: String,
    pub kind: String,
}

impl GroupVersionKind {
    pub fn new(
        group: impl Into<String>,
        version: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self { group: group.into(), version: version.into(), kind: kind.into() }
    }

    /// Parse an `apiVersion` string (`group/version` or bare `version`).
    pub fn parse(api_version: &str, kind: &str) -> Option<Self> {
        let (group, version) = match api_version.split_once('/') {
            Some((group, version)) => (group, version),
            None => ("", api_version),
        };
        if version.is_empty() || version.contains('/') || kind.is_empty() {
            return None;
        }
        Some(Self::new(group, version, kind))
    }

    /// The `apiVersion` form of group + version.
    pub fn api_version(&self) -> String {
        if self.group.is_empty() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }
}

impl fmt::Display for GroupVersionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.api_version(), self.kind)
    }
}

/// Return the workload's single owner reference along with its parsed kind.
///
/// Zero or several owners is an unresolvable correlation, regardless of any
/// other field on the snapshot.
pub fn sole_owner(
    workload: &WorkloadSnapshot,
) -> Result<(&OwnerReference, GroupVersionKind), CorrelationError> {
    let [owner] = workload.owner_references.as_slice() else {
        return Err(CorrelationError::OwnerCount {
            workload: workload.name.clone(),
            count: workload.owner_references.len(),
        });
    };
    let gvk = owner.group_version_kind().ok_or_else(|| CorrelationError::MalformedApiVersion {
        workload: workload.name.clone(),
        api_version: owner.api_version.clone(),
    })?;
    Ok((owner, gvk))
}

#[cfg(test)]
#[path = "owner_tests.rs"]
mod tests;
