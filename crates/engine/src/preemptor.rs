// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Find the workload that preempted an evicted one.

use jw_adapters::{ClusterAdapter, ClusterError};
use jw_core::{preemptor_uid, PreemptError, WorkloadSnapshot};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreemptorError {
    #[error(transparent)]
    Message(#[from] PreemptError),
    #[error("workload with UID {0:?} not found")]
    NotFound(String),
    #[error(transparent)]
    Cluster(#[from] ClusterError),
}

pub struct PreemptorResolver<C> {
    cluster: Arc<C>,
}

impl<C: ClusterAdapter> PreemptorResolver<C> {
    pub fn new(cluster: Arc<C>) -> Self {
        Self { cluster }
    }

    /// Resolve the preempting workload of `workload`.
    ///
    /// Scans every workload in the cluster for the UID named in the
    /// `Preempted` condition; linear in the number of workloads.
    pub async fn resolve(
        &self,
        workload: &WorkloadSnapshot,
    ) -> Result<WorkloadSnapshot, PreemptorError> {
        let uid = preemptor_uid(workload)?;
        let workloads = self.cluster.list_workloads().await?;
        workloads
            .into_iter()
            .find(|w| w.uid == uid)
            .ok_or_else(|| PreemptorError::NotFound(uid.to_string()))
    }
}

#[cfg(test)]
#[path = "preemptor_tests.rs"]
mod tests;
