// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolve the concrete object a workload stands for.

use jw_adapters::{ClusterAdapter, ClusterError};
use jw_core::{sole_owner, CorrelationError, ManagedResource, WorkloadSnapshot};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorrelateError {
    #[error(transparent)]
    Owner(#[from] CorrelationError),
    #[error(transparent)]
    Cluster(#[from] ClusterError),
}

/// Bridges the typed workload record to its untyped owner object.
pub struct Correlator<C> {
    cluster: Arc<C>,
}

impl<C: ClusterAdapter> Correlator<C> {
    pub fn new(cluster: Arc<C>) -> Self {
        Self { cluster }
    }

    /// Fetch the single owner of `workload` (usually a Job) from its namespace.
    ///
    /// Fails if the owner count is not exactly one, if the owner's kind is
    /// unknown to the cluster, or if the owner no longer exists.
    pub async fn managed_resource(
        &self,
        workload: &WorkloadSnapshot,
    ) -> Result<ManagedResource, CorrelateError> {
        let (owner, gvk) = sole_owner(workload)?;
        let resource = self.cluster.resolve_resource(&gvk).await?;
        let object =
            self.cluster.get_object(&gvk, &resource, &workload.namespace, &owner.name).await?;
        Ok(object)
    }
}

#[cfg(test)]
#[path = "correlate_tests.rs"]
mod tests;
