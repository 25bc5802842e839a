// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Collect log output from the pods of a Job.

use jw_adapters::{ClusterAdapter, ClusterError};
use jw_core::pod::controller_selector;
use jw_core::{ManagedResource, Pod, PodOutput};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("managed resource is not a job: {0}")]
    NotAJob(String),
    #[error(transparent)]
    Cluster(#[from] ClusterError),
}

pub struct OutputCollector<C> {
    cluster: Arc<C>,
}

impl<C: ClusterAdapter> OutputCollector<C> {
    pub fn new(cluster: Arc<C>) -> Self {
        Self { cluster }
    }

    /// Pods controlled by `job`, ordered by name.
    pub async fn pods(&self, job: &ManagedResource) -> Result<Vec<Pod>, OutputError> {
        if !job.is_job() {
            return Err(OutputError::NotAJob(job.display_ref()));
        }
        let selector = controller_selector(&job.uid);
        let mut pods = self.cluster.list_pods(&job.namespace, &selector).await?;
        pods.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(pods)
    }

    /// Logs of every pod of `job`.
    pub async fn collect(&self, job: &ManagedResource) -> Result<Vec<PodOutput>, OutputError> {
        self.collect_where(job, |_| true).await
    }

    /// Logs of the pods of `job` accepted by `filter`, fetched one at a time.
    ///
    /// Fail-fast: the first log fetch error aborts the collection and no
    /// partial result is returned.
    pub async fn collect_where(
        &self,
        job: &ManagedResource,
        filter: impl Fn(&Pod) -> bool + Send,
    ) -> Result<Vec<PodOutput>, OutputError> {
        let pods = self.pods(job).await?;
        let mut outputs = Vec::with_capacity(pods.len());
        for pod in pods.iter().filter(|p| filter(p)) {
            let logs = self.cluster.pod_logs(&pod.namespace, &pod.name).await?;
            outputs.push(PodOutput { pod: pod.name.clone(), logs: logs.trim().to_string() });
        }
        Ok(outputs)
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
