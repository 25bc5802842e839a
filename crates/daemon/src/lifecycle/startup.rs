// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon startup and the watch run.

use std::sync::Arc;

use jw_adapters::{HttpNotifyAdapter, KubeClusterAdapter};
use jw_engine::Pipeline;
use tracing::info;

use crate::watch::{watch_jobs, watch_workloads};

use super::{Config, LifecycleError};

/// Connect to the cluster and run the configured watches.
///
/// Returns only on a fatal watch error (initial sync timeout or a stream
/// that ended); per-update failures are logged inside the watches.
pub async fn run(config: Config) -> Result<(), LifecycleError> {
    let cluster = KubeClusterAdapter::try_default().await?;
    let client = cluster.client().clone();
    let notifier = HttpNotifyAdapter::new(config.slack_token.clone());
    let pipeline = Arc::new(Pipeline::new(Arc::new(cluster), notifier));

    info!(
        watch = ?config.watch,
        job_namespace = %config.job_namespace,
        slack = config.slack_token.is_some(),
        "starting job watcher"
    );

    let workloads = async {
        if config.watch.workloads() {
            watch_workloads(client.clone(), Arc::clone(&pipeline), config.sync_timeout).await
        } else {
            std::future::pending().await
        }
    };
    let jobs = async {
        if config.watch.jobs() {
            let namespace = &config.job_namespace;
            watch_jobs(client.clone(), namespace, Arc::clone(&pipeline), config.sync_timeout).await
        } else {
            std::future::pending().await
        }
    };

    tokio::select! {
        result = workloads => result?,
        result = jobs => result?,
    }
    Ok(())
}
