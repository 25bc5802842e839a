// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;
use std::time::Duration;

use jw_adapters::k8s::convert::resource_from_job;
use jw_adapters::{ClusterAdapter, NotifyAdapter};
use jw_engine::Pipeline;
use k8s_openapi::api::batch::v1::Job;
use kube::api::Api;
use kube::runtime::{watcher, WatchStreamExt};
use kube::Client;
use tracing::{debug, info};

use super::{drive, WatchError};

/// Watch raw Jobs in one namespace.
pub async fn watch_jobs<C, N>(
    client: Client,
    namespace: &str,
    pipeline: Arc<Pipeline<C, N>>,
    sync_timeout: Duration,
) -> Result<(), WatchError>
where
    C: ClusterAdapter,
    N: NotifyAdapter,
{
    info!(%namespace, "watching jobs");
    let api = Api::<Job>::namespaced(client, namespace);
    let stream = watcher(api, watcher::Config::default()).default_backoff();
    let pipeline = &*pipeline;

    drive("jobs", stream, sync_timeout, resource_from_job, |old, new| async move {
        let outcome = pipeline.handle_job_update(&old, &new).await;
        debug!(job = %new.name, ?outcome, "job update handled");
    })
    .await
}
