// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;
use std::time::Duration;

use jw_adapters::k8s::convert::workload_from_dynamic;
use jw_adapters::{workload_api_resource, ClusterAdapter, NotifyAdapter};
use jw_engine::Pipeline;
use kube::api::{Api, DynamicObject};
use kube::runtime::{watcher, WatchStreamExt};
use kube::Client;
use tracing::{debug, info, warn};

use super::{drive, WatchError};

/// Watch Kueue workloads in every namespace.
pub async fn watch_workloads<C, N>(
    client: Client,
    pipeline: Arc<Pipeline<C, N>>,
    sync_timeout: Duration,
) -> Result<(), WatchError>
where
    C: ClusterAdapter,
    N: NotifyAdapter,
{
    info!("watching workloads in all namespaces");
    let api = Api::<DynamicObject>::all_with(client, &workload_api_resource());
    let stream = watcher(api, watcher::Config::default()).default_backoff();
    let pipeline = &*pipeline;

    drive("workloads", stream, sync_timeout, workload_from_dynamic, |old, new| async move {
        match pipeline.handle_workload_update(&old, &new).await {
            Ok(outcome) => debug!(workload = %new.name, ?outcome, "workload update handled"),
            Err(e) => warn!(
                workload = %new.name,
                namespace = %new.namespace,
                error = %e,
                "workload update dropped"
            ),
        }
    })
    .await
}
