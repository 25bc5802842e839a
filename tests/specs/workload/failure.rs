// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Failure specs

use crate::prelude::*;
use crate::prelude::assert_eq;

fn workload() -> WorkloadBuilder {
    WorkloadBuilder::new("job-train").job_owner("train")
}

#[tokio::test]
async fn failure_sends_pod_logs_to_slack() {
    let world = World::new();
    world.cluster.add_job(ResourceBuilder::job("train").uid("job-1").slack("C1").build());
    let pod = Pod::new("train-a", "default", PodPhase::Failed);
    world.cluster.add_pod("job-1", pod, "CUDA out of memory");

    let old = workload().admitted("cq").build();
    let new = workload().admitted("cq").finished_failed(2).build();
    world.pipeline.handle_workload_update(&old, &new).await.unwrap();

    assert_eq!(
        world.sent(),
        Message::new(
            ":rotating_light: *Workload `job-train` has failed*",
            "\nPod `train-a` logs\n\n```\nCUDA out of memory\n```\n\n",
        )
    );
}

#[tokio::test]
async fn deleted_job_drops_the_update() {
    let world = World::new();

    let old = workload().admitted("cq").build();
    let new = workload().admitted("cq").finished_failed(2).build();
    assert!(world.pipeline.handle_workload_update(&old, &new).await.is_err());
    assert!(world.notifier.calls().is_empty());
}
