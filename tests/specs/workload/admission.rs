// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Admission specs

use crate::prelude::*;
use crate::prelude::assert_eq;

fn workload() -> WorkloadBuilder {
    WorkloadBuilder::new("job-train-5c2f1").namespace("team-a").queue("default").job_owner("train")
}

#[tokio::test]
async fn admitted_workload_notifies_slack_with_cluster_queue() {
    let world = World::new();
    world.cluster.add_job(ResourceBuilder::job("train").namespace("team-a").slack("C123").build());

    let old = workload().build();
    let new = workload().admitted("cq-1").admitted_condition(1).build();
    let outcome = world.pipeline.handle_workload_update(&old, &new).await.unwrap();

    assert_eq!(outcome, Outcome::Delivered);
    assert_eq!(
        world.sent(),
        Message::new(
            ":clapper: *Workload `job-train-5c2f1` was admitted*",
            "\nNamespace: `team-a`\nUser queue: `default`\nCluster queue: `cq-1`\nManaged resource: `Job/train`\n",
        )
    );
}

#[tokio::test]
async fn resync_of_admitted_workload_is_silent() {
    let world = World::new();
    world.cluster.add_job(ResourceBuilder::job("train").namespace("team-a").slack("C123").build());

    let admitted = workload().admitted("cq-1").build();
    let outcome = world.pipeline.handle_workload_update(&admitted, &admitted).await.unwrap();

    assert_eq!(outcome, Outcome::NoEvent);
    assert!(world.notifier.calls().is_empty());
}
