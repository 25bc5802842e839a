// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Eviction specs

use crate::prelude::*;
use crate::prelude::assert_eq;

fn workload() -> WorkloadBuilder {
    WorkloadBuilder::new("job-train").namespace("team-a").job_owner("train")
}

#[tokio::test]
async fn preemption_by_workload_in_other_namespace_is_qualified() {
    let world = World::new();
    world.cluster.add_job(
        ResourceBuilder::job("train").namespace("team-a").webhook("https://hooks/a").build(),
    );
    let preemptor = WorkloadBuilder::new("job-urgent").namespace("team-b").uid("xyz-789").build();
    world.cluster.add_workload(preemptor);

    let old = workload().admitted("cq-1").build();
    let new = workload()
        .preempted("Preempted to accommodate a workload (UID: xyz-789) in the ClusterQueue", 3)
        .build();
    world.pipeline.handle_workload_update(&old, &new).await.unwrap();

    assert_eq!(
        world.sent(),
        Message::new(
            r#"Workload "job-train" was preempted"#,
            r#"Preempting workload: "job-urgent" (in namespace "team-b")"#,
        )
    );
}

#[tokio::test]
async fn preemption_in_same_namespace_is_unqualified_in_markdown() {
    let world = World::new();
    world.cluster.add_job(ResourceBuilder::job("train").namespace("team-a").slack("C1").build());
    let preemptor = WorkloadBuilder::new("job-urgent").namespace("team-a").uid("xyz-789").build();
    world.cluster.add_workload(preemptor);

    let old = workload().admitted("cq-1").build();
    let new = workload().preempted("Preempted by UID: xyz-789", 3).build();
    world.pipeline.handle_workload_update(&old, &new).await.unwrap();

    assert_eq!(world.sent().body.as_str(), "Preempting workload: `job-urgent`");
}

#[tokio::test]
async fn preemptor_found_when_message_carries_job_uid() {
    let world = World::new();
    world.cluster.add_job(ResourceBuilder::job("train").namespace("team-a").slack("C1").build());
    let preemptor = WorkloadBuilder::new("job-urgent").namespace("team-a").uid("5f1c-88aa").build();
    world.cluster.add_workload(preemptor);

    let old = workload().admitted("cq-1").build();
    let new = workload()
        .preempted(
            "Preempted to accommodate a workload (UID: 5f1c-88aa, JobUID: 77de-11) \
             due to prioritization in the ClusterQueue",
            3,
        )
        .build();
    world.pipeline.handle_workload_update(&old, &new).await.unwrap();

    assert_eq!(world.sent().body.as_str(), "Preempting workload: `job-urgent`");
}

#[tokio::test]
async fn eviction_without_preempted_condition_still_notifies() {
    let world = World::new();
    world.cluster.add_job(ResourceBuilder::job("train").namespace("team-a").slack("C1").build());

    let old = workload().admitted("cq-1").build();
    let new = workload().build();
    let outcome = world.pipeline.handle_workload_update(&old, &new).await.unwrap();

    assert_eq!(outcome, Outcome::Delivered);
    assert_eq!(
        world.sent(),
        Message::new(":octagonal_sign: *Workload `job-train` was preempted*", "")
    );
}
