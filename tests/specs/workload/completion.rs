// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Completion specs

use crate::prelude::*;
use crate::prelude::assert_eq;

fn workload() -> WorkloadBuilder {
    WorkloadBuilder::new("job-train").job_owner("train")
}

fn world_with_job() -> World {
    let world = World::new();
    world.cluster.add_job(ResourceBuilder::job("train").uid("job-1").slack("C1").build());
    let pod = |name: &str| Pod::new(name, "default", PodPhase::Succeeded);
    world.cluster.add_pod("job-1", pod("train-b"), "rank 1 done\n");
    world.cluster.add_pod("job-1", pod("train-a"), "rank 0 done\n");
    world
}

#[tokio::test]
async fn completion_reports_durations_and_logs() {
    let world = world_with_job();

    let old = workload().admitted("cq").admitted_condition(1).build();
    let new = workload().admitted("cq").admitted_condition(1).finished_success(5).build();
    world.pipeline.handle_workload_update(&old, &new).await.unwrap();

    assert_eq!(
        world.sent(),
        Message::new(
            ":white_check_mark: *Workload `job-train` is completed*",
            concat!(
                "\nTotal execution time (since submission): 5m 0s\n",
                "Active execution time (since last queue admission): 4m 0s\n\n",
                "*Pod `train-a` logs*\n\n```\nrank 0 done\n```\n\n",
                "*Pod `train-b` logs*\n\n```\nrank 1 done\n```\n\n",
            ),
        )
    );
}

#[tokio::test]
async fn completion_without_admission_omits_active_time() {
    let world = world_with_job();

    let old = workload().build();
    let new = workload().finished_success(5).build();
    world.pipeline.handle_workload_update(&old, &new).await.unwrap();

    let body = world.sent().body;
    assert!(body
        .starts_with("\nTotal execution time (since submission): 5m 0s\n\n*Pod `train-a` logs*"));
    assert!(!body.contains("Active execution time"));
}
