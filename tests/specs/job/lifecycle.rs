// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Raw Job lifecycle specs
//!
//! A Job without a queueing layer walks suspended → running → failed pod → completed.

use crate::prelude::*;
use crate::prelude::assert_eq;

fn job() -> ResourceBuilder {
    ResourceBuilder::job("etl").uid("j1").slack("C1").label("team", "data")
}

#[tokio::test]
async fn job_walks_through_every_notification() {
    let world = World::new();
    world.cluster.add_pod("j1", Pod::new("etl-0", "default", PodPhase::Failed), "disk full");
    world.cluster.add_pod("j1", Pod::new("etl-1", "default", PodPhase::Succeeded), "rows=42");

    let suspended = job().suspend(Some(true)).build();
    let running = job().suspend(Some(false)).active(1).build();
    let failed_pod = job().suspend(Some(false)).active(1).failed(1).build();
    let completed =
        job().suspend(Some(false)).succeeded(1).failed(1).completed_at_minute(9).build();

    let outcomes = vec![
        world.pipeline.handle_job_update(&suspended, &running).await,
        world.pipeline.handle_job_update(&running, &running).await,
        world.pipeline.handle_job_update(&running, &failed_pod).await,
        world.pipeline.handle_job_update(&failed_pod, &completed).await,
    ];
    assert_eq!(
        outcomes,
        vec![Outcome::Delivered, Outcome::NoEvent, Outcome::Delivered, Outcome::Delivered]
    );

    let subjects: Vec<String> = world.notifier.calls().into_iter().map(|c| c.subject).collect();
    assert_eq!(
        subjects,
        vec![
            ":runner: *+++ Job `etl` started running +++*".to_string(),
            ":warning: *+++ Job `etl` has failed pods +++*".to_string(),
            ":white_check_mark: *+++ Job `etl` completed +++*".to_string(),
        ]
    );

    let calls = world.notifier.calls();
    assert!(calls[0].body.contains("\n*Labels*\n\n· `team: data`\n"));
    assert_eq!(calls[1].body.as_str(), "\n*Failed Pods*\n\nPod `etl-0`\n```\ndisk full\n```\n\n");
    assert!(calls[2].body.contains("Pod `etl-1` logs\n\n```\nrows=42\n```"));
}

#[tokio::test]
async fn webhook_job_gets_plain_summary() {
    let world = World::new();
    let old = ResourceBuilder::job("etl").uid("j1").webhook("https://hooks/a").active(1).build();
    let new = ResourceBuilder::job("etl")
        .uid("j1")
        .webhook("https://hooks/a")
        .succeeded(1)
        .completed_at_minute(3)
        .build();
    world.pipeline.handle_job_update(&old, &new).await;

    assert_eq!(
        world.sent(),
        Message::new(
            r#"Job "etl" completed"#,
            concat!(
                "Job \"etl\" [0/1/0]\n",
                "\nAnnotations\n\n  x-jobby.io/notify-channel: webhook\n  x-jobby.io/webhook-urls: https://hooks/a\n",
                "---\n",
            ),
        )
    );
}
