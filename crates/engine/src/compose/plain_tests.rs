// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::compose::Preemptor;
use jw_core::test_support::{ResourceBuilder, WorkloadBuilder};
use jw_core::{PodOutput, PodPhase};

fn evicted(preemptor: Option<(&str, &str)>) -> Message {
    let wl = WorkloadBuilder::new("train").namespace("team-a").build();
    let job = ResourceBuilder::job("train").build();
    PlainComposer.workload_message(&WorkloadContent {
        workload: &wl,
        resource: &job,
        details: WorkloadDetails::Evicted {
            preemptor: preemptor.map(|(name, namespace)| Preemptor {
                name: name.to_string(),
                namespace: namespace.to_string(),
            }),
        },
    })
}

#[yare::parameterized(
    same_namespace = { Some(("urgent", "team-a")), r#"Preempting workload: "urgent""# },
    cross_namespace = { Some(("urgent", "team-b")), r#"Preempting workload: "urgent" (in namespace "team-b")"# },
    unresolved = { None, "" },
)]
fn evicted_body(preemptor: Option<(&str, &str)>, expected: &str) {
    let msg = evicted(preemptor);
    assert_eq!(msg.subject, r#"Workload "train" was preempted"#);
    assert_eq!(msg.body, expected);
}

#[test]
fn admitted_lists_one_field_per_line() {
    let wl = WorkloadBuilder::new("train").queue("lq").admitted("cq-1").build();
    let job = ResourceBuilder::job("train").build();
    let msg = PlainComposer.workload_message(&WorkloadContent {
        workload: &wl,
        resource: &job,
        details: WorkloadDetails::Admitted,
    });
    assert_eq!(msg.subject, r#"Workload "train" was admitted to cluster queue"#);
    assert_eq!(
        msg.body,
        "\nNamespace: default\nLocal queue: lq\nCluster queue: cq-1\nManaged resource: Job/train\n"
    );
}

#[test]
fn admitted_includes_priority_class_when_set() {
    let wl = WorkloadBuilder::new("train").priority_class("high").admitted("cq-1").build();
    let job = ResourceBuilder::job("train").build();
    let msg = PlainComposer.workload_message(&WorkloadContent {
        workload: &wl,
        resource: &job,
        details: WorkloadDetails::Admitted,
    });
    assert!(msg.body.contains("Cluster queue: cq-1\nPriority class: high\nManaged resource"));
}

#[test]
fn terminal_events_have_subject_only() {
    let wl = WorkloadBuilder::new("train").build();
    let job = ResourceBuilder::job("train").build();
    let outputs = vec![PodOutput { pod: "p".into(), logs: "ignored".into() }];

    let completed = PlainComposer.workload_message(&WorkloadContent {
        workload: &wl,
        resource: &job,
        details: WorkloadDetails::Completed { total: None, active: None, outputs: outputs.clone() },
    });
    assert_eq!(completed, Message::new(r#"Workload "train" is completed"#, ""));

    let failed = PlainComposer.workload_message(&WorkloadContent {
        workload: &wl,
        resource: &job,
        details: WorkloadDetails::Failed { outputs },
    });
    assert_eq!(failed, Message::new(r#"Workload "train" has failed"#, ""));
}

#[test]
fn job_summary_lists_counters_metadata_and_pods() {
    let job = ResourceBuilder::job("etl")
        .active(1)
        .succeeded(2)
        .failed(0)
        .label("team", "data")
        .label("app", "etl")
        .annotation("owner", "ops")
        .build();
    let pods = vec![
        Pod::new("etl-a", "default", PodPhase::Succeeded),
        Pod::new("etl-b", "default", PodPhase::Running),
    ];
    let msg = PlainComposer.job_message(&JobContent {
        job: &job,
        pods,
        details: JobDetails::Unsuspended,
    });
    assert_eq!(msg.subject, r#"Job "etl" started running"#);
    assert_eq!(
        msg.body,
        concat!(
            "Job \"etl\" [1/2/0]\n",
            "\nLabels\n\n  app: etl\n  team: data\n",
            "\nAnnotations\n\n  owner: ops\n",
            "\nManaged pods\n\n- Pod \"etl-a\", state Succeeded\n- Pod \"etl-b\", state Running\n",
            "---\n",
        )
    );
}

#[yare::parameterized(
    completed = { JobDetails::Completed { outputs: Vec::new() }, r#"Job "etl" completed"# },
    failed = { JobDetails::Failed { outputs: Vec::new() }, r#"Job "etl" has failed pods"# },
)]
fn job_terminal_subjects(details: JobDetails, subject: &str) {
    let job = ResourceBuilder::job("etl").build();
    let msg = PlainComposer.job_message(&JobContent { job: &job, pods: Vec::new(), details });
    assert_eq!(msg.subject, subject);
    assert_eq!(msg.body, "Job \"etl\" [0/0/0]\n---\n");
}
