// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use jw_adapters::{FakeClusterAdapter, FakeNotifyAdapter};
use jw_core::test_support::{ResourceBuilder, WorkloadBuilder};
use jw_core::{CorrelationError, NotifierKind, Pod, PodPhase};

struct Harness {
    cluster: Arc<FakeClusterAdapter>,
    notifier: FakeNotifyAdapter,
    pipeline: Pipeline<FakeClusterAdapter, FakeNotifyAdapter>,
}

fn harness() -> Harness {
    let cluster = Arc::new(FakeClusterAdapter::new());
    let notifier = FakeNotifyAdapter::new();
    let pipeline = Pipeline::new(Arc::clone(&cluster), notifier.clone());
    Harness { cluster, notifier, pipeline }
}

fn queued() -> WorkloadBuilder {
    WorkloadBuilder::new("job-train").job_owner("train")
}

#[tokio::test]
async fn admission_is_delivered_to_slack_in_markdown() {
    let h = harness();
    h.cluster.add_job(ResourceBuilder::job("train").slack("C1, C2").build());

    let old = queued().build();
    let new = queued().admitted("cq-1").build();
    let outcome = h.pipeline.handle_workload_update(&old, &new).await.unwrap();

    assert_eq!(outcome, Outcome::Delivered);
    let calls = h.notifier.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].target.kind, NotifierKind::Slack);
    assert_eq!(calls[0].target.receivers, vec!["C1", "C2"]);
    assert_eq!(calls[0].subject, ":clapper: *Workload `job-train` was admitted*");
    assert!(calls[0].body.contains("Cluster queue: `cq-1`"));
}

#[tokio::test]
async fn webhook_receivers_get_plain_text() {
    let h = harness();
    h.cluster.add_job(ResourceBuilder::job("train").webhook("https://hooks.example/a").build());

    let old = queued().admitted("cq-1").admitted_condition(1).build();
    let new = queued().admitted("cq-1").admitted_condition(1).finished_failed(3).build();
    h.pipeline.handle_workload_update(&old, &new).await.unwrap();

    let calls = h.notifier.calls();
    assert_eq!(calls[0].subject, r#"Workload "job-train" has failed"#);
    assert_eq!(calls[0].body, "");
}

#[tokio::test]
async fn unchanged_pair_makes_no_cluster_calls() {
    let h = harness();
    let snapshot = queued().admitted("cq-1").build();

    let outcome = h.pipeline.handle_workload_update(&snapshot, &snapshot).await.unwrap();
    assert_eq!(outcome, Outcome::NoEvent);
    assert!(h.cluster.calls().is_empty());
    assert!(h.notifier.calls().is_empty());
}

#[tokio::test]
async fn missing_annotations_are_a_silent_no_op() {
    let h = harness();
    h.cluster.add_job(ResourceBuilder::job("train").build());

    let (old, new) = (queued().build(), queued().admitted("cq").build());
    let outcome = h.pipeline.handle_workload_update(&old, &new).await;
    assert_eq!(outcome.unwrap(), Outcome::Unconfigured);
    assert!(h.notifier.calls().is_empty());
}

#[tokio::test]
async fn correlation_failure_aborts_update() {
    let h = harness();
    let old = WorkloadBuilder::new("orphan").build();
    let new = WorkloadBuilder::new("orphan").admitted("cq").build();

    let err = h.pipeline.handle_workload_update(&old, &new).await.unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Correlate(CorrelateError::Owner(CorrelationError::OwnerCount {
            count: 0,
            ..
        }))
    ));
    assert!(h.notifier.calls().is_empty());
}

#[tokio::test]
async fn send_failure_is_swallowed() {
    let h = harness();
    h.cluster.add_job(ResourceBuilder::job("train").slack("C1").build());
    h.notifier.fail_with("channel_not_found");

    let (old, new) = (queued().build(), queued().admitted("cq").build());
    let outcome = h.pipeline.handle_workload_update(&old, &new).await;
    assert_eq!(outcome.unwrap(), Outcome::DeliveryFailed);
    assert_eq!(h.notifier.calls().len(), 1);
}

#[tokio::test]
async fn raw_job_unsuspend_uses_new_annotations() {
    let h = harness();
    let old = ResourceBuilder::job("etl").uid("j1").suspend(Some(true)).build();
    let new =
        ResourceBuilder::job("etl").uid("j1").suspend(Some(false)).webhook("https://h").build();
    h.cluster.add_pod("j1", Pod::new("etl-a", "default", PodPhase::Pending), "");

    assert_eq!(h.pipeline.handle_job_update(&old, &new).await, Outcome::Delivered);
    let calls = h.notifier.calls();
    assert_eq!(calls[0].subject, r#"Job "etl" started running"#);
    assert!(calls[0].body.contains(r#"- Pod "etl-a", state Pending"#));
}

#[tokio::test]
async fn raw_job_without_transition_is_ignored() {
    let h = harness();
    let job = ResourceBuilder::job("etl").slack("C1").failed(2).build();
    assert_eq!(h.pipeline.handle_job_update(&job, &job).await, Outcome::NoEvent);
    assert!(h.cluster.calls().is_empty());
}

#[tokio::test]
async fn raw_job_without_notifier_is_unconfigured() {
    let h = harness();
    let old = ResourceBuilder::job("etl").build();
    let new = ResourceBuilder::job("etl").completed_at_minute(4).build();
    assert_eq!(h.pipeline.handle_job_update(&old, &new).await, Outcome::Unconfigured);
}
