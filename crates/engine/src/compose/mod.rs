// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification composition.
//!
//! Composition runs in two halves. [`NotificationComposer`] gathers the
//! content an event needs from the cluster (preemptor, durations, pod logs)
//! and degrades by omission when something cannot be resolved. A
//! [`Composer`] then renders that content into a [`Message`] without I/O.

mod markdown;
mod plain;

pub use markdown::MarkdownComposer;
pub use plain::PlainComposer;

use crate::output::OutputCollector;
use crate::preemptor::PreemptorResolver;
use chrono::TimeDelta;
use jw_adapters::ClusterAdapter;
use jw_core::{
    active_execution_time, total_execution_time, JobEvent, LifecycleEvent, ManagedResource,
    Message, Pod, PodOutput, PodPhase, Style, WorkloadSnapshot,
};
use std::sync::Arc;

/// Identity of the workload that caused an eviction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preemptor {
    pub name: String,
    pub namespace: String,
}

/// Event-specific content of a workload notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkloadDetails {
    Evicted { preemptor: Option<Preemptor> },
    Admitted,
    Completed { total: Option<TimeDelta>, active: Option<TimeDelta>, outputs: Vec<PodOutput> },
    Failed { outputs: Vec<PodOutput> },
}

/// Everything a renderer needs for a workload notification.
#[derive(Debug, Clone)]
pub struct WorkloadContent<'a> {
    pub workload: &'a WorkloadSnapshot,
    pub resource: &'a ManagedResource,
    pub details: WorkloadDetails,
}

/// Event-specific content of a raw Job notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobDetails {
    Unsuspended,
    Completed { outputs: Vec<PodOutput> },
    /// Logs of the pods in phase `Failed` only
    Failed { outputs: Vec<PodOutput> },
}

/// Everything a renderer needs for a raw Job notification.
#[derive(Debug, Clone)]
pub struct JobContent<'a> {
    pub job: &'a ManagedResource,
    /// Managed pods, listed for the job summary
    pub pods: Vec<Pod>,
    pub details: JobDetails,
}

/// Renders gathered content in one presentation style.
pub trait Composer: Send + Sync {
    fn workload_message(&self, content: &WorkloadContent<'_>) -> Message;

    fn job_message(&self, content: &JobContent<'_>) -> Message;
}

/// Renderer for a style.
pub fn composer(style: Style) -> &'static dyn Composer {
    match style {
        Style::Plain => &PlainComposer,
        Style::Markdown => &MarkdownComposer,
    }
}

/// Gathers event content from the cluster and renders it.
pub struct NotificationComposer<C> {
    preemptors: PreemptorResolver<C>,
    outputs: OutputCollector<C>,
}

impl<C: ClusterAdapter> NotificationComposer<C> {
    pub fn new(cluster: Arc<C>) -> Self {
        Self {
            preemptors: PreemptorResolver::new(Arc::clone(&cluster)),
            outputs: OutputCollector::new(cluster),
        }
    }

    /// Compose the notification for a workload event.
    ///
    /// Only the new snapshot is read; no rendering rule depends on the old one.
    /// Never fails: content that cannot be resolved is logged and left out.
    /// Durations and logs only appear in Markdown, so Plain skips fetching them.
    pub async fn compose_workload(
        &self,
        style: Style,
        event: LifecycleEvent,
        workload: &WorkloadSnapshot,
        resource: &ManagedResource,
    ) -> Message {
        let rich = style == Style::Markdown;
        let details = match event {
            LifecycleEvent::Evicted => WorkloadDetails::Evicted {
                preemptor: match self.preemptors.resolve(workload).await {
                    Ok(p) => Some(Preemptor { name: p.name, namespace: p.namespace }),
                    Err(e) => {
                        tracing::warn!(
                            workload = %workload.name,
                            error = %e,
                            "preemptor unresolved"
                        );
                        None
                    }
                },
            },
            LifecycleEvent::Admitted => WorkloadDetails::Admitted,
            LifecycleEvent::Completed if rich => WorkloadDetails::Completed {
                total: degrade(
                    &workload.name,
                    "total execution time",
                    total_execution_time(workload),
                ),
                active: degrade(
                    &workload.name,
                    "active execution time",
                    active_execution_time(workload),
                ),
                outputs: self.outputs_of(resource, |_| true).await,
            },
            LifecycleEvent::Completed => {
                WorkloadDetails::Completed { total: None, active: None, outputs: Vec::new() }
            }
            LifecycleEvent::Failed if rich => {
                WorkloadDetails::Failed { outputs: self.outputs_of(resource, |_| true).await }
            }
            LifecycleEvent::Failed => WorkloadDetails::Failed { outputs: Vec::new() },
        };
        composer(style).workload_message(&WorkloadContent { workload, resource, details })
    }

    /// Compose the notification for a raw Job event.
    pub async fn compose_job(
        &self,
        style: Style,
        event: JobEvent,
        job: &ManagedResource,
    ) -> Message {
        let rich = style == Style::Markdown;
        let details = match event {
            JobEvent::Unsuspended => JobDetails::Unsuspended,
            JobEvent::Completed if rich => {
                JobDetails::Completed { outputs: self.outputs_of(job, |_| true).await }
            }
            JobEvent::Completed => JobDetails::Completed { outputs: Vec::new() },
            JobEvent::Failed if rich => JobDetails::Failed {
                outputs: self.outputs_of(job, |p| p.phase == PodPhase::Failed).await,
            },
            JobEvent::Failed => JobDetails::Failed { outputs: Vec::new() },
        };
        // The summary lists pods; only Markdown completion/failure bodies go without it
        let needs_summary = !rich || event == JobEvent::Unsuspended;
        let pods = if needs_summary {
            match self.outputs.pods(job).await {
                Ok(pods) => pods,
                Err(e) => {
                    tracing::warn!(job = %job.name, error = %e, "could not list managed pods");
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };
        composer(style).job_message(&JobContent { job, pods, details })
    }

    async fn outputs_of(
        &self,
        resource: &ManagedResource,
        filter: impl Fn(&Pod) -> bool + Send,
    ) -> Vec<PodOutput> {
        match self.outputs.collect_where(resource, filter).await {
            Ok(outputs) => outputs,
            Err(e) => {
                tracing::warn!(resource = %resource.display_ref(), error = %e, "pod logs omitted");
                Vec::new()
            }
        }
    }
}

fn degrade<E: std::fmt::Display>(
    workload: &str,
    what: &str,
    result: Result<TimeDelta, E>,
) -> Option<TimeDelta> {
    match result {
        Ok(delta) => Some(delta),
        Err(e) => {
            tracing::warn!(%workload, error = %e, "{} omitted", what);
            None
        }
    }
}

#[cfg(test)]
#[path = "compose_tests.rs"]
mod tests;
