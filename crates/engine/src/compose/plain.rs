// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{Composer, JobContent, JobDetails, WorkloadContent, WorkloadDetails};
use jw_core::{ManagedResource, Message, Pod};
use std::collections::BTreeMap;
use std::fmt::Write;

/// Unformatted text with quoted names, for webhook receivers.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainComposer;

impl Composer for PlainComposer {
    fn workload_message(&self, content: &WorkloadContent<'_>) -> Message {
        let wl = content.workload;
        let name = &wl.name;
        match &content.details {
            WorkloadDetails::Evicted { preemptor } => {
                let mut body = String::new();
                if let Some(p) = preemptor {
                    let _ = write!(body, "Preempting workload: {:?}", p.name);
                    if p.namespace != wl.namespace {
                        let _ = write!(body, " (in namespace {:?})", p.namespace);
                    }
                }
                Message::new(format!("Workload {name:?} was preempted"), body)
            }
            WorkloadDetails::Admitted => {
                let mut body = String::from("\n");
                let _ = writeln!(body, "Namespace: {}", wl.namespace);
                let _ = writeln!(body, "Local queue: {}", wl.queue_name);
                let _ = writeln!(body, "Cluster queue: {}", wl.cluster_queue().unwrap_or_default());
                if let Some(class) = &wl.priority_class {
                    let _ = writeln!(body, "Priority class: {class}");
                }
                let _ = writeln!(body, "Managed resource: {}", content.resource.display_ref());
                Message::new(format!("Workload {name:?} was admitted to cluster queue"), body)
            }
            WorkloadDetails::Completed { .. } => {
                Message::new(format!("Workload {name:?} is completed"), "")
            }
            WorkloadDetails::Failed { .. } => {
                Message::new(format!("Workload {name:?} has failed"), "")
            }
        }
    }

    fn job_message(&self, content: &JobContent<'_>) -> Message {
        let name = &content.job.name;
        let subject = match content.details {
            JobDetails::Unsuspended => format!("Job {name:?} started running"),
            JobDetails::Completed { .. } => format!("Job {name:?} completed"),
            JobDetails::Failed { .. } => format!("Job {name:?} has failed pods"),
        };
        Message::new(subject, summary(content.job, &content.pods))
    }
}

fn summary(job: &ManagedResource, pods: &[Pod]) -> String {
    let status = &job.status;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Job {:?} [{}/{}/{}]",
        job.name, status.active, status.succeeded, status.failed
    );
    write_map(&mut out, "Labels", &job.labels);
    write_map(&mut out, "Annotations", &job.annotations);
    if !pods.is_empty() {
        out.push_str("\nManaged pods\n\n");
        for pod in pods {
            let _ = writeln!(out, "- Pod {:?}, state {}", pod.name, pod.phase);
        }
    }
    out.push_str("---\n");
    out
}

fn write_map(out: &mut String, title: &str, map: &BTreeMap<String, String>) {
    if map.is_empty() {
        return;
    }
    let _ = write!(out, "\n{title}\n\n");
    for (key, value) in map {
        let _ = writeln!(out, "  {key}: {value}");
    }
}

#[cfg(test)]
#[path = "plain_tests.rs"]
mod tests;
