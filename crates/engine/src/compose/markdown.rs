// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{Composer, JobContent, JobDetails, WorkloadContent, WorkloadDetails};
use jw_core::{format_elapsed, ManagedResource, Message, Pod, PodOutput};
use std::collections::BTreeMap;
use std::fmt::Write;

/// Slack-flavored markup: emoji subjects, code-quoted values, fenced logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownComposer;

impl Composer for MarkdownComposer {
    fn workload_message(&self, content: &WorkloadContent<'_>) -> Message {
        let wl = content.workload;
        let name = &wl.name;
        match &content.details {
            WorkloadDetails::Evicted { preemptor } => {
                let mut body = String::new();
                if let Some(p) = preemptor {
                    let _ = write!(body, "Preempting workload: `{}`", p.name);
                    if p.namespace != wl.namespace {
                        let _ = write!(body, " (in namespace `{}`)", p.namespace);
                    }
                }
                Message::new(format!(":octagonal_sign: *Workload `{name}` was preempted*"), body)
            }
            WorkloadDetails::Admitted => {
                let mut body = String::from("\n");
                let _ = writeln!(body, "Namespace: `{}`", wl.namespace);
                let _ = writeln!(body, "User queue: `{}`", wl.queue_name);
                let cluster_queue = wl.cluster_queue().unwrap_or_default();
                let _ = writeln!(body, "Cluster queue: `{}`", cluster_queue);
                if let Some(class) = &wl.priority_class {
                    let _ = writeln!(body, "Priority class: `{class}`");
                }
                let _ = writeln!(body, "Managed resource: `{}`", content.resource.display_ref());
                Message::new(format!(":clapper: *Workload `{name}` was admitted*"), body)
            }
            WorkloadDetails::Completed { total, active, outputs } => {
                let mut body = String::from("\n");
                if let Some(total) = total {
                    let _ = writeln!(
                        body,
                        "Total execution time (since submission): {}",
                        format_elapsed(*total)
                    );
                }
                if let Some(active) = active {
                    let _ = writeln!(
                        body,
                        "Active execution time (since last queue admission): {}",
                        format_elapsed(*active)
                    );
                }
                body.push('\n');
                for output in outputs {
                    let _ = write!(body, "*Pod `{}` logs*\n\n{}\n\n", output.pod, fenced(output));
                }
                Message::new(format!(":white_check_mark: *Workload `{name}` is completed*"), body)
            }
            WorkloadDetails::Failed { outputs } => {
                let subject = format!(":rotating_light: *Workload `{name}` has failed*");
                Message::new(subject, pod_logs(outputs))
            }
        }
    }

    fn job_message(&self, content: &JobContent<'_>) -> Message {
        let job = content.job;
        let name = &job.name;
        match &content.details {
            JobDetails::Unsuspended => {
                let mut body = String::from("\n");
                if let Some(meta) = job.queue_metadata() {
                    body.push_str("*Kueue metadata*\n\n");
                    let _ = writeln!(body, "- Local queue: `{}`", meta.queue_name);
                    let _ = writeln!(body, "- Priority class: `{}`", meta.priority_class);
                }
                body.push_str(&summary(job, &content.pods));
                Message::new(format!(":runner: *+++ Job `{name}` started running +++*"), body)
            }
            JobDetails::Completed { outputs } => Message::new(
                format!(":white_check_mark: *+++ Job `{name}` completed +++*"),
                pod_logs(outputs),
            ),
            JobDetails::Failed { outputs } => {
                let mut body = String::from("\n*Failed Pods*\n\n");
                for output in outputs {
                    let _ = write!(body, "Pod `{}`\n{}\n\n", output.pod, fenced(output));
                }
                Message::new(format!(":warning: *+++ Job `{name}` has failed pods +++*"), body)
            }
        }
    }
}

fn fenced(output: &PodOutput) -> String {
    format!("```\n{}\n```", output.logs)
}

fn pod_logs(outputs: &[PodOutput]) -> String {
    let mut body = String::from("\n");
    for output in outputs {
        let _ = write!(body, "Pod `{}` logs\n\n{}\n\n", output.pod, fenced(output));
    }
    body
}

fn summary(job: &ManagedResource, pods: &[Pod]) -> String {
    let status = &job.status;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "\nJob `{}` [{}/{}/{}]",
        job.name, status.active, status.succeeded, status.failed
    );
    write_map(&mut out, "Labels", &job.labels);
    write_map(&mut out, "Annotations", &job.annotations);
    if !pods.is_empty() {
        out.push_str("\n*Managed pods*\n\n");
        for pod in pods {
            let _ = writeln!(out, "- Pod `{}`, state `{}`", pod.name, pod.phase);
        }
    }
    out.push_str("\n\n");
    out
}

fn write_map(out: &mut String, title: &str, map: &BTreeMap<String, String>) {
    if map.is_empty() {
        return;
    }
    let _ = write!(out, "\n*{title}*\n\n");
    for (key, value) in map {
        let _ = writeln!(out, "· `{key}: {value}`");
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
