// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-update pipeline: classify, correlate, compose, send.

use crate::compose::NotificationComposer;
use crate::correlate::{CorrelateError, Correlator};
use jw_adapters::{ClusterAdapter, NotifyAdapter};
use jw_core::{classify, classify_job, ManagedResource, Message, NotifyTarget, WorkloadSnapshot};
use std::sync::Arc;
use thiserror::Error;

/// Errors that abort processing of one update
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("correlation failed: {0}")]
    Correlate(#[from] CorrelateError),
}

/// What happened to one delivered snapshot pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No lifecycle transition between the snapshots
    NoEvent,
    /// Transition found, but the resource does not opt into notifications
    Unconfigured,
    Delivered,
    /// Send failed; the failure was logged and dropped
    DeliveryFailed,
}

pub struct Pipeline<C, N> {
    correlator: Correlator<C>,
    composer: NotificationComposer<C>,
    notifier: N,
}

impl<C: ClusterAdapter, N: NotifyAdapter> Pipeline<C, N> {
    pub fn new(cluster: Arc<C>, notifier: N) -> Self {
        Self {
            correlator: Correlator::new(Arc::clone(&cluster)),
            composer: NotificationComposer::new(cluster),
            notifier,
        }
    }

    /// Process one `(old, new)` workload pair.
    ///
    /// Classification runs first so unchanged pairs cost no cluster reads.
    /// Only correlation failures are returned; everything after that
    /// degrades or is logged.
    pub async fn handle_workload_update(
        &self,
        old: &WorkloadSnapshot,
        new: &WorkloadSnapshot,
    ) -> Result<Outcome, PipelineError> {
        let Some(event) = classify(old, new) else {
            return Ok(Outcome::NoEvent);
        };
        tracing::debug!(
            workload = %new.name,
            namespace = %new.namespace,
            %event,
            "workload transition"
        );

        let resource = self.correlator.managed_resource(new).await?;
        let Some(target) = NotifyTarget::from_annotations(&resource.annotations) else {
            tracing::debug!(resource = %resource.display_ref(), %event, "no notifier configured");
            return Ok(Outcome::Unconfigured);
        };

        let message = self.composer.compose_workload(target.style(), event, new, &resource).await;
        Ok(self.deliver(&target, &message).await)
    }

    /// Process one `(old, new)` raw Job pair.
    pub async fn handle_job_update(&self, old: &ManagedResource, new: &ManagedResource) -> Outcome {
        let Some(event) = classify_job(old, new) else {
            return Outcome::NoEvent;
        };
        tracing::debug!(job = %new.name, namespace = %new.namespace, %event, "job transition");

        let Some(target) = NotifyTarget::from_annotations(&new.annotations) else {
            tracing::debug!(job = %new.name, %event, "no notifier configured");
            return Outcome::Unconfigured;
        };

        let message = self.composer.compose_job(target.style(), event, new).await;
        self.deliver(&target, &message).await
    }

    async fn deliver(&self, target: &NotifyTarget, message: &Message) -> Outcome {
        match self.notifier.notify(target, &message.subject, &message.body).await {
            Ok(()) => Outcome::Delivered,
            Err(e) => {
                tracing::warn!(
                    kind = %target.kind,
                    subject = %message.subject,
                    error = %e,
                    "notification dropped"
                );
                Outcome::DeliveryFailed
            }
        }
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
