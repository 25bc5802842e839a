// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jw-core: snapshot model and lifecycle decision logic for the job watcher

pub mod classify;
pub mod condition;
pub mod duration;
pub mod event;
pub mod message;
pub mod notifier;
pub mod owner;
pub mod pod;
pub mod preempt;
pub mod resource;
pub mod workload;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use classify::{classify, classify_job};
pub use condition::{find_condition, Condition};
pub use duration::{active_execution_time, format_elapsed, total_execution_time, DurationError};
pub use event::{JobEvent, LifecycleEvent};
pub use message::Message;
pub use notifier::{NotifierKind, NotifyTarget, Style};
pub use owner::{sole_owner, CorrelationError, GroupVersionKind, OwnerReference};
pub use pod::{Pod, PodOutput, PodPhase};
pub use preempt::{extract_preemptor_uid, preemptor_uid, PreemptError};
pub use resource::{ManagedResource, QueueMetadata, ResourceStatus};
pub use workload::{Admission, WorkloadSnapshot};
