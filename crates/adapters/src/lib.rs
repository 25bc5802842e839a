// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jw-adapters: cluster and notification backends for the job watcher
//!
//! Each external collaborator is an async trait with a real implementation
//! and, behind the `test-support` feature, an in-memory fake.

pub mod cluster;
pub mod k8s;
pub mod notify;

pub use cluster::{ClusterAdapter, ClusterError};
pub use k8s::{workload_api_resource, KubeClusterAdapter};
pub use notify::{HttpNotifyAdapter, NotifyAdapter, NotifyError};

#[cfg(any(test, feature = "test-support"))]
pub use cluster::{FakeClusterAdapter, FakePod};
#[cfg(any(test, feature = "test-support"))]
pub use notify::{FakeNotifyAdapter, NotifyCall};
