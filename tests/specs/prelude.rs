// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;

pub use jw_adapters::{FakeClusterAdapter, FakeNotifyAdapter, NotifyCall};
pub use jw_core::test_support::{ResourceBuilder, WorkloadBuilder};
pub use jw_core::{Message, Pod, PodPhase};
pub use jw_engine::{Outcome, Pipeline};
pub use similar_asserts::assert_eq;

/// Pipeline wired to fakes, with handles on both.
pub struct World {
    pub cluster: Arc<FakeClusterAdapter>,
    pub notifier: FakeNotifyAdapter,
    pub pipeline: Pipeline<FakeClusterAdapter, FakeNotifyAdapter>,
}

impl World {
    pub fn new() -> Self {
        let cluster = Arc::new(FakeClusterAdapter::new());
        let notifier = FakeNotifyAdapter::new();
        let pipeline = Pipeline::new(Arc::clone(&cluster), notifier.clone());
        Self { cluster, notifier, pipeline }
    }

    /// The single notification sent so far, as a message.
    pub fn sent(&self) -> Message {
        let calls = self.notifier.calls();
        assert_eq!(calls.len(), 1);
        let NotifyCall { subject, body, .. } = calls[0].clone();
        Message::new(subject, body)
    }
}
