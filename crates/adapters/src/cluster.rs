// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use jw_core::{GroupVersionKind, ManagedResource, Pod, WorkloadSnapshot};
use thiserror::Error;

/// Errors from cluster reads
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClusterError {
    #[error("kind {gvk} is not served by the cluster: {message}")]
    Discovery { gvk: String, message: String },
    #[error("{resource} {namespace}/{name} not found")]
    NotFound { resource: String, namespace: String, name: String },
    #[error("failed to fetch logs of pod {namespace}/{pod}: {message}")]
    Fetch { namespace: String, pod: String, message: String },
    #[error("api request failed: {0}")]
    Api(String),
    #[error("unexpected object shape: {0}")]
    Decode(String),
}

/// Read-only access to the cluster.
///
/// Covers the discovery/correlation backend (kind → resource name, object
/// fetch), the cluster-wide workload listing used to find preemptors, and the
/// pod/log backend. All calls are plain request/response; timeouts belong to
/// the client configuration.
#[async_trait]
pub trait ClusterAdapter: Send + Sync + 'static {
    /// Resolve the REST resource name (plural) serving a kind.
    async fn resolve_resource(&self, gvk: &GroupVersionKind) -> Result<String, ClusterError>;

    /// Fetch a namespaced object of the given kind through its resource name.
    async fn get_object(
        &self,
        gvk: &GroupVersionKind,
        resource: &str,
        namespace: &str,
        name: &str,
    ) -> Result<ManagedResource, ClusterError>;

    /// List workloads in every namespace.
    async fn list_workloads(&self) -> Result<Vec<WorkloadSnapshot>, ClusterError>;

    /// List pods in a namespace matching a label selector.
    async fn list_pods(&self, namespace: &str, selector: &str) -> Result<Vec<Pod>, ClusterError>;

    /// Fetch the full log text of a pod.
    async fn pod_logs(&self, namespace: &str, pod: &str) -> Result<String, ClusterError>;
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{ClusterAdapter, ClusterError};
    use async_trait::async_trait;
    use jw_core::pod::CONTROLLER_UID_LABEL;
    use jw_core::{GroupVersionKind, ManagedResource, Pod, WorkloadSnapshot};
    use parking_lot::Mutex;
    use std::collections::{BTreeMap, HashMap};
    use std::sync::Arc;

    /// Pod registered with the fake, with its labels and log result.
    #[derive(Debug, Clone)]
    pub struct FakePod {
        pub pod: Pod,
        pub labels: BTreeMap<String, String>,
        pub logs: Result<String, String>,
    }

    #[derive(Default)]
    struct FakeClusterState {
        kinds: HashMap<GroupVersionKind, String>,
        objects: HashMap<(String, String, String), ManagedResource>,
        workloads: Vec<WorkloadSnapshot>,
        pods: Vec<FakePod>,
        calls: Vec<String>,
    }

    /// In-memory cluster for tests.
    ///
    /// `batch/v1 Job` is served as `jobs` out of the box; other kinds must be
    /// registered with [`FakeClusterAdapter::serve_kind`].
    #[derive(Clone)]
    pub struct FakeClusterAdapter {
        inner: Arc<Mutex<FakeClusterState>>,
    }

    impl Default for FakeClusterAdapter {
        fn default() -> Self {
            let mut state = FakeClusterState::default();
            state.kinds.insert(GroupVersionKind::new("batch", "v1", "Job"), "jobs".to_string());
            Self { inner: Arc::new(Mutex::new(state)) }
        }
    }

    impl FakeClusterAdapter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn serve_kind(&self, gvk: GroupVersionKind, resource: &str) {
            self.inner.lock().kinds.insert(gvk, resource.to_string());
        }

        /// Store an object under the resource name its kind is served as.
        pub fn add_object(&self, resource: &str, object: ManagedResource) {
            let key = (resource.to_string(), object.namespace.clone(), object.name.clone());
            self.inner.lock().objects.insert(key, object);
        }

        /// Shortcut for storing a `jobs` object.
        pub fn add_job(&self, job: ManagedResource) {
            self.add_object("jobs", job);
        }

        pub fn add_workload(&self, workload: WorkloadSnapshot) {
            self.inner.lock().workloads.push(workload);
        }

        /// Add a pod controlled by `controller_uid` whose logs read `logs`.
        pub fn add_pod(&self, controller_uid: &str, pod: Pod, logs: &str) {
            self.push_pod(controller_uid, pod, Ok(logs.to_string()));
        }

        /// Add a pod whose log fetch fails with `message`.
        pub fn add_pod_failing_logs(&self, controller_uid: &str, pod: Pod, message: &str) {
            self.push_pod(controller_uid, pod, Err(message.to_string()));
        }

        fn push_pod(&self, controller_uid: &str, pod: Pod, logs: Result<String, String>) {
            let labels = [(CONTROLLER_UID_LABEL.to_string(), controller_uid.to_string())]
                .into_iter()
                .collect();
            self.inner.lock().pods.push(FakePod { pod, labels, logs });
        }

        /// Names of the adapter methods called so far, in order.
        pub fn calls(&self) -> Vec<String> {
            self.inner.lock().calls.clone()
        }

        fn record(&self, call: &str) {
            self.inner.lock().calls.push(call.to_string());
        }
    }

    fn selector_matches(selector: &str, labels: &BTreeMap<String, String>) -> bool {
        selector.split(',').filter(|s| !s.is_empty()).all(|term| match term.split_once('=') {
            Some((k, v)) => labels.get(k.trim()).is_some_and(|l| l == v.trim()),
            None => false,
        })
    }

    #[async_trait]
    impl ClusterAdapter for FakeClusterAdapter {
        async fn resolve_resource(&self, gvk: &GroupVersionKind) -> Result<String, ClusterError> {
            self.record("resolve_resource");
            self.inner.lock().kinds.get(gvk).cloned().ok_or_else(|| ClusterError::Discovery {
                gvk: gvk.to_string(),
                message: "no matches for kind".to_string(),
            })
        }

        async fn get_object(
            &self,
            _gvk: &GroupVersionKind,
            resource: &str,
            namespace: &str,
            name: &str,
        ) -> Result<ManagedResource, ClusterError> {
            self.record("get_object");
            let key = (resource.to_string(), namespace.to_string(), name.to_string());
            self.inner.lock().objects.get(&key).cloned().ok_or_else(|| ClusterError::NotFound {
                resource: resource.to_string(),
                namespace: namespace.to_string(),
                name: name.to_string(),
            })
        }

        async fn list_workloads(&self) -> Result<Vec<WorkloadSnapshot>, ClusterError> {
            self.record("list_workloads");
            Ok(self.inner.lock().workloads.clone())
        }

        async fn list_pods(
            &self,
            namespace: &str,
            selector: &str,
        ) -> Result<Vec<Pod>, ClusterError> {
            self.record("list_pods");
            Ok(self
                .inner
                .lock()
                .pods
                .iter()
                .filter(|p| p.pod.namespace == namespace && selector_matches(selector, &p.labels))
                .map(|p| p.pod.clone())
                .collect())
        }

        async fn pod_logs(&self, namespace: &str, pod: &str) -> Result<String, ClusterError> {
            self.record("pod_logs");
            let state = self.inner.lock();
            let found =
                state.pods.iter().find(|p| p.pod.namespace == namespace && p.pod.name == pod);
            match found.map(|p| p.logs.clone()) {
                Some(Ok(logs)) => Ok(logs),
                Some(Err(message)) => Err(ClusterError::Fetch {
                    namespace: namespace.to_string(),
                    pod: pod.to_string(),
                    message,
                }),
                None => Err(ClusterError::Fetch {
                    namespace: namespace.to_string(),
                    pod: pod.to_string(),
                    message: "pod not found".to_string(),
                }),
            }
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeClusterAdapter, FakePod};

#[cfg(test)]
#[path = "cluster_tests.rs"]
mod tests;
