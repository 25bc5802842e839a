// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Kubernetes cluster adapter backed by `kube-rs`.
//!
//! # Module layout
//!
//! - [`convert`]: API objects to snapshot types
//!
//! Workloads and owner objects are read as [`DynamicObject`]s so any owner
//! kind the cluster serves can be resolved through discovery; pods are read
//! through the typed core API.

pub mod convert;

use crate::cluster::{ClusterAdapter, ClusterError};
use async_trait::async_trait;
use jw_core::{GroupVersionKind, ManagedResource, Pod, WorkloadSnapshot};
use k8s_openapi::api::core::v1::Pod as ApiPod;
use kube::api::{Api, ApiResource, DynamicObject, ListParams, LogParams};
use kube::Client;

/// Group of the Kueue API.
pub const KUEUE_GROUP: &str = "kueue.x-k8s.io";
/// Served version of the Kueue `Workload` kind.
pub const KUEUE_VERSION: &str = "v1beta1";

/// API resource for Kueue `Workload` objects.
pub fn workload_api_resource() -> ApiResource {
    ApiResource::from_gvk_with_plural(
        &kube::core::GroupVersionKind::gvk(KUEUE_GROUP, KUEUE_VERSION, "Workload"),
        "workloads",
    )
}

/// Cluster adapter talking to the Kubernetes API server.
#[derive(Clone)]
pub struct KubeClusterAdapter {
    client: Client,
}

impl KubeClusterAdapter {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from the local kubeconfig, falling back to in-cluster config.
    pub async fn try_default() -> Result<Self, ClusterError> {
        let client = Client::try_default()
            .await
            .map_err(|e| ClusterError::Api(format!("failed to create kube client: {}", e)))?;
        Ok(Self::new(client))
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

fn is_not_found(err: &kube::Error) -> bool {
    matches!(err, kube::Error::Api(resp) if resp.code == 404)
}

#[async_trait]
impl ClusterAdapter for KubeClusterAdapter {
    async fn resolve_resource(&self, gvk: &GroupVersionKind) -> Result<String, ClusterError> {
        let kube_gvk = kube::core::GroupVersionKind::gvk(&gvk.group, &gvk.version, &gvk.kind);
        let (resource, _caps) = kube::discovery::pinned_kind(&self.client, &kube_gvk)
            .await
            .map_err(|e| ClusterError::Discovery { gvk: gvk.to_string(), message: e.to_string() })?;
        tracing::debug!(%gvk, resource = %resource.plural, "resolved resource for kind");
        Ok(resource.plural)
    }

    async fn get_object(
        &self,
        gvk: &GroupVersionKind,
        resource: &str,
        namespace: &str,
        name: &str,
    ) -> Result<ManagedResource, ClusterError> {
        let kube_gvk = kube::core::GroupVersionKind::gvk(&gvk.group, &gvk.version, &gvk.kind);
        let ar = ApiResource::from_gvk_with_plural(&kube_gvk, resource);
        let api: Api<DynamicObject> = Api::namespaced_with(self.client.clone(), namespace, &ar);
        let obj = api.get(name).await.map_err(|e| {
            if is_not_found(&e) {
                ClusterError::NotFound {
                    resource: resource.to_string(),
                    namespace: namespace.to_string(),
                    name: name.to_string(),
                }
            } else {
                ClusterError::Api(e.to_string())
            }
        })?;
        convert::resource_from_dynamic(&obj, &gvk.kind)
    }

    async fn list_workloads(&self) -> Result<Vec<WorkloadSnapshot>, ClusterError> {
        let api: Api<DynamicObject> = Api::all_with(self.client.clone(), &workload_api_resource());
        let list =
            api.list(&ListParams::default()).await.map_err(|e| ClusterError::Api(e.to_string()))?;

        let mut workloads = Vec::with_capacity(list.items.len());
        for obj in &list.items {
            match convert::workload_from_dynamic(obj) {
                Ok(wl) => workloads.push(wl),
                Err(e) => tracing::warn!(error = %e, "skipping unreadable workload in listing"),
            }
        }
        Ok(workloads)
    }

    async fn list_pods(&self, namespace: &str, selector: &str) -> Result<Vec<Pod>, ClusterError> {
        let api: Api<ApiPod> = Api::namespaced(self.client.clone(), namespace);
        let list = api
            .list(&ListParams::default().labels(selector))
            .await
            .map_err(|e| ClusterError::Api(e.to_string()))?;
        Ok(list.items.iter().filter_map(convert::pod_from_api).collect())
    }

    async fn pod_logs(&self, namespace: &str, pod: &str) -> Result<String, ClusterError> {
        let api: Api<ApiPod> = Api::namespaced(self.client.clone(), namespace);
        api.logs(pod, &LogParams::default()).await.map_err(|e| ClusterError::Fetch {
            namespace: namespace.to_string(),
            pod: pod.to_string(),
            message: e.to_string(),
        })
    }
}
