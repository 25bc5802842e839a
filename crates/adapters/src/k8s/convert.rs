// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Conversion from Kubernetes API objects to snapshot types.

use crate::cluster::ClusterError;
use chrono::{DateTime, Utc};
use jw_core::{
    Admission, Condition, ManagedResource, OwnerReference, Pod, PodPhase, ResourceStatus,
    WorkloadSnapshot,
};
use k8s_openapi::api::batch::v1::Job;
use k8s_openapi::api::core::v1::Pod as ApiPod;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::api::DynamicObject;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WorkloadBody {
    spec: WorkloadSpec,
    status: WorkloadStatus,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WorkloadSpec {
    queue_name: String,
    priority_class_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WorkloadStatus {
    conditions: Vec<Condition>,
    admission: Option<WorkloadAdmission>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorkloadAdmission {
    cluster_queue: String,
}

/// The slice of an arbitrary owner object (Job-shaped) that we read.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwnerBody {
    spec: OwnerSpec,
    status: OwnerStatus,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OwnerSpec {
    suspend: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct OwnerStatus {
    active: Option<i32>,
    succeeded: Option<i32>,
    failed: Option<i32>,
    completion_time: Option<DateTime<Utc>>,
}

fn required_name(meta: &ObjectMeta) -> Result<String, ClusterError> {
    meta.name.clone().ok_or_else(|| ClusterError::Decode("object has no metadata.name".to_string()))
}

/// Convert a Kueue `Workload` object.
pub fn workload_from_dynamic(obj: &DynamicObject) -> Result<WorkloadSnapshot, ClusterError> {
    let meta = &obj.metadata;
    let name = required_name(meta)?;
    let creation_time = meta
        .creation_timestamp
        .as_ref()
        .map(|t| t.0)
        .ok_or_else(|| {
            ClusterError::Decode(format!("workload {} has no creationTimestamp", name))
        })?;

    let body: WorkloadBody = serde_json::from_value(obj.data.clone())
        .map_err(|e| ClusterError::Decode(format!("workload {}: {}", name, e)))?;

    let owner_references = meta
        .owner_references
        .iter()
        .flatten()
        .map(|o| OwnerReference {
            api_version: o.api_version.clone(),
            kind: o.kind.clone(),
            name: o.name.clone(),
            uid: o.uid.clone(),
        })
        .collect();

    Ok(WorkloadSnapshot {
        namespace: meta.namespace.clone().unwrap_or_default(),
        uid: meta.uid.clone().unwrap_or_default(),
        creation_time,
        queue_name: body.spec.queue_name,
        priority_class: body.spec.priority_class_name.filter(|p| !p.is_empty()),
        conditions: body.status.conditions,
        admission: body.status.admission.map(|a| Admission { cluster_queue: a.cluster_queue }),
        owner_references,
        name,
    })
}

/// Convert an untyped owner object. `kind` is used when the object carries no type metadata.
pub fn resource_from_dynamic(
    obj: &DynamicObject,
    kind: &str,
) -> Result<ManagedResource, ClusterError> {
    let meta = &obj.metadata;
    let name = required_name(meta)?;
    let body: OwnerBody = serde_json::from_value(obj.data.clone())
        .map_err(|e| ClusterError::Decode(format!("{} {}: {}", kind, name, e)))?;

    Ok(ManagedResource {
        kind: obj.types.as_ref().map(|t| t.kind.clone()).unwrap_or_else(|| kind.to_string()),
        namespace: meta.namespace.clone().unwrap_or_default(),
        uid: meta.uid.clone().unwrap_or_default(),
        annotations: meta.annotations.clone().unwrap_or_default(),
        labels: meta.labels.clone().unwrap_or_default(),
        suspend: body.spec.suspend,
        status: ResourceStatus {
            active: body.status.active.unwrap_or(0),
            succeeded: body.status.succeeded.unwrap_or(0),
            failed: body.status.failed.unwrap_or(0),
            completion_time: body.status.completion_time,
        },
        name,
    })
}

/// Convert a typed batch Job.
pub fn resource_from_job(job: &Job) -> Result<ManagedResource, ClusterError> {
    let meta = &job.metadata;
    let name = required_name(meta)?;
    let status = job.status.as_ref();

    Ok(ManagedResource {
        kind: jw_core::resource::KIND_JOB.to_string(),
        namespace: meta.namespace.clone().unwrap_or_default(),
        uid: meta.uid.clone().unwrap_or_default(),
        annotations: meta.annotations.clone().unwrap_or_default(),
        labels: meta.labels.clone().unwrap_or_default(),
        suspend: job.spec.as_ref().and_then(|s| s.suspend),
        status: ResourceStatus {
            active: status.and_then(|s| s.active).unwrap_or(0),
            succeeded: status.and_then(|s| s.succeeded).unwrap_or(0),
            failed: status.and_then(|s| s.failed).unwrap_or(0),
            completion_time: status.and_then(|s| s.completion_time.as_ref()).map(|t| t.0),
        },
        name,
    })
}

/// Convert a typed pod; nameless pods are dropped.
pub fn pod_from_api(pod: &ApiPod) -> Option<Pod> {
    let name = pod.metadata.name.clone()?;
    let phase = pod
        .status
        .as_ref()
        .and_then(|s| s.phase.as_deref())
        .and_then(|p| p.parse().ok())
        .unwrap_or(PodPhase::Unknown);
    Some(Pod { name, namespace: pod.metadata.namespace.clone().unwrap_or_default(), phase })
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
