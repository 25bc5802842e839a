// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Watch streams delivering `(old, new)` snapshot pairs.
//!
//! `kube::runtime::watcher` only reports the latest state of each object.
//! [`SnapshotCache`] remembers the previous snapshot per UID so every update
//! can be handed to the pipeline as a pair. The first sighting of an object
//! only seeds the cache.

mod jobs;
mod workloads;

pub use jobs::watch_jobs;
pub use workloads::watch_workloads;

use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use futures_util::{Stream, StreamExt};
use jw_adapters::ClusterError;
use jw_core::{ManagedResource, WorkloadSnapshot};
use kube::runtime::watcher;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Fatal watch errors
#[derive(Debug, Error)]
pub enum WatchError {
    #[error("{kind} watch did not sync within {timeout:?}")]
    SyncTimeout { kind: &'static str, timeout: Duration },
    #[error("{0} watch stream ended")]
    StreamEnded(&'static str),
}

/// Object identity as seen by the cache.
pub trait Tracked: Clone {
    fn uid(&self) -> &str;
    fn name(&self) -> &str;
}

impl Tracked for WorkloadSnapshot {
    fn uid(&self) -> &str {
        &self.uid
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Tracked for ManagedResource {
    fn uid(&self) -> &str {
        &self.uid
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Watcher event after conversion to a snapshot type.
#[derive(Debug, Clone, PartialEq)]
pub enum Change<T> {
    /// A (re-)list started
    Relist,
    /// Current state of an object, from a list or a watch event
    Seen(T),
    /// Object deleted
    Gone(T),
    /// A (re-)list finished
    Synced,
}

/// Last observed snapshot of every live object, keyed by UID.
#[derive(Debug)]
pub struct SnapshotCache<T> {
    entries: HashMap<String, T>,
    /// UIDs seen since the current re-list started
    relisting: Option<HashSet<String>>,
}

impl<T> Default for SnapshotCache<T> {
    fn default() -> Self {
        Self { entries: HashMap::new(), relisting: None }
    }
}

impl<T: Tracked> SnapshotCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a change, returning the `(old, new)` pair it produced if any.
    ///
    /// Objects missing from a completed re-list were deleted while the watch
    /// was down and are evicted.
    pub fn apply(&mut self, change: Change<T>) -> Option<(T, T)> {
        match change {
            Change::Relist => {
                self.relisting = Some(HashSet::new());
                None
            }
            Change::Seen(new) => {
                let uid = new.uid().to_string();
                if let Some(seen) = self.relisting.as_mut() {
                    seen.insert(uid.clone());
                }
                let old = self.entries.insert(uid, new.clone())?;
                Some((old, new))
            }
            Change::Gone(obj) => {
                self.entries.remove(obj.uid());
                None
            }
            Change::Synced => {
                if let Some(seen) = self.relisting.take() {
                    self.entries.retain(|uid, _| seen.contains(uid));
                }
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Convert a watcher event, logging and skipping objects that fail conversion.
fn to_change<K, T>(
    kind: &'static str,
    event: watcher::Event<K>,
    convert: &impl Fn(&K) -> Result<T, ClusterError>,
) -> Option<Change<T>> {
    let convert_or_skip = |obj: &K| match convert(obj) {
        Ok(t) => Some(t),
        Err(e) => {
            warn!(kind, error = %e, "skipping unconvertible object");
            None
        }
    };
    match event {
        watcher::Event::Init => Some(Change::Relist),
        watcher::Event::InitApply(obj) | watcher::Event::Apply(obj) => {
            convert_or_skip(&obj).map(Change::Seen)
        }
        watcher::Event::Delete(obj) => convert_or_skip(&obj).map(Change::Gone),
        watcher::Event::InitDone => Some(Change::Synced),
    }
}

/// Drive a watcher stream, calling `on_pair` for every `(old, new)` pair.
///
/// The initial list must finish within `sync_timeout`. After that, stream
/// errors are logged and left to the watcher's backoff; pairs are handled
/// one at a time in delivery order.
pub async fn drive<K, T, S, F, Fut>(
    kind: &'static str,
    stream: S,
    sync_timeout: Duration,
    convert: impl Fn(&K) -> Result<T, ClusterError>,
    mut on_pair: F,
) -> Result<(), WatchError>
where
    S: Stream<Item = Result<watcher::Event<K>, watcher::Error>>,
    T: Tracked,
    F: FnMut(T, T) -> Fut,
    Fut: Future<Output = ()>,
{
    let mut stream = pin!(stream);
    let mut cache = SnapshotCache::new();

    let initial_sync = async {
        while let Some(item) = stream.next().await {
            match item {
                Ok(event) => match to_change(kind, event, &convert) {
                    Some(Change::Synced) => {
                        cache.apply(Change::Synced);
                        return true;
                    }
                    Some(change) => {
                        cache.apply(change);
                    }
                    None => {}
                },
                Err(e) => warn!(kind, error = %e, "watch error during initial sync"),
            }
        }
        false
    };
    match tokio::time::timeout(sync_timeout, initial_sync).await {
        Ok(true) => info!(kind, objects = cache.len(), "initial sync complete"),
        Ok(false) => return Err(WatchError::StreamEnded(kind)),
        Err(_) => return Err(WatchError::SyncTimeout { kind, timeout: sync_timeout }),
    }

    while let Some(item) = stream.next().await {
        match item {
            Ok(event) => {
                let Some(change) = to_change(kind, event, &convert) else { continue };
                if let Some((old, new)) = cache.apply(change) {
                    debug!(kind, object = new.name(), "update");
                    on_pair(old, new).await;
                }
            }
            Err(e) => warn!(kind, error = %e, "watch error, retrying"),
        }
    }
    Err(WatchError::StreamEnded(kind))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
