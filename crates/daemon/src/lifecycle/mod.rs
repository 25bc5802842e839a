// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon lifecycle: configuration, startup and the watch run.

mod startup;
pub use startup::run;

use std::time::Duration;

use jw_adapters::ClusterError;
use thiserror::Error;

use crate::env;
use crate::logging::{LogConfig, LogFormat, LoggingError, DEFAULT_FILTER};
use crate::watch::WatchError;

/// Default namespace of the raw Job watch.
pub const DEFAULT_JOB_NAMESPACE: &str = "default";
/// Default bound on the initial list of each watch.
pub const DEFAULT_SYNC_TIMEOUT: Duration = Duration::from_secs(60);

/// Errors that stop the daemon
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("invalid {var}={value:?}: expected {expected}")]
    InvalidConfig { var: &'static str, value: String, expected: &'static str },
    #[error(transparent)]
    Logging(#[from] LoggingError),
    #[error("cluster client: {0}")]
    Client(#[from] ClusterError),
    #[error(transparent)]
    Watch(#[from] WatchError),
}

/// Resources the daemon watches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WatchMode {
    /// Kueue workloads in every namespace
    #[default]
    Workloads,
    /// Raw Jobs in one namespace
    Jobs,
    All,
}

impl WatchMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "workloads" => Some(WatchMode::Workloads),
            "jobs" => Some(WatchMode::Jobs),
            "all" => Some(WatchMode::All),
            _ => None,
        }
    }

    pub fn workloads(&self) -> bool {
        matches!(self, WatchMode::Workloads | WatchMode::All)
    }

    pub fn jobs(&self) -> bool {
        matches!(self, WatchMode::Jobs | WatchMode::All)
    }
}

/// Daemon configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub watch: WatchMode,
    pub job_namespace: String,
    /// Bot token for Slack notifications; Slack sends fail without it
    pub slack_token: Option<String>,
    pub sync_timeout: Duration,
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from the environment.
    pub fn load() -> Result<Self, LifecycleError> {
        let watch = match env::watch() {
            Some(raw) => WatchMode::parse(&raw).ok_or(LifecycleError::InvalidConfig {
                var: "JW_WATCH",
                value: raw,
                expected: "workloads|jobs|all",
            })?,
            None => WatchMode::default(),
        };

        let sync_timeout = match env::sync_timeout_secs() {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(LifecycleError::InvalidConfig {
                        var: "JW_SYNC_TIMEOUT_SECS",
                        value: raw,
                        expected: "a positive number of seconds",
                    })
                }
            },
            None => DEFAULT_SYNC_TIMEOUT,
        };

        let format = match env::log_format() {
            Some(raw) => raw.parse::<LogFormat>()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            watch,
            job_namespace: env::job_namespace()
                .unwrap_or_else(|| DEFAULT_JOB_NAMESPACE.to_string()),
            slack_token: env::slack_api_token(),
            sync_timeout,
            log: LogConfig {
                filter: env::log_filter().unwrap_or_else(|| DEFAULT_FILTER.to_string()),
                format,
            },
        })
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
