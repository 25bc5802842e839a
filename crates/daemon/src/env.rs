// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the daemon crate.
//!
//! Accessors return raw values; parsing and validation happen in
//! [`crate::lifecycle::Config::load`].

/// Which resources to watch: `workloads`, `jobs` or `all`
pub fn watch() -> Option<String> {
    non_empty("JW_WATCH")
}

/// Namespace of the raw Job watch
pub fn job_namespace() -> Option<String> {
    non_empty("JW_JOB_NAMESPACE")
}

/// Slack bot token used by the `slack` notifier
pub fn slack_api_token() -> Option<String> {
    non_empty("WATCHER_SLACK_API_TOKEN")
}

/// Initial watch sync timeout in seconds
pub fn sync_timeout_secs() -> Option<String> {
    non_empty("JW_SYNC_TIMEOUT_SECS")
}

/// Log filter directives: JW_LOG > RUST_LOG
pub fn log_filter() -> Option<String> {
    non_empty("JW_LOG").or_else(|| non_empty("RUST_LOG"))
}

/// Log output format: `text` or `json`
pub fn log_format() -> Option<String> {
    non_empty("JW_LOG_FORMAT")
}

fn non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|s| !s.trim().is_empty())
}
