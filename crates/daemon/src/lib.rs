// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job watcher daemon library
//!
//! Configuration, logging setup and the watch streams feeding the update
//! pipeline. The `jwd` binary is a thin wrapper around [`lifecycle::run`].

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod env;
pub mod lifecycle;
pub mod logging;
pub mod watch;

pub use lifecycle::{Config, LifecycleError, WatchMode};
