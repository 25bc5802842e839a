// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jw-engine: correlation, message composition and the update pipeline
//!
//! Every component holds its cluster handle by `Arc` and is otherwise
//! stateless, so one pipeline can serve concurrent watch streams.

pub mod compose;
pub mod correlate;
pub mod output;
pub mod pipeline;
pub mod preemptor;

pub use compose::{composer, Composer, MarkdownComposer, NotificationComposer, PlainComposer};
pub use correlate::{CorrelateError, Correlator};
pub use output::{OutputCollector, OutputError};
pub use pipeline::{Outcome, Pipeline, PipelineError};
pub use preemptor::{PreemptorError, PreemptorResolver};
