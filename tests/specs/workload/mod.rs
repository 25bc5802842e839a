// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod admission;
mod completion;
mod eviction;
mod failure;
