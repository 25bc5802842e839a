// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::test_support::WorkloadBuilder;

#[yare::parameterized(
    free_standing   = { "Preempted by UID: abc-123 in queue",                                        "abc-123" },
    end_of_message  = { "Preempted by UID: xyz-789",                                                 "xyz-789" },
    parenthesized   = { "Preempted to accommodate a workload (UID: 5f1c-88aa) in the ClusterQueue",  "5f1c-88aa" },
    first_uid_wins  = { "UID: first) then UID: second",                                              "first" },
    jobuid_suffix   = { "Preempted to accommodate a workload (UID: 5f1c-88aa, JobUID: 77de-11) due to prioritization in the ClusterQueue", "5f1c-88aa" },
)]
fn extracts_uid(message: &str, expected: &str) {
    assert_eq!(extract_preemptor_uid(message), Ok(expected));
}

#[yare::parameterized(
    no_token      = { "Preempted to accommodate a higher priority workload" },
    empty         = { "" },
    missing_value = { "Preempted by UID: " },
    lowercase     = { "uid: abc-123" },
)]
fn rejects_messages_without_uid(message: &str) {
    assert_eq!(
        extract_preemptor_uid(message),
        Err(PreemptError::UnparseableMessage(message.to_string()))
    );
}

#[test]
fn preemptor_uid_reads_preempted_condition() {
    let wl = WorkloadBuilder::new("victim").preempted("Preempted by UID: xyz-789", 3).build();
    assert_eq!(preemptor_uid(&wl), Ok("xyz-789"));
}

#[test]
fn preemptor_uid_requires_condition() {
    let wl = WorkloadBuilder::new("victim").admitted_condition(1).build();
    assert_eq!(preemptor_uid(&wl), Err(PreemptError::NoPreemptionCondition("victim".into())));
}
