// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    text = { "text", LogFormat::Text },
    json = { "json", LogFormat::Json },
    upper = { "JSON", LogFormat::Json },
    padded = { " text ", LogFormat::Text },
)]
fn parses_format(input: &str, expected: LogFormat) {
    assert_eq!(input.parse::<LogFormat>().unwrap(), expected);
}

#[test]
fn rejects_unknown_format() {
    assert!(matches!(
        "journald".parse::<LogFormat>(),
        Err(LoggingError::InvalidFormat(f)) if f == "journald"
    ));
}

#[test]
fn accepts_directive_filters() {
    let config = LogConfig { filter: "warn,jw_engine=debug".to_string(), format: LogFormat::Text };
    assert!(config.env_filter().is_ok());
}

#[test]
fn rejects_malformed_filter() {
    let config = LogConfig { filter: "jw_engine=loud".to_string(), format: LogFormat::Json };
    assert!(matches!(config.env_filter(), Err(LoggingError::InvalidFilter(_))));
}
