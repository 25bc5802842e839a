// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notifier selection from managed-resource annotations.
//!
//! A job opts into notifications with a selector annotation naming the
//! transport plus a transport-specific, comma-separated receiver list.
//! Missing selector or empty receivers mean "not configured", not an error.

use std::collections::BTreeMap;
use std::fmt;

/// Transport selector annotation (`slack` or `webhook`).
pub const ANNOTATION_NOTIFY_CHANNEL: &str = "x-jobby.io/notify-channel";
/// Comma-separated Slack channel IDs.
pub const ANNOTATION_SLACK_CHANNEL_IDS: &str = "x-jobby.io/slack-channel-ids";
/// Comma-separated webhook URLs.
pub const ANNOTATION_WEBHOOK_URLS: &str = "x-jobby.io/webhook-urls";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotifierKind {
    Slack,
    Webhook,
}

/// Presentation style of a rendered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Plain,
    /// Slack-flavored markup: emoji, bold, code spans and fences
    Markdown,
}

impl NotifierKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "slack" => Some(NotifierKind::Slack),
            "webhook" => Some(NotifierKind::Webhook),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NotifierKind::Slack => "slack",
            NotifierKind::Webhook => "webhook",
        }
    }

    /// Annotation holding this transport's receivers.
    pub fn receivers_annotation(&self) -> &'static str {
        match self {
            NotifierKind::Slack => ANNOTATION_SLACK_CHANNEL_IDS,
            NotifierKind::Webhook => ANNOTATION_WEBHOOK_URLS,
        }
    }

    pub fn style(&self) -> Style {
        match self {
            NotifierKind::Slack => Style::Markdown,
            NotifierKind::Webhook => Style::Plain,
        }
    }
}

impl fmt::Display for NotifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a notification for a particular resource goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyTarget {
    pub kind: NotifierKind,
    /// Channel IDs or URLs, never empty
    pub receivers: Vec<String>,
}

impl NotifyTarget {
    /// Resolve the target from annotations, or `None` if notifications are
    /// not configured for this resource.
    pub fn from_annotations(annotations: &BTreeMap<String, String>) -> Option<Self> {
        let kind = NotifierKind::parse(annotations.get(ANNOTATION_NOTIFY_CHANNEL)?.trim())?;
        let receivers: Vec<String> = annotations
            .get(kind.receivers_annotation())
            .map(|raw| {
                raw.split(',').map(str::trim).filter(|r| !r.is_empty()).map(String::from).collect()
            })
            .unwrap_or_default();
        if receivers.is_empty() {
            return None;
        }
        Some(Self { kind, receivers })
    }

    pub fn style(&self) -> Style {
        self.kind.style()
    }
}

#[cfg(test)]
#[path = "notifier_tests.rs"]
mod tests;
