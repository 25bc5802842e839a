// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use jw_core::{NotifierKind, NotifyTarget};
use serde::Deserialize;
use thiserror::Error;

/// Slack Web API method used to post messages.
pub const SLACK_POST_MESSAGE_URL: &str = "https://slack.com/api/chat.postMessage";

/// Errors from notify operations
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("send failed: {0}")]
    SendFailed(String),
}

/// Adapter for sending notifications
#[async_trait]
pub trait NotifyAdapter: Clone + Send + Sync + 'static {
    /// Send a notification with a subject and message body to every receiver of `target`
    async fn notify(&self, target: &NotifyTarget, subject: &str, body: &str)
        -> Result<(), NotifyError>;
}

/// JSON body for a Slack `chat.postMessage` call.
pub fn slack_payload(channel: &str, subject: &str, body: &str) -> serde_json::Value {
    serde_json::json!({ "channel": channel, "text": format!("{}\n{}", subject, body) })
}

/// JSON body posted to webhook receivers.
pub fn webhook_payload(subject: &str, body: &str) -> serde_json::Value {
    serde_json::json!({ "subject": subject, "message": body })
}

#[derive(Debug, Deserialize)]
struct SlackResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Notification adapter posting to Slack channels and plain HTTP webhooks.
///
/// Every receiver is attempted once; failures are collected into a single
/// error. Nothing is retried.
#[derive(Clone)]
pub struct HttpNotifyAdapter {
    client: reqwest::Client,
    slack_token: Option<String>,
    slack_url: String,
}

impl HttpNotifyAdapter {
    pub fn new(slack_token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            slack_token: slack_token.filter(|t| !t.is_empty()),
            slack_url: SLACK_POST_MESSAGE_URL.to_string(),
        }
    }

    /// Post Slack messages to another `chat.postMessage`-compatible endpoint.
    pub fn with_slack_url(mut self, url: impl Into<String>) -> Self {
        self.slack_url = url.into();
        self
    }

    async fn post_slack(
        &self,
        token: &str,
        channel: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), String> {
        let resp = self
            .client
            .post(&self.slack_url)
            .bearer_auth(token)
            .json(&slack_payload(channel, subject, body))
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?;
        let parsed: SlackResponse = resp.json().await.map_err(|e| e.to_string())?;
        if parsed.ok {
            Ok(())
        } else {
            Err(parsed.error.unwrap_or_else(|| "unknown slack error".to_string()))
        }
    }

    async fn post_webhook(&self, url: &str, subject: &str, body: &str) -> Result<(), String> {
        self.client
            .post(url)
            .json(&webhook_payload(subject, body))
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?;
        Ok(())
    }
}

#[async_trait]
impl NotifyAdapter for HttpNotifyAdapter {
    async fn notify(
        &self,
        target: &NotifyTarget,
        subject: &str,
        body: &str,
    ) -> Result<(), NotifyError> {
        let mut failures = Vec::new();
        match target.kind {
            NotifierKind::Slack => {
                let Some(token) = self.slack_token.as_deref() else {
                    return Err(NotifyError::SendFailed("slack API token is not configured".into()));
                };
                for channel in &target.receivers {
                    tracing::debug!(%channel, "posting slack message");
                    if let Err(e) = self.post_slack(token, channel, subject, body).await {
                        failures.push(format!("{}: {}", channel, e));
                    }
                }
            }
            NotifierKind::Webhook => {
                for url in &target.receivers {
                    tracing::debug!(%url, "posting webhook");
                    if let Err(e) = self.post_webhook(url, subject, body).await {
                        failures.push(format!("{}: {}", url, e));
                    }
                }
            }
        }

        if failures.is_empty() {
            tracing::info!(
                kind = %target.kind,
                receivers = target.receivers.len(),
                %subject,
                "notification sent"
            );
            Ok(())
        } else {
            Err(NotifyError::SendFailed(failures.join("; ")))
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{NotifyAdapter, NotifyError};
    use async_trait::async_trait;
    use jw_core::NotifyTarget;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Recorded notification
    #[derive(Debug, Clone)]
    pub struct NotifyCall {
        pub target: NotifyTarget,
        pub subject: String,
        pub body: String,
    }

    struct FakeNotifyState {
        calls: Vec<NotifyCall>,
        fail_with: Option<String>,
    }

    /// Fake notification adapter for testing
    #[derive(Clone)]
    pub struct FakeNotifyAdapter {
        inner: Arc<Mutex<FakeNotifyState>>,
    }

    impl Default for FakeNotifyAdapter {
        fn default() -> Self {
            let state = FakeNotifyState { calls: Vec::new(), fail_with: None };
            Self { inner: Arc::new(Mutex::new(state)) }
        }
    }

    impl FakeNotifyAdapter {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make every subsequent send fail (the call is still recorded).
        pub fn fail_with(&self, message: &str) {
            self.inner.lock().fail_with = Some(message.to_string());
        }

        /// Get all recorded notifications
        pub fn calls(&self) -> Vec<NotifyCall> {
            self.inner.lock().calls.clone()
        }
    }

    #[async_trait]
    impl NotifyAdapter for FakeNotifyAdapter {
        async fn notify(
            &self,
            target: &NotifyTarget,
            subject: &str,
            body: &str,
        ) -> Result<(), NotifyError> {
            let mut state = self.inner.lock();
            state.calls.push(NotifyCall {
                target: target.clone(),
                subject: subject.to_string(),
                body: body.to_string(),
            });
            match &state.fail_with {
                Some(message) => Err(NotifyError::SendFailed(message.clone())),
                None => Ok(()),
            }
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeNotifyAdapter, NotifyCall};

#[cfg(test)]
#[path = "notify_tests.rs"]
mod tests;
