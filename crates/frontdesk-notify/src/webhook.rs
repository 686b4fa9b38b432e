// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Webhook notification transport with console fallback.
//!
//! Supervisor alerts and caller follow-ups are POSTed as JSON to the
//! configured webhook URLs. When a URL is unset or delivery fails, the
//! notification is recorded on the console channel (structured log lines)
//! instead, so escalations remain visible in a bare deployment with no
//! webhook infrastructure.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tracing::{info, warn};

use frontdesk_config::model::NotifyConfig;
use frontdesk_core::{
    AdapterType, FrontdeskError, HealthStatus, HelpRequest, Notifier, NotifyOutcome, PluginAdapter,
};

/// Notifier that delivers over HTTP webhooks, falling back to the console.
pub struct WebhookNotifier {
    config: NotifyConfig,
    client: reqwest::Client,
}

impl WebhookNotifier {
    /// Build a notifier with a per-attempt delivery timeout from the config.
    pub fn new(config: NotifyConfig) -> Result<Self, FrontdeskError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.webhook_timeout_secs))
            .build()
            .map_err(|e| FrontdeskError::Notify {
                message: "failed to build webhook client".to_string(),
                source: Some(Box::new(e)),
            })?;
        Ok(Self { config, client })
    }

    /// POST a JSON payload to `url`, treating non-2xx statuses as failures.
    async fn post(&self, url: &str, payload: &serde_json::Value) -> Result<(), FrontdeskError> {
        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| FrontdeskError::Notify {
                message: format!("webhook POST to {url} failed"),
                source: Some(Box::new(e)),
            })?;
        response
            .error_for_status()
            .map_err(|e| FrontdeskError::Notify {
                message: format!("webhook POST to {url} returned error status"),
                source: Some(Box::new(e)),
            })?;
        Ok(())
    }

    /// Route a failed or unconfigured delivery to the console channel.
    fn fallback(&self, channel: &str, detail: &str) -> NotifyOutcome {
        if self.config.console_fallback {
            info!(channel, "{detail}");
            NotifyOutcome::Fallback
        } else {
            warn!(channel, "notification dropped: {detail}");
            NotifyOutcome::Dropped
        }
    }
}

#[async_trait]
impl PluginAdapter for WebhookNotifier {
    fn name(&self) -> &str {
        "webhook"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Notify
    }

    async fn health_check(&self) -> Result<HealthStatus, FrontdeskError> {
        // No probe request: an idle webhook endpoint may rate-limit or treat
        // empty POSTs as alerts. Degraded simply flags console-only mode.
        if self.config.supervisor_webhook_url.is_none() && self.config.caller_webhook_url.is_none()
        {
            return Ok(HealthStatus::Degraded(
                "no webhook URLs configured; console channel only".to_string(),
            ));
        }
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), FrontdeskError> {
        Ok(())
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify_supervisor(&self, request: &HelpRequest) -> NotifyOutcome {
        let payload = json!({
            "type": "help_request",
            "request_id": request.id,
            "caller_id": request.caller_id,
            "question": request.question,
        });

        match &self.config.supervisor_webhook_url {
            Some(url) => match self.post(url, &payload).await {
                Ok(()) => {
                    info!(request_id = %request.id, "supervisor alerted via webhook");
                    NotifyOutcome::Delivered
                }
                Err(e) => {
                    warn!(request_id = %request.id, error = %e, "supervisor webhook failed");
                    self.fallback(
                        "supervisor",
                        &format!(
                            "help needed for caller {}: {:?}",
                            request.caller_id, request.question
                        ),
                    )
                }
            },
            None => self.fallback(
                "supervisor",
                &format!(
                    "help needed for caller {}: {:?}",
                    request.caller_id, request.question
                ),
            ),
        }
    }

    async fn notify_caller(
        &self,
        caller_id: &str,
        answer: &str,
        request_id: &str,
    ) -> NotifyOutcome {
        let payload = json!({
            "type": "caller_followup",
            "request_id": request_id,
            "caller_id": caller_id,
            "answer": answer,
        });

        match &self.config.caller_webhook_url {
            Some(url) => match self.post(url, &payload).await {
                Ok(()) => {
                    info!(request_id, caller_id, "caller follow-up delivered via webhook");
                    NotifyOutcome::Delivered
                }
                Err(e) => {
                    warn!(request_id, caller_id, error = %e, "caller webhook failed");
                    self.fallback("caller", &format!("follow-up for {caller_id}: {answer:?}"))
                }
            },
            None => self.fallback("caller", &format!("follow-up for {caller_id}: {answer:?}")),
        }
    }
}
