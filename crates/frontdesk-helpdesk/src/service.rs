// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Escalation policy core.
//!
//! [`HelpdeskService`] owns the two decisions at the heart of the workflow:
//! whether an incoming question is already answerable from the knowledge
//! base, and what happens when a supervisor answers a pending request. All
//! persistence goes through the repository traits; all notification is
//! spawned off the request path and never fails the triggering operation.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use frontdesk_config::model::HelpdeskConfig;
use frontdesk_core::{
    FrontdeskError, HelpRequest, HelpRequestRepository, KnowledgeEntry, KnowledgeRepository,
    Notifier,
};

/// Outcome of taking in a caller question.
#[derive(Debug, Clone)]
pub enum Intake {
    /// The exact question was answered before; no request is created.
    Known { answer: String },
    /// A new pending request was escalated to the supervisor.
    Escalated { request: HelpRequest },
}

/// Coordinates the escalation lifecycle between storage and notifications.
pub struct HelpdeskService {
    requests: Arc<dyn HelpRequestRepository>,
    knowledge: Arc<dyn KnowledgeRepository>,
    notifier: Arc<dyn Notifier>,
    config: HelpdeskConfig,
}

impl HelpdeskService {
    pub fn new(
        requests: Arc<dyn HelpRequestRepository>,
        knowledge: Arc<dyn KnowledgeRepository>,
        notifier: Arc<dyn Notifier>,
        config: HelpdeskConfig,
    ) -> Self {
        Self {
            requests,
            knowledge,
            notifier,
            config,
        }
    }

    /// Answer from the knowledge base when the exact question was learned
    /// before; otherwise create a pending request and alert the supervisor.
    ///
    /// The known path touches only the knowledge table: no request row is
    /// created and no notification goes out. The supervisor alert on the
    /// escalated path is fire-and-forget.
    pub async fn lookup_or_create_request(
        &self,
        caller_id: &str,
        question: &str,
    ) -> Result<Intake, FrontdeskError> {
        if let Some(entry) = self.knowledge.get_by_question(question).await? {
            debug!(question, "answered from knowledge base");
            return Ok(Intake::Known {
                answer: entry.answer,
            });
        }

        let request = self.requests.create(caller_id, question).await?;
        info!(request_id = %request.id, caller_id, "question escalated to supervisor");

        let notifier = Arc::clone(&self.notifier);
        let for_notify = request.clone();
        tokio::spawn(async move {
            let outcome = notifier.notify_supervisor(&for_notify).await;
            debug!(request_id = %for_notify.id, ?outcome, "supervisor notification finished");
        });

        Ok(Intake::Escalated { request })
    }

    /// Record the supervisor's answer: resolve the request, learn the answer
    /// for future callers, and follow up with the caller.
    ///
    /// Resolution is the source of truth and is never rolled back. If the
    /// knowledge upsert fails it is retried once; a second failure leaves the
    /// store resolved-but-unlearned, which is logged loudly and surfaced as a
    /// retryable storage error.
    pub async fn resolve_request_and_learn(
        &self,
        id: &str,
        answer: &str,
    ) -> Result<HelpRequest, FrontdeskError> {
        let resolved = self.requests.resolve(id, answer).await?;
        info!(request_id = %resolved.id, "request resolved by supervisor");

        if let Err(first) = self.learn(&resolved.question, answer).await {
            warn!(request_id = %resolved.id, error = %first, "knowledge upsert failed, retrying");
            if let Err(second) = self.learn(&resolved.question, answer).await {
                error!(
                    request_id = %resolved.id,
                    error = %second,
                    "request resolved but answer not learned; knowledge base is behind"
                );
                return Err(second);
            }
        }

        let notifier = Arc::clone(&self.notifier);
        let caller_id = resolved.caller_id.clone();
        let answer = answer.to_string();
        let request_id = resolved.id.clone();
        tokio::spawn(async move {
            let outcome = notifier.notify_caller(&caller_id, &answer, &request_id).await;
            debug!(request_id, ?outcome, "caller follow-up finished");
        });

        Ok(resolved)
    }

    async fn learn(&self, question: &str, answer: &str) -> Result<KnowledgeEntry, FrontdeskError> {
        self.knowledge.upsert_exact(question, answer).await
    }

    /// Transition pending requests older than the configured window to
    /// unresolved. Returns how many were swept.
    pub async fn sweep_timeouts(&self) -> Result<u64, FrontdeskError> {
        let window = Duration::from_secs(self.config.request_timeout_secs);
        let count = self.requests.mark_timeouts(window).await?;
        if count > 0 {
            info!(count, "pending requests timed out");
        }
        Ok(count)
    }

    /// Interval between background sweeps, from the lifecycle config.
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.config.sweep_interval_secs)
    }
}
