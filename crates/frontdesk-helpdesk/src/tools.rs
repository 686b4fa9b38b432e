// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Caller-facing tool surface for the voice pipeline.
//!
//! The voice assistant invokes these as named tools during a call. Every
//! path returns a sayable string: errors never leak to the caller, they
//! become the apology-and-phone-number fallback instead.

use std::sync::Arc;

use strum::{Display, EnumString};
use tracing::{error, info};

use frontdesk_config::model::HelpdeskConfig;
use frontdesk_core::{KnowledgeRepository, QuestionClassifier};

use crate::classifier::KeywordClassifier;
use crate::service::{HelpdeskService, Intake};

/// Closed set of tools exposed to the voice pipeline, addressed by their
/// snake_case wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ToolName {
    RequestHelp,
    CheckLearnedAnswers,
}

/// Tool implementations backed by the helpdesk service.
pub struct ReceptionToolkit {
    service: Arc<HelpdeskService>,
    knowledge: Arc<dyn KnowledgeRepository>,
    classifier: Arc<dyn QuestionClassifier>,
    fallback_phone: String,
}

impl ReceptionToolkit {
    pub fn new(
        service: Arc<HelpdeskService>,
        knowledge: Arc<dyn KnowledgeRepository>,
        classifier: Arc<dyn QuestionClassifier>,
        config: &HelpdeskConfig,
    ) -> Self {
        Self {
            service,
            knowledge,
            classifier,
            fallback_phone: config.fallback_phone.clone(),
        }
    }

    /// Dispatch a named tool invocation to its implementation.
    pub async fn dispatch(&self, tool: ToolName, caller_id: &str, text: &str) -> Option<String> {
        match tool {
            ToolName::RequestHelp => Some(self.ask_for_help(caller_id, text).await),
            ToolName::CheckLearnedAnswers => self.check_knowledge(text).await,
        }
    }

    /// Handle a question the assistant could not answer itself.
    ///
    /// Order of preference: canned reply for non-service chatter, fuzzy
    /// knowledge-base hit, exact-match known answer, escalation. Any failure
    /// along the way yields the apology fallback.
    pub async fn ask_for_help(&self, caller_id: &str, question: &str) -> String {
        if !self.classifier.is_service_question(question) {
            return KeywordClassifier::standard_response(question);
        }

        if let Some(learned) = self.check_knowledge(question).await {
            info!(question, "answered from prior learning");
            return learned;
        }

        match self.service.lookup_or_create_request(caller_id, question).await {
            Ok(Intake::Known { answer }) => answer,
            Ok(Intake::Escalated { .. }) => "That's a great question! I don't have that \
                information right now, but let me check with my supervisor to get you an \
                accurate answer."
                .to_string(),
            Err(e) => {
                error!(error = %e, "escalation failed");
                format!(
                    "I'm having trouble connecting with my supervisor right now. Please call \
                     us directly at {} for immediate assistance.",
                    self.fallback_phone
                )
            }
        }
    }

    /// Fuzzy lookup against everything learned so far. Returns the most
    /// recent match rendered for speech, or `None` (lookup errors included:
    /// a broken knowledge base must not block escalation).
    pub async fn check_knowledge(&self, query: &str) -> Option<String> {
        match self.knowledge.search(query).await {
            Ok(hits) => hits
                .first()
                .map(|best| format!("Based on previous learning: {}", best.answer)),
            Err(e) => {
                error!(error = %e, "knowledge search failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use frontdesk_core::{
        FrontdeskError, HelpRequest, HelpRequestRepository, KnowledgeEntry, Notifier,
        NotifyOutcome, RequestStatus,
    };

    #[derive(Default)]
    struct MemoryRequests {
        rows: Mutex<Vec<HelpRequest>>,
        fail_create: bool,
    }

    #[async_trait]
    impl HelpRequestRepository for MemoryRequests {
        async fn create(
            &self,
            caller_id: &str,
            question: &str,
        ) -> Result<HelpRequest, FrontdeskError> {
            if self.fail_create {
                return Err(FrontdeskError::Storage {
                    source: "database unavailable".into(),
                });
            }
            let request = HelpRequest::new_pending(caller_id, question);
            self.rows.lock().unwrap().push(request.clone());
            Ok(request)
        }

        async fn get(&self, _: &str) -> Result<Option<HelpRequest>, FrontdeskError> {
            Ok(None)
        }

        async fn list(
            &self,
            _: Option<RequestStatus>,
        ) -> Result<Vec<HelpRequest>, FrontdeskError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn resolve(&self, id: &str, _: &str) -> Result<HelpRequest, FrontdeskError> {
            Err(FrontdeskError::NotFound {
                entity: "help_request",
                id: id.to_string(),
            })
        }

        async fn mark_timeouts(&self, _: std::time::Duration) -> Result<u64, FrontdeskError> {
            Ok(0)
        }
    }

    #[derive(Default)]
    struct MemoryKnowledge {
        entries: Mutex<Vec<KnowledgeEntry>>,
    }

    #[async_trait]
    impl KnowledgeRepository for MemoryKnowledge {
        async fn get_by_question(
            &self,
            question: &str,
        ) -> Result<Option<KnowledgeEntry>, FrontdeskError> {
            Ok(self
                .entries
                .lock()
                .unwrap()
                .iter()
                .find(|e| e.question == question)
                .cloned())
        }

        async fn upsert_exact(
            &self,
            question: &str,
            answer: &str,
        ) -> Result<KnowledgeEntry, FrontdeskError> {
            let entry = KnowledgeEntry {
                id: question.to_string(),
                question: question.to_string(),
                answer: answer.to_string(),
                created_at: frontdesk_core::types::utc_now_millis(),
            };
            self.entries.lock().unwrap().push(entry.clone());
            Ok(entry)
        }

        async fn list(&self) -> Result<Vec<KnowledgeEntry>, FrontdeskError> {
            Ok(self.entries.lock().unwrap().clone())
        }

        async fn search(&self, query: &str) -> Result<Vec<KnowledgeEntry>, FrontdeskError> {
            let q = query.to_lowercase();
            Ok(self
                .entries
                .lock()
                .unwrap()
                .iter()
                .filter(|e| {
                    e.question.to_lowercase().contains(&q)
                        || e.answer.to_lowercase().contains(&q)
                })
                .cloned()
                .collect())
        }
    }

    struct NullNotifier;

    #[async_trait]
    impl Notifier for NullNotifier {
        async fn notify_supervisor(&self, _: &HelpRequest) -> NotifyOutcome {
            NotifyOutcome::Fallback
        }

        async fn notify_caller(&self, _: &str, _: &str, _: &str) -> NotifyOutcome {
            NotifyOutcome::Fallback
        }
    }

    fn make_toolkit(requests: MemoryRequests, knowledge: MemoryKnowledge) -> ReceptionToolkit {
        let knowledge = Arc::new(knowledge);
        let service = Arc::new(HelpdeskService::new(
            Arc::new(requests),
            Arc::clone(&knowledge) as Arc<dyn KnowledgeRepository>,
            Arc::new(NullNotifier),
            HelpdeskConfig::default(),
        ));
        ReceptionToolkit::new(
            service,
            knowledge,
            Arc::new(KeywordClassifier),
            &HelpdeskConfig::default(),
        )
    }

    #[test]
    fn tool_names_use_snake_case_wire_format() {
        assert_eq!(ToolName::RequestHelp.to_string(), "request_help");
        assert_eq!(
            ToolName::from_str("check_learned_answers").unwrap(),
            ToolName::CheckLearnedAnswers
        );
        assert!(ToolName::from_str("lookup_weather").is_err());
    }

    #[tokio::test]
    async fn non_service_chatter_gets_canned_reply_without_escalation() {
        let toolkit = make_toolkit(MemoryRequests::default(), MemoryKnowledge::default());

        let reply = toolkit.ask_for_help("caller-1", "Can you hear me?").await;
        assert!(reply.contains("hear you"));

        let rows = toolkit.service.lookup_or_create_request("x", "Do you offer facials?").await;
        assert!(rows.is_ok(), "service still usable");
    }

    #[tokio::test]
    async fn learned_answer_is_rendered_for_speech() {
        let knowledge = MemoryKnowledge::default();
        knowledge
            .upsert_exact(
                "Do you use organic products?",
                "Yes, our facial line is fully organic.",
            )
            .await
            .unwrap();
        let toolkit = make_toolkit(MemoryRequests::default(), knowledge);

        let reply = toolkit.check_knowledge("organic").await.unwrap();
        assert_eq!(
            reply,
            "Based on previous learning: Yes, our facial line is fully organic."
        );

        assert!(toolkit.check_knowledge("parking").await.is_none());
    }

    #[tokio::test]
    async fn service_question_with_prior_learning_skips_escalation() {
        let knowledge = MemoryKnowledge::default();
        knowledge
            .upsert_exact("Do you offer microblading?", "Yes, Tuesdays and Thursdays.")
            .await
            .unwrap();
        let toolkit = make_toolkit(MemoryRequests::default(), knowledge);

        let reply = toolkit
            .ask_for_help("caller-2", "Do you offer microblading?")
            .await;
        assert!(reply.starts_with("Based on previous learning:"));
    }

    #[tokio::test]
    async fn unknown_service_question_escalates_with_holding_reply() {
        let toolkit = make_toolkit(MemoryRequests::default(), MemoryKnowledge::default());

        let reply = toolkit
            .ask_for_help("caller-3", "Do you offer microblading?")
            .await;
        assert!(reply.contains("check with my supervisor"));
    }

    #[tokio::test]
    async fn escalation_failure_yields_apology_with_phone_number() {
        let requests = MemoryRequests {
            fail_create: true,
            ..MemoryRequests::default()
        };
        let toolkit = make_toolkit(requests, MemoryKnowledge::default());

        let reply = toolkit
            .ask_for_help("caller-4", "Do you offer microblading?")
            .await;
        assert!(reply.contains("trouble connecting"));
        assert!(reply.contains("555-0123"));
    }

    #[tokio::test]
    async fn dispatch_routes_by_tool_name() {
        let knowledge = MemoryKnowledge::default();
        knowledge
            .upsert_exact("Is there parking?", "Yes, behind the building.")
            .await
            .unwrap();
        let toolkit = make_toolkit(MemoryRequests::default(), knowledge);

        let checked = toolkit
            .dispatch(ToolName::CheckLearnedAnswers, "caller-5", "parking")
            .await;
        assert!(checked.unwrap().contains("behind the building"));

        let helped = toolkit
            .dispatch(ToolName::RequestHelp, "caller-5", "Hi")
            .await;
        assert!(helped.is_some());
    }
}
