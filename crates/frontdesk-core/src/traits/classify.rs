// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pluggable question classifier interface.
//!
//! Decides whether a caller utterance is a real service question worth
//! escalating, as opposed to a greeting or an audio check. The heuristic is
//! deliberately not part of the escalation core; implementations can be
//! swapped without touching the lifecycle or API contracts.

/// Classifies caller questions to avoid unnecessary escalations.
pub trait QuestionClassifier: Send + Sync {
    /// Returns `true` when the question is a service question that may need
    /// escalation, `false` for technical or conversational chatter.
    fn is_service_question(&self, question: &str) -> bool;
}
