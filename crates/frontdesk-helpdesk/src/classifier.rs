// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword heuristic for separating service questions from chatter.
//!
//! Voice sessions produce a lot of non-questions: audio checks, greetings,
//! one-word acknowledgements. Escalating those would page a supervisor for
//! nothing, so the toolkit gates escalation behind this classifier. The
//! heuristic errs toward escalation: when unsure, a question is treated as a
//! service question.

use frontdesk_core::QuestionClassifier;

/// Utterances that are audio or connection checks, never service questions.
const TECHNICAL_PHRASES: &[&str] = &[
    "can you hear me",
    "hello",
    "hi",
    "are you there",
    "testing",
    "test test",
    "mic check",
    "microphone",
    "audio",
    "can you understand me",
    "do you copy",
    "one two three",
    "testing testing",
];

/// Utterances that are pure conversation openers or closers.
const CONVERSATIONAL_PHRASES: &[&str] = &[
    "how are you",
    "what's up",
    "good morning",
    "good afternoon",
    "good evening",
    "goodbye",
    "bye",
    "see you",
    "thanks",
    "thank you",
    "okay",
    "ok",
    "alright",
    "sure",
    "yes",
    "no",
    "maybe",
];

/// Words that strongly indicate a question about the business itself.
const SERVICE_INDICATORS: &[&str] = &[
    "do you offer",
    "how much",
    "what is the price",
    "what services",
    "appointment",
    "booking",
    "schedule",
    "available",
    "hours",
    "open",
    "closed",
    "location",
    "address",
    "phone",
    "contact",
    "cost",
    "price",
    "expensive",
    "cheap",
    "discount",
    "special",
    "package",
    "treatment",
    "procedure",
    "facial",
    "massage",
    "wax",
    "nail",
    "hair",
    "skin",
    "makeup",
    "spa",
    "salon",
    "botox",
    "filler",
    "laser",
    "microblading",
    "tattoo",
    "piercing",
];

/// Default keyword-list classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl QuestionClassifier for KeywordClassifier {
    fn is_service_question(&self, question: &str) -> bool {
        let lower = question.to_lowercase();
        let lower = lower.trim();

        if TECHNICAL_PHRASES.iter().any(|p| lower.contains(p)) {
            return false;
        }

        if CONVERSATIONAL_PHRASES
            .iter()
            .any(|p| lower == *p || lower.starts_with(p))
        {
            return false;
        }

        // Very short utterances without a question mark are not real questions.
        let word_count = lower.split_whitespace().count();
        if word_count < 3 && !question.contains('?') {
            return false;
        }

        if SERVICE_INDICATORS.iter().any(|p| lower.contains(p)) {
            return true;
        }

        if question.contains('?') && word_count > 3 {
            return true;
        }

        // Unsure: better to escalate than to miss a real question.
        true
    }
}

impl KeywordClassifier {
    /// Friendly canned reply for utterances the classifier rejects.
    pub fn standard_response(question: &str) -> String {
        let lower = question.to_lowercase();
        let lower = lower.trim();

        if ["can you hear", "are you there", "hello", "testing"]
            .iter()
            .any(|p| lower.contains(p))
        {
            return "Yes, I can hear you perfectly! How can I help you today?".to_string();
        }

        if ["good morning", "good afternoon", "good evening"]
            .iter()
            .any(|p| lower.contains(p))
        {
            return "Good day! How can I assist you?".to_string();
        }

        if lower.contains("thank") {
            return "You're very welcome! Is there anything else I can help you with today?"
                .to_string();
        }

        if ["goodbye", "bye", "see you"].iter().any(|p| lower.contains(p)) {
            return "Thank you for calling! Have a wonderful day!".to_string();
        }

        "I'm here to help! What would you like to know?".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_utterances() {
        let c = KeywordClassifier;
        let cases: &[(&str, bool)] = &[
            ("Can you hear me?", false),
            ("Hello, are you there?", false),
            ("Testing testing one two three", false),
            ("Do you offer microblading?", true),
            ("What are your hours?", true),
            ("How much does a facial cost?", true),
            ("Thanks", false),
            ("Can I book an appointment for tomorrow?", true),
            ("Hi", false),
            ("What services do you provide?", true),
        ];
        for (question, expected) in cases {
            assert_eq!(
                c.is_service_question(question),
                *expected,
                "misclassified: {question:?}"
            );
        }
    }

    #[test]
    fn ambiguous_long_questions_escalate() {
        let c = KeywordClassifier;
        assert!(c.is_service_question("Is the owner certified in dermaplaning techniques?"));
    }

    #[test]
    fn short_non_questions_do_not_escalate() {
        let c = KeywordClassifier;
        assert!(!c.is_service_question("umm so"));
    }

    #[test]
    fn standard_responses_match_category() {
        assert!(KeywordClassifier::standard_response("Can you hear me?").contains("hear you"));
        assert!(KeywordClassifier::standard_response("Good morning!").contains("Good day"));
        assert!(KeywordClassifier::standard_response("thanks a lot").contains("welcome"));
        assert!(KeywordClassifier::standard_response("bye now").contains("Thank you for calling"));
    }
}
