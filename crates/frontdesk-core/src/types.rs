// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the Frontdesk workspace.
//!
//! Timestamps are stored as ISO-8601 millisecond UTC strings
//! (`2026-01-01T00:00:00.000Z`). Lexicographic order on this format is
//! chronological order, which the storage layer relies on for cutoff
//! comparisons and newest-first listings.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Lifecycle state of a [`HelpRequest`].
///
/// `Resolved` and `Unresolved` are terminal: once a request reaches either,
/// no further transitions are permitted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Resolved,
    Unresolved,
}

impl RequestStatus {
    /// Whether this status permits no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestStatus::Resolved | RequestStatus::Unresolved)
    }
}

/// An escalated caller question awaiting (or past) a supervisor answer.
///
/// Invariant: `answer` and `resolved_at` are both `None` iff
/// `status != Resolved`. Rows are never deleted; terminal requests remain as
/// an audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpRequest {
    pub id: String,
    pub caller_id: String,
    pub question: String,
    pub status: RequestStatus,
    pub answer: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub resolved_at: Option<String>,
}

impl HelpRequest {
    /// Build a new pending request with fresh timestamps.
    pub fn new_pending(caller_id: &str, question: &str) -> Self {
        let now = utc_now_millis();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            caller_id: caller_id.to_string(),
            question: question.to_string(),
            status: RequestStatus::Pending,
            answer: None,
            created_at: now.clone(),
            updated_at: now,
            resolved_at: None,
        }
    }
}

/// A learned answer keyed by the exact question string.
///
/// At most one entry exists per exact question; upserting a repeated question
/// overwrites the answer and refreshes `created_at` (latest learning time).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub created_at: String,
}

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}

/// Identifies the type of adapter in the Frontdesk plugin surface.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum AdapterType {
    Storage,
    Notify,
    Gateway,
}

/// Current UTC time in the storage timestamp format.
pub fn utc_now_millis() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_round_trips_through_strings() {
        for status in [
            RequestStatus::Pending,
            RequestStatus::Resolved,
            RequestStatus::Unresolved,
        ] {
            let s = status.to_string();
            assert_eq!(RequestStatus::from_str(&s).unwrap(), status);
        }
        assert_eq!(RequestStatus::Pending.to_string(), "pending");
    }

    #[test]
    fn status_serde_uses_lowercase() {
        let json = serde_json::to_string(&RequestStatus::Unresolved).unwrap();
        assert_eq!(json, "\"unresolved\"");
        let parsed: RequestStatus = serde_json::from_str("\"resolved\"").unwrap();
        assert_eq!(parsed, RequestStatus::Resolved);
    }

    #[test]
    fn terminal_states() {
        assert!(!RequestStatus::Pending.is_terminal());
        assert!(RequestStatus::Resolved.is_terminal());
        assert!(RequestStatus::Unresolved.is_terminal());
    }

    #[test]
    fn new_pending_request_holds_invariants() {
        let req = HelpRequest::new_pending("c1", "Do you do microblading?");
        assert_eq!(req.status, RequestStatus::Pending);
        assert!(req.answer.is_none());
        assert!(req.resolved_at.is_none());
        assert_eq!(req.created_at, req.updated_at);
        assert!(!req.id.is_empty());
    }

    #[test]
    fn timestamp_format_sorts_chronologically() {
        let earlier = "2026-01-01T00:00:00.000Z";
        let later = "2026-01-01T00:00:01.000Z";
        assert!(earlier < later);

        let now = utc_now_millis();
        assert!(now.ends_with('Z'));
        assert_eq!(now.len(), "2026-01-01T00:00:00.000Z".len());
    }
}
