// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Frontdesk helpdesk backend.

use thiserror::Error;

use crate::types::RequestStatus;

/// The primary error type used across all Frontdesk adapter traits and core operations.
#[derive(Debug, Error)]
pub enum FrontdeskError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Persistence-layer errors (database connection, query failure, migration).
    /// Retryable from the caller's perspective.
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An operation addressed an entity id that does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// An attempt to transition a help request out of a terminal state.
    #[error("request {id} is already {status}, no further transitions permitted")]
    InvalidTransition { id: String, status: RequestStatus },

    /// Notification delivery errors (webhook failure, timeout). Recovered
    /// locally by the notification gateway; never fails the triggering operation.
    #[error("notification error: {message}")]
    Notify {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl FrontdeskError {
    /// Whether retrying the failed operation may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, FrontdeskError::Storage { .. } | FrontdeskError::Notify { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_variants_render() {
        let not_found = FrontdeskError::NotFound {
            entity: "help request",
            id: "abc".into(),
        };
        assert_eq!(not_found.to_string(), "help request not found: abc");

        let invalid = FrontdeskError::InvalidTransition {
            id: "abc".into(),
            status: RequestStatus::Resolved,
        };
        assert!(invalid.to_string().contains("already resolved"));
    }

    #[test]
    fn storage_errors_are_retryable() {
        let storage = FrontdeskError::Storage {
            source: Box::new(std::io::Error::other("disk")),
        };
        assert!(storage.is_retryable());

        let terminal = FrontdeskError::InvalidTransition {
            id: "abc".into(),
            status: RequestStatus::Unresolved,
        };
        assert!(!terminal.is_retryable());
    }
}
