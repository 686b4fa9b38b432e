// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage lifecycle and repository traits for the persistent store.
//!
//! Repositories never cache entities beyond a single operation: every call
//! re-reads from the store of record, so no component other than the store
//! holds long-lived mutable entity state.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::FrontdeskError;
use crate::traits::adapter::PluginAdapter;
use crate::types::{HelpRequest, KnowledgeEntry, RequestStatus};

/// Adapter for storage and persistence backends.
///
/// Storage adapters manage the lifecycle of database connections and provide
/// the foundation for the help-request and knowledge tables.
#[async_trait]
pub trait StorageAdapter: PluginAdapter {
    /// Initializes the storage backend (migrations, connection, etc.).
    async fn initialize(&self) -> Result<(), FrontdeskError>;

    /// Closes the storage backend, flushing pending writes.
    async fn close(&self) -> Result<(), FrontdeskError>;
}

/// Help request lifecycle operations.
///
/// State machine per request:
///
/// ```text
/// [none] --create--> pending --resolve--> resolved   (terminal)
///                        |
///                        +--mark_timeouts--> unresolved (terminal)
/// ```
#[async_trait]
pub trait HelpRequestRepository: Send + Sync {
    /// Create a new pending request. Never deduplicates against existing
    /// pending requests for the same question: each caller interaction
    /// produces its own row.
    async fn create(&self, caller_id: &str, question: &str) -> Result<HelpRequest, FrontdeskError>;

    /// Fetch a request by id.
    async fn get(&self, id: &str) -> Result<Option<HelpRequest>, FrontdeskError>;

    /// List requests newest-first, optionally filtered by status.
    async fn list(
        &self,
        status: Option<RequestStatus>,
    ) -> Result<Vec<HelpRequest>, FrontdeskError>;

    /// Transition a pending request to resolved, recording the answer.
    ///
    /// Guarded by a compare-and-set on status: fails with
    /// [`FrontdeskError::NotFound`] when no such request exists and
    /// [`FrontdeskError::InvalidTransition`] when the request is already
    /// terminal. Never silently overwrites an earlier answer.
    async fn resolve(&self, id: &str, answer: &str) -> Result<HelpRequest, FrontdeskError>;

    /// Transition every pending request older than `older_than` to
    /// unresolved. Idempotent: already-unresolved requests are never
    /// reselected. Returns the number of requests transitioned.
    async fn mark_timeouts(&self, older_than: Duration) -> Result<u64, FrontdeskError>;
}

/// Learned-answer table operations.
#[async_trait]
pub trait KnowledgeRepository: Send + Sync {
    /// Exact string match on the question key. No normalization is applied;
    /// callers own any normalization policy.
    async fn get_by_question(
        &self,
        question: &str,
    ) -> Result<Option<KnowledgeEntry>, FrontdeskError>;

    /// Insert a new entry, or overwrite the answer of an existing entry with
    /// the same exact question. `created_at` is refreshed on overwrite.
    async fn upsert_exact(
        &self,
        question: &str,
        answer: &str,
    ) -> Result<KnowledgeEntry, FrontdeskError>;

    /// All entries, newest-first.
    async fn list(&self) -> Result<Vec<KnowledgeEntry>, FrontdeskError>;

    /// Case-insensitive substring match against question OR answer text,
    /// newest-first. The looser lookup used by the assistant-facing
    /// "check learned answers" capability.
    async fn search(&self, query: &str) -> Result<Vec<KnowledgeEntry>, FrontdeskError>;
}
