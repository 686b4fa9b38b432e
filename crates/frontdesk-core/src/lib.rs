// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Frontdesk helpdesk backend.
//!
//! This crate provides the foundational trait definitions, error types, and
//! domain types used throughout the Frontdesk workspace: the help-request
//! lifecycle, the knowledge base entities, and the adapter seams for storage
//! and notification transports.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::FrontdeskError;
pub use types::{AdapterType, HealthStatus, HelpRequest, KnowledgeEntry, RequestStatus};

pub use traits::{
    HelpRequestRepository, KnowledgeRepository, Notifier, NotifyOutcome, PluginAdapter,
    QuestionClassifier, StorageAdapter,
};
