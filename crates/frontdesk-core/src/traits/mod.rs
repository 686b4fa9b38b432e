// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for Frontdesk components.

pub mod adapter;
pub mod classify;
pub mod notify;
pub mod storage;

pub use adapter::PluginAdapter;
pub use classify::QuestionClassifier;
pub use notify::{Notifier, NotifyOutcome};
pub use storage::{HelpRequestRepository, KnowledgeRepository, StorageAdapter};
