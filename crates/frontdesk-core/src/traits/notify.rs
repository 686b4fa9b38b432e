// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notification gateway trait for supervisor alerts and caller follow-ups.
//!
//! Notification is fire-and-forget: delivery failure must never block or
//! fail the request-creation or request-resolution operation that triggered
//! it. Instead of an implicit swallow, every call returns a [`NotifyOutcome`]
//! the caller may log.

use async_trait::async_trait;

use crate::types::HelpRequest;

/// How a notification attempt concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// Delivered to the configured external channel.
    Delivered,
    /// External delivery unavailable or failed; recorded on the local
    /// console channel instead.
    Fallback,
    /// Delivery failed and the fallback channel is disabled; the
    /// notification was dropped.
    Dropped,
}

/// Delivers supervisor alerts and caller follow-ups over a pluggable
/// transport (webhook or console fallback).
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Alert the supervisor that a new pending help request needs an answer.
    async fn notify_supervisor(&self, request: &HelpRequest) -> NotifyOutcome;

    /// Deliver a resolution back to the caller, best-effort.
    async fn notify_caller(&self, caller_id: &str, answer: &str, request_id: &str)
        -> NotifyOutcome;
}
