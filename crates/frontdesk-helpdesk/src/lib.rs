// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Escalation policy core for the Frontdesk helpdesk backend.
//!
//! Coordinates the help-request lifecycle between storage, notifications,
//! and the caller-facing tool surface: knowledge-base lookups, supervisor
//! escalation, resolve-and-learn, and background timeout sweeps.

pub mod classifier;
pub mod service;
pub mod sweeper;
pub mod tools;

pub use classifier::KeywordClassifier;
pub use service::{HelpdeskService, Intake};
pub use sweeper::TimeoutSweeper;
pub use tools::{ReceptionToolkit, ToolName};
