// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notification transports for the Frontdesk helpdesk backend.

pub mod webhook;

pub use webhook::WebhookNotifier;
