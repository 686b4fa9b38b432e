// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the Frontdesk helpdesk backend.
//!
//! Binds the escalation workflow to a REST surface: request intake, the
//! supervisor respond endpoint, manual timeout sweeps, and knowledge-base
//! listing, with optional bearer-token auth.

pub mod auth;
pub mod handlers;
pub mod server;

pub use server::{GatewayState, router, start_server};
