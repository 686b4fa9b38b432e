// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain model types for storage entities.
//!
//! The canonical types are defined in `frontdesk-core::types` for use across
//! adapter trait boundaries. This module re-exports them and provides the
//! row-mapping helpers shared by the query modules.

pub use frontdesk_core::types::{HelpRequest, KnowledgeEntry, RequestStatus};

/// Column order used by every `help_requests` SELECT.
pub(crate) const HELP_REQUEST_COLUMNS: &str =
    "id, caller_id, question, status, answer, created_at, updated_at, resolved_at";

/// Column order used by every `knowledge_entries` SELECT.
pub(crate) const KNOWLEDGE_COLUMNS: &str = "id, question, answer, created_at";

/// Map a `help_requests` row (in [`HELP_REQUEST_COLUMNS`] order).
pub(crate) fn request_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<HelpRequest> {
    Ok(HelpRequest {
        id: row.get(0)?,
        caller_id: row.get(1)?,
        question: row.get(2)?,
        status: parse_status(3, row.get(3)?)?,
        answer: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
        resolved_at: row.get(7)?,
    })
}

/// Map a `knowledge_entries` row (in [`KNOWLEDGE_COLUMNS`] order).
pub(crate) fn entry_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<KnowledgeEntry> {
    Ok(KnowledgeEntry {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
        created_at: row.get(3)?,
    })
}

/// Parse a stored status string, surfacing corrupt values as conversion errors.
pub(crate) fn parse_status(column: usize, raw: String) -> rusqlite::Result<RequestStatus> {
    raw.parse().map_err(|e: strum::ParseError| {
        rusqlite::Error::FromSqlConversionFailure(
            column,
            rusqlite::types::Type::Text,
            Box::new(e),
        )
    })
}
