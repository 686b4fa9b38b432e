// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Knowledge base operations: learned answers keyed by exact question text.

use frontdesk_core::FrontdeskError;
use rusqlite::params;

use crate::database::Database;
use crate::models::{self, KnowledgeEntry};

/// Look up a learned answer by exact question text.
pub async fn get_by_question(
    db: &Database,
    question: &str,
) -> Result<Option<KnowledgeEntry>, FrontdeskError> {
    let question = question.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {} FROM knowledge_entries WHERE question = ?1",
                models::KNOWLEDGE_COLUMNS
            ))?;
            let result = stmt.query_row(params![question], models::entry_from_row);
            match result {
                Ok(entry) => Ok(Some(entry)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Insert a learned answer, replacing any previous answer for the same
/// question text. The UNIQUE constraint on `question` makes this an upsert,
/// so re-learning never produces duplicate rows. Returns the stored row,
/// which keeps its original id when an existing entry is overwritten.
pub async fn upsert_exact(
    db: &Database,
    entry: &KnowledgeEntry,
) -> Result<KnowledgeEntry, FrontdeskError> {
    let entry = entry.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO knowledge_entries (id, question, answer, created_at)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(question) DO UPDATE SET
                     answer = excluded.answer,
                     created_at = excluded.created_at",
                params![entry.id, entry.question, entry.answer, entry.created_at],
            )?;
            let stored = conn.query_row(
                &format!(
                    "SELECT {} FROM knowledge_entries WHERE question = ?1",
                    models::KNOWLEDGE_COLUMNS
                ),
                params![entry.question],
                models::entry_from_row,
            )?;
            Ok(stored)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// List all learned answers, newest first.
pub async fn list(db: &Database) -> Result<Vec<KnowledgeEntry>, FrontdeskError> {
    db.connection()
        .call(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {} FROM knowledge_entries ORDER BY created_at DESC",
                models::KNOWLEDGE_COLUMNS
            ))?;
            let rows = stmt.query_map([], models::entry_from_row)?;
            let mut entries = Vec::new();
            for row in rows {
                entries.push(row?);
            }
            Ok(entries)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Substring search over question and answer text, newest first.
///
/// LIKE is case-insensitive for ASCII in SQLite, which is the looseness the
/// assistant-facing lookup wants.
pub async fn search(db: &Database, query: &str) -> Result<Vec<KnowledgeEntry>, FrontdeskError> {
    let pattern = format!("%{query}%");
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {} FROM knowledge_entries
                 WHERE question LIKE ?1 OR answer LIKE ?1
                 ORDER BY created_at DESC",
                models::KNOWLEDGE_COLUMNS
            ))?;
            let rows = stmt.query_map(params![pattern], models::entry_from_row)?;
            let mut entries = Vec::new();
            for row in rows {
                entries.push(row?);
            }
            Ok(entries)
        })
        .await
        .map_err(crate::database::map_tr_err)
}
