// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Help request CRUD and lifecycle operations.

use std::time::Duration;

use chrono::Utc;
use frontdesk_core::FrontdeskError;
use rusqlite::params;

use crate::database::Database;
use crate::models::{self, HelpRequest, RequestStatus};

/// Outcome of the compare-and-set inside [`resolve`], computed in the
/// write-thread closure and mapped to domain errors on the async side.
enum ResolveProbe {
    Updated(HelpRequest),
    Terminal(RequestStatus),
    Missing,
}

/// Insert a new help request.
pub async fn create(db: &Database, request: &HelpRequest) -> Result<(), FrontdeskError> {
    let request = request.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO help_requests
                     (id, caller_id, question, status, answer, created_at, updated_at, resolved_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    request.id,
                    request.caller_id,
                    request.question,
                    request.status.to_string(),
                    request.answer,
                    request.created_at,
                    request.updated_at,
                    request.resolved_at,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Get a help request by ID.
pub async fn get(db: &Database, id: &str) -> Result<Option<HelpRequest>, FrontdeskError> {
    let id = id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {} FROM help_requests WHERE id = ?1",
                models::HELP_REQUEST_COLUMNS
            ))?;
            let result = stmt.query_row(params![id], models::request_from_row);
            match result {
                Ok(request) => Ok(Some(request)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// List help requests newest-first, optionally filtered by status.
pub async fn list(
    db: &Database,
    status: Option<RequestStatus>,
) -> Result<Vec<HelpRequest>, FrontdeskError> {
    db.connection()
        .call(move |conn| {
            let mut requests = Vec::new();
            match status {
                Some(filter) => {
                    let mut stmt = conn.prepare(&format!(
                        "SELECT {} FROM help_requests
                         WHERE status = ?1 ORDER BY created_at DESC",
                        models::HELP_REQUEST_COLUMNS
                    ))?;
                    let rows =
                        stmt.query_map(params![filter.to_string()], models::request_from_row)?;
                    for row in rows {
                        requests.push(row?);
                    }
                }
                None => {
                    let mut stmt = conn.prepare(&format!(
                        "SELECT {} FROM help_requests ORDER BY created_at DESC",
                        models::HELP_REQUEST_COLUMNS
                    ))?;
                    let rows = stmt.query_map([], models::request_from_row)?;
                    for row in rows {
                        requests.push(row?);
                    }
                }
            }
            Ok(requests)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Resolve a pending request with the supervisor's answer.
///
/// The status transition is a compare-and-set: the UPDATE only matches rows
/// still in 'pending', so two concurrent resolutions cannot both win. Returns
/// the updated row, [`FrontdeskError::NotFound`] for unknown IDs, and
/// [`FrontdeskError::InvalidTransition`] when the request already reached a
/// terminal status.
pub async fn resolve(db: &Database, id: &str, answer: &str) -> Result<HelpRequest, FrontdeskError> {
    let id_owned = id.to_string();
    let answer = answer.to_string();
    let probe = db
        .connection()
        .call(move |conn| {
            let tx = conn.transaction()?;
            let changed = tx.execute(
                "UPDATE help_requests
                 SET status = 'resolved',
                     answer = ?1,
                     updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now'),
                     resolved_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
                 WHERE id = ?2 AND status = 'pending'",
                params![answer, id_owned],
            )?;

            if changed == 0 {
                let result = tx.query_row(
                    "SELECT status FROM help_requests WHERE id = ?1",
                    params![id_owned],
                    |row| models::parse_status(0, row.get(0)?),
                );
                tx.commit()?;
                return match result {
                    Ok(status) => Ok(ResolveProbe::Terminal(status)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(ResolveProbe::Missing),
                    Err(e) => Err(e.into()),
                };
            }

            let request = tx.query_row(
                &format!(
                    "SELECT {} FROM help_requests WHERE id = ?1",
                    models::HELP_REQUEST_COLUMNS
                ),
                params![id_owned],
                models::request_from_row,
            )?;
            tx.commit()?;
            Ok(ResolveProbe::Updated(request))
        })
        .await
        .map_err(crate::database::map_tr_err)?;

    match probe {
        ResolveProbe::Updated(request) => Ok(request),
        ResolveProbe::Terminal(status) => Err(FrontdeskError::InvalidTransition {
            id: id.to_string(),
            status,
        }),
        ResolveProbe::Missing => Err(FrontdeskError::NotFound {
            entity: "help_request",
            id: id.to_string(),
        }),
    }
}

/// Mark pending requests created before `now - older_than` as unresolved.
///
/// Returns the number of requests that timed out. Timestamps are ISO-8601 UTC
/// with fixed-width fields, so string comparison orders chronologically.
pub async fn mark_timeouts(db: &Database, older_than: Duration) -> Result<u64, FrontdeskError> {
    let window = chrono::Duration::from_std(older_than)
        .map_err(|e| FrontdeskError::Internal(format!("timeout window out of range: {e}")))?;
    let cutoff = (Utc::now() - window)
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string();

    db.connection()
        .call(move |conn| {
            let changed = conn.execute(
                "UPDATE help_requests
                 SET status = 'unresolved',
                     updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
                 WHERE status = 'pending' AND created_at < ?1",
                params![cutoff],
            )?;
            Ok(changed as u64)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap(), true).await.unwrap();
        (db, dir)
    }

    fn make_request(id: &str) -> HelpRequest {
        HelpRequest {
            id: id.to_string(),
            caller_id: "caller-1".to_string(),
            question: "Do you offer gluten-free options?".to_string(),
            status: RequestStatus::Pending,
            answer: None,
            created_at: "2026-01-01T00:00:00.000Z".to_string(),
            updated_at: "2026-01-01T00:00:00.000Z".to_string(),
            resolved_at: None,
        }
    }

    #[tokio::test]
    async fn create_and_get_roundtrips() {
        let (db, _dir) = setup_db().await;
        let request = make_request("req-1");

        create(&db, &request).await.unwrap();
        let retrieved = get(&db, "req-1").await.unwrap().unwrap();
        assert_eq!(retrieved.id, "req-1");
        assert_eq!(retrieved.caller_id, "caller-1");
        assert_eq!(retrieved.status, RequestStatus::Pending);
        assert_eq!(retrieved.answer, None);
        assert_eq!(retrieved.resolved_at, None);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn get_nonexistent_returns_none() {
        let (db, _dir) = setup_db().await;
        assert!(get(&db, "no-such-request").await.unwrap().is_none());
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn list_filters_by_status_newest_first() {
        let (db, _dir) = setup_db().await;
        let r1 = make_request("r1");
        let mut r2 = make_request("r2");
        r2.created_at = "2026-01-02T00:00:00.000Z".to_string();

        create(&db, &r1).await.unwrap();
        create(&db, &r2).await.unwrap();
        resolve(&db, "r1", "Yes, we do.").await.unwrap();

        let all = list(&db, None).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, "r2", "newest request should come first");

        let pending = list(&db, Some(RequestStatus::Pending)).await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, "r2");

        let resolved = list(&db, Some(RequestStatus::Resolved)).await.unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id, "r1");

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn resolve_sets_answer_and_timestamps() {
        let (db, _dir) = setup_db().await;
        create(&db, &make_request("r-res")).await.unwrap();

        let resolved = resolve(&db, "r-res", "We close at 9pm.").await.unwrap();
        assert_eq!(resolved.status, RequestStatus::Resolved);
        assert_eq!(resolved.answer.as_deref(), Some("We close at 9pm."));
        assert!(resolved.resolved_at.is_some());
        assert!(resolved.updated_at > resolved.created_at);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn resolve_unknown_id_is_not_found() {
        let (db, _dir) = setup_db().await;
        let err = resolve(&db, "missing", "answer").await.unwrap_err();
        assert!(matches!(err, FrontdeskError::NotFound { .. }), "{err:?}");
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn resolve_twice_is_invalid_transition() {
        let (db, _dir) = setup_db().await;
        create(&db, &make_request("r-twice")).await.unwrap();

        resolve(&db, "r-twice", "first answer").await.unwrap();
        let err = resolve(&db, "r-twice", "second answer").await.unwrap_err();
        assert!(
            matches!(
                err,
                FrontdeskError::InvalidTransition {
                    status: RequestStatus::Resolved,
                    ..
                }
            ),
            "{err:?}"
        );

        // The first answer must survive.
        let stored = get(&db, "r-twice").await.unwrap().unwrap();
        assert_eq!(stored.answer.as_deref(), Some("first answer"));

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn resolve_timed_out_request_is_invalid_transition() {
        let (db, _dir) = setup_db().await;
        create(&db, &make_request("r-late")).await.unwrap();

        // created_at is far in the past, so a zero-width window sweeps it.
        let swept = mark_timeouts(&db, Duration::ZERO).await.unwrap();
        assert_eq!(swept, 1);

        let err = resolve(&db, "r-late", "too late").await.unwrap_err();
        assert!(
            matches!(
                err,
                FrontdeskError::InvalidTransition {
                    status: RequestStatus::Unresolved,
                    ..
                }
            ),
            "{err:?}"
        );

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn mark_timeouts_only_sweeps_old_pending_requests() {
        let (db, _dir) = setup_db().await;

        // Old pending: swept. Fresh pending: kept. Old resolved: untouched.
        create(&db, &make_request("old-pending")).await.unwrap();
        let mut fresh = make_request("fresh-pending");
        fresh.created_at = frontdesk_core::types::utc_now_millis();
        create(&db, &fresh).await.unwrap();
        create(&db, &make_request("old-resolved")).await.unwrap();
        resolve(&db, "old-resolved", "answered in time").await.unwrap();

        let swept = mark_timeouts(&db, Duration::from_secs(3600)).await.unwrap();
        assert_eq!(swept, 1);

        let old = get(&db, "old-pending").await.unwrap().unwrap();
        assert_eq!(old.status, RequestStatus::Unresolved);
        assert_eq!(old.resolved_at, None);

        let fresh = get(&db, "fresh-pending").await.unwrap().unwrap();
        assert_eq!(fresh.status, RequestStatus::Pending);

        let resolved = get(&db, "old-resolved").await.unwrap().unwrap();
        assert_eq!(resolved.status, RequestStatus::Resolved);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn mark_timeouts_respects_the_window_boundary() {
        let (db, _dir) = setup_db().await;
        let mut request = make_request("boundary");
        request.created_at = (Utc::now() - chrono::Duration::seconds(10))
            .format("%Y-%m-%dT%H:%M:%S%.3fZ")
            .to_string();
        create(&db, &request).await.unwrap();

        // 10s old: a 60s window keeps it, a 5s window sweeps it.
        assert_eq!(mark_timeouts(&db, Duration::from_secs(60)).await.unwrap(), 0);
        assert_eq!(mark_timeouts(&db, Duration::from_secs(5)).await.unwrap(), 1);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn mark_timeouts_is_idempotent() {
        let (db, _dir) = setup_db().await;
        create(&db, &make_request("sweep-once")).await.unwrap();

        assert_eq!(mark_timeouts(&db, Duration::ZERO).await.unwrap(), 1);
        assert_eq!(mark_timeouts(&db, Duration::ZERO).await.unwrap(), 0);

        db.close().await.unwrap();
    }
}
