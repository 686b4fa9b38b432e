// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the storage adapter and repository traits.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;

use frontdesk_config::model::StorageConfig;
use frontdesk_core::types::utc_now_millis;
use frontdesk_core::{
    AdapterType, FrontdeskError, HealthStatus, HelpRequest, HelpRequestRepository, KnowledgeEntry,
    KnowledgeRepository, PluginAdapter, RequestStatus, StorageAdapter,
};

use crate::database::Database;
use crate::queries;

/// SQLite-backed store.
///
/// Wraps a [`Database`] handle and delegates to the typed query modules. The
/// database is lazily opened on the first call to
/// [`StorageAdapter::initialize`], so a store can be constructed before the
/// data directory exists.
pub struct SqliteStore {
    config: StorageConfig,
    db: OnceCell<Database>,
}

impl SqliteStore {
    /// Create a new store with the given configuration.
    ///
    /// The database connection is not opened until [`StorageAdapter::initialize`]
    /// is called.
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            db: OnceCell::new(),
        }
    }

    /// Returns the underlying Database, or an error if not initialized.
    fn db(&self) -> Result<&Database, FrontdeskError> {
        self.db.get().ok_or_else(|| FrontdeskError::Storage {
            source: "store not initialized -- call initialize() first".into(),
        })
    }
}

#[async_trait]
impl PluginAdapter for SqliteStore {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Storage
    }

    async fn health_check(&self) -> Result<HealthStatus, FrontdeskError> {
        let db = self.db()?;
        db.connection()
            .call(|conn| {
                conn.execute_batch("SELECT 1;")?;
                Ok(())
            })
            .await
            .map_err(crate::database::map_tr_err)?;
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), FrontdeskError> {
        // Shutdown delegates to close if the DB was initialized.
        if let Some(db) = self.db.get() {
            db.close().await?;
            debug!("shutdown: storage closed");
        }
        Ok(())
    }
}

#[async_trait]
impl StorageAdapter for SqliteStore {
    async fn initialize(&self) -> Result<(), FrontdeskError> {
        let db = Database::open(&self.config.database_path, self.config.wal_mode).await?;
        self.db.set(db).map_err(|_| FrontdeskError::Storage {
            source: "store already initialized".into(),
        })?;
        debug!(path = %self.config.database_path, "SQLite store initialized");
        Ok(())
    }

    async fn close(&self) -> Result<(), FrontdeskError> {
        self.db()?.close().await
    }
}

#[async_trait]
impl HelpRequestRepository for SqliteStore {
    async fn create(&self, caller_id: &str, question: &str) -> Result<HelpRequest, FrontdeskError> {
        let request = HelpRequest::new_pending(caller_id, question);
        queries::help_requests::create(self.db()?, &request).await?;
        Ok(request)
    }

    async fn get(&self, id: &str) -> Result<Option<HelpRequest>, FrontdeskError> {
        queries::help_requests::get(self.db()?, id).await
    }

    async fn list(
        &self,
        status: Option<RequestStatus>,
    ) -> Result<Vec<HelpRequest>, FrontdeskError> {
        queries::help_requests::list(self.db()?, status).await
    }

    async fn resolve(&self, id: &str, answer: &str) -> Result<HelpRequest, FrontdeskError> {
        queries::help_requests::resolve(self.db()?, id, answer).await
    }

    async fn mark_timeouts(&self, older_than: Duration) -> Result<u64, FrontdeskError> {
        queries::help_requests::mark_timeouts(self.db()?, older_than).await
    }
}

#[async_trait]
impl KnowledgeRepository for SqliteStore {
    async fn get_by_question(
        &self,
        question: &str,
    ) -> Result<Option<KnowledgeEntry>, FrontdeskError> {
        queries::knowledge::get_by_question(self.db()?, question).await
    }

    async fn upsert_exact(
        &self,
        question: &str,
        answer: &str,
    ) -> Result<KnowledgeEntry, FrontdeskError> {
        let entry = KnowledgeEntry {
            id: uuid::Uuid::new_v4().to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
            created_at: utc_now_millis(),
        };
        queries::knowledge::upsert_exact(self.db()?, &entry).await
    }

    async fn list(&self) -> Result<Vec<KnowledgeEntry>, FrontdeskError> {
        queries::knowledge::list(self.db()?).await
    }

    async fn search(&self, query: &str) -> Result<Vec<KnowledgeEntry>, FrontdeskError> {
        queries::knowledge::search(self.db()?, query).await
    }
}
