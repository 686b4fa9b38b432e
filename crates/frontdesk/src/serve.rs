// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `frontdesk serve` command implementation.
//!
//! Wires the SQLite store, webhook notifier, helpdesk service, timeout
//! sweeper, and HTTP gateway together, then runs until a shutdown signal.

use std::sync::Arc;

use tracing::{debug, info};

use frontdesk_config::FrontdeskConfig;
use frontdesk_core::{
    FrontdeskError, HelpRequestRepository, KnowledgeRepository, PluginAdapter, StorageAdapter,
};
use frontdesk_gateway::GatewayState;
use frontdesk_helpdesk::{HelpdeskService, TimeoutSweeper};
use frontdesk_notify::WebhookNotifier;
use frontdesk_storage::SqliteStore;

use crate::shutdown;

/// Runs the `frontdesk serve` command.
pub async fn run_serve(config: FrontdeskConfig) -> Result<(), FrontdeskError> {
    init_tracing(&config.agent.log_level);

    info!(agent = config.agent.name.as_str(), "starting frontdesk serve");

    // Storage.
    let store = Arc::new(SqliteStore::new(config.storage.clone()));
    store.initialize().await?;

    // Notification transport.
    let notifier = Arc::new(WebhookNotifier::new(config.notify.clone())?);

    // Policy core.
    let service = Arc::new(HelpdeskService::new(
        Arc::clone(&store) as Arc<dyn HelpRequestRepository>,
        Arc::clone(&store) as Arc<dyn KnowledgeRepository>,
        Arc::clone(&notifier) as _,
        config.helpdesk.clone(),
    ));

    let cancel = shutdown::install_signal_handler();

    // Background timeout sweeper.
    let sweeper = TimeoutSweeper::new(Arc::clone(&service), cancel.clone());
    let sweeper_handle = tokio::spawn(sweeper.run());

    // HTTP gateway (foreground until shutdown).
    if config.gateway.enabled {
        let state = GatewayState {
            service: Arc::clone(&service),
            requests: Arc::clone(&store) as Arc<dyn HelpRequestRepository>,
            knowledge: Arc::clone(&store) as Arc<dyn KnowledgeRepository>,
            start_time: std::time::Instant::now(),
        };
        frontdesk_gateway::start_server(&config.gateway, state, cancel.clone()).await?;
    } else {
        debug!("gateway disabled by configuration");
        cancel.cancelled().await;
    }

    // Drain the sweeper before closing storage.
    if let Err(e) = sweeper_handle.await {
        debug!(error = %e, "sweeper task did not join cleanly");
    }
    store.shutdown().await?;

    info!("frontdesk serve shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("frontdesk={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
