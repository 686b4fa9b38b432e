// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Background sweep of timed-out pending requests.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::service::HelpdeskService;

/// Periodically transitions stale pending requests to unresolved.
///
/// Runs until the cancellation token fires. Sweep errors are logged and the
/// loop continues; a transient storage failure must not kill the sweeper for
/// the lifetime of the process.
pub struct TimeoutSweeper {
    service: Arc<HelpdeskService>,
    cancel: CancellationToken,
}

impl TimeoutSweeper {
    pub fn new(service: Arc<HelpdeskService>, cancel: CancellationToken) -> Self {
        Self { service, cancel }
    }

    /// Run the sweep loop to completion.
    pub async fn run(self) {
        let mut interval = tokio::time::interval(self.service.sweep_interval());
        // The first tick fires immediately, sweeping anything that timed out
        // while the service was down.
        info!(interval_secs = self.service.sweep_interval().as_secs(), "timeout sweeper started");

        loop {
            tokio::select! {
                _ = self.cancel.cancelled() => {
                    info!("timeout sweeper stopped");
                    return;
                }
                _ = interval.tick() => {
                    match self.service.sweep_timeouts().await {
                        Ok(count) => debug!(count, "timeout sweep complete"),
                        Err(e) => warn!(error = %e, "timeout sweep failed"),
                    }
                }
            }
        }
    }
}
