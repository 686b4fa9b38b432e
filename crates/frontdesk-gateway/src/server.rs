// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state.

use std::sync::Arc;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use frontdesk_config::model::GatewayConfig;
use frontdesk_core::{FrontdeskError, HelpRequestRepository, KnowledgeRepository};
use frontdesk_helpdesk::HelpdeskService;

use crate::auth::{AuthConfig, auth_middleware};
use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// Escalation policy core.
    pub service: Arc<HelpdeskService>,
    /// Read access to help requests for listing.
    pub requests: Arc<dyn HelpRequestRepository>,
    /// Read access to the knowledge base for listing.
    pub knowledge: Arc<dyn KnowledgeRepository>,
    /// Process start time for uptime reporting.
    pub start_time: std::time::Instant,
}

/// Build the gateway router.
///
/// `/health` is public; everything under `/v1` goes through the bearer-token
/// middleware (a no-op when no token is configured).
pub fn router(state: GatewayState, auth: AuthConfig) -> Router {
    let public_routes = Router::new()
        .route("/health", get(handlers::get_health))
        .with_state(state.clone());

    let api_routes = Router::new()
        .route("/v1/requests", post(handlers::post_requests))
        .route("/v1/requests", get(handlers::get_requests))
        .route("/v1/requests/{id}/respond", post(handlers::post_respond))
        .route("/v1/timeouts/sweep", post(handlers::post_sweep))
        .route("/v1/knowledge", get(handlers::get_knowledge))
        .route_layer(axum_middleware::from_fn_with_state(auth, auth_middleware))
        .with_state(state);

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .layer(CorsLayer::permissive())
}

/// Start the gateway HTTP server and serve until the process is shut down.
pub async fn start_server(
    config: &GatewayConfig,
    state: GatewayState,
    shutdown: tokio_util::sync::CancellationToken,
) -> Result<(), FrontdeskError> {
    let auth = AuthConfig {
        bearer_token: config.bearer_token.clone(),
    };
    let app = router(state, auth);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| FrontdeskError::Internal(format!("failed to bind gateway to {addr}: {e}")))?;

    tracing::info!("gateway listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| FrontdeskError::Internal(format!("gateway server error: {e}")))?;

    Ok(())
}
