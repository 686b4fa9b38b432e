// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the helpdesk REST API.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use frontdesk_core::{FrontdeskError, HelpRequest, KnowledgeEntry, RequestStatus};
use frontdesk_helpdesk::Intake;

use crate::server::GatewayState;

/// Request body for POST /v1/requests.
#[derive(Debug, Deserialize)]
pub struct CreateRequestBody {
    /// Identifier of the caller (phone number or session id).
    pub caller_id: String,
    /// The caller's question, verbatim.
    pub question: String,
}

/// Response body for POST /v1/requests.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum IntakeResponse {
    /// The question was answered from the knowledge base.
    Known { known: bool, answer: String },
    /// A pending request was created and the supervisor alerted.
    Escalated {
        known: bool,
        request_id: String,
        status: RequestStatus,
    },
}

/// Query parameters for GET /v1/requests.
#[derive(Debug, Deserialize)]
pub struct ListRequestsParams {
    /// Optional status filter (`pending`, `resolved`, `unresolved`).
    #[serde(default)]
    pub status: Option<RequestStatus>,
}

/// Response body for GET /v1/requests.
#[derive(Debug, Serialize)]
pub struct RequestListResponse {
    pub requests: Vec<HelpRequest>,
}

/// Request body for POST /v1/requests/{id}/respond.
#[derive(Debug, Deserialize)]
pub struct RespondBody {
    /// The supervisor's answer.
    pub answer: String,
}

/// Response body for POST /v1/timeouts/sweep.
#[derive(Debug, Serialize)]
pub struct SweepResponse {
    /// Number of pending requests transitioned to unresolved.
    pub unresolved: u64,
}

/// Response body for GET /v1/knowledge.
#[derive(Debug, Serialize)]
pub struct KnowledgeListResponse {
    pub entries: Vec<KnowledgeEntry>,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Map a domain error to its HTTP representation.
fn error_response(e: FrontdeskError) -> Response {
    let status = match e {
        FrontdeskError::NotFound { .. } => StatusCode::NOT_FOUND,
        FrontdeskError::InvalidTransition { .. } => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ErrorResponse { error: e.to_string() })).into_response()
}

/// POST /v1/requests
///
/// Take in a caller question: answer from the knowledge base when the exact
/// question was learned before, otherwise escalate.
pub async fn post_requests(
    State(state): State<GatewayState>,
    Json(body): Json<CreateRequestBody>,
) -> Response {
    match state
        .service
        .lookup_or_create_request(&body.caller_id, &body.question)
        .await
    {
        Ok(Intake::Known { answer }) => {
            Json(IntakeResponse::Known { known: true, answer }).into_response()
        }
        Ok(Intake::Escalated { request }) => Json(IntakeResponse::Escalated {
            known: false,
            request_id: request.id,
            status: request.status,
        })
        .into_response(),
        Err(e) => error_response(e),
    }
}

/// GET /v1/requests?status=
pub async fn get_requests(
    State(state): State<GatewayState>,
    Query(params): Query<ListRequestsParams>,
) -> Response {
    match state.requests.list(params.status).await {
        Ok(requests) => Json(RequestListResponse { requests }).into_response(),
        Err(e) => error_response(e),
    }
}

/// POST /v1/requests/{id}/respond
///
/// Record the supervisor's answer: resolves the request, learns the answer,
/// and follows up with the caller.
pub async fn post_respond(
    State(state): State<GatewayState>,
    Path(id): Path<String>,
    Json(body): Json<RespondBody>,
) -> Response {
    match state.service.resolve_request_and_learn(&id, &body.answer).await {
        Ok(request) => Json(request).into_response(),
        Err(e) => error_response(e),
    }
}

/// POST /v1/timeouts/sweep
///
/// Manually trigger a timeout sweep (the background sweeper runs the same
/// operation on its interval).
pub async fn post_sweep(State(state): State<GatewayState>) -> Response {
    match state.service.sweep_timeouts().await {
        Ok(unresolved) => Json(SweepResponse { unresolved }).into_response(),
        Err(e) => error_response(e),
    }
}

/// GET /v1/knowledge
pub async fn get_knowledge(State(state): State<GatewayState>) -> Response {
    match state.knowledge.list().await {
        Ok(entries) => Json(KnowledgeListResponse { entries }).into_response(),
        Err(e) => error_response(e),
    }
}

/// GET /health (unauthenticated, for process supervisors).
pub async fn get_health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}
