//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for business logic.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{Map, Value};
use tracing::debug;

use super::dto::{
    CreateSchoolRequest, CreateSchoolResponse, HealthResponse, ListSchoolsQuery,
    ListSchoolsRequest, RankedSchoolDto,
};
use super::error::AppError;
use super::state::AppState;
use crate::db::services as db_services;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Request body as a JSON object.
///
/// Decoding into a map keeps the last of any repeated keys and leaves field
/// types to validation. Only a body that is not a JSON object at all is
/// treated as empty, so validation reports the first missing field.
type ObjectBody = Result<Json<Map<String, Value>>, JsonRejection>;

fn body_fields<T: From<Map<String, Value>>>(body: ObjectBody) -> T {
    let fields = match body {
        Ok(Json(fields)) => fields,
        Err(rejection) => {
            debug!("Unreadable request body: {}", rejection.body_text());
            Map::new()
        }
    };
    T::from(fields)
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and storage is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Schools
// =============================================================================

/// POST /addSchool
pub async fn add_school(
    State(state): State<AppState>,
    body: ObjectBody,
) -> Result<(StatusCode, Json<CreateSchoolResponse>), AppError> {
    let request: CreateSchoolRequest = body_fields(body);
    let school = services::add_school(state.repository.as_ref(), &request).await?;

    Ok((StatusCode::CREATED, Json(CreateSchoolResponse::from(&school))))
}

/// GET /listSchools?latitude=..&longitude=..
pub async fn list_schools(
    State(state): State<AppState>,
    Query(query): Query<ListSchoolsQuery>,
) -> HandlerResult<Vec<RankedSchoolDto>> {
    ranked_listing(&state, &ListSchoolsRequest::from(query)).await
}

/// POST /listSchools with `{ latitude, longitude }` in the body.
pub async fn list_schools_from_body(
    State(state): State<AppState>,
    body: ObjectBody,
) -> HandlerResult<Vec<RankedSchoolDto>> {
    let request: ListSchoolsRequest = body_fields(body);
    ranked_listing(&state, &request).await
}

async fn ranked_listing(
    state: &AppState,
    request: &ListSchoolsRequest,
) -> HandlerResult<Vec<RankedSchoolDto>> {
    let ranked = services::list_schools_by_distance(state.repository.as_ref(), request).await?;
    Ok(Json(ranked.into_iter().map(Into::into).collect()))
}
