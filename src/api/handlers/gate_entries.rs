//! Handlers for gate entry endpoints.

use axum::{Json, extract::State, http::StatusCode};
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::gate_entry::{
    CreateGateEntryRequest, GateEntryResponse, GateEntrySearchParams, UpdateGateEntryRequest,
};
use crate::api::dto::pagination::ListParams;
use crate::api::extract::{ApiJson, ApiPath, ApiQuery};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a gate entry.
///
/// # Endpoint
///
/// `POST /gate_entries`
///
/// # Request Body
///
/// ```json
/// { "site_id": 1, "vehicle_license_plate": "51A12345", "driver_id": "D-001" }
/// ```
///
/// # Errors
///
/// Returns 400 if validation fails or `status` is not 0 or 9.
pub async fn create_gate_entry_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateGateEntryRequest>,
) -> Result<(StatusCode, Json<GateEntryResponse>), AppError> {
    payload.validate()?;

    let entry = state
        .gate_entry_service
        .create_entry(payload.try_into()?)
        .await?;

    Ok((StatusCode::CREATED, Json(entry.into())))
}

/// Lists gate entries.
///
/// # Endpoint
///
/// `GET /gate_entries?skip=0&limit=10`
pub async fn gate_entry_list_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> Result<Json<Vec<GateEntryResponse>>, AppError> {
    let (offset, limit) = params.validate_and_get_offset_limit(state.page_limits)?;

    let entries = state.gate_entry_service.list_entries(offset, limit).await?;

    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

/// Lists gate entries whose license plate contains `filter`.
///
/// # Endpoint
///
/// `GET /gate_entries/search?filter=ABC&date=2024-01-31`
///
/// Matching is case-sensitive. `date` is accepted but not applied.
pub async fn search_gate_entries_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<GateEntrySearchParams>,
) -> Result<Json<Vec<GateEntryResponse>>, AppError> {
    let entries = state
        .gate_entry_service
        .search_entries(params.filter.as_deref(), params.date)
        .await?;

    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

/// Returns a gate entry.
///
/// # Endpoint
///
/// `GET /gate_entries/{uuid}`
///
/// # Errors
///
/// Returns 404 if the entry does not exist.
pub async fn get_gate_entry_handler(
    State(state): State<AppState>,
    ApiPath(uuid): ApiPath<Uuid>,
) -> Result<Json<GateEntryResponse>, AppError> {
    let entry = state.gate_entry_service.get_entry(uuid).await?;
    Ok(Json(entry.into()))
}

/// Partially updates a gate entry.
///
/// # Endpoint
///
/// `PATCH /gate_entries/{uuid}`
///
/// # Errors
///
/// Returns 400 if the status change would reopen a completed entry.
/// Returns 404 if the entry does not exist.
pub async fn update_gate_entry_handler(
    State(state): State<AppState>,
    ApiPath(uuid): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdateGateEntryRequest>,
) -> Result<Json<GateEntryResponse>, AppError> {
    payload.validate()?;

    let entry = state
        .gate_entry_service
        .update_entry(uuid, payload.try_into()?)
        .await?;

    Ok(Json(entry.into()))
}

/// Marks a gate entry Completed (status 9).
///
/// # Endpoint
///
/// `PATCH /gate_entry_cf/{uuid}`
///
/// No body. Idempotent.
///
/// # Errors
///
/// Returns 404 if the entry does not exist.
pub async fn complete_gate_entry_handler(
    State(state): State<AppState>,
    ApiPath(uuid): ApiPath<Uuid>,
) -> Result<Json<GateEntryResponse>, AppError> {
    let entry = state.gate_entry_service.complete_entry(uuid).await?;
    Ok(Json(entry.into()))
}
