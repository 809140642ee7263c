//! Handlers for team endpoints.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::delete::DeleteResponse;
use crate::api::dto::pagination::ListParams;
use crate::api::dto::team::{
    CreateTeamRequest, TeamResponse, TeamWithHeroesResponse, UpdateTeamRequest,
};
use crate::api::extract::{ApiJson, ApiPath, ApiQuery};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a team.
///
/// # Endpoint
///
/// `POST /teams`
pub async fn create_team_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateTeamRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), AppError> {
    payload.validate()?;

    let team = state.team_service.create_team(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(team.into())))
}

/// Lists teams in id order.
///
/// # Endpoint
///
/// `GET /teams?skip=0&limit=10`
pub async fn team_list_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> Result<Json<Vec<TeamResponse>>, AppError> {
    let (offset, limit) = params.validate_and_get_offset_limit(state.page_limits)?;

    let teams = state.team_service.list_teams(offset, limit).await?;

    Ok(Json(teams.into_iter().map(Into::into).collect()))
}

/// Returns a team with its heroes.
///
/// # Endpoint
///
/// `GET /teams/{id}`
///
/// # Errors
///
/// Returns 404 if the team does not exist.
pub async fn get_team_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<TeamWithHeroesResponse>, AppError> {
    let team = state.team_service.get_team(id).await?;
    Ok(Json(team.into()))
}

/// Partially updates a team.
///
/// # Endpoint
///
/// `PATCH /teams/{id}`
///
/// # Errors
///
/// Returns 404 if the team does not exist.
pub async fn update_team_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<UpdateTeamRequest>,
) -> Result<Json<TeamResponse>, AppError> {
    payload.validate()?;

    let team = state.team_service.update_team(id, payload.into()).await?;

    Ok(Json(team.into()))
}

/// Deletes a team.
///
/// # Endpoint
///
/// `DELETE /teams/{id}`
///
/// # Errors
///
/// Returns 409 while heroes still reference the team.
pub async fn delete_team_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<DeleteResponse>, AppError> {
    let count = state.team_service.delete_team(id).await?;
    Ok(Json(DeleteResponse::teams(count)))
}
