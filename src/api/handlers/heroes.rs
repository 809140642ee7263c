//! Handlers for hero endpoints.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::delete::DeleteResponse;
use crate::api::dto::hero::{
    CreateHeroRequest, HeroResponse, HeroWithTeamResponse, UpdateHeroRequest,
};
use crate::api::dto::pagination::ListParams;
use crate::api::extract::{ApiJson, ApiPath, ApiQuery};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a hero.
///
/// # Endpoint
///
/// `POST /heros`
///
/// # Request Body
///
/// ```json
/// { "name": "Deadpond", "secret_name": "Dive Wilson", "age": null, "team_id": null }
/// ```
///
/// # Errors
///
/// Returns 400 if required fields are missing or invalid.
/// Returns 409 if `team_id` references a missing team.
pub async fn create_hero_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateHeroRequest>,
) -> Result<(StatusCode, Json<HeroResponse>), AppError> {
    payload.validate()?;

    let hero = state.hero_service.create_hero(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(hero.into())))
}

/// Lists heroes in id order.
///
/// # Endpoint
///
/// `GET /heros?skip=0&limit=10`
pub async fn hero_list_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> Result<Json<Vec<HeroResponse>>, AppError> {
    let (offset, limit) = params.validate_and_get_offset_limit(state.page_limits)?;

    let heroes = state.hero_service.list_heroes(offset, limit).await?;

    Ok(Json(heroes.into_iter().map(Into::into).collect()))
}

/// Returns a hero with its team nested.
///
/// # Endpoint
///
/// `GET /heros/{id}`
///
/// # Errors
///
/// Returns 404 if the hero does not exist.
pub async fn get_hero_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<HeroWithTeamResponse>, AppError> {
    let hero = state.hero_service.get_hero(id).await?;
    Ok(Json(hero.into()))
}

/// Partially updates a hero.
///
/// # Endpoint
///
/// `PATCH /heros/{id}`
///
/// Only fields present in the body change. `null` clears `age` or `team_id`.
///
/// # Errors
///
/// Returns 404 if the hero does not exist.
/// Returns 409 if `team_id` references a missing team.
pub async fn update_hero_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<UpdateHeroRequest>,
) -> Result<Json<HeroResponse>, AppError> {
    payload.validate()?;

    let hero = state.hero_service.update_hero(id, payload.into()).await?;

    Ok(Json(hero.into()))
}

/// Deletes a hero.
///
/// # Endpoint
///
/// `DELETE /heros/{id}`
///
/// Always 200; `count` is 0 when the hero did not exist.
pub async fn delete_hero_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<DeleteResponse>, AppError> {
    let count = state.hero_service.delete_hero(id).await?;
    Ok(Json(DeleteResponse::heroes(count)))
}
