//! Hero management service.

use crate::domain::entities::{Hero, HeroPatch, HeroWithTeam, NewHero};
use crate::domain::repositories::HeroRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for creating, reading, updating and deleting heroes.
pub struct HeroService<R: HeroRepository> {
    repository: Arc<R>,
}

impl<R: HeroRepository> HeroService<R> {
    /// Creates a new hero service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a hero and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Constraint`] if `team_id` references a missing team.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_hero(&self, new_hero: NewHero) -> Result<Hero, AppError> {
        let hero = self.repository.create(new_hero).await?;
        tracing::info!(hero_id = hero.id, "Hero created");
        Ok(hero)
    }

    /// Retrieves a hero with its team.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the hero does not exist.
    pub async fn get_hero(&self, id: i64) -> Result<HeroWithTeam, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| hero_not_found(id))
    }

    pub async fn list_heroes(&self, offset: i64, limit: i64) -> Result<Vec<Hero>, AppError> {
        self.repository.list(offset, limit).await
    }

    /// Applies a partial update. Fields absent from `patch` keep their value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the hero does not exist.
    /// Returns [`AppError::Constraint`] if the new `team_id` references a missing team.
    pub async fn update_hero(&self, id: i64, patch: HeroPatch) -> Result<Hero, AppError> {
        let hero = self
            .repository
            .update(id, patch)
            .await?
            .ok_or_else(|| hero_not_found(id))?;

        tracing::info!(hero_id = id, "Hero updated");
        Ok(hero)
    }

    /// Deletes a hero and returns how many rows were removed.
    ///
    /// A missing hero is not an error; the count is simply zero.
    pub async fn delete_hero(&self, id: i64) -> Result<u64, AppError> {
        let count = self.repository.delete(id).await?;
        tracing::info!(hero_id = id, count, "Hero delete requested");
        Ok(count)
    }
}

fn hero_not_found(id: i64) -> AppError {
    AppError::not_found("Hero not found", json!({ "id": id }))
}
