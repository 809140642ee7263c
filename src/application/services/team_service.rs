//! Team management service.

use crate::domain::entities::{NewTeam, Team, TeamPatch, TeamWithHeroes};
use crate::domain::repositories::TeamRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for team CRUD. Mirrors [`super::HeroService`], with lookups
/// returning the team's heroes.
pub struct TeamService<R: TeamRepository> {
    repository: Arc<R>,
}

impl<R: TeamRepository> TeamService<R> {
    /// Creates a new team service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn create_team(&self, new_team: NewTeam) -> Result<Team, AppError> {
        let team = self.repository.create(new_team).await?;
        tracing::info!(team_id = team.id, "Team created");
        Ok(team)
    }

    /// Retrieves a team with all of its heroes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the team does not exist.
    pub async fn get_team(&self, id: i64) -> Result<TeamWithHeroes, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| team_not_found(id))
    }

    pub async fn list_teams(&self, offset: i64, limit: i64) -> Result<Vec<Team>, AppError> {
        self.repository.list(offset, limit).await
    }

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the team does not exist.
    pub async fn update_team(&self, id: i64, patch: TeamPatch) -> Result<Team, AppError> {
        let team = self
            .repository
            .update(id, patch)
            .await?
            .ok_or_else(|| team_not_found(id))?;

        tracing::info!(team_id = id, "Team updated");
        Ok(team)
    }

    /// Deletes a team and returns how many rows were removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Constraint`] while heroes still reference the team.
    pub async fn delete_team(&self, id: i64) -> Result<u64, AppError> {
        let count = self.repository.delete(id).await?;
        tracing::info!(team_id = id, count, "Team delete requested");
        Ok(count)
    }
}

fn team_not_found(id: i64) -> AppError {
    AppError::not_found("Team not found", json!({ "id": id }))
}
