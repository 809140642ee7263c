//! Repository trait for teams.

use crate::domain::entities::{NewTeam, Team, TeamPatch, TeamWithHeroes};
use crate::error::AppError;
use async_trait::async_trait;

/// Data access for the `team` table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTeamRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Persists a new team and returns it with its assigned id.
    async fn create(&self, new_team: NewTeam) -> Result<Team, AppError>;

    /// Finds a team by id together with all heroes whose `team_id` matches.
    async fn find_by_id(&self, id: i64) -> Result<Option<TeamWithHeroes>, AppError>;

    /// Lists teams in primary-key order.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Team>, AppError>;

    /// Applies the supplied fields and returns the updated team, or `None`
    /// if no team has this id.
    async fn update(&self, id: i64, patch: TeamPatch) -> Result<Option<Team>, AppError>;

    /// Deletes a team and returns the number of removed rows (0 or 1).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Constraint`] while heroes still reference the team.
    async fn delete(&self, id: i64) -> Result<u64, AppError>;
}
