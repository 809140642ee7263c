//! Repository trait for heroes.

use crate::domain::entities::{Hero, HeroPatch, HeroWithTeam, NewHero};
use crate::error::AppError;
use async_trait::async_trait;

/// Data access for the `hero` table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgHeroRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HeroRepository: Send + Sync {
    /// Persists a new hero and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Constraint`] if `team_id` references a missing team.
    async fn create(&self, new_hero: NewHero) -> Result<Hero, AppError>;

    /// Finds a hero by id, with its team populated when `team_id` is set.
    async fn find_by_id(&self, id: i64) -> Result<Option<HeroWithTeam>, AppError>;

    /// Lists heroes in primary-key order.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Hero>, AppError>;

    /// Applies the supplied fields and returns the updated hero, or `None`
    /// if no hero has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Constraint`] if the new `team_id` references a missing team.
    async fn update(&self, id: i64, patch: HeroPatch) -> Result<Option<Hero>, AppError>;

    /// Deletes a hero and returns the number of removed rows (0 or 1).
    async fn delete(&self, id: i64) -> Result<u64, AppError>;
}
