//! PostgreSQL implementation of team repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::pg_hero_repository::HeroRow;
use crate::domain::entities::{NewTeam, Team, TeamPatch, TeamWithHeroes};
use crate::domain::repositories::TeamRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct TeamRow {
    id: i64,
    name: String,
    headquarters: String,
}

impl From<TeamRow> for Team {
    fn from(r: TeamRow) -> Self {
        Team::new(r.id, r.name, r.headquarters)
    }
}

/// PostgreSQL repository for teams.
///
/// Team lookups read the team and its heroes inside one transaction.
pub struct PgTeamRepository {
    pool: Arc<PgPool>,
}

impl PgTeamRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PgTeamRepository {
    async fn create(&self, new_team: NewTeam) -> Result<Team, AppError> {
        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            INSERT INTO team (name, headquarters)
            VALUES ($1, $2)
            RETURNING id, name, headquarters
            "#,
        )
        .bind(new_team.name)
        .bind(new_team.headquarters)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TeamWithHeroes>, AppError> {
        let mut tx = self.pool.begin().await?;

        let team = sqlx::query_as::<_, TeamRow>(
            "SELECT id, name, headquarters FROM team WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(team) = team else {
            tx.commit().await?;
            return Ok(None);
        };

        let heroes = sqlx::query_as::<_, HeroRow>(
            r#"
            SELECT id, name, secret_name, age, team_id
            FROM hero
            WHERE team_id = $1
            ORDER BY id
            "#,
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(TeamWithHeroes {
            team: team.into(),
            heroes: heroes.into_iter().map(Into::into).collect(),
        }))
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Team>, AppError> {
        let rows = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT id, name, headquarters
            FROM team
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i64, patch: TeamPatch) -> Result<Option<Team>, AppError> {
        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            UPDATE team SET
                name         = COALESCE($2::TEXT, name),
                headquarters = COALESCE($3::TEXT, headquarters)
            WHERE id = $1
            RETURNING id, name, headquarters
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.headquarters)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM team WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
