//! PostgreSQL implementation of hero repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Hero, HeroPatch, HeroWithTeam, NewHero, Team};
use crate::domain::repositories::HeroRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
pub(crate) struct HeroRow {
    pub id: i64,
    pub name: String,
    pub secret_name: String,
    pub age: Option<i32>,
    pub team_id: Option<i64>,
}

impl From<HeroRow> for Hero {
    fn from(r: HeroRow) -> Self {
        Hero::new(r.id, r.name, r.secret_name, r.age, r.team_id)
    }
}

#[derive(sqlx::FromRow)]
struct HeroWithTeamRow {
    id: i64,
    name: String,
    secret_name: String,
    age: Option<i32>,
    team_id: Option<i64>,
    team_name: Option<String>,
    team_headquarters: Option<String>,
}

impl From<HeroWithTeamRow> for HeroWithTeam {
    fn from(r: HeroWithTeamRow) -> Self {
        // team_name is NOT NULL in the table, so it is only absent when the join missed.
        let team = match (r.team_id, r.team_name, r.team_headquarters) {
            (Some(team_id), Some(name), Some(headquarters)) => {
                Some(Team::new(team_id, name, headquarters))
            }
            _ => None,
        };

        HeroWithTeam {
            hero: Hero::new(r.id, r.name, r.secret_name, r.age, r.team_id),
            team,
        }
    }
}

/// PostgreSQL repository for heroes.
pub struct PgHeroRepository {
    pool: Arc<PgPool>,
}

impl PgHeroRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HeroRepository for PgHeroRepository {
    async fn create(&self, new_hero: NewHero) -> Result<Hero, AppError> {
        let row = sqlx::query_as::<_, HeroRow>(
            r#"
            INSERT INTO hero (name, secret_name, age, team_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, secret_name, age, team_id
            "#,
        )
        .bind(new_hero.name)
        .bind(new_hero.secret_name)
        .bind(new_hero.age)
        .bind(new_hero.team_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<HeroWithTeam>, AppError> {
        let row = sqlx::query_as::<_, HeroWithTeamRow>(
            r#"
            SELECT h.id, h.name, h.secret_name, h.age, h.team_id,
                   t.name AS team_name, t.headquarters AS team_headquarters
            FROM hero h
            LEFT JOIN team t ON t.id = h.team_id
            WHERE h.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Hero>, AppError> {
        let rows = sqlx::query_as::<_, HeroRow>(
            r#"
            SELECT id, name, secret_name, age, team_id
            FROM hero
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

    async fn update(&self, id: i64, patch: HeroPatch) -> Result<Option<Hero>, AppError> {
        let update_age = patch.age.is_some();
        let update_team = patch.team_id.is_some();

        let row = sqlx::query_as::<_, HeroRow>(
            r#"
            UPDATE hero SET
                name        = COALESCE($2::TEXT, name),
                secret_name = COALESCE($3::TEXT, secret_name),
                age         = CASE WHEN $4 THEN $5::INTEGER ELSE age END,
                team_id     = CASE WHEN $6 THEN $7::BIGINT ELSE team_id END
            WHERE id = $1
            RETURNING id, name, secret_name, age, team_id
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.secret_name)
        .bind(update_age)
        .bind(patch.age.flatten())
        .bind(update_team)
        .bind(patch.team_id.flatten())
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM hero WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
