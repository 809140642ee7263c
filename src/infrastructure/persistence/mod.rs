//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits on top of a
//! shared [`sqlx::PgPool`]. Queries are plain parameterized SQL; rows are
//! decoded into private `FromRow` structs and converted into domain entities.
//!
//! # Repositories
//!
//! - [`PgHeroRepository`] - `hero` table
//! - [`PgTeamRepository`] - `team` table
//! - [`PgGateEntryRepository`] - `gate_entry` table

pub mod pg_gate_entry_repository;
pub mod pg_hero_repository;
pub mod pg_team_repository;

pub use pg_gate_entry_repository::PgGateEntryRepository;
pub use pg_hero_repository::PgHeroRepository;
pub use pg_team_repository::PgTeamRepository;
