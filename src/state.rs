//! Shared application state.

use std::sync::Arc;

use sqlx::PgPool;

use crate::api::dto::pagination::PageLimits;
use crate::application::services::{GateEntryService, HeroService, TeamService};
use crate::infrastructure::persistence::{
    PgGateEntryRepository, PgHeroRepository, PgTeamRepository,
};

/// State cloned into every handler.
///
/// Cloning is cheap: every field is an `Arc` or `Copy`.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub hero_service: Arc<HeroService<PgHeroRepository>>,
    pub team_service: Arc<TeamService<PgTeamRepository>>,
    pub gate_entry_service: Arc<GateEntryService<PgGateEntryRepository>>,
    pub page_limits: PageLimits,
}

impl AppState {
    /// Wires the Postgres repositories and services around `pool`.
    pub fn new(pool: Arc<PgPool>, page_limits: PageLimits) -> Self {
        let hero_repository = Arc::new(PgHeroRepository::new(pool.clone()));
        let team_repository = Arc::new(PgTeamRepository::new(pool.clone()));
        let gate_entry_repository = Arc::new(PgGateEntryRepository::new(pool.clone()));

        Self {
            db: pool,
            hero_service: Arc::new(HeroService::new(hero_repository)),
            team_service: Arc::new(TeamService::new(team_repository)),
            gate_entry_service: Arc::new(GateEntryService::new(gate_entry_repository)),
            page_limits,
        }
    }
}
