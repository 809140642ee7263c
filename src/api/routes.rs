//! API route configuration.

use crate::api::handlers::{
    complete_gate_entry_handler, create_gate_entry_handler, create_hero_handler,
    create_team_handler, delete_hero_handler, delete_team_handler, gate_entry_list_handler,
    get_gate_entry_handler, get_hero_handler, get_team_handler, hero_list_handler,
    search_gate_entries_handler, team_list_handler, update_gate_entry_handler,
    update_hero_handler, update_team_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch},
};

/// All resource routes.
///
/// # Endpoints
///
/// - `GET    /heros`                 - List heroes (`skip`, `limit`)
/// - `POST   /heros`                 - Create a hero
/// - `GET    /heros/{id}`            - Hero with nested team
/// - `PATCH  /heros/{id}`            - Partially update a hero
/// - `DELETE /heros/{id}`            - Delete a hero
/// - `GET    /teams`                 - List teams (`skip`, `limit`)
/// - `POST   /teams`                 - Create a team
/// - `GET    /teams/{id}`            - Team with its heroes
/// - `PATCH  /teams/{id}`            - Partially update a team
/// - `DELETE /teams/{id}`            - Delete a team
/// - `GET    /gate_entries`          - List gate entries (`skip`, `limit`)
/// - `POST   /gate_entries`          - Register a gate entry
/// - `GET    /gate_entries/search`   - Search by license plate (`filter`, `date`)
/// - `GET    /gate_entries/{uuid}`   - Single gate entry
/// - `PATCH  /gate_entries/{uuid}`   - Partially update a gate entry
/// - `PATCH  /gate_entry_cf/{uuid}`  - Mark a gate entry Completed
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/heros", get(hero_list_handler).post(create_hero_handler))
        .route(
            "/heros/{id}",
            get(get_hero_handler)
                .patch(update_hero_handler)
                .delete(delete_hero_handler),
        )
        .route("/teams", get(team_list_handler).post(create_team_handler))
        .route(
            "/teams/{id}",
            get(get_team_handler)
                .patch(update_team_handler)
                .delete(delete_team_handler),
        )
        .route(
            "/gate_entries",
            get(gate_entry_list_handler).post(create_gate_entry_handler),
        )
        .route("/gate_entries/search", get(search_gate_entries_handler))
        .route(
            "/gate_entries/{uuid}",
            get(get_gate_entry_handler).patch(update_gate_entry_handler),
        )
        .route("/gate_entry_cf/{uuid}", patch(complete_gate_entry_handler))
}
