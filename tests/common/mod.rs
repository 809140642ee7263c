#![allow(dead_code)]

use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use hero_gate::api;
use hero_gate::api::dto::pagination::PageLimits;
use hero_gate::api::handlers::health_handler;
use hero_gate::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

pub async fn create_test_team(pool: &PgPool, name: &str, headquarters: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO team (name, headquarters) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(headquarters)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_hero(
    pool: &PgPool,
    name: &str,
    secret_name: &str,
    age: Option<i32>,
    team_id: Option<i64>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO hero (name, secret_name, age, team_id) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(name)
    .bind(secret_name)
    .bind(age)
    .bind(team_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_gate_entry(pool: &PgPool, site_id: i32, plate: &str) -> Uuid {
    let uuid = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO gate_entry (uuid, site_id, vehicle_license_plate) VALUES ($1, $2, $3)",
    )
    .bind(uuid)
    .bind(site_id)
    .bind(plate)
    .execute(pool)
    .await
    .unwrap();
    uuid
}

pub async fn create_completed_gate_entry(pool: &PgPool, site_id: i32, plate: &str) -> Uuid {
    let uuid = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO gate_entry (uuid, site_id, status, vehicle_license_plate) VALUES ($1, $2, 9, $3)",
    )
    .bind(uuid)
    .bind(site_id)
    .bind(plate)
    .execute(pool)
    .await
    .unwrap();
    uuid
}

pub async fn gate_entry_status(pool: &PgPool, uuid: Uuid) -> i32 {
    sqlx::query_scalar("SELECT status FROM gate_entry WHERE uuid = $1")
        .bind(uuid)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), PageLimits::default())
}

/// API routes plus `/health`, without the path normalization wrapper.
pub fn make_server(pool: PgPool) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::routes())
        .with_state(create_test_state(pool));
    TestServer::new(app).unwrap()
}
