//! PostgreSQL implementation of gate entry repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{GateEntry, GateEntryPatch, GateStatus, NewGateEntry};
use crate::domain::repositories::GateEntryRepository;
use crate::error::AppError;

const GATE_ENTRY_COLUMNS: &str = "uuid, site_id, status, vehicle_license_plate, driver_id, \
     register_dstamp, entry_dstamp, linein_dstamp, plan_entry_time, route_id, phone_no";

#[derive(sqlx::FromRow)]
struct GateEntryRow {
    uuid: Uuid,
    site_id: i32,
    status: i32,
    vehicle_license_plate: String,
    driver_id: Option<String>,
    register_dstamp: DateTime<Utc>,
    entry_dstamp: DateTime<Utc>,
    linein_dstamp: Option<DateTime<Utc>>,
    plan_entry_time: Option<String>,
    route_id: Option<i32>,
    phone_no: Option<String>,
}

impl TryFrom<GateEntryRow> for GateEntry {
    type Error = AppError;

    fn try_from(r: GateEntryRow) -> Result<Self, Self::Error> {
        let status = GateStatus::try_from(r.status).map_err(|e| {
            tracing::error!(uuid = %r.uuid, status = r.status, "Invalid persisted gate status");
            AppError::internal("Invalid persisted gate entry", json!({ "reason": e.to_string() }))
        })?;

        Ok(GateEntry {
            uuid: r.uuid,
            site_id: r.site_id,
            status,
            vehicle_license_plate: r.vehicle_license_plate,
            driver_id: r.driver_id,
            register_dstamp: r.register_dstamp,
            entry_dstamp: r.entry_dstamp,
            linein_dstamp: r.linein_dstamp,
            plan_entry_time: r.plan_entry_time,
            route_id: r.route_id,
            phone_no: r.phone_no,
        })
    }
}

fn into_entries(rows: Vec<GateEntryRow>) -> Result<Vec<GateEntry>, AppError> {
    rows.into_iter().map(GateEntry::try_from).collect()
}

/// PostgreSQL repository for gate entries.
///
/// Primary keys are random v4 UUIDs generated on insert. Patches lock the
/// row before checking the status transition, so concurrent patches cannot
/// reopen a completed entry.
pub struct PgGateEntryRepository {
    pool: Arc<PgPool>,
}

impl PgGateEntryRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GateEntryRepository for PgGateEntryRepository {
    async fn create(&self, new_entry: NewGateEntry) -> Result<GateEntry, AppError> {
        let sql = format!(
            r#"
            INSERT INTO gate_entry (
                uuid, site_id, status, vehicle_license_plate, driver_id,
                register_dstamp, entry_dstamp, linein_dstamp,
                plan_entry_time, route_id, phone_no
            )
            VALUES ($1, $2, $3, $4, $5, COALESCE($6, NOW()), COALESCE($7, NOW()), $8, $9, $10, $11)
            RETURNING {GATE_ENTRY_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, GateEntryRow>(&sql)
            .bind(Uuid::new_v4())
            .bind(new_entry.site_id)
            .bind(new_entry.status.code())
            .bind(new_entry.vehicle_license_plate)
            .bind(new_entry.driver_id)
            .bind(new_entry.register_dstamp)
            .bind(new_entry.entry_dstamp)
            .bind(new_entry.linein_dstamp)
            .bind(new_entry.plan_entry_time)
            .bind(new_entry.route_id)
            .bind(new_entry.phone_no)
            .fetch_one(self.pool.as_ref())
            .await?;

        row.try_into()
    }

    async fn find_by_id(&self, uuid: Uuid) -> Result<Option<GateEntry>, AppError> {
        let sql = format!("SELECT {GATE_ENTRY_COLUMNS} FROM gate_entry WHERE uuid = $1");

        let row = sqlx::query_as::<_, GateEntryRow>(&sql)
            .bind(uuid)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(GateEntry::try_from).transpose()
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<GateEntry>, AppError> {
        let sql = format!(
            r#"
            SELECT {GATE_ENTRY_COLUMNS}
            FROM gate_entry
            ORDER BY register_dstamp, uuid
            LIMIT $1 OFFSET $2
            "#
        );

        let rows = sqlx::query_as::<_, GateEntryRow>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(self.pool.as_ref())
            .await?;

        into_entries(rows)
    }

    async fn search_by_plate(&self, plate_filter: &str) -> Result<Vec<GateEntry>, AppError> {
        // strpos keeps the match literal and case-sensitive; LIKE would treat % and _ as wildcards.
        let sql = format!(
            r#"
            SELECT {GATE_ENTRY_COLUMNS}
            FROM gate_entry
            WHERE strpos(vehicle_license_plate, $1) > 0
            ORDER BY register_dstamp, uuid
            "#
        );

        let rows = sqlx::query_as::<_, GateEntryRow>(&sql)
            .bind(plate_filter)
            .fetch_all(self.pool.as_ref())
            .await?;

        into_entries(rows)
    }

    async fn update(
        &self,
        uuid: Uuid,
        patch: GateEntryPatch,
    ) -> Result<Option<GateEntry>, AppError> {
        let mut tx = self.pool.begin().await?;

        let current: Option<i32> =
            sqlx::query_scalar("SELECT status FROM gate_entry WHERE uuid = $1 FOR UPDATE")
                .bind(uuid)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(current) = current else {
            tx.rollback().await?;
            return Ok(None);
        };

        if let Some(next) = patch.status {
            let current = GateStatus::try_from(current).map_err(|e| {
                AppError::internal("Invalid persisted gate entry", json!({ "reason": e.to_string() }))
            })?;
            current.transition_to(next)?;
        }

        let sql = format!(
            r#"
            UPDATE gate_entry SET
                site_id               = COALESCE($2::INTEGER, site_id),
                status                = COALESCE($3::INTEGER, status),
                vehicle_license_plate = COALESCE($4::TEXT, vehicle_license_plate),
                driver_id             = CASE WHEN $5 THEN $6::TEXT ELSE driver_id END,
                register_dstamp       = COALESCE($7::TIMESTAMPTZ, register_dstamp),
                entry_dstamp          = COALESCE($8::TIMESTAMPTZ, entry_dstamp),
                linein_dstamp         = CASE WHEN $9 THEN $10::TIMESTAMPTZ ELSE linein_dstamp END,
                plan_entry_time       = CASE WHEN $11 THEN $12::TEXT ELSE plan_entry_time END,
                route_id              = CASE WHEN $13 THEN $14::INTEGER ELSE route_id END,
                phone_no              = CASE WHEN $15 THEN $16::TEXT ELSE phone_no END
            WHERE uuid = $1
            RETURNING {GATE_ENTRY_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, GateEntryRow>(&sql)
            .bind(uuid)
            .bind(patch.site_id)
            .bind(patch.status.map(GateStatus::code))
            .bind(patch.vehicle_license_plate)
            .bind(patch.driver_id.is_some())
            .bind(patch.driver_id.flatten())
            .bind(patch.register_dstamp)
            .bind(patch.entry_dstamp)
            .bind(patch.linein_dstamp.is_some())
            .bind(patch.linein_dstamp.flatten())
            .bind(patch.plan_entry_time.is_some())
            .bind(patch.plan_entry_time.flatten())
            .bind(patch.route_id.is_some())
            .bind(patch.route_id.flatten())
            .bind(patch.phone_no.is_some())
            .bind(patch.phone_no.flatten())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        GateEntry::try_from(row).map(Some)
    }

    async fn complete(&self, uuid: Uuid) -> Result<Option<GateEntry>, AppError> {
        let sql = format!(
            "UPDATE gate_entry SET status = $2 WHERE uuid = $1 RETURNING {GATE_ENTRY_COLUMNS}"
        );

        let row = sqlx::query_as::<_, GateEntryRow>(&sql)
            .bind(uuid)
            .bind(GateStatus::Completed.code())
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(GateEntry::try_from).transpose()
    }
}
