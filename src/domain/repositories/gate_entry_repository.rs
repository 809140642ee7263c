//! Repository trait for gate entries.

use crate::domain::entities::{GateEntry, GateEntryPatch, NewGateEntry};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Data access for the `gate_entry` table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgGateEntryRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GateEntryRepository: Send + Sync {
    /// Persists a new gate entry under a freshly generated UUID.
    async fn create(&self, new_entry: NewGateEntry) -> Result<GateEntry, AppError>;

    async fn find_by_id(&self, uuid: Uuid) -> Result<Option<GateEntry>, AppError>;

    /// Plain offset/limit scan.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<GateEntry>, AppError>;

    /// Returns every entry whose `vehicle_license_plate` contains
    /// `plate_filter` (case-sensitive). An empty filter matches everything.
    async fn search_by_plate(&self, plate_filter: &str) -> Result<Vec<GateEntry>, AppError>;

    /// Applies the supplied fields, or returns `None` if the uuid is unknown.
    ///
    /// The status transition is checked against the stored status in the same
    /// transaction as the write; a forbidden move fails with
    /// [`AppError::Validation`] and changes nothing.
    async fn update(&self, uuid: Uuid, patch: GateEntryPatch)
    -> Result<Option<GateEntry>, AppError>;

    /// Sets the status to Completed regardless of the current state.
    async fn complete(&self, uuid: Uuid) -> Result<Option<GateEntry>, AppError>;
}
