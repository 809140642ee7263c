//! Gate entry service.
//!
//! # Status State Machine
//!
//! ```text
//! Released (0) ──complete / patch──▶ Completed (9)
//! ```
//!
//! Completed is terminal. The dedicated completion operation always lands in
//! Completed and may be repeated; the general patch accepts a status only if
//! the transition is allowed by
//! [`GateStatus::can_transition_to`](crate::domain::entities::GateStatus::can_transition_to).
//! The repository checks that against the locked row.

use crate::domain::entities::{GateEntry, GateEntryPatch, NewGateEntry};
use crate::domain::repositories::GateEntryRepository;
use crate::error::AppError;
use chrono::NaiveDate;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

/// Service for gate entry registration, lookup, search and completion.
pub struct GateEntryService<R: GateEntryRepository> {
    repository: Arc<R>,
}

impl<R: GateEntryRepository> GateEntryService<R> {
    /// Creates a new gate entry service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn create_entry(&self, new_entry: NewGateEntry) -> Result<GateEntry, AppError> {
        let entry = self.repository.create(new_entry).await?;
        tracing::info!(
            uuid = %entry.uuid,
            site_id = entry.site_id,
            plate = %entry.vehicle_license_plate,
            "Gate entry registered"
        );
        Ok(entry)
    }

    /// Retrieves a gate entry by uuid.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the entry does not exist.
    pub async fn get_entry(&self, uuid: Uuid) -> Result<GateEntry, AppError> {
        self.repository
            .find_by_id(uuid)
            .await?
            .ok_or_else(|| entry_not_found(uuid))
    }

    pub async fn list_entries(&self, offset: i64, limit: i64) -> Result<Vec<GateEntry>, AppError> {
        self.repository.list(offset, limit).await
    }

    /// Lists entries whose license plate contains `filter` (case-sensitive).
    ///
    /// `date` is accepted for compatibility with existing clients but is not
    /// applied: results are never restricted by registration date.
    pub async fn search_entries(
        &self,
        filter: Option<&str>,
        date: Option<NaiveDate>,
    ) -> Result<Vec<GateEntry>, AppError> {
        if let Some(date) = date {
            tracing::warn!(%date, "Gate entry date filtering is not implemented; ignoring date");
        }

        self.repository
            .search_by_plate(filter.unwrap_or_default())
            .await
    }

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the entry does not exist.
    /// Returns [`AppError::Validation`] if the patch would move a Completed
    /// entry back to Released.
    pub async fn update_entry(
        &self,
        uuid: Uuid,
        patch: GateEntryPatch,
    ) -> Result<GateEntry, AppError> {
        let entry = self
            .repository
            .update(uuid, patch)
            .await?
            .ok_or_else(|| entry_not_found(uuid))?;

        tracing::info!(uuid = %uuid, status = entry.status.code(), "Gate entry updated");
        Ok(entry)
    }

    /// Marks an entry Completed. Repeating the call leaves it Completed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the entry does not exist.
    pub async fn complete_entry(&self, uuid: Uuid) -> Result<GateEntry, AppError> {
        let entry = self
            .repository
            .complete(uuid)
            .await?
            .ok_or_else(|| entry_not_found(uuid))?;

        tracing::info!(uuid = %uuid, "Gate entry completed");
        Ok(entry)
    }
}

fn entry_not_found(uuid: Uuid) -> AppError {
    AppError::not_found("Gate entry not found", json!({ "uuid": uuid }))
}
