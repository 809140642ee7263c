//! DTOs for gate entry endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::{GateEntry, GateEntryPatch, GateStatus, NewGateEntry};
use crate::error::AppError;

fn parse_status(code: i32) -> Result<GateStatus, AppError> {
    GateStatus::try_from(code).map_err(|e| {
        AppError::bad_request(
            "Invalid gate entry status",
            json!({ "status": code, "reason": e.to_string() }),
        )
    })
}

/// Request body for `POST /gate_entries`.
///
/// `status` defaults to 0 (Released). `register_dstamp` and `entry_dstamp`
/// default to the creation time.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateGateEntryRequest {
    pub site_id: i32,

    pub status: Option<i32>,

    #[validate(length(min = 1, max = 9, message = "vehicle_license_plate must be 1-9 characters"))]
    pub vehicle_license_plate: String,

    #[validate(length(max = 12, message = "driver_id must be at most 12 characters"))]
    pub driver_id: Option<String>,

    pub register_dstamp: Option<DateTime<Utc>>,

    pub entry_dstamp: Option<DateTime<Utc>>,

    pub linein_dstamp: Option<DateTime<Utc>>,

    #[validate(length(max = 4, message = "plan_entry_time must be at most 4 characters"))]
    pub plan_entry_time: Option<String>,

    pub route_id: Option<i32>,

    #[validate(length(max = 15, message = "phone_no must be at most 15 characters"))]
    pub phone_no: Option<String>,
}

impl TryFrom<CreateGateEntryRequest> for NewGateEntry {
    type Error = AppError;

    fn try_from(r: CreateGateEntryRequest) -> Result<Self, Self::Error> {
        let status = r.status.map(parse_status).transpose()?.unwrap_or_default();

        Ok(NewGateEntry {
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

/// Request body for `PATCH /gate_entries/{uuid}`.
///
/// Only fields present in the JSON are changed. Nullable columns accept
/// `null` to clear the stored value.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateGateEntryRequest {
    pub site_id: Option<i32>,

    pub status: Option<i32>,

    #[validate(length(min = 1, max = 9, message = "vehicle_license_plate must be 1-9 characters"))]
    pub vehicle_license_plate: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 12, message = "driver_id must be at most 12 characters"))]
    pub driver_id: Option<Option<String>>,

    pub register_dstamp: Option<DateTime<Utc>>,

    pub entry_dstamp: Option<DateTime<Utc>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub linein_dstamp: Option<Option<DateTime<Utc>>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 4, message = "plan_entry_time must be at most 4 characters"))]
    pub plan_entry_time: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub route_id: Option<Option<i32>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 15, message = "phone_no must be at most 15 characters"))]
    pub phone_no: Option<Option<String>>,
}

impl TryFrom<UpdateGateEntryRequest> for GateEntryPatch {
    type Error = AppError;

    fn try_from(r: UpdateGateEntryRequest) -> Result<Self, Self::Error> {
        Ok(GateEntryPatch {
            site_id: r.site_id,
            status: r.status.map(parse_status).transpose()?,
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

/// Query parameters for `GET /gate_entries/search`.
///
/// `date` is parsed so that malformed dates are still rejected, but it does
/// not restrict the results.
#[derive(Debug, Default, Deserialize)]
pub struct GateEntrySearchParams {
    pub filter: Option<String>,
    pub date: Option<NaiveDate>,
}

/// JSON representation of a gate entry. `status` is the integer code.
#[derive(Debug, Serialize)]
pub struct GateEntryResponse {
    pub uuid: Uuid,
    pub site_id: i32,
    pub status: i32,
    pub vehicle_license_plate: String,
    pub driver_id: Option<String>,
    pub register_dstamp: DateTime<Utc>,
    pub entry_dstamp: DateTime<Utc>,
    pub linein_dstamp: Option<DateTime<Utc>>,
    pub plan_entry_time: Option<String>,
    pub route_id: Option<i32>,
    pub phone_no: Option<String>,
}

impl From<GateEntry> for GateEntryResponse {
    fn from(e: GateEntry) -> Self {
        GateEntryResponse {
            uuid: e.uuid,
            site_id: e.site_id,
            status: e.status.code(),
            vehicle_license_plate: e.vehicle_license_plate,
            driver_id: e.driver_id,
            register_dstamp: e.register_dstamp,
            entry_dstamp: e.entry_dstamp,
            linein_dstamp: e.linein_dstamp,
            plan_entry_time: e.plan_entry_time,
            route_id: e.route_id,
            phone_no: e.phone_no,
        }
    }
}
