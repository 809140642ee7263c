//! Gate entry entity and its status state machine.
//!
//! A gate entry records a vehicle registering at a site gate. Its status
//! moves from [`GateStatus::Released`] to [`GateStatus::Completed`] and never
//! back.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Lifecycle state of a gate entry, stored as its integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateStatus {
    #[default]
    Released,
    Completed,
}

impl GateStatus {
    pub const RELEASED_CODE: i32 = 0;
    pub const COMPLETED_CODE: i32 = 9;

    /// Integer code persisted in `gate_entry.status`.
    pub fn code(self) -> i32 {
        match self {
            GateStatus::Released => Self::RELEASED_CODE,
            GateStatus::Completed => Self::COMPLETED_CODE,
        }
    }

    /// Returns whether an entry in this state may be moved to `next`.
    ///
    /// Completed is terminal: only Completed -> Completed is allowed from it.
    pub fn can_transition_to(self, next: GateStatus) -> bool {
        !matches!((self, next), (GateStatus::Completed, GateStatus::Released))
    }

    /// Returns `next` if the move is allowed.
    pub fn transition_to(self, next: GateStatus) -> Result<GateStatus, InvalidTransition> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(InvalidTransition {
                from: self,
                to: next,
            })
        }
    }

    pub fn is_terminal(self) -> bool {
        self == GateStatus::Completed
    }
}

/// A status change that would leave the terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot move gate entry from status {} to {}", .from.code(), .to.code())]
pub struct InvalidTransition {
    pub from: GateStatus,
    pub to: GateStatus,
}

/// Error returned for integer codes outside the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error(
    "unknown gate status code {0} (expected {released} or {completed})",
    released = GateStatus::RELEASED_CODE,
    completed = GateStatus::COMPLETED_CODE
)]
pub struct UnknownGateStatus(pub i32);

impl TryFrom<i32> for GateStatus {
    type Error = UnknownGateStatus;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            Self::RELEASED_CODE => Ok(GateStatus::Released),
            Self::COMPLETED_CODE => Ok(GateStatus::Completed),
            other => Err(UnknownGateStatus(other)),
        }
    }
}

impl From<GateStatus> for i32 {
    fn from(status: GateStatus) -> Self {
        status.code()
    }
}

/// A persisted gate entry, keyed by a generated UUID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateEntry {
    pub uuid: Uuid,
    pub site_id: i32,
    pub status: GateStatus,
    pub vehicle_license_plate: String,
    pub driver_id: Option<String>,
    pub register_dstamp: DateTime<Utc>,
    pub entry_dstamp: DateTime<Utc>,
    pub linein_dstamp: Option<DateTime<Utc>>,
    pub plan_entry_time: Option<String>,
    pub route_id: Option<i32>,
    pub phone_no: Option<String>,
}

/// Input data for creating a gate entry.
///
/// Timestamps left as `None` default to the creation time in the store.
#[derive(Debug, Clone, Default)]
pub struct NewGateEntry {
    pub site_id: i32,
    pub status: GateStatus,
    pub vehicle_license_plate: String,
    pub driver_id: Option<String>,
    pub register_dstamp: Option<DateTime<Utc>>,
    pub entry_dstamp: Option<DateTime<Utc>>,
    pub linein_dstamp: Option<DateTime<Utc>>,
    pub plan_entry_time: Option<String>,
    pub route_id: Option<i32>,
    pub phone_no: Option<String>,
}

/// Partial update for an existing gate entry.
#[derive(Debug, Clone, Default)]
pub struct GateEntryPatch {
    pub site_id: Option<i32>,
    pub status: Option<GateStatus>,
    pub vehicle_license_plate: Option<String>,
    pub driver_id: Option<Option<String>>,
    pub register_dstamp: Option<DateTime<Utc>>,
    pub entry_dstamp: Option<DateTime<Utc>>,
    pub linein_dstamp: Option<Option<DateTime<Utc>>>,
    pub plan_entry_time: Option<Option<String>>,
    pub route_id: Option<Option<i32>>,
    pub phone_no: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(GateStatus::Released.code(), 0);
        assert_eq!(GateStatus::Completed.code(), 9);
        assert_eq!(GateStatus::default(), GateStatus::Released);
    }

    #[test]
    fn test_status_from_code() {
        assert_eq!(GateStatus::try_from(0), Ok(GateStatus::Released));
        assert_eq!(GateStatus::try_from(9), Ok(GateStatus::Completed));
        assert_eq!(GateStatus::try_from(5), Err(UnknownGateStatus(5)));
        assert_eq!(GateStatus::try_from(-1), Err(UnknownGateStatus(-1)));
    }

    #[test]
    fn test_transitions() {
        use GateStatus::*;

        assert!(Released.can_transition_to(Released));
        assert!(Released.can_transition_to(Completed));
        assert!(Completed.can_transition_to(Completed));
        assert!(!Completed.can_transition_to(Released));

        assert_eq!(Released.transition_to(Completed), Ok(Completed));
        assert_eq!(
            Completed.transition_to(Released),
            Err(InvalidTransition {
                from: Completed,
                to: Released
            })
        );
    }

    #[test]
    fn test_terminal() {
        assert!(GateStatus::Completed.is_terminal());
        assert!(!GateStatus::Released.is_terminal());
    }

    #[test]
    fn test_unknown_status_message() {
        assert_eq!(
            UnknownGateStatus(3).to_string(),
            "unknown gate status code 3 (expected 0 or 9)"
        );
    }

    #[test]
    fn test_invalid_transition_message() {
        let err = GateStatus::Completed
            .transition_to(GateStatus::Released)
            .unwrap_err();

        assert_eq!(err.to_string(), "cannot move gate entry from status 9 to 0");
    }
}
