//! DTO for delete endpoints.

use serde::Serialize;

/// Response for `DELETE /heros/{id}` and `DELETE /teams/{id}`.
///
/// Deleting an id that does not exist is not an error: `count` is 0.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub count: u64,
}

impl DeleteResponse {
    pub fn heroes(count: u64) -> Self {
        Self {
            message: format!("Deleted {count} hero(es)"),
            count,
        }
    }

    pub fn teams(count: u64) -> Self {
        Self {
            message: format!("Deleted {count} team(s)"),
            count,
        }
    }
}
