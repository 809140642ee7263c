//! Offset/limit query parameters.

use serde::Deserialize;
use serde_json::json;

use crate::error::AppError;

/// Bounds applied to `limit` by the HTTP layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_limit: i64,
    pub max_limit: i64,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_limit: 10,
            max_limit: 100,
        }
    }
}

/// `?skip=N&limit=M` query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub skip: Option<i64>,

    #[serde(default)]
    pub limit: Option<i64>,
}

impl ListParams {
    /// Validates the parameters and returns the `(offset, limit)` pair.
    ///
    /// # Defaults
    ///
    /// - `skip`: 0
    /// - `limit`: `limits.default_limit`
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `skip` is negative or `limit` is
    /// outside `1..=limits.max_limit`.
    pub fn validate_and_get_offset_limit(&self, limits: PageLimits) -> Result<(i64, i64), AppError> {
        let skip = self.skip.unwrap_or(0);
        let limit = self.limit.unwrap_or(limits.default_limit);

        if skip < 0 {
            return Err(AppError::bad_request(
                "skip must not be negative",
                json!({ "skip": skip }),
            ));
        }

        if !(1..=limits.max_limit).contains(&limit) {
            return Err(AppError::bad_request(
                format!("limit must be between 1 and {}", limits.max_limit),
                json!({ "limit": limit, "max": limits.max_limit }),
            ));
        }

        Ok((skip, limit))
    }
}
