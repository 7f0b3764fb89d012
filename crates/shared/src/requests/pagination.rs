use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query string of `GET /api/v2/pokemon`.
///
/// Absent values fall back to the server's configured defaults.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct PaginationQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "limit must be a positive number"))]
    pub limit: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
}
