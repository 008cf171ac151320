//! Shared API types for the CashBook backend.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// Batch delete request body: a set of record ids.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub ids: Vec<Uuid>,
}

/// Batch delete outcome. Ids that matched nothing are ignored, so
/// `deleted` may be smaller than the requested set.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub deleted: u64,
}
