//! Request and response bodies of the schedule endpoints.
//!
//! A successful lookup response is a bare [`MemberRef`]; a successful
//! fetch response is a bare [`ScheduleMap`](crate::ScheduleMap). The
//! remaining shapes live here.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schedule_map::ScheduleMap;

/// Body of the member lookup request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRequest {
    /// Free-text query: a member number, or a member UUID from the QR
    /// code path.
    pub query: String,
}

/// Body of the schedule fetch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRequest {
    /// Member whose schedule to fetch.
    pub uuid: Uuid,
}

/// Body of the bulk save request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRequest {
    /// Member whose schedule to replace.
    pub uuid: Uuid,
    /// The full availability map, explicit unsets included.
    pub schedules: ScheduleMap,
}

/// Acknowledgement of a successful save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponse {
    /// Always `"ok"` on success.
    pub status: String,
    /// Confirmation message shown to the member.
    pub message: String,
}

impl SaveResponse {
    /// The standard success acknowledgement.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok".to_owned(),
            message: "保存しました".to_owned(),
        }
    }
}

/// Error envelope returned by any endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message, already localized.
    pub error: String,
}
