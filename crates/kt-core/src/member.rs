//! Member identity as resolved by the directory lookup.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A member resolved from the directory.
///
/// This is also the wire shape of a successful lookup response. The record
/// is held by a session for the duration of one editing interaction and is
/// not cached beyond it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRef {
    /// Stable member identifier.
    pub uuid: Uuid,
    /// Display name.
    pub full_name: String,
    /// Issued member number, free-form digits such as `"0042"`.
    pub member_number: String,
}

impl MemberRef {
    /// Builds a member record from its parts.
    pub fn new(uuid: Uuid, full_name: impl Into<String>, member_number: impl Into<String>) -> Self {
        Self {
            uuid,
            full_name: full_name.into(),
            member_number: member_number.into(),
        }
    }
}
