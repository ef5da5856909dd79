//! Role store seam
//!
//! Read-only access to the remote role records, keyed by the opaque
//! authenticated-user identifier. The store returns at most one record per
//! user; callers treat any failure as "no record" (see
//! [`MemberAccess`](crate::access::MemberAccess)).

use crate::role::AppRole;
use serde::{Deserialize, Serialize};

/// Opaque authenticated-user identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A role record as stored remotely
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRecord {
    pub role: AppRole,
}

/// Error type for role store lookups
#[derive(Debug, Clone, thiserror::Error)]
pub enum RoleStoreError {
    /// The store could not be reached
    #[error("role store unavailable: {0}")]
    Unavailable(String),
    /// The store answered with something that isn't a role record
    #[error("malformed role record: {0}")]
    Malformed(String),
}

/// Read-only lookup over the remote role records
///
/// Implementations wrap the remote data-store client. There is no retry
/// policy at this seam; a failed lookup is final for the current view.
pub trait RoleStore {
    /// Fetch the role record for a user, `None` if no record exists
    fn fetch_role(&self, user: &UserId) -> Result<Option<RoleRecord>, RoleStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_record_wire_format() {
        let record: RoleRecord = serde_json::from_str(r#"{"role":"active_member"}"#).unwrap();
        assert_eq!(record.role, AppRole::ActiveMember);
    }

    #[test]
    fn test_user_id_is_opaque_string() {
        let id = UserId::from("auth0|abc123");
        assert_eq!(id.as_str(), "auth0|abc123");
    }
}
