//! Veloclub Members
//!
//! Member roles and the permission lookup behind the member-facing views:
//!
//! - **AppRole**: the club's role ladder with display labels and badge styling
//! - **RoleStore**: read-only seam over the remote role records
//! - **MemberAccess**: resolved permission flags for the signed-in user
//!
//! Lookup failures never propagate to the views; they resolve to "no elevated
//! permissions" and a log line.

pub mod access;
pub mod role;
pub mod store;

pub use access::MemberAccess;
pub use role::{AppRole, RoleBadgeVariant};
pub use store::{RoleRecord, RoleStore, RoleStoreError, UserId};
