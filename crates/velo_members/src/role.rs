//! Club roles
//!
//! The role ladder and its presentation table. Pure data: labels and badge
//! variants for each role, no behavior beyond the mappings.

use serde::{Deserialize, Serialize};

/// A member's role within the club
///
/// Wire names match the remote role records (`pending`, `member`,
/// `active_member`, `admin`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppRole {
    /// Registered but not yet approved
    Pending,
    /// Approved club member
    Member,
    /// Member in good standing for the current season
    ActiveMember,
    /// Club administrator
    Admin,
}

/// Badge visual variants for role indicators
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoleBadgeVariant {
    /// Default badge - primary color
    #[default]
    Default,
    /// Secondary badge - muted
    Secondary,
    /// Success badge - green
    Success,
    /// Destructive badge - red
    Destructive,
}

impl AppRole {
    /// Human-readable label shown next to the member's name
    pub fn label(&self) -> &'static str {
        match self {
            AppRole::Pending => "Pending",
            AppRole::Member => "Member",
            AppRole::ActiveMember => "Active Member",
            AppRole::Admin => "Admin",
        }
    }

    /// Badge variant used when rendering the role indicator
    pub fn badge_variant(&self) -> RoleBadgeVariant {
        match self {
            AppRole::Pending => RoleBadgeVariant::Secondary,
            AppRole::Member => RoleBadgeVariant::Default,
            AppRole::ActiveMember => RoleBadgeVariant::Success,
            AppRole::Admin => RoleBadgeVariant::Destructive,
        }
    }
}
