//! Route table
//!
//! The fixed set of named paths. Pure data plus the single admin gate; the
//! router itself is an external collaborator.

use velo_members::MemberAccess;

/// Named application routes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Register,
    Events,
    Rides,
    Profile,
    Admin,
}

impl AppRoute {
    /// All routes, in navigation order
    pub const ALL: [AppRoute; 6] = [
        AppRoute::Home,
        AppRoute::Register,
        AppRoute::Events,
        AppRoute::Rides,
        AppRoute::Profile,
        AppRoute::Admin,
    ];

    /// The route's path
    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Home => "/",
            AppRoute::Register => "/register",
            AppRoute::Events => "/events",
            AppRoute::Rides => "/rides",
            AppRoute::Profile => "/profile",
            AppRoute::Admin => "/admin",
        }
    }

    /// Whether the signed-in user may navigate here
    ///
    /// Only the admin route is gated; everything else is member-facing.
    pub fn is_accessible(&self, access: &MemberAccess) -> bool {
        match self {
            AppRoute::Admin => access.is_admin(),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use velo_members::{AppRole, RoleRecord, RoleStore, RoleStoreError, UserId};

    struct FixedStore(Option<AppRole>);

    impl RoleStore for FixedStore {
        fn fetch_role(&self, _user: &UserId) -> Result<Option<RoleRecord>, RoleStoreError> {
            Ok(self.0.map(|role| RoleRecord { role }))
        }
    }

    fn access_for(role: Option<AppRole>) -> MemberAccess {
        let user = UserId::from("user-1");
        MemberAccess::lookup(&FixedStore(role), Some(&user))
    }

    #[test]
    fn test_paths_are_fixed() {
        assert_eq!(AppRoute::Home.path(), "/");
        assert_eq!(AppRoute::Register.path(), "/register");
        assert_eq!(AppRoute::Admin.path(), "/admin");
    }

    #[test]
    fn test_paths_are_unique() {
        for (i, a) in AppRoute::ALL.iter().enumerate() {
            for b in &AppRoute::ALL[i + 1..] {
                assert_ne!(a.path(), b.path());
            }
        }
    }

    #[test]
    fn test_admin_route_is_gated() {
        let member = access_for(Some(AppRole::ActiveMember));
        let admin = access_for(Some(AppRole::Admin));

        assert!(!AppRoute::Admin.is_accessible(&member));
        assert!(AppRoute::Admin.is_accessible(&admin));
        assert!(AppRoute::Events.is_accessible(&member));
        assert!(AppRoute::Home.is_accessible(&access_for(None)));
    }
}
