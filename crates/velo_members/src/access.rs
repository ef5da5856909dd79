//! Member access resolution
//!
//! Resolves the signed-in user to a set of permission flags. A missing user,
//! a missing record, and a failed lookup all collapse to the same state: no
//! role, no elevated permissions, not loading.

use crate::role::AppRole;
use crate::store::{RoleStore, UserId};

/// Resolved permissions for the current user
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemberAccess {
    role: Option<AppRole>,
    loading: bool,
}

impl MemberAccess {
    /// The state before any lookup has resolved
    pub fn loading() -> Self {
        Self {
            role: None,
            loading: true,
        }
    }

    /// The signed-out / no-record state
    pub fn anonymous() -> Self {
        Self {
            role: None,
            loading: false,
        }
    }

    /// Resolve access for `user` against the role store
    ///
    /// Lookup failures are logged and degrade to [`anonymous`](Self::anonymous);
    /// the views render "no elevated permissions", never an error state.
    pub fn lookup(store: &dyn RoleStore, user: Option<&UserId>) -> Self {
        let Some(user) = user else {
            return Self::anonymous();
        };

        match store.fetch_role(user) {
            Ok(Some(record)) => Self {
                role: Some(record.role),
                loading: false,
            },
            Ok(None) => Self::anonymous(),
            Err(err) => {
                tracing::warn!(user = user.as_str(), error = %err, "role lookup failed");
                Self::anonymous()
            }
        }
    }

    pub fn role(&self) -> Option<AppRole> {
        self.role
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Club administrator
    pub fn is_admin(&self) -> bool {
        self.role == Some(AppRole::Admin)
    }

    /// Approved member (any standing); admins hold a membership too
    pub fn is_member(&self) -> bool {
        matches!(
            self.role,
            Some(AppRole::Member) | Some(AppRole::ActiveMember) | Some(AppRole::Admin)
        )
    }

    /// May create club events: active members and admins
    pub fn can_create_events(&self) -> bool {
        matches!(self.role, Some(AppRole::ActiveMember) | Some(AppRole::Admin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{RoleRecord, RoleStoreError};

    struct FixedStore(Result<Option<RoleRecord>, RoleStoreError>);

    impl RoleStore for FixedStore {
        fn fetch_role(&self, _user: &UserId) -> Result<Option<RoleRecord>, RoleStoreError> {
            self.0.clone()
        }
    }

    fn resolve(result: Result<Option<RoleRecord>, RoleStoreError>) -> MemberAccess {
        let user = UserId::from("user-1");
        MemberAccess::lookup(&FixedStore(result), Some(&user))
    }

    #[test]
    fn test_no_record_yields_no_permissions() {
        let access = resolve(Ok(None));
        assert_eq!(access.role(), None);
        assert!(!access.is_admin());
        assert!(!access.is_member());
        assert!(!access.can_create_events());
        assert!(!access.is_loading());
    }

    #[test]
    fn test_no_user_yields_no_permissions() {
        let store = FixedStore(Ok(Some(RoleRecord {
            role: AppRole::Admin,
        })));
        let access = MemberAccess::lookup(&store, None);
        assert_eq!(access.role(), None);
        assert!(!access.is_admin());
    }

    #[test]
    fn test_lookup_failure_degrades_silently() {
        let access = resolve(Err(RoleStoreError::Unavailable("offline".into())));
        assert_eq!(access.role(), None);
        assert!(!access.is_member());
        assert!(!access.is_loading());
    }

    #[test]
    fn test_active_member_flags() {
        let access = resolve(Ok(Some(RoleRecord {
            role: AppRole::ActiveMember,
        })));
        assert!(access.is_member());
        assert!(access.can_create_events());
        assert!(!access.is_admin());
    }

    #[test]
    fn test_flag_matrix() {
        // (role, is_admin, is_member, can_create_events)
        let cases = [
            (AppRole::Pending, false, false, false),
            (AppRole::Member, false, true, false),
            (AppRole::ActiveMember, false, true, true),
            (AppRole::Admin, true, true, true),
        ];
        for (role, admin, member, create) in cases {
            let access = resolve(Ok(Some(RoleRecord { role })));
            assert_eq!(access.is_admin(), admin, "{role:?}");
            assert_eq!(access.is_member(), member, "{role:?}");
            assert_eq!(access.can_create_events(), create, "{role:?}");
        }
    }

    #[test]
    fn test_loading_state() {
        let access = MemberAccess::loading();
        assert!(access.is_loading());
        assert_eq!(access.role(), None);
        assert!(!access.is_member());
    }
}
