//! Render/fetch decision behind the route guards.
//!
//! Kept out of the wasm-only frontend so the decision itself is testable on
//! the host: a section that is not granted must never issue its resource
//! fetch.

use warden_auth::{AuthPhase, Permission, Role};

/// What a permission-guarded section may do for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionAccess {
    /// Startup check still running: spinner, nothing protected.
    Pending,
    /// No session: route to login, render nothing.
    SignIn,
    /// Session is valid but the role lacks the permission: access-denied
    /// notice, no fetch.
    Denied,
    /// Render the section and let it fetch.
    Granted,
}

impl SectionAccess {
    /// Only a granted section may issue its resource fetch.
    pub fn may_fetch(&self) -> bool {
        matches!(self, SectionAccess::Granted)
    }
}

/// Decide what a section guarded by `permission` may do.
pub fn section_access(
    phase: AuthPhase,
    role: Option<Role>,
    permission: Permission,
) -> SectionAccess {
    match phase {
        AuthPhase::Unknown => SectionAccess::Pending,
        AuthPhase::Unauthenticated => SectionAccess::SignIn,
        AuthPhase::Authenticated => match role {
            Some(role) if role.grants(permission) => SectionAccess::Granted,
            _ => SectionAccess::Denied,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auditor_on_the_users_section_is_denied_and_fetches_nothing() {
        let access = section_access(
            AuthPhase::Authenticated,
            Some(Role::Auditor),
            Permission::ManageUsers,
        );
        assert_eq!(access, SectionAccess::Denied);
        assert!(!access.may_fetch());
    }

    #[test]
    fn technician_reaches_the_clients_section() {
        let access = section_access(
            AuthPhase::Authenticated,
            Some(Role::Technician),
            Permission::ManageClients,
        );
        assert_eq!(access, SectionAccess::Granted);
        assert!(access.may_fetch());
    }

    #[test]
    fn nothing_fetches_before_the_startup_check_settles() {
        let access = section_access(AuthPhase::Unknown, None, Permission::ViewAuditLogs);
        assert_eq!(access, SectionAccess::Pending);
        assert!(!access.may_fetch());
    }

    #[test]
    fn a_dead_session_routes_to_login_even_with_a_stale_role() {
        // The role is cleared with the session, but even a stale value must
        // not grant anything once the phase says unauthenticated.
        let access = section_access(
            AuthPhase::Unauthenticated,
            Some(Role::Admin),
            Permission::ManageUsers,
        );
        assert_eq!(access, SectionAccess::SignIn);
        assert!(!access.may_fetch());
    }

    #[test]
    fn a_session_without_a_loaded_user_is_denied() {
        let access = section_access(AuthPhase::Authenticated, None, Permission::ViewAuditLogs);
        assert_eq!(access, SectionAccess::Denied);
        assert!(!access.may_fetch());
    }
}
