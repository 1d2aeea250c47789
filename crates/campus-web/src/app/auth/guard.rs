//! Role-based route protection.
//!
//! Every route declares a [`RoutePolicy`]; [`evaluate`] turns that policy
//! and the current role into a navigation decision. The dashboard layout
//! applies the decision before rendering anything protected, and the
//! navigation shell reuses it to hide links the role cannot follow.

use campus_types::roles::Role;

/// Who may visit a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoutePolicy {
    /// No session needed.
    Public,
    /// Any signed-in account.
    Authenticated,
    /// Signed in and holding one of the listed roles.
    AnyOf(&'static [Role]),
}

/// What the router should do with a visit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    /// Anonymous visitor on a protected route.
    RedirectLogin,
    /// Signed in, but the role does not grant this route.
    RedirectForbidden,
}

/// Decide whether `role` may visit a route carrying `policy`. Anonymous
/// visitors are always sent to login, never to the forbidden page.
pub fn evaluate(policy: RoutePolicy, role: Option<Role>) -> GuardOutcome {
    match policy {
        RoutePolicy::Public => GuardOutcome::Allow,
        RoutePolicy::Authenticated => match role {
            Some(_) => GuardOutcome::Allow,
            None => GuardOutcome::RedirectLogin,
        },
        RoutePolicy::AnyOf(allowed) => match role {
            None => GuardOutcome::RedirectLogin,
            Some(role) if allowed.contains(&role) => GuardOutcome::Allow,
            Some(_) => GuardOutcome::RedirectForbidden,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_routes_allow_anonymous_visitors() {
        assert_eq!(evaluate(RoutePolicy::Public, None), GuardOutcome::Allow);
        assert_eq!(evaluate(RoutePolicy::Public, Some(Role::Student)), GuardOutcome::Allow);
    }

    #[test]
    fn test_authenticated_routes_redirect_anonymous_to_login() {
        assert_eq!(evaluate(RoutePolicy::Authenticated, None), GuardOutcome::RedirectLogin);
    }

    #[test]
    fn test_authenticated_routes_accept_every_role() {
        for role in Role::all() {
            assert_eq!(evaluate(RoutePolicy::Authenticated, Some(role)), GuardOutcome::Allow);
        }
    }

    #[test]
    fn test_role_restricted_routes_check_membership() {
        let policy = RoutePolicy::AnyOf(&[Role::AdminStudent, Role::Superadmin]);

        assert_eq!(evaluate(policy, Some(Role::AdminStudent)), GuardOutcome::Allow);
        assert_eq!(evaluate(policy, Some(Role::Superadmin)), GuardOutcome::Allow);
        assert_eq!(evaluate(policy, Some(Role::Student)), GuardOutcome::RedirectForbidden);
        assert_eq!(evaluate(policy, Some(Role::AdminTeacher)), GuardOutcome::RedirectForbidden);
    }

    #[test]
    fn test_anonymous_visitors_get_login_not_forbidden() {
        let policy = RoutePolicy::AnyOf(&[Role::Teacher]);
        assert_eq!(evaluate(policy, None), GuardOutcome::RedirectLogin);
    }
}
