//! Route access policy.
//!
//! The guard component delegates its decision here so the policy can be
//! exercised without a browser: given the session resolution state, the
//! session's roles, and the roles a route permits, decide what to render.

use crate::role::Role;

/// Outcome of evaluating a protected route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// Session resolution is still in flight; render a neutral loading view
    /// and do not redirect yet.
    Pending,
    /// No session; send the user to the login page, remembering where they
    /// were headed.
    SignIn { return_to: Option<String> },
    /// Authenticated but not permitted here; send them to their own landing
    /// page instead.
    Landing(&'static str),
    /// Render the protected content.
    Grant,
}

/// Evaluate access for one protected route render.
///
/// `permitted` empty means any authenticated user may enter. A session whose
/// roles do not intersect `permitted` is redirected to the landing page of
/// its first recognized role, or to login when no role is recognized.
pub fn evaluate(
    resolving: bool,
    session_roles: Option<&[Role]>,
    permitted: &[Role],
    requested_path: Option<&str>,
) -> Access {
    if resolving {
        return Access::Pending;
    }

    let Some(roles) = session_roles else {
        return Access::SignIn {
            return_to: requested_path.map(str::to_string),
        };
    };

    if permitted.is_empty() || roles.iter().any(|role| permitted.contains(role)) {
        return Access::Grant;
    }

    let landing = roles
        .iter()
        .find(|role| **role != Role::Unknown)
        .copied()
        .unwrap_or(Role::Unknown)
        .landing_path();
    Access::Landing(landing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_session_never_redirects() {
        let access = evaluate(true, None, &[Role::Admin], Some("/admin/dashboard"));
        assert_eq!(access, Access::Pending);
    }

    #[test]
    fn missing_session_redirects_to_login_with_return_path() {
        let access = evaluate(false, None, &[], Some("/courses/42"));
        assert_eq!(
            access,
            Access::SignIn {
                return_to: Some("/courses/42".to_string())
            }
        );
    }

    #[test]
    fn role_mismatch_lands_on_own_dashboard_not_login() {
        let access = evaluate(false, Some(&[Role::Instructor]), &[Role::Admin], None);
        assert_eq!(access, Access::Landing("/instructor/dashboard"));
    }

    #[test]
    fn intersecting_role_grants_access() {
        let access = evaluate(
            false,
            Some(&[Role::Student]),
            &[Role::Student, Role::Instructor],
            None,
        );
        assert_eq!(access, Access::Grant);
    }

    #[test]
    fn empty_permitted_set_means_any_authenticated_role() {
        let access = evaluate(false, Some(&[Role::Unknown]), &[], None);
        assert_eq!(access, Access::Grant);
    }

    #[test]
    fn unrecognized_role_mismatch_falls_back_to_login() {
        let access = evaluate(false, Some(&[Role::Unknown]), &[Role::Admin], None);
        assert_eq!(access, Access::Landing("/login"));
    }

    #[test]
    fn roleless_session_mismatch_falls_back_to_login() {
        let access = evaluate(false, Some(&[]), &[Role::Admin], None);
        assert_eq!(access, Access::Landing("/login"));
    }
}
