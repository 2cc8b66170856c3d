//! User roles and their default landing pages.

use serde::{Deserialize, Serialize};

/// Roles recognized by the platform.
///
/// The backend reports roles as PascalCase strings. Anything the frontend
/// does not recognize deserializes as [`Role::Unknown`] instead of failing
/// the whole profile fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Instructor,
    Student,
    #[serde(other)]
    Unknown,
}

impl Role {
    /// The single authoritative role -> landing page table.
    ///
    /// Consumed by the route guard and by post-login navigation so the two
    /// can never disagree. Unrecognized roles land on the login page.
    pub const fn landing_path(self) -> &'static str {
        match self {
            Role::Admin => "/admin/dashboard",
            Role::Instructor => "/instructor/dashboard",
            Role::Student => "/student/dashboard",
            Role::Unknown => "/login",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Instructor => "Instructor",
            Role::Student => "Student",
            Role::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_paths_are_role_specific() {
        assert_eq!(Role::Admin.landing_path(), "/admin/dashboard");
        assert_eq!(Role::Instructor.landing_path(), "/instructor/dashboard");
        assert_eq!(Role::Student.landing_path(), "/student/dashboard");
        assert_eq!(Role::Unknown.landing_path(), "/login");
    }

    #[test]
    fn unrecognized_role_deserializes_as_unknown() {
        let role: Role = serde_json::from_str("\"Moderator\"").unwrap();
        assert_eq!(role, Role::Unknown);

        let role: Role = serde_json::from_str("\"Instructor\"").unwrap();
        assert_eq!(role, Role::Instructor);
    }
}
