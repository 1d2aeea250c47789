use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Account role.
///
/// This is a closed set: routing policies, navigation filtering, and the
/// directory all match exhaustively on it, so adding a role is a
/// compile-checked change rather than a string hunt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Student,
    Teacher,
    AdminStudent,
    AdminTeacher,
    Superadmin,
}

impl Role {
    /// Wire form, as stored in serialized sessions.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "STUDENT",
            Role::Teacher => "TEACHER",
            Role::AdminStudent => "ADMIN_STUDENT",
            Role::AdminTeacher => "ADMIN_TEACHER",
            Role::Superadmin => "SUPERADMIN",
        }
    }

    /// Human-readable form for badges and headings.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Teacher => "Teacher",
            Role::AdminStudent => "Admin (Student Manager)",
            Role::AdminTeacher => "Admin (Teacher Manager)",
            Role::Superadmin => "Super Admin",
        }
    }

    /// Roles offered on the public signup form. Admin roles are provisioned
    /// out of band and can never be self-registered.
    pub fn self_signup() -> [Role; 2] {
        [Role::Student, Role::Teacher]
    }

    /// Whether an account with this role may be created through signup.
    pub fn can_self_signup(&self) -> bool {
        matches!(self, Role::Student | Role::Teacher)
    }

    pub fn all() -> [Role; 5] {
        [
            Role::Student,
            Role::Teacher,
            Role::AdminStudent,
            Role::AdminTeacher,
            Role::Superadmin,
        ]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "STUDENT" => Ok(Role::Student),
            "TEACHER" => Ok(Role::Teacher),
            "ADMIN_STUDENT" => Ok(Role::AdminStudent),
            "ADMIN_TEACHER" => Ok(Role::AdminTeacher),
            "SUPERADMIN" => Ok(Role::Superadmin),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_string_representation() {
        // Display matches the wire form
        assert_eq!(Role::Student.to_string(), "STUDENT");
        assert_eq!(Role::AdminStudent.to_string(), "ADMIN_STUDENT");
        assert_eq!(Role::AdminTeacher.to_string(), "ADMIN_TEACHER");
        assert_eq!(Role::Superadmin.to_string(), "SUPERADMIN");

        // FromStr round-trips, case-insensitively
        for role in Role::all() {
            assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
            assert_eq!(Role::from_str(&role.as_str().to_lowercase()).unwrap(), role);
        }

        // Unknown roles are rejected, not smuggled in as a fallback variant
        assert!(Role::from_str("WIZARD").is_err());
        assert!(Role::from_str("").is_err());
    }

    #[test]
    fn test_role_serde_wire_format() {
        assert_eq!(serde_json::to_string(&Role::AdminTeacher).unwrap(), "\"ADMIN_TEACHER\"");
        assert_eq!(serde_json::from_str::<Role>("\"SUPERADMIN\"").unwrap(), Role::Superadmin);
        assert!(serde_json::from_str::<Role>("\"GUEST\"").is_err());
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::AdminStudent.label(), "Admin (Student Manager)");
        assert_eq!(Role::Superadmin.label(), "Super Admin");
    }

    #[test]
    fn test_self_signup_set() {
        assert_eq!(Role::self_signup(), [Role::Student, Role::Teacher]);
        assert!(Role::Student.can_self_signup());
        assert!(Role::Teacher.can_self_signup());
        assert!(!Role::AdminStudent.can_self_signup());
        assert!(!Role::AdminTeacher.can_self_signup());
        assert!(!Role::Superadmin.can_self_signup());
    }
}
