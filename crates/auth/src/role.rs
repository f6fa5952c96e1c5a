//! Role enumeration used for RBAC.
//!
//! Roles form a closed set; permission mapping is total over this enum and
//! checked exhaustively at compile time.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The three console roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full administrative access.
    Admin,
    /// Operates clients and tasks; no user administration, no export.
    Technician,
    /// Read-only access to the audit trail plus export.
    Auditor,
}

/// Error returned when parsing an unknown role string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl Role {
    /// All roles, for table-driven checks and role pickers.
    pub const ALL: [Role; 3] = [Role::Admin, Role::Technician, Role::Auditor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Technician => "technician",
            Role::Auditor => "auditor",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "technician" => Ok(Role::Technician),
            "auditor" => Ok(Role::Auditor),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_str() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Role::Technician).unwrap(), "\"technician\"");
        let parsed: Role = serde_json::from_str("\"auditor\"").unwrap();
        assert_eq!(parsed, Role::Auditor);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let err = "operator".parse::<Role>().unwrap_err();
        assert_eq!(err.0, "operator");
    }
}
