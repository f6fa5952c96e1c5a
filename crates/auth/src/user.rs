//! User account read model.
//!
//! The backend is the sole source of truth for user records; the console
//! only re-fetches, never mutates locally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use warden_core::UserId;

use crate::role::Role;

/// Account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Suspended,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Suspended => "suspended",
        }
    }
}

impl core::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user account, as returned by `GET /auth/me` and the users endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub status: UserStatus,
    pub is_active: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn account(role: Role) -> UserAccount {
        UserAccount {
            id: UserId::new(),
            username: "jdoe".to_string(),
            email: "jdoe@example.com".to_string(),
            full_name: "Jane Doe".to_string(),
            role,
            status: UserStatus::Active,
            is_active: true,
            last_login: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn deserializes_backend_shape() {
        let json = serde_json::json!({
            "id": UserId::new(),
            "username": "admin",
            "email": "admin@example.com",
            "full_name": "Administrator",
            "role": "admin",
            "status": "active",
            "is_active": true,
            "last_login": "2026-08-27T08:00:00Z",
            "created_at": "2026-01-01T00:00:00Z",
        });
        let user: UserAccount = serde_json::from_value(json).unwrap();
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.status, UserStatus::Active);
    }

    #[test]
    fn status_round_trips() {
        let acc = account(Role::Auditor);
        let json = serde_json::to_value(&acc).unwrap();
        assert_eq!(json["role"], "auditor");
        assert_eq!(json["status"], "active");
    }
}
