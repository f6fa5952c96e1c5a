//! Request DTOs and client-side validation.
//!
//! Required-field validation happens here, before any network call; the
//! backend remains the authority on everything else.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use warden_auth::Role;
use warden_core::{ApiError, ApiResult, ClientId, Severity};

/// Payload for `POST /users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub role: Role,
}

impl NewUser {
    pub fn validate(&self) -> ApiResult<()> {
        if self.username.trim().is_empty() {
            return Err(ApiError::validation("username must not be empty"));
        }
        if !self.email.contains('@') {
            return Err(ApiError::validation("email address is not valid"));
        }
        if self.password.len() < 8 {
            return Err(ApiError::validation("password must be at least 8 characters"));
        }
        Ok(())
    }
}

/// Payload for `PUT /users/:id`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Summary from `GET /users/stats/summary`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct UserStats {
    pub total: u64,
    pub active: u64,
    pub admins: u64,
    pub technicians: u64,
    pub auditors: u64,
}

/// Payload for `PUT /clients/:id`. Managed clients are enrolled by the
/// agent; the console only adjusts metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateClient {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Payload for `POST /tasks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTask {
    pub client_id: ClientId,
    pub command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u32>,
}

impl NewTask {
    /// Rejected client-side before any network call when the command is
    /// missing.
    pub fn validate(&self) -> ApiResult<()> {
        if self.command.trim().is_empty() {
            return Err(ApiError::validation("command must not be empty"));
        }
        Ok(())
    }
}

/// Active audit filters; only set fields become query parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditFilter {
    pub severity: Option<Severity>,
    pub category: Option<String>,
    pub username: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl AuditFilter {
    /// Query parameters for exactly the filters currently active.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(severity) = self.severity {
            query.push(("severity".to_string(), severity.as_str().to_string()));
        }
        if let Some(category) = &self.category {
            query.push(("category".to_string(), category.clone()));
        }
        if let Some(username) = &self.username {
            query.push(("username".to_string(), username.clone()));
        }
        if let Some(start) = self.start_date {
            query.push(("start_date".to_string(), start.to_rfc3339()));
        }
        if let Some(end) = self.end_date {
            query.push(("end_date".to_string(), end.to_rfc3339()));
        }
        query
    }

    pub fn is_empty(&self) -> bool {
        self.to_query().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn empty_command_is_rejected_before_the_network() {
        let task = NewTask {
            client_id: ClientId::new(),
            command: "   ".to_string(),
            timeout_secs: None,
        };
        let err = task.validate().unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn well_formed_task_passes_validation() {
        let task = NewTask {
            client_id: ClientId::new(),
            command: "Get-Service | Where-Object Status -eq Stopped".to_string(),
            timeout_secs: Some(120),
        };
        assert!(task.validate().is_ok());
    }

    #[test]
    fn new_user_validation_catches_the_basics() {
        let mut user = NewUser {
            username: "jdoe".to_string(),
            email: "jdoe@example.com".to_string(),
            full_name: "Jane Doe".to_string(),
            password: "ChangeMe123!".to_string(),
            role: Role::Technician,
        };
        assert!(user.validate().is_ok());

        user.email = "not-an-email".to_string();
        assert!(user.validate().is_err());
    }

    #[test]
    fn audit_filter_emits_exactly_the_active_parameters() {
        let filter = AuditFilter {
            severity: Some(Severity::Critical),
            start_date: Some(Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap()),
            end_date: Some(Utc.with_ymd_and_hms(2026, 8, 28, 0, 0, 0).unwrap()),
            ..AuditFilter::default()
        };

        let query = filter.to_query();
        let keys: Vec<&str> = query.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["severity", "start_date", "end_date"]);
        assert_eq!(query[0].1, "critical");
    }

    #[test]
    fn default_filter_is_empty() {
        assert!(AuditFilter::default().is_empty());
    }

    #[test]
    fn update_payloads_omit_unset_fields() {
        let update = UpdateUser {
            is_active: Some(false),
            ..UpdateUser::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"is_active": false}));
    }
}
