//! Display formatting shared by the pages.

use chrono::{DateTime, Utc};

use warden_auth::{Role, UserStatus};
use warden_core::{ClientStatus, Severity, TaskStatus};

pub const EMPTY_FIELD: &str = "—";

/// Badge modifier class for a client status pill.
pub fn client_badge(status: ClientStatus) -> &'static str {
    match status {
        ClientStatus::Online => "badge-ok",
        ClientStatus::Offline => "badge-muted",
        ClientStatus::Stale => "badge-warn",
    }
}

pub fn task_badge(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "badge-muted",
        TaskStatus::Running => "badge-info",
        TaskStatus::Completed => "badge-ok",
        TaskStatus::Failed => "badge-error",
        TaskStatus::Cancelled => "badge-warn",
    }
}

pub fn severity_badge(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "badge-info",
        Severity::Warning => "badge-warn",
        Severity::Critical => "badge-error",
    }
}

pub fn user_badge(status: UserStatus) -> &'static str {
    match status {
        UserStatus::Active => "badge-ok",
        UserStatus::Suspended => "badge-error",
    }
}

/// Human label for a role, as shown in tables and the sidebar.
pub fn role_label(role: Role) -> &'static str {
    match role {
        Role::Admin => "Administrator",
        Role::Technician => "Technician",
        Role::Auditor => "Auditor",
    }
}

/// Timestamp in the fixed console format, always UTC.
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Optional timestamp; absent values render as an em dash.
pub fn timestamp_opt(at: Option<DateTime<Utc>>) -> String {
    at.map(timestamp).unwrap_or_else(|| EMPTY_FIELD.to_string())
}

/// Coarse "how long ago" label for agent check-ins.
pub fn ago(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - at).num_seconds().max(0);
    match secs {
        0..=59 => "just now".to_string(),
        60..=3_599 => format!("{}m ago", secs / 60),
        3_600..=86_399 => format!("{}h ago", secs / 3_600),
        _ => format!("{}d ago", secs / 86_400),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_is_utc_and_unambiguous() {
        let at = Utc.with_ymd_and_hms(2026, 8, 28, 14, 5, 9).unwrap();
        assert_eq!(timestamp(at), "2026-08-28 14:05:09 UTC");
        assert_eq!(timestamp_opt(None), EMPTY_FIELD);
    }

    #[test]
    fn ago_buckets_coarsely() {
        let now = Utc.with_ymd_and_hms(2026, 8, 28, 12, 0, 0).unwrap();
        assert_eq!(ago(now, now), "just now");
        assert_eq!(ago(now - chrono::Duration::minutes(5), now), "5m ago");
        assert_eq!(ago(now - chrono::Duration::hours(3), now), "3h ago");
        assert_eq!(ago(now - chrono::Duration::days(2), now), "2d ago");
        // Clock skew: a check-in "from the future" is just now.
        assert_eq!(ago(now + chrono::Duration::minutes(2), now), "just now");
    }

    #[test]
    fn role_labels_are_presentable() {
        assert_eq!(role_label(Role::Admin), "Administrator");
        assert_eq!(role_label(Role::Auditor), "Auditor");
    }
}
