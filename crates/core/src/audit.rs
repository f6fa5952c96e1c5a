//! Audit log and security alert read models.
//!
//! Alerts are a computed, read-only feed derived by the backend from audit
//! heuristics; the console renders them as-is and takes no position on how
//! they are persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{AlertId, AuditLogId};

/// Severity of an audit event or security alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }
}

impl core::fmt::Display for Severity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One audit trail entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: AuditLogId,
    pub timestamp: DateTime<Utc>,
    pub username: String,
    pub action: String,
    pub category: String,
    pub severity: Severity,
    pub resource: String,
    pub resource_id: Option<String>,
    pub ip_address: Option<String>,
    pub detail: Option<String>,
}

/// One entry of the computed security alert feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityAlert {
    pub id: AlertId,
    pub triggered_at: DateTime<Utc>,
    pub severity: Severity,
    pub rule: String,
    pub username: Option<String>,
    pub source_ip: Option<String>,
    pub description: String,
}

/// Summary from `GET /audit/stats/summary`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AuditStats {
    pub total_events: u64,
    pub info: u64,
    pub warning: u64,
    pub critical: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_by_gravity() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Critical);
    }

    #[test]
    fn severity_round_trips_lowercase() {
        for s in [Severity::Info, Severity::Warning, Severity::Critical] {
            let json = serde_json::to_string(&s).unwrap();
            assert_eq!(json, format!("\"{}\"", s.as_str()));
            let back: Severity = serde_json::from_str(&json).unwrap();
            assert_eq!(back, s);
        }
    }
}
