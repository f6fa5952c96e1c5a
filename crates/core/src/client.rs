//! Managed client read models.
//!
//! A "client" here is an enrolled Windows endpoint tracked by the backend,
//! not an HTTP client. These shapes match the API responses; the console
//! never mutates them locally except by re-fetching.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::ClientId;

/// Reported state of a managed client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    /// Agent has checked in recently.
    Online,
    /// Agent has not checked in within the offline threshold.
    Offline,
    /// Agent is enrolled but has never checked in, or its record is stale.
    Stale,
}

impl ClientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientStatus::Online => "online",
            ClientStatus::Offline => "offline",
            ClientStatus::Stale => "stale",
        }
    }
}

impl core::fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An enrolled Windows endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagedClient {
    pub id: ClientId,
    pub hostname: String,
    pub os_version: String,
    pub agent_version: String,
    pub status: ClientStatus,
    pub ip_address: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub last_seen: Option<DateTime<Utc>>,
    pub enrolled_at: DateTime<Utc>,
}

/// Fleet summary from `GET /clients/stats/summary`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ClientStats {
    pub total: u64,
    pub online: u64,
    pub offline: u64,
    pub stale: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ClientStatus::Online).unwrap(),
            "\"online\""
        );
        let parsed: ClientStatus = serde_json::from_str("\"stale\"").unwrap();
        assert_eq!(parsed, ClientStatus::Stale);
    }

    #[test]
    fn managed_client_tolerates_missing_tags() {
        let json = serde_json::json!({
            "id": uuid::Uuid::now_v7(),
            "hostname": "WIN-SRV-01",
            "os_version": "Windows Server 2022",
            "agent_version": "1.4.2",
            "status": "offline",
            "ip_address": null,
            "last_seen": null,
            "enrolled_at": "2026-01-15T09:30:00Z",
        });
        let client: ManagedClient = serde_json::from_value(json).unwrap();
        assert!(client.tags.is_empty());
        assert_eq!(client.status, ClientStatus::Offline);
    }
}
