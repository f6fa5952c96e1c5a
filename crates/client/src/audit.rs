//! Audit trail, security alerts, and CSV export.

use chrono::NaiveDate;

use warden_core::{ApiResult, AuditLog, AuditStats, Page, PageRequest, SecurityAlert};

use crate::dto::AuditFilter;
use crate::gateway::ApiClient;

/// Download name for an audit export started on `date`.
pub fn audit_export_filename(date: NaiveDate) -> String {
    format!("audit_logs_{}.csv", date.format("%Y-%m-%d"))
}

impl ApiClient {
    pub async fn list_audit_logs(
        &self,
        page: PageRequest,
        filter: &AuditFilter,
    ) -> ApiResult<Page<AuditLog>> {
        let mut query = page.to_query();
        query.extend(filter.to_query());
        self.get_json("/audit", &query).await
    }

    pub async fn audit_stats(&self) -> ApiResult<AuditStats> {
        self.get_json("/audit/stats/summary", &[]).await
    }

    /// The computed security alert feed. Read-only.
    pub async fn security_alerts(&self) -> ApiResult<Vec<SecurityAlert>> {
        self.get_json("/audit/security/alerts", &[]).await
    }

    /// CSV export of the audit trail, carrying exactly the active filters.
    /// Returns the raw payload for a client-side download.
    pub async fn export_audit_csv(&self, filter: &AuditFilter) -> ApiResult<Vec<u8>> {
        self.get_bytes("/audit/export/csv", &filter.to_query()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_filename_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
        assert_eq!(audit_export_filename(date), "audit_logs_2026-08-28.csv");
    }
}
