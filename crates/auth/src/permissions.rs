//! Role→permission mapping.
//!
//! - No IO
//! - No panics
//! - No business logic (pure policy table)

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// The actions the console gates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Create, update, delete user accounts.
    ManageUsers,
    /// Update managed client records.
    ManageClients,
    /// Create and cancel tasks.
    ExecuteTasks,
    /// View the audit trail and security alerts.
    ViewAuditLogs,
    /// Export audit data (CSV).
    ExportData,
}

impl Permission {
    pub const ALL: [Permission; 5] = [
        Permission::ManageUsers,
        Permission::ManageClients,
        Permission::ExecuteTasks,
        Permission::ViewAuditLogs,
        Permission::ExportData,
    ];
}

impl Role {
    /// Whether this role grants the given permission.
    ///
    /// The match is exhaustive over both enums; adding a role or a permission
    /// forces this table to be revisited.
    pub fn grants(&self, permission: Permission) -> bool {
        match (self, permission) {
            (Role::Admin, _) => true,

            (Role::Technician, Permission::ManageClients) => true,
            (Role::Technician, Permission::ExecuteTasks) => true,
            (Role::Technician, Permission::ViewAuditLogs) => true,
            (Role::Technician, Permission::ManageUsers) => false,
            (Role::Technician, Permission::ExportData) => false,

            (Role::Auditor, Permission::ViewAuditLogs) => true,
            (Role::Auditor, Permission::ExportData) => true,
            (Role::Auditor, Permission::ManageUsers) => false,
            (Role::Auditor, Permission::ManageClients) => false,
            (Role::Auditor, Permission::ExecuteTasks) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_matrix_matches_policy() {
        use Permission::*;
        use Role::*;

        // (role, permission, expected)
        let table = [
            (Admin, ManageUsers, true),
            (Admin, ManageClients, true),
            (Admin, ExecuteTasks, true),
            (Admin, ViewAuditLogs, true),
            (Admin, ExportData, true),
            (Technician, ManageUsers, false),
            (Technician, ManageClients, true),
            (Technician, ExecuteTasks, true),
            (Technician, ViewAuditLogs, true),
            (Technician, ExportData, false),
            (Auditor, ManageUsers, false),
            (Auditor, ManageClients, false),
            (Auditor, ExecuteTasks, false),
            (Auditor, ViewAuditLogs, true),
            (Auditor, ExportData, true),
        ];

        for (role, permission, expected) in table {
            assert_eq!(
                role.grants(permission),
                expected,
                "{role} / {permission:?}"
            );
        }

        // The table above must cover the full product.
        assert_eq!(table.len(), Role::ALL.len() * Permission::ALL.len());
    }

    #[test]
    fn manage_users_is_admin_only() {
        for role in Role::ALL {
            assert_eq!(role.grants(Permission::ManageUsers), role == Role::Admin);
        }
    }
}
