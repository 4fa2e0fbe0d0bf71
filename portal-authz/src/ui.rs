use serde::Serialize;

use crate::permission::Permission;
use crate::principal::{has_role, Principal};
use crate::role::Role;

/// Human-readable role shown next to the user's name.
///
/// Multi-role users display their highest-precedence role. Users whose
/// claims are all outside the known role set fall back to the claims
/// joined with a comma; absent and claimless users display `"Unknown"`.
pub fn display_role(user: Option<&Principal>) -> String {
    let user = match user {
        Some(user) if !user.claims().is_empty() => user,
        _ => return "Unknown".to_string(),
    };

    for role in Role::all() {
        if has_role(Some(user), &[role]) {
            return role.label().to_string();
        }
    }

    user.claims()
        .iter()
        .map(|claim| claim.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Per-feature booleans the UI consults to decide what to render.
///
/// Serialized field names match the shape the frontend stores
/// (`showUserManagement`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FeatureToggles {
    pub show_user_management: bool,
    pub show_department_management: bool,
    pub show_payroll_management: bool,
    pub show_leave_management: bool,
    pub show_leave_approval: bool,
    pub show_job_management: bool,
    pub show_reports: bool,
    pub show_financial_data: bool,
    pub show_system_admin: bool,
}

impl FeatureToggles {
    /// The toggle backing `permission`
    pub fn get(&self, permission: Permission) -> bool {
        match permission {
            Permission::UserManagement => self.show_user_management,
            Permission::DepartmentManagement => self.show_department_management,
            Permission::PayrollManagement => self.show_payroll_management,
            Permission::LeaveManagement => self.show_leave_management,
            Permission::LeaveApproval => self.show_leave_approval,
            Permission::JobManagement => self.show_job_management,
            Permission::ReportsAccess => self.show_reports,
            Permission::FinancialData => self.show_financial_data,
            Permission::SystemAdmin => self.show_system_admin,
        }
    }
}
