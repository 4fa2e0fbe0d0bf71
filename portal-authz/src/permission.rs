use serde::{Deserialize, Serialize};

/// Protected capability keys for the portal's feature areas
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    UserManagement,
    DepartmentManagement,
    PayrollManagement,
    LeaveManagement,
    LeaveApproval,
    JobManagement,
    ReportsAccess,
    FinancialData,
    SystemAdmin,
}

impl Permission {
    /// Get all permissions in display order
    pub fn all() -> Vec<Permission> {
        vec![
            Permission::UserManagement,
            Permission::DepartmentManagement,
            Permission::PayrollManagement,
            Permission::LeaveManagement,
            Permission::LeaveApproval,
            Permission::JobManagement,
            Permission::ReportsAccess,
            Permission::FinancialData,
            Permission::SystemAdmin,
        ]
    }

    /// Convert to the wire identifier used in grant files and check keys
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::UserManagement => "USER_MANAGEMENT",
            Permission::DepartmentManagement => "DEPARTMENT_MANAGEMENT",
            Permission::PayrollManagement => "PAYROLL_MANAGEMENT",
            Permission::LeaveManagement => "LEAVE_MANAGEMENT",
            Permission::LeaveApproval => "LEAVE_APPROVAL",
            Permission::JobManagement => "JOB_MANAGEMENT",
            Permission::ReportsAccess => "REPORTS_ACCESS",
            Permission::FinancialData => "FINANCIAL_DATA",
            Permission::SystemAdmin => "SYSTEM_ADMIN",
        }
    }

    /// Parse from string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Permission> {
        match s.to_uppercase().as_str() {
            "USER_MANAGEMENT" => Some(Permission::UserManagement),
            "DEPARTMENT_MANAGEMENT" => Some(Permission::DepartmentManagement),
            "PAYROLL_MANAGEMENT" => Some(Permission::PayrollManagement),
            "LEAVE_MANAGEMENT" => Some(Permission::LeaveManagement),
            "LEAVE_APPROVAL" => Some(Permission::LeaveApproval),
            "JOB_MANAGEMENT" => Some(Permission::JobManagement),
            "REPORTS_ACCESS" => Some(Permission::ReportsAccess),
            "FINANCIAL_DATA" => Some(Permission::FinancialData),
            "SYSTEM_ADMIN" => Some(Permission::SystemAdmin),
            _ => None,
        }
    }
}
