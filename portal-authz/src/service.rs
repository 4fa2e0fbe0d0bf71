use anyhow::Result;
use tracing::debug;

use crate::config::GrantTable;
use crate::permission::Permission;
use crate::principal::{has_any_role, has_role, Principal};
use crate::role::Role;
use crate::ui::FeatureToggles;

/// Roles that see every record regardless of ownership
const FULL_VISIBILITY_ROLES: [Role; 3] = [Role::Admin, Role::HrAdmin, Role::Accountant];

/// Decision API over an immutable grant table.
///
/// Every check is a synchronous pure function of the table and its
/// arguments; the authorizer holds no session state and is safe to share
/// across threads by reference.
#[derive(Debug, Clone)]
pub struct Authorizer {
    table: GrantTable,
}

impl Authorizer {
    pub fn new(table: GrantTable) -> Self {
        Self { table }
    }

    /// Authorizer backed by the compiled-in grant table
    pub fn with_defaults() -> Self {
        Self::new(GrantTable::defaults())
    }

    /// Authorizer backed by a grant file, falling back to the defaults
    /// when the file is absent
    pub fn from_file(path: &str) -> Result<Self> {
        Ok(Self::new(GrantTable::from_file(path)?))
    }

    pub fn table(&self) -> &GrantTable {
        &self.table
    }

    /// Check whether the user may exercise `permission`
    pub fn can(&self, user: Option<&Principal>, permission: Permission) -> bool {
        let allowed = has_any_role(user, self.table.roles_for(permission));

        debug!(
            "Permission {} for user '{}': {}",
            permission.as_str(),
            user.map(|u| u.id.as_str()).unwrap_or("<anonymous>"),
            if allowed { "granted" } else { "denied" }
        );

        allowed
    }

    /// String-keyed variant of [`Authorizer::can`].
    ///
    /// An unrecognized key is a silent deny, never an error; a typo in a
    /// permission name must not grant access.
    pub fn can_key(&self, user: Option<&Principal>, key: &str) -> bool {
        match Permission::from_str(key) {
            Some(permission) => self.can(user, permission),
            None => {
                debug!("Unknown permission key '{}', denying", key);
                false
            }
        }
    }

    /// Check whether the user may see a record owned by `owner`.
    ///
    /// Priority-ordered, first match wins: full-visibility roles see
    /// everything; managers see everything (narrowing to direct reports
    /// needs a reporting relation the core does not receive); employees
    /// see their own records only.
    pub fn can_view_data(&self, user: Option<&Principal>, owner: Option<&str>) -> bool {
        if has_any_role(user, &FULL_VISIBILITY_ROLES) {
            return true;
        }

        if has_role(user, &[Role::Manager]) {
            return true;
        }

        if has_role(user, &[Role::Employee]) {
            if let (Some(user), Some(owner)) = (user, owner) {
                return user.id == owner;
            }
        }

        false
    }

    /// Project the per-feature booleans the UI consults for gating.
    ///
    /// Each field equals [`Authorizer::can`] for the matching permission.
    /// UI code must read this record instead of re-deriving checks inline,
    /// so that gating cannot drift between components.
    pub fn feature_toggles(&self, user: Option<&Principal>) -> FeatureToggles {
        FeatureToggles {
            show_user_management: self.can(user, Permission::UserManagement),
            show_department_management: self.can(user, Permission::DepartmentManagement),
            show_payroll_management: self.can(user, Permission::PayrollManagement),
            show_leave_management: self.can(user, Permission::LeaveManagement),
            show_leave_approval: self.can(user, Permission::LeaveApproval),
            show_job_management: self.can(user, Permission::JobManagement),
            show_reports: self.can(user, Permission::ReportsAccess),
            show_financial_data: self.can(user, Permission::FinancialData),
            show_system_admin: self.can(user, Permission::SystemAdmin),
        }
    }
}
