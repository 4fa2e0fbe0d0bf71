use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

use crate::permission::Permission;
use crate::role::Role;

/// A single grant table entry: the roles allowed to exercise one permission
#[derive(Debug, Clone)]
pub struct GrantEntry {
    pub roles: Vec<Role>,
    pub description: String,
}

/// The process-wide permission-to-roles mapping.
///
/// Built once at startup from the compiled-in defaults, optionally
/// overlaid from a YAML grant file, and immutable thereafter. The table is
/// total over [`Permission::all`]; a permission can only be widened or
/// narrowed, never removed.
#[derive(Debug, Clone)]
#[readonly::make]
pub struct GrantTable {
    pub grants: HashMap<Permission, GrantEntry>,
}

#[derive(Debug, Deserialize)]
struct RawGrantFile {
    #[serde(default)]
    permissions: HashMap<String, RawGrantEntry>,
}

#[derive(Debug, Deserialize)]
struct RawGrantEntry {
    roles: Vec<String>,
    #[serde(default)]
    description: String,
}

impl GrantTable {
    /// The compiled-in grant table
    pub fn defaults() -> Self {
        Self {
            grants: HashMap::from([
                (
                    Permission::UserManagement,
                    entry(
                        &[Role::Admin, Role::HrAdmin],
                        "Create, update and archive employee accounts",
                    ),
                ),
                (
                    Permission::DepartmentManagement,
                    entry(
                        &[Role::Admin, Role::HrAdmin],
                        "Maintain departments and rosters",
                    ),
                ),
                (
                    Permission::PayrollManagement,
                    entry(
                        &[Role::Admin, Role::HrAdmin, Role::Accountant],
                        "Run payroll and issue payslips",
                    ),
                ),
                (
                    Permission::LeaveManagement,
                    entry(
                        &[Role::Admin, Role::HrAdmin, Role::Manager],
                        "View and administer leave requests",
                    ),
                ),
                (
                    Permission::LeaveApproval,
                    entry(
                        &[Role::Admin, Role::HrAdmin, Role::Manager],
                        "Approve or reject leave requests",
                    ),
                ),
                (
                    Permission::JobManagement,
                    entry(
                        &[Role::Admin, Role::HrAdmin],
                        "Publish and manage job postings",
                    ),
                ),
                (
                    Permission::ReportsAccess,
                    entry(
                        &[Role::Admin, Role::HrAdmin, Role::Accountant, Role::Manager],
                        "Access reports and analytics",
                    ),
                ),
                (
                    Permission::FinancialData,
                    entry(
                        &[Role::Admin, Role::HrAdmin, Role::Accountant],
                        "View salary and other financial data",
                    ),
                ),
                (
                    Permission::SystemAdmin,
                    entry(&[Role::Admin], "System administration"),
                ),
            ]),
        }
    }

    /// Load the grant table from a YAML file, overlaid on the defaults.
    ///
    /// A missing file yields the defaults; unreadable or malformed files
    /// are errors.
    pub fn from_file(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            warn!("Grant table not found at {}, using built-in defaults", path);
            return Ok(Self::defaults());
        }

        let content = std::fs::read_to_string(path).context("Failed to read grant table")?;

        let table = Self::from_yaml(&content)?;
        info!(
            "Grant table loaded from {} with {} permissions",
            path,
            table.grants.len()
        );
        Ok(table)
    }

    /// Parse a YAML grant document, overlaid on the defaults.
    ///
    /// Unknown permission keys and role strings are skipped with a warning;
    /// they can narrow access but never widen it. An empty role list is an
    /// explicit deny-all for that permission.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let raw: RawGrantFile =
            serde_norway::from_str(content).context("Failed to parse grant table")?;

        let mut table = Self::defaults();
        for (key, raw_entry) in raw.permissions {
            let permission = match Permission::from_str(&key) {
                Some(permission) => permission,
                None => {
                    warn!("Ignoring unknown permission '{}' in grant table", key);
                    continue;
                }
            };

            let mut roles = Vec::new();
            for name in &raw_entry.roles {
                match Role::from_str(name) {
                    Some(role) => {
                        if !roles.contains(&role) {
                            roles.push(role);
                        }
                    }
                    None => {
                        warn!("Ignoring unknown role '{}' for permission '{}'", name, key);
                    }
                }
            }

            let description = if raw_entry.description.is_empty() {
                table
                    .grants
                    .get(&permission)
                    .map(|existing| existing.description.clone())
                    .unwrap_or_default()
            } else {
                raw_entry.description
            };

            table
                .grants
                .insert(permission, GrantEntry { roles, description });
        }

        Ok(table)
    }

    /// The roles allowed to exercise `permission`
    pub fn roles_for(&self, permission: Permission) -> &[Role] {
        self.grants
            .get(&permission)
            .map(|entry| entry.roles.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for GrantTable {
    fn default() -> Self {
        Self::defaults()
    }
}

fn entry(roles: &[Role], description: &str) -> GrantEntry {
    GrantEntry {
        roles: roles.to_vec(),
        description: description.to_string(),
    }
}
