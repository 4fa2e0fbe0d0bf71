use serde::{Deserialize, Serialize};

/// Roles a portal user can hold
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    HrAdmin,
    Accountant,
    Manager,
    Employee,
}

impl Role {
    /// Get all roles in display precedence order, highest first
    pub fn all() -> Vec<Role> {
        vec![
            Role::Admin,
            Role::HrAdmin,
            Role::Accountant,
            Role::Manager,
            Role::Employee,
        ]
    }

    /// Convert to the wire identifier stored on user records
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::HrAdmin => "HR_ADMIN",
            Role::Accountant => "ACCOUNTANT",
            Role::Manager => "MANAGER",
            Role::Employee => "EMPLOYEE",
        }
    }

    /// Parse from string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Role> {
        match s.to_uppercase().as_str() {
            "ADMIN" => Some(Role::Admin),
            "HR_ADMIN" => Some(Role::HrAdmin),
            "ACCOUNTANT" => Some(Role::Accountant),
            "MANAGER" => Some(Role::Manager),
            "EMPLOYEE" => Some(Role::Employee),
            _ => None,
        }
    }

    /// Human-readable label shown in the UI
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::HrAdmin => "HR Admin",
            Role::Accountant => "Accountant",
            Role::Manager => "Manager",
            Role::Employee => "Employee",
        }
    }
}

/// A role claim as it appears on a stored user record.
///
/// Claim strings that match a known role parse to [`RoleClaim::Role`];
/// anything else is kept verbatim as [`RoleClaim::Unknown`]. Unknown claims
/// never grant access, they only surface in display fallbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleClaim {
    Role(Role),
    Unknown(String),
}

impl RoleClaim {
    /// Parse a raw claim string
    pub fn parse(s: &str) -> RoleClaim {
        match Role::from_str(s) {
            Some(role) => RoleClaim::Role(role),
            None => RoleClaim::Unknown(s.to_string()),
        }
    }

    /// The known role behind this claim, if any
    pub fn role(&self) -> Option<Role> {
        match self {
            RoleClaim::Role(role) => Some(*role),
            RoleClaim::Unknown(_) => None,
        }
    }

    /// The claim as it was stored
    pub fn as_str(&self) -> &str {
        match self {
            RoleClaim::Role(role) => role.as_str(),
            RoleClaim::Unknown(s) => s,
        }
    }
}
