//! Role-based authorization core for the HR management portal.
//!
//! This crate maps a user's role set to the permissions and UI features it
//! may use. Every check fails closed: absent users, empty role sets and
//! unrecognized permission keys all resolve to denial, never to an error.
//! The grant table is built once at startup and immutable afterwards; the
//! decision functions are synchronous pure functions of the table and
//! their arguments.

pub mod config;
pub mod permission;
pub mod principal;
pub mod role;
pub mod service;
pub mod ui;

#[cfg(test)]
mod tests;

pub use config::{GrantEntry, GrantTable};
pub use permission::Permission;
pub use principal::{has_all_roles, has_any_role, has_role, Principal};
pub use role::{Role, RoleClaim};
pub use service::Authorizer;
pub use ui::{display_role, FeatureToggles};
