use crate::permission::Permission;
use crate::principal::{has_all_roles, has_any_role, has_role, Principal};
use crate::role::{Role, RoleClaim};
use crate::service::Authorizer;
use crate::ui::display_role;

fn user_with(id: &str, roles: Vec<Role>) -> Principal {
    Principal::new(id, format!("User {}", id), roles)
}

#[test]
fn test_absent_user_fails_every_check() {
    let authorizer = Authorizer::with_defaults();

    assert!(!has_role(None, &[Role::Admin]));
    assert!(!has_any_role(None, &Role::all()));
    assert!(!has_all_roles(None, &[]));
    for permission in Permission::all() {
        assert!(
            !authorizer.can(None, permission),
            "anonymous user must be denied {}",
            permission.as_str()
        );
    }
    assert!(!authorizer.can_view_data(None, Some("7")));
}

#[test]
fn test_roleless_user_fails_every_check() {
    let authorizer = Authorizer::with_defaults();
    let user = user_with("42", vec![]);

    assert!(!has_role(Some(&user), &Role::all()));
    assert!(!has_all_roles(Some(&user), &[]));
    for permission in Permission::all() {
        assert!(!authorizer.can(Some(&user), permission));
    }
    assert!(!authorizer.can_view_data(Some(&user), Some("42")));
}

#[test]
fn test_role_checks_use_set_semantics() {
    let user = user_with("1", vec![Role::Manager, Role::Accountant]);

    // Order of the requested roles is irrelevant
    assert!(has_role(Some(&user), &[Role::Admin, Role::Manager]));
    assert!(has_role(Some(&user), &[Role::Manager, Role::Admin]));

    // Duplicates on either side are irrelevant
    assert!(has_role(Some(&user), &[Role::Manager, Role::Manager]));
    let duplicated = Principal::with_claims(
        "1",
        "User 1",
        vec!["MANAGER".to_string(), "MANAGER".to_string()],
    );
    assert_eq!(duplicated.claims().len(), 1);
    assert!(has_role(Some(&duplicated), &[Role::Manager]));

    assert!(!has_role(Some(&user), &[Role::Admin, Role::Employee]));
}

#[test]
fn test_has_any_role_matches_has_role() {
    let user = user_with("1", vec![Role::Employee]);
    let requests: [&[Role]; 3] = [
        &[Role::Employee],
        &[Role::Admin, Role::Employee],
        &[Role::Admin, Role::HrAdmin],
    ];

    for roles in requests {
        assert_eq!(
            has_role(Some(&user), roles),
            has_any_role(Some(&user), roles)
        );
    }
}

#[test]
fn test_has_all_roles_requires_every_role() {
    let user = user_with("1", vec![Role::Manager, Role::Accountant]);

    assert!(has_all_roles(Some(&user), &[Role::Manager]));
    assert!(has_all_roles(Some(&user), &[Role::Manager, Role::Accountant]));
    assert!(!has_all_roles(
        Some(&user),
        &[Role::Manager, Role::Accountant, Role::Admin]
    ));
}

#[test]
fn test_has_all_roles_with_empty_request_is_vacuously_true() {
    // Pinned behavior: an empty request is satisfied by any present user
    // holding at least one known role, and by nobody else.
    let user = user_with("1", vec![Role::Employee]);
    assert!(has_all_roles(Some(&user), &[]));

    assert!(!has_all_roles(None, &[]));
    assert!(!has_all_roles(Some(&user_with("2", vec![])), &[]));
}

#[test]
fn test_unknown_permission_key_denies_even_admin() {
    let authorizer = Authorizer::with_defaults();
    let admin = user_with("1", vec![Role::Admin]);

    assert!(!authorizer.can_key(Some(&admin), "UNKNOWN_KEY"));
    assert!(!authorizer.can_key(Some(&admin), ""));
    assert!(!authorizer.can_key(None, "UNKNOWN_KEY"));
}

#[test]
fn test_can_key_agrees_with_can_for_known_keys() {
    let authorizer = Authorizer::with_defaults();
    let user = user_with("1", vec![Role::Accountant]);

    for permission in Permission::all() {
        assert_eq!(
            authorizer.can(Some(&user), permission),
            authorizer.can_key(Some(&user), permission.as_str())
        );
    }
}

#[test]
fn test_permissions_grow_monotonically_with_roles() {
    let authorizer = Authorizer::with_defaults();

    for base in Role::all() {
        for extra in Role::all() {
            let single = user_with("1", vec![base]);
            let widened = user_with("1", vec![base, extra]);

            for permission in Permission::all() {
                if authorizer.can(Some(&single), permission) {
                    assert!(
                        authorizer.can(Some(&widened), permission),
                        "adding {} to {} must not revoke {}",
                        extra.as_str(),
                        base.as_str(),
                        permission.as_str()
                    );
                }
            }
        }
    }
}

#[test]
fn test_default_grants_match_role_expectations() {
    let authorizer = Authorizer::with_defaults();
    let manager = user_with("1", vec![Role::Manager]);
    let accountant = user_with("2", vec![Role::Accountant]);
    let employee = user_with("3", vec![Role::Employee]);

    assert!(!authorizer.can(Some(&manager), Permission::PayrollManagement));
    assert!(authorizer.can(Some(&manager), Permission::LeaveApproval));
    assert!(authorizer.can(Some(&manager), Permission::ReportsAccess));

    assert!(authorizer.can(Some(&accountant), Permission::PayrollManagement));
    assert!(authorizer.can(Some(&accountant), Permission::FinancialData));
    assert!(!authorizer.can(Some(&accountant), Permission::UserManagement));

    for permission in Permission::all() {
        assert!(
            !authorizer.can(Some(&employee), permission),
            "employee must be denied {}",
            permission.as_str()
        );
    }
}

#[test]
fn test_display_role_uses_precedence_order() {
    let user = user_with("1", vec![Role::Manager, Role::Admin]);
    assert_eq!(display_role(Some(&user)), "Administrator");

    let user = user_with("2", vec![Role::Employee, Role::Accountant]);
    assert_eq!(display_role(Some(&user)), "Accountant");

    let user = user_with("3", vec![Role::Employee]);
    assert_eq!(display_role(Some(&user)), "Employee");
}

#[test]
fn test_display_role_falls_back_for_unknown_claims() {
    assert_eq!(display_role(None), "Unknown");
    assert_eq!(display_role(Some(&user_with("1", vec![]))), "Unknown");

    let user = Principal::with_claims(
        "2",
        "User 2",
        vec!["INTERN".to_string(), "CONTRACTOR".to_string()],
    );
    assert_eq!(display_role(Some(&user)), "INTERN, CONTRACTOR");

    // A single known role wins over any unknown claims
    let user = Principal::with_claims("3", "User 3", vec!["INTERN".to_string(), "MANAGER".to_string()]);
    assert_eq!(display_role(Some(&user)), "Manager");
}

#[test]
fn test_employee_sees_own_records_only() {
    let authorizer = Authorizer::with_defaults();
    let employee = user_with("7", vec![Role::Employee]);

    assert!(authorizer.can_view_data(Some(&employee), Some("7")));
    assert!(!authorizer.can_view_data(Some(&employee), Some("8")));
    assert!(!authorizer.can_view_data(Some(&employee), None));
}

#[test]
fn test_full_visibility_roles_see_everything() {
    let authorizer = Authorizer::with_defaults();

    for role in [Role::Admin, Role::HrAdmin, Role::Accountant] {
        let user = user_with("1", vec![role]);
        assert!(authorizer.can_view_data(Some(&user), Some("999")));
        assert!(authorizer.can_view_data(Some(&user), None));
    }
}

#[test]
fn test_manager_sees_all_records() {
    let authorizer = Authorizer::with_defaults();
    let manager = user_with("1", vec![Role::Manager]);

    assert!(authorizer.can_view_data(Some(&manager), Some("999")));
    assert!(authorizer.can_view_data(Some(&manager), None));
}

#[test]
fn test_feature_toggles_match_permission_checks() {
    let authorizer = Authorizer::with_defaults();
    let users = [
        None,
        Some(user_with("1", vec![Role::Admin])),
        Some(user_with("2", vec![Role::HrAdmin])),
        Some(user_with("3", vec![Role::Accountant])),
        Some(user_with("4", vec![Role::Manager, Role::Accountant])),
        Some(user_with("5", vec![Role::Employee])),
        Some(user_with("6", vec![])),
    ];

    for user in &users {
        let toggles = authorizer.feature_toggles(user.as_ref());
        for permission in Permission::all() {
            assert_eq!(
                toggles.get(permission),
                authorizer.can(user.as_ref(), permission),
                "toggle for {} drifted from the permission check",
                permission.as_str()
            );
        }
    }
}

#[test]
fn test_role_claim_parsing() {
    assert_eq!(RoleClaim::parse("ADMIN"), RoleClaim::Role(Role::Admin));
    assert_eq!(RoleClaim::parse("hr_admin"), RoleClaim::Role(Role::HrAdmin));
    assert_eq!(
        RoleClaim::parse("INTERN"),
        RoleClaim::Unknown("INTERN".to_string())
    );
    assert_eq!(RoleClaim::parse("INTERN").role(), None);
    assert_eq!(RoleClaim::parse("INTERN").as_str(), "INTERN");
}

#[test]
fn test_unknown_claims_never_grant_access() {
    let authorizer = Authorizer::with_defaults();
    let user = Principal::with_claims("1", "User 1", vec!["ADMINISTRATOR".to_string()]);

    assert!(user.is_roleless());
    for permission in Permission::all() {
        assert!(!authorizer.can(Some(&user), permission));
    }
    assert!(!authorizer.can_view_data(Some(&user), Some("1")));
}
