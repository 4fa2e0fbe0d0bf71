use serde::{Deserialize, Serialize};

use crate::role::{Role, RoleClaim};

/// An authenticated portal user.
///
/// User records in the wild store the role assignment either as a bare
/// string (`"role": "ADMIN"`) or as a list (`"role": ["MANAGER",
/// "ACCOUNTANT"]`), and the id as a string or a number. Both shapes are
/// normalized here, once, at the deserialization boundary; nothing
/// downstream special-cases them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    #[serde(with = "id_serde")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "role", with = "role_claims_serde")]
    claims: Vec<RoleClaim>,
}

impl Principal {
    /// Create a principal from known roles
    pub fn new(id: impl Into<String>, name: impl Into<String>, roles: Vec<Role>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            claims: dedup_claims(roles.into_iter().map(RoleClaim::Role).collect()),
        }
    }

    /// Create a principal from raw claim strings as stored on a user record
    pub fn with_claims(
        id: impl Into<String>,
        name: impl Into<String>,
        claims: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            claims: dedup_claims(claims.iter().map(|claim| RoleClaim::parse(claim)).collect()),
        }
    }

    /// All claims on this principal, including unknown ones
    pub fn claims(&self) -> &[RoleClaim] {
        &self.claims
    }

    /// The known roles this principal holds
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.claims.iter().filter_map(RoleClaim::role)
    }

    /// Whether this principal holds no known role
    pub fn is_roleless(&self) -> bool {
        self.roles().next().is_none()
    }
}

/// Check whether the user holds at least one of the given roles.
///
/// OR semantics across both the supplied roles and the user's own roles;
/// order and duplicates on either side are irrelevant. Absent and roleless
/// users fail closed.
pub fn has_role(user: Option<&Principal>, roles: &[Role]) -> bool {
    match user {
        Some(user) => user.roles().any(|held| roles.contains(&held)),
        None => false,
    }
}

/// Check whether the user holds any of the given roles.
///
/// Same contract as [`has_role`]; kept as the clearer name for call sites
/// testing membership in a set.
pub fn has_any_role(user: Option<&Principal>, roles: &[Role]) -> bool {
    has_role(user, roles)
}

/// Check whether the user holds every one of the given roles.
///
/// An empty `roles` slice is vacuously true for any present user holding
/// at least one known role. Absent and roleless users fail closed.
pub fn has_all_roles(user: Option<&Principal>, roles: &[Role]) -> bool {
    let user = match user {
        Some(user) if !user.is_roleless() => user,
        _ => return false,
    };

    let held: Vec<Role> = user.roles().collect();
    roles.iter().all(|role| held.contains(role))
}

fn dedup_claims(claims: Vec<RoleClaim>) -> Vec<RoleClaim> {
    let mut out: Vec<RoleClaim> = Vec::with_capacity(claims.len());
    for claim in claims {
        if !out.contains(&claim) {
            out.push(claim);
        }
    }
    out
}

/// Custom serde module for the multi-shape role assignment
mod role_claims_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::dedup_claims;
    use crate::role::RoleClaim;

    pub fn serialize<S>(claims: &Vec<RoleClaim>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let strings: Vec<&str> = claims.iter().map(|claim| claim.as_str()).collect();
        strings.serialize(serializer)
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<RoleClaim>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let strings = match OneOrMany::deserialize(deserializer)? {
            OneOrMany::One(claim) => vec![claim],
            OneOrMany::Many(claims) => claims,
        };

        Ok(dedup_claims(
            strings.iter().map(|claim| RoleClaim::parse(claim)).collect(),
        ))
    }
}

/// Custom serde module for ids stored as strings or numbers
mod id_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Text(String),
        Number(i64),
    }

    pub fn serialize<S>(id: &String, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(id)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match IdRepr::deserialize(deserializer)? {
            IdRepr::Text(id) => id,
            IdRepr::Number(id) => id.to_string(),
        })
    }
}
