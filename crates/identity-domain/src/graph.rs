//! Materialized identity entities and the graph that links them.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::id::{RoleId, UserId};
use crate::legacy::{LegacyRole, LegacyUser};

/// User account together with everything attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub user_name: String,
    pub email: Option<String>,
    pub email_confirmed: bool,
    pub password_hash: Option<String>,
    pub security_stamp: Option<String>,
    pub phone_number: Option<String>,
    pub phone_number_confirmed: bool,
    pub two_factor_enabled: bool,
    pub lockout_end_date_utc: Option<NaiveDateTime>,
    pub lockout_enabled: bool,
    pub access_failed_count: i32,
    pub roles: Vec<UserRole>,
    pub claims: Vec<UserClaim>,
    pub logins: Vec<UserLogin>,
}

impl From<LegacyUser> for User {
    fn from(row: LegacyUser) -> Self {
        Self {
            id: UserId(row.id),
            user_name: row.user_name,
            email: row.email,
            email_confirmed: row.email_confirmed,
            password_hash: row.password_hash,
            security_stamp: row.security_stamp,
            phone_number: row.phone_number,
            phone_number_confirmed: row.phone_number_confirmed,
            two_factor_enabled: row.two_factor_enabled,
            lockout_end_date_utc: row.lockout_end_date_utc,
            lockout_enabled: row.lockout_enabled,
            access_failed_count: row.access_failed_count,
            roles: Vec::new(),
            claims: Vec::new(),
            logins: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub name: Option<String>,
}

impl From<LegacyRole> for Role {
    fn from(row: LegacyRole) -> Self {
        Self {
            id: RoleId(row.id),
            name: row.name,
        }
    }
}

/// Membership of a user in a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRole {
    pub user_id: UserId,
    pub role_id: RoleId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserClaim {
    pub id: i32,
    pub user_id: UserId,
    pub claim_type: Option<String>,
    pub claim_value: Option<String>,
}

/// External login; identified by (provider, provider key, user id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLogin {
    pub login_provider: String,
    pub provider_key: String,
    pub user_id: UserId,
}

/// Kind of row that carried a foreign id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Referrer {
    Membership,
    Claim,
    Login,
}

impl fmt::Display for Referrer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Membership => "user-role",
            Self::Claim => "user-claim",
            Self::Login => "user-login",
        })
    }
}

/// Kind of entity a foreign id was expected to resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    User,
    Role,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::User => "user",
            Self::Role => "role",
        })
    }
}

/// A foreign id that does not match any materialized entity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{referrer} row references missing {target} `{id}`")]
pub struct DanglingReference {
    pub referrer: Referrer,
    pub target: Target,
    pub id: String,
}

/// Row counts of a graph, per entity kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub users: usize,
    pub roles: usize,
    pub memberships: usize,
    pub claims: usize,
    pub logins: usize,
}

/// Users and roles indexed by id, with memberships, claims and logins
/// attached to their owning user.
///
/// Attaching only succeeds once every referenced entity is already present,
/// so a graph never holds a dangling reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityGraph {
    users: BTreeMap<UserId, User>,
    roles: BTreeMap<RoleId, Role>,
}

impl IdentityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user, replacing any previous user with the same id.
    pub fn add_user(&mut self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    /// Add a role, replacing any previous role with the same id.
    pub fn add_role(&mut self, role: Role) {
        self.roles.insert(role.id.clone(), role);
    }

    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.get(id)
    }

    pub fn role(&self, id: &RoleId) -> Option<&Role> {
        self.roles.get(id)
    }

    /// Users in id order.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    /// Roles in id order.
    pub fn roles(&self) -> impl Iterator<Item = &Role> {
        self.roles.values()
    }

    /// Attach a membership to its user. Both the user and the role must exist.
    pub fn attach_membership(&mut self, membership: UserRole) -> Result<(), DanglingReference> {
        if !self.roles.contains_key(&membership.role_id) {
            // UserId column comes first, so a missing user is reported first.
            self.user_mut(Referrer::Membership, &membership.user_id)?;
            return Err(DanglingReference {
                referrer: Referrer::Membership,
                target: Target::Role,
                id: membership.role_id.0,
            });
        }
        self.user_mut(Referrer::Membership, &membership.user_id)?
            .roles
            .push(membership);
        Ok(())
    }

    /// Attach a claim to its user.
    pub fn attach_claim(&mut self, claim: UserClaim) -> Result<(), DanglingReference> {
        let user = self.user_mut(Referrer::Claim, &claim.user_id)?;
        user.claims.push(claim);
        Ok(())
    }

    /// Attach a login to its user.
    pub fn attach_login(&mut self, login: UserLogin) -> Result<(), DanglingReference> {
        let user = self.user_mut(Referrer::Login, &login.user_id)?;
        user.logins.push(login);
        Ok(())
    }

    pub fn summary(&self) -> GraphSummary {
        self.users.values().fold(
            GraphSummary {
                users: self.users.len(),
                roles: self.roles.len(),
                ..Default::default()
            },
            |mut acc, user| {
                acc.memberships += user.roles.len();
                acc.claims += user.claims.len();
                acc.logins += user.logins.len();
                acc
            },
        )
    }

    fn user_mut(
        &mut self,
        referrer: Referrer,
        id: &UserId,
    ) -> Result<&mut User, DanglingReference> {
        self.users.get_mut(id).ok_or_else(|| DanglingReference {
            referrer,
            target: Target::User,
            id: id.0.clone(),
        })
    }
}
