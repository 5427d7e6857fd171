//! Flat rows read from the legacy identity tables.
//!
//! Rows reference each other by plain string ids only; nothing here is
//! checked for integrity. The seeder turns them into an [`IdentityGraph`].
//!
//! [`IdentityGraph`]: crate::graph::IdentityGraph

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One row of the legacy `AspNetUsers` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyUser {
    pub id: String,
    pub user_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_confirmed: bool,
    #[serde(default)]
    pub password_hash: Option<String>,
    #[serde(default)]
    pub security_stamp: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub phone_number_confirmed: bool,
    #[serde(default)]
    pub two_factor_enabled: bool,
    #[serde(default)]
    pub lockout_end_date_utc: Option<NaiveDateTime>,
    #[serde(default)]
    pub lockout_enabled: bool,
    #[serde(default)]
    pub access_failed_count: i32,
}

/// One row of the legacy `AspNetRoles` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyRole {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// One row of the legacy `AspNetUserRoles` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyUserRole {
    pub user_id: String,
    pub role_id: String,
}

/// One row of the legacy `AspNetUserClaims` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyUserClaim {
    pub id: i32,
    pub user_id: String,
    #[serde(default)]
    pub claim_type: Option<String>,
    #[serde(default)]
    pub claim_value: Option<String>,
}

/// One row of the legacy `AspNetUserLogins` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyUserLogin {
    pub login_provider: String,
    pub provider_key: String,
    pub user_id: String,
}

/// Complete contents of a legacy identity database, table by table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyDataset {
    #[serde(default)]
    pub users: Vec<LegacyUser>,
    #[serde(default)]
    pub roles: Vec<LegacyRole>,
    #[serde(default)]
    pub user_roles: Vec<LegacyUserRole>,
    #[serde(default)]
    pub user_claims: Vec<LegacyUserClaim>,
    #[serde(default)]
    pub user_logins: Vec<LegacyUserLogin>,
}

impl LegacyDataset {
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
            && self.roles.is_empty()
            && self.user_roles.is_empty()
            && self.user_claims.is_empty()
            && self.user_logins.is_empty()
    }
}
