//! sea-orm entities for the identity tables.
//!
//! Physical table and column names are PascalCase to match the legacy schema.

pub mod asp_net_roles;
pub mod asp_net_user_claims;
pub mod asp_net_user_logins;
pub mod asp_net_user_roles;
pub mod asp_net_users;
