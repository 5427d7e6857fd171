//! Fixed DDL for the identity tables.
//!
//! There is no migration history: the five tables are either present or
//! created from the definitions here, in dependency order.

pub mod catalog;
pub mod error;
pub mod tables;

mod create_roles;
mod create_user_claims;
mod create_user_logins;
mod create_user_roles;
mod create_users;

pub use error::SchemaError;
pub use tables::{IDENTITY_TABLES, IdentityTable, TableSpec};
