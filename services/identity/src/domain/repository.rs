#![allow(async_fn_in_trait)]

use std::collections::BTreeSet;

use identity_domain::graph::IdentityGraph;
use identity_domain::legacy::{
    LegacyRole, LegacyUser, LegacyUserClaim, LegacyUserLogin, LegacyUserRole,
};
use identity_migration::IdentityTable;

use crate::error::InitError;

/// Catalog inspection and table creation on the identity store.
pub trait SchemaRepository: Send + Sync {
    /// Identity tables present in the store catalog.
    async fn list_existing_tables(&self) -> Result<BTreeSet<IdentityTable>, InitError>;

    /// Execute the fixed CREATE statement of `table`.
    async fn create_table(&self, table: IdentityTable) -> Result<(), InitError>;
}

/// Read access to the five legacy identity tables.
pub trait LegacyIdentitySource: Send + Sync {
    async fn users(&self) -> Result<Vec<LegacyUser>, InitError>;
    async fn roles(&self) -> Result<Vec<LegacyRole>, InitError>;
    async fn user_roles(&self) -> Result<Vec<LegacyUserRole>, InitError>;
    async fn user_claims(&self) -> Result<Vec<LegacyUserClaim>, InitError>;
    async fn user_logins(&self) -> Result<Vec<LegacyUserLogin>, InitError>;
}

/// Write side of the managed identity store.
pub trait IdentityStore: Send + Sync {
    /// Persist every entity of `graph`, all or nothing.
    async fn save(&self, graph: &IdentityGraph) -> Result<(), InitError>;
}

/// Opens scoped sessions on the identity store.
pub trait StoreConnector: Send + Sync {
    type Session: StoreSession;

    async fn open(&self) -> Result<Self::Session, InitError>;
}

/// One open connection to the identity store. Must be closed with
/// [`StoreSession::close`] when the phase using it ends.
pub trait StoreSession: Send {
    type Schema: SchemaRepository;
    type Store: IdentityStore;

    fn schema(&self) -> Self::Schema;
    fn store(&self) -> Self::Store;
    async fn close(self);
}
