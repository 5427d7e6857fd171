use sea_orm::{Database, DatabaseConnection};

use identity_domain::legacy::{
    LegacyDataset, LegacyRole, LegacyUser, LegacyUserClaim, LegacyUserLogin, LegacyUserRole,
};
use identity_store::domain::repository::{IdentityStore, LegacyIdentitySource};
use identity_store::error::InitError;
use identity_store::infra::db::{DbIdentityStore, DbLegacySource, DbSchemaRepository};
use identity_store::usecase::schema::EnsureSchemaUseCase;
use identity_store::usecase::seed::build_graph;
use identity_testing::sqlite::TempSqlite;

// ── DatasetSource ────────────────────────────────────────────────────────────

/// Legacy source backed by an in-memory dataset.
pub struct DatasetSource(pub LegacyDataset);

impl LegacyIdentitySource for DatasetSource {
    async fn users(&self) -> Result<Vec<LegacyUser>, InitError> {
        Ok(self.0.users.clone())
    }

    async fn roles(&self) -> Result<Vec<LegacyRole>, InitError> {
        Ok(self.0.roles.clone())
    }

    async fn user_roles(&self) -> Result<Vec<LegacyUserRole>, InitError> {
        Ok(self.0.user_roles.clone())
    }

    async fn user_claims(&self) -> Result<Vec<LegacyUserClaim>, InitError> {
        Ok(self.0.user_claims.clone())
    }

    async fn user_logins(&self) -> Result<Vec<LegacyUserLogin>, InitError> {
        Ok(self.0.user_logins.clone())
    }
}

// ── Database helpers ─────────────────────────────────────────────────────────

/// Open `db`, creating the file when missing.
pub async fn connect(db: &TempSqlite) -> DatabaseConnection {
    Database::connect(db.url_create())
        .await
        .expect("failed to open sqlite database")
}

/// Create the identity tables in `db` and fill them with `dataset`, standing
/// in for a populated legacy database.
pub async fn write_legacy(db: &TempSqlite, dataset: LegacyDataset) {
    let conn = connect(db).await;
    EnsureSchemaUseCase {
        repo: DbSchemaRepository { db: conn.clone() },
    }
    .execute()
    .await
    .expect("failed to create legacy tables");

    let graph = build_graph(&DatasetSource(dataset))
        .await
        .expect("legacy dataset has dangling references");
    DbIdentityStore { db: conn.clone() }
        .save(&graph)
        .await
        .expect("failed to write legacy rows");
    conn.close().await.expect("failed to close sqlite database");
}

/// Every identity row stored in `db`, table by table.
pub async fn read_all(db: &TempSqlite) -> LegacyDataset {
    let source = DbLegacySource::connect(&db.url())
        .await
        .expect("failed to open sqlite database");
    let dataset = LegacyDataset {
        users: source.users().await.unwrap(),
        roles: source.roles().await.unwrap(),
        user_roles: source.user_roles().await.unwrap(),
        user_claims: source.user_claims().await.unwrap(),
        user_logins: source.user_logins().await.unwrap(),
    };
    source.close().await;
    dataset
}
