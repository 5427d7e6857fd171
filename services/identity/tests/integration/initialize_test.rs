use identity_domain::legacy::LegacyDataset;
use identity_migration::IdentityTable;
use identity_store::domain::types::{DatabaseStatus, InitReport};
use identity_store::infra::db::{DbConnector, DbLegacySource};
use identity_store::infra::provision::ensure_database;
use identity_store::usecase::initialize::InitializeUseCase;
use identity_testing::fixture::{Fixture, TWO_USERS};
use identity_testing::sqlite::TempSqlite;

use crate::helpers::{read_all, write_legacy};

async fn legacy_two_users() -> TempSqlite {
    let legacy = TempSqlite::new();
    write_legacy(&legacy, Fixture::dataset(TWO_USERS)).await;
    legacy
}

async fn initialize(
    store: &TempSqlite,
    legacy: &TempSqlite,
    schema_only: bool,
) -> (DatabaseStatus, InitReport) {
    let database = ensure_database(&store.url()).await.unwrap();
    let usecase = InitializeUseCase {
        connector: DbConnector { url: database.url },
        legacy: Some(DbLegacySource::connect(&legacy.url()).await.unwrap()),
        schema_only,
    };
    let report = usecase.execute(database.status).await.unwrap();
    if let Some(source) = usecase.legacy {
        source.close().await;
    }
    (database.status, report)
}

#[tokio::test]
async fn should_create_and_seed_new_store() {
    let legacy = legacy_two_users().await;
    let store = TempSqlite::new();

    let (status, report) = initialize(&store, &legacy, false).await;

    assert_eq!(status, DatabaseStatus::Created);
    assert!(store.exists());
    assert_eq!(report.created_tables, IdentityTable::ALL.to_vec());
    let seed = report.seed.unwrap();
    assert_eq!(seed.users, 2);
    assert_eq!(seed.roles, 1);
    assert_eq!(seed.memberships, 1);
    assert_eq!(seed.claims, 1);

    let stored = read_all(&store).await;
    let alice = stored.users.iter().find(|u| u.id == "u1").unwrap();
    assert_eq!(alice.user_name, "alice");
    assert_eq!(alice.email.as_deref(), Some("alice@example.com"));
    assert!(alice.email_confirmed);
    assert_eq!(alice.access_failed_count, 3);
    assert_eq!(stored.user_roles.len(), 1);
    assert_eq!(stored.user_roles[0].role_id, "r1");
    assert_eq!(stored.user_claims[0].claim_type.as_deref(), Some("email_verified"));
    assert_eq!(stored.user_claims[0].claim_value.as_deref(), Some("true"));
}

#[tokio::test]
async fn should_not_touch_existing_store_on_second_run() {
    let legacy = legacy_two_users().await;
    let store = TempSqlite::new();
    initialize(&store, &legacy, false).await;
    let after_first = read_all(&store).await;

    let (status, report) = initialize(&store, &legacy, false).await;

    assert_eq!(status, DatabaseStatus::Existing);
    assert!(report.created_tables.is_empty());
    assert_eq!(report.seed, None);
    assert_eq!(read_all(&store).await, after_first);
}

#[tokio::test]
async fn should_only_create_tables_when_schema_only() {
    let legacy = legacy_two_users().await;
    let store = TempSqlite::new();

    let (status, report) = initialize(&store, &legacy, true).await;

    assert_eq!(status, DatabaseStatus::Created);
    assert_eq!(report.created_tables.len(), 5);
    assert_eq!(report.seed, None);
    assert_eq!(read_all(&store).await, LegacyDataset::default());
}
