use identity_migration::IdentityTable;
use identity_store::domain::repository::SchemaRepository;
use identity_store::infra::db::DbSchemaRepository;
use identity_store::usecase::schema::EnsureSchemaUseCase;
use identity_testing::sqlite::TempSqlite;

use crate::helpers::connect;

#[tokio::test]
async fn should_list_no_tables_on_fresh_database() {
    let db = TempSqlite::new();
    let repo = DbSchemaRepository {
        db: connect(&db).await,
    };
    assert!(repo.list_existing_tables().await.unwrap().is_empty());
}

#[tokio::test]
async fn should_create_all_tables_in_order() {
    let db = TempSqlite::new();
    let repo = DbSchemaRepository {
        db: connect(&db).await,
    };

    let created = EnsureSchemaUseCase { repo: repo.clone() }
        .execute()
        .await
        .unwrap();

    assert_eq!(created, IdentityTable::ALL.to_vec());
    let listed = repo.list_existing_tables().await.unwrap();
    assert_eq!(listed.len(), 5);
}

#[tokio::test]
async fn should_create_nothing_when_schema_is_complete() {
    let db = TempSqlite::new();
    let repo = DbSchemaRepository {
        db: connect(&db).await,
    };
    let usecase = EnsureSchemaUseCase { repo };

    usecase.execute().await.unwrap();
    let second = usecase.execute().await.unwrap();

    assert!(second.is_empty());
}

#[tokio::test]
async fn should_create_only_missing_tables() {
    let db = TempSqlite::new();
    let repo = DbSchemaRepository {
        db: connect(&db).await,
    };
    repo.create_table(IdentityTable::Users).await.unwrap();
    repo.create_table(IdentityTable::Roles).await.unwrap();

    let created = EnsureSchemaUseCase { repo }.execute().await.unwrap();

    assert_eq!(
        created,
        vec![
            IdentityTable::UserRoles,
            IdentityTable::UserClaims,
            IdentityTable::UserLogins,
        ]
    );
}

#[tokio::test]
async fn should_survive_create_of_existing_table() {
    let db = TempSqlite::new();
    let repo = DbSchemaRepository {
        db: connect(&db).await,
    };
    repo.create_table(IdentityTable::Users).await.unwrap();
    repo.create_table(IdentityTable::Users).await.unwrap();
    assert_eq!(repo.list_existing_tables().await.unwrap().len(), 1);
}
