use identity_domain::graph::{IdentityGraph, Role, User, UserRole};
use identity_domain::id::{RoleId, UserId};
use identity_store::domain::repository::IdentityStore;
use identity_store::infra::db::{DbIdentityStore, DbLegacySource};
use identity_store::usecase::seed::build_graph;
use identity_testing::fixture::{FULL, Fixture, legacy_user};
use identity_testing::sqlite::TempSqlite;

use crate::helpers::{DatasetSource, connect, read_all, write_legacy};

#[tokio::test]
async fn should_read_back_graph_identical_to_fixture() {
    let db = TempSqlite::new();
    write_legacy(&db, Fixture::dataset(FULL)).await;

    let source = DbLegacySource::connect(&db.url()).await.unwrap();
    let from_db = build_graph(&source).await.unwrap();
    source.close().await;
    let from_fixture = build_graph(&DatasetSource(Fixture::dataset(FULL)))
        .await
        .unwrap();

    assert_eq!(from_db, from_fixture);
    let summary = from_db.summary();
    assert_eq!(summary.users, 3);
    assert_eq!(summary.roles, 3);
    assert_eq!(summary.memberships, 2);
    assert_eq!(summary.claims, 3);
    assert_eq!(summary.logins, 3);
}

#[tokio::test]
async fn should_preserve_lockout_and_counters() {
    let db = TempSqlite::new();
    write_legacy(&db, Fixture::dataset(FULL)).await;

    let stored = read_all(&db).await;
    let carol = stored
        .users
        .iter()
        .find(|u| u.user_name == "carol")
        .unwrap();
    assert_eq!(
        carol.lockout_end_date_utc.unwrap().to_string(),
        "2031-01-15 08:00:00"
    );
    assert_eq!(carol.access_failed_count, 5);
    assert!(carol.two_factor_enabled);

    let erin = stored.users.iter().find(|u| u.user_name == "erin").unwrap();
    assert_eq!(erin.email, None);
    assert!(!erin.email_confirmed);

    let unnamed = stored.roles.iter().find(|r| r.id == "role-unnamed").unwrap();
    assert_eq!(unnamed.name, None);
}

#[tokio::test]
async fn should_roll_back_whole_graph_when_insert_fails() {
    let db = TempSqlite::new();
    write_legacy(&db, Default::default()).await;

    // AspNetUserRoles is keyed on UserId alone, so a second role for the
    // same user violates the primary key.
    let mut graph = IdentityGraph::new();
    graph.add_user(User::from(legacy_user("u1", "alice")));
    for id in ["r1", "r2"] {
        graph.add_role(Role {
            id: RoleId::from(id),
            name: None,
        });
        graph
            .attach_membership(UserRole {
                user_id: UserId::from("u1"),
                role_id: RoleId::from(id),
            })
            .unwrap();
    }

    let store = DbIdentityStore {
        db: connect(&db).await,
    };
    let err = store.save(&graph).await.unwrap_err();
    assert_eq!(err.kind(), "INTERNAL");

    let stored = read_all(&db).await;
    assert!(stored.is_empty(), "partial graph persisted: {stored:?}");
}
