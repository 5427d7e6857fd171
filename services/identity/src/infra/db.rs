use std::collections::BTreeSet;

use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectionTrait, Database, DatabaseConnection,
    DatabaseTransaction, EntityTrait, QueryOrder, TransactionTrait,
};
use sea_orm_migration::SchemaManager;
use tracing::debug;

use identity_core::connection::release;
use identity_domain::graph::{IdentityGraph, Role, User};
use identity_domain::legacy::{
    LegacyRole, LegacyUser, LegacyUserClaim, LegacyUserLogin, LegacyUserRole,
};
use identity_migration::IdentityTable;
use identity_migration::catalog::{self, TABLE_NAME_COLUMN};
use identity_schema::{
    asp_net_roles, asp_net_user_claims, asp_net_user_logins, asp_net_user_roles, asp_net_users,
};

use crate::domain::repository::{
    IdentityStore, LegacyIdentitySource, SchemaRepository, StoreConnector, StoreSession,
};
use crate::error::InitError;

// ── Schema repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSchemaRepository {
    pub db: DatabaseConnection,
}

impl SchemaRepository for DbSchemaRepository {
    async fn list_existing_tables(&self) -> Result<BTreeSet<IdentityTable>, InitError> {
        let stmt = catalog::existing_tables_statement(self.db.get_database_backend());
        let rows = self
            .db
            .query_all(stmt)
            .await
            .context("query identity table catalog")?;
        let names = rows
            .iter()
            .map(|row| row.try_get::<String>("", TABLE_NAME_COLUMN))
            .collect::<Result<Vec<_>, _>>()
            .context("read identity table catalog row")?;
        Ok(catalog::parse_table_names(names)?)
    }

    async fn create_table(&self, table: IdentityTable) -> Result<(), InitError> {
        SchemaManager::new(&self.db)
            .create_table(table.create_statement())
            .await
            .with_context(|| format!("create table {table}"))?;
        Ok(())
    }
}

// ── Legacy source ────────────────────────────────────────────────────────────

/// Reads the legacy identity tables. Rows come back in primary-key order.
#[derive(Clone)]
pub struct DbLegacySource {
    pub db: DatabaseConnection,
}

impl DbLegacySource {
    pub async fn connect(url: &str) -> Result<Self, InitError> {
        let db = Database::connect(url)
            .await
            .context("connect to legacy identity database")?;
        Ok(Self { db })
    }

    pub async fn close(self) {
        release(self.db).await;
    }
}

impl LegacyIdentitySource for DbLegacySource {
    async fn users(&self) -> Result<Vec<LegacyUser>, InitError> {
        let models = asp_net_users::Entity::find()
            .order_by_asc(asp_net_users::Column::Id)
            .all(&self.db)
            .await
            .context("read legacy users")?;
        Ok(models.into_iter().map(legacy_user_from_model).collect())
    }

    async fn roles(&self) -> Result<Vec<LegacyRole>, InitError> {
        let models = asp_net_roles::Entity::find()
            .order_by_asc(asp_net_roles::Column::Id)
            .all(&self.db)
            .await
            .context("read legacy roles")?;
        Ok(models
            .into_iter()
            .map(|m| LegacyRole {
                id: m.id,
                name: m.name,
            })
            .collect())
    }

    async fn user_roles(&self) -> Result<Vec<LegacyUserRole>, InitError> {
        let models = asp_net_user_roles::Entity::find()
            .order_by_asc(asp_net_user_roles::Column::UserId)
            .all(&self.db)
            .await
            .context("read legacy user roles")?;
        Ok(models
            .into_iter()
            .map(|m| LegacyUserRole {
                user_id: m.user_id,
                role_id: m.role_id,
            })
            .collect())
    }

    async fn user_claims(&self) -> Result<Vec<LegacyUserClaim>, InitError> {
        let models = asp_net_user_claims::Entity::find()
            .order_by_asc(asp_net_user_claims::Column::Id)
            .all(&self.db)
            .await
            .context("read legacy user claims")?;
        Ok(models
            .into_iter()
            .map(|m| LegacyUserClaim {
                id: m.id,
                user_id: m.user_id,
                claim_type: m.claim_type,
                claim_value: m.claim_value,
            })
            .collect())
    }

    async fn user_logins(&self) -> Result<Vec<LegacyUserLogin>, InitError> {
        let models = asp_net_user_logins::Entity::find()
            .order_by_asc(asp_net_user_logins::Column::LoginProvider)
            .order_by_asc(asp_net_user_logins::Column::ProviderKey)
            .order_by_asc(asp_net_user_logins::Column::UserId)
            .all(&self.db)
            .await
            .context("read legacy user logins")?;
        Ok(models
            .into_iter()
            .map(|m| LegacyUserLogin {
                login_provider: m.login_provider,
                provider_key: m.provider_key,
                user_id: m.user_id,
            })
            .collect())
    }
}

fn legacy_user_from_model(model: asp_net_users::Model) -> LegacyUser {
    LegacyUser {
        id: model.id,
        user_name: model.user_name,
        email: model.email,
        email_confirmed: model.email_confirmed,
        password_hash: model.password_hash,
        security_stamp: model.security_stamp,
        phone_number: model.phone_number,
        phone_number_confirmed: model.phone_number_confirmed,
        two_factor_enabled: model.two_factor_enabled,
        lockout_end_date_utc: model.lockout_end_date_utc,
        lockout_enabled: model.lockout_enabled,
        access_failed_count: model.access_failed_count,
    }
}

// ── Identity store ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbIdentityStore {
    pub db: DatabaseConnection,
}

impl IdentityStore for DbIdentityStore {
    async fn save(&self, graph: &IdentityGraph) -> Result<(), InitError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let graph = graph.clone();
                Box::pin(async move {
                    // Parents first so every foreign key resolves on insert.
                    for user in graph.users() {
                        insert_user(txn, user).await?;
                    }
                    for role in graph.roles() {
                        insert_role(txn, role).await?;
                    }
                    for user in graph.users() {
                        insert_user_children(txn, user).await?;
                    }
                    Ok(())
                })
            })
            .await
            .context("save identity graph")?;
        debug!("identity graph committed");
        Ok(())
    }
}

async fn insert_user(txn: &DatabaseTransaction, user: &User) -> Result<(), sea_orm::DbErr> {
    asp_net_users::ActiveModel {
        id: Set(user.id.0.clone()),
        email: Set(user.email.clone()),
        email_confirmed: Set(user.email_confirmed),
        password_hash: Set(user.password_hash.clone()),
        security_stamp: Set(user.security_stamp.clone()),
        phone_number: Set(user.phone_number.clone()),
        phone_number_confirmed: Set(user.phone_number_confirmed),
        two_factor_enabled: Set(user.two_factor_enabled),
        lockout_end_date_utc: Set(user.lockout_end_date_utc),
        lockout_enabled: Set(user.lockout_enabled),
        access_failed_count: Set(user.access_failed_count),
        user_name: Set(user.user_name.clone()),
    }
    .insert(txn)
    .await?;
    Ok(())
}

async fn insert_role(txn: &DatabaseTransaction, role: &Role) -> Result<(), sea_orm::DbErr> {
    asp_net_roles::ActiveModel {
        id: Set(role.id.0.clone()),
        name: Set(role.name.clone()),
    }
    .insert(txn)
    .await?;
    Ok(())
}

async fn insert_user_children(
    txn: &DatabaseTransaction,
    user: &User,
) -> Result<(), sea_orm::DbErr> {
    for membership in &user.roles {
        asp_net_user_roles::ActiveModel {
            user_id: Set(membership.user_id.0.clone()),
            role_id: Set(membership.role_id.0.clone()),
        }
        .insert(txn)
        .await?;
    }
    for claim in &user.claims {
        asp_net_user_claims::ActiveModel {
            id: Set(claim.id),
            user_id: Set(claim.user_id.0.clone()),
            claim_type: Set(claim.claim_type.clone()),
            claim_value: Set(claim.claim_value.clone()),
        }
        .insert(txn)
        .await?;
    }
    for login in &user.logins {
        asp_net_user_logins::ActiveModel {
            login_provider: Set(login.login_provider.clone()),
            provider_key: Set(login.provider_key.clone()),
            user_id: Set(login.user_id.0.clone()),
        }
        .insert(txn)
        .await?;
    }
    Ok(())
}

// ── Sessions ─────────────────────────────────────────────────────────────────

/// Opens a fresh connection to the identity store per session.
#[derive(Clone)]
pub struct DbConnector {
    pub url: String,
}

impl StoreConnector for DbConnector {
    type Session = DbSession;

    async fn open(&self) -> Result<DbSession, InitError> {
        let db = Database::connect(&self.url)
            .await
            .context("connect to identity store")?;
        debug!("store connection opened");
        Ok(DbSession { db })
    }
}

pub struct DbSession {
    db: DatabaseConnection,
}

impl StoreSession for DbSession {
    type Schema = DbSchemaRepository;
    type Store = DbIdentityStore;

    fn schema(&self) -> DbSchemaRepository {
        DbSchemaRepository {
            db: self.db.clone(),
        }
    }

    fn store(&self) -> DbIdentityStore {
        DbIdentityStore {
            db: self.db.clone(),
        }
    }

    async fn close(self) {
        release(self.db).await;
    }
}
