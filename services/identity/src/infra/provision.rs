//! Creates the store database itself when it does not exist yet.

use std::path::Path;

use anyhow::{Context as _, anyhow};
use sea_orm::{ConnectionTrait, Database, DbBackend, Statement};
use tracing::info;
use url::Url;

use identity_core::connection::release;

use crate::domain::types::DatabaseStatus;
use crate::error::InitError;

/// Database administered by every PostgreSQL server, used to run `CREATE DATABASE`.
const POSTGRES_MAINTENANCE_DB: &str = "postgres";

/// Store database after provisioning, with the URL to open sessions on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedDatabase {
    pub status: DatabaseStatus,
    pub url: String,
}

/// Make sure the database behind `url` exists and report whether this call
/// created it. Only SQLite and PostgreSQL stores are supported.
pub async fn ensure_database(url: &str) -> Result<ProvisionedDatabase, InitError> {
    if let Some(file) = sqlite_file(url) {
        return ensure_sqlite(url, file?);
    }
    if url.starts_with("postgres://") || url.starts_with("postgresql://") {
        return ensure_postgres(url).await;
    }
    let scheme = url.split_once(':').map_or(url, |(scheme, _)| scheme);
    Err(anyhow!("unsupported store database scheme `{scheme}`, expected sqlite or postgres").into())
}

/// File path of a SQLite URL; `None` for other schemes.
fn sqlite_file(url: &str) -> Option<Result<&str, InitError>> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
    if path.is_empty() || path == ":memory:" || query.split('&').any(|p| p == "mode=memory") {
        // Each session would see its own empty database.
        return Some(Err(anyhow!("in-memory SQLite cannot hold the identity store").into()));
    }
    Some(Ok(path))
}

fn ensure_sqlite(url: &str, file: &str) -> Result<ProvisionedDatabase, InitError> {
    if Path::new(file).exists() {
        info!(file, "store database exists");
        return Ok(ProvisionedDatabase {
            status: DatabaseStatus::Existing,
            url: url.to_owned(),
        });
    }

    info!(file, "store database missing, first connection creates it");
    let url = if url.contains("mode=") {
        url.to_owned()
    } else if url.contains('?') {
        format!("{url}&mode=rwc")
    } else {
        format!("{url}?mode=rwc")
    };
    Ok(ProvisionedDatabase {
        status: DatabaseStatus::Created,
        url,
    })
}

async fn ensure_postgres(url: &str) -> Result<ProvisionedDatabase, InitError> {
    let (admin_url, name) = postgres_admin_url(url)?;

    let admin = Database::connect(admin_url.as_str())
        .await
        .context("connect to postgres maintenance database")?;
    let result = create_postgres_database(&admin, &name).await;
    release(admin).await;

    let status = result?;
    Ok(ProvisionedDatabase {
        status,
        url: url.to_owned(),
    })
}

/// Maintenance URL on the same server, and the target database name.
fn postgres_admin_url(url: &str) -> Result<(Url, String), InitError> {
    let mut admin = Url::parse(url).context("parse store database url")?;
    let name = admin.path().trim_start_matches('/').to_owned();
    if name.is_empty() {
        return Err(anyhow!("store database url names no database").into());
    }
    admin.set_path(&format!("/{POSTGRES_MAINTENANCE_DB}"));
    Ok((admin, name))
}

async fn create_postgres_database(
    admin: &impl ConnectionTrait,
    name: &str,
) -> Result<DatabaseStatus, InitError> {
    let exists = admin
        .query_one(Statement::from_sql_and_values(
            DbBackend::Postgres,
            "SELECT 1 FROM pg_database WHERE datname = $1",
            [name.into()],
        ))
        .await
        .context("look up store database")?
        .is_some();
    if exists {
        info!(database = name, "store database exists");
        return Ok(DatabaseStatus::Existing);
    }

    admin
        .execute_unprepared(&format!("CREATE DATABASE {}", quote_ident(name)))
        .await
        .with_context(|| format!("create database {name}"))?;
    info!(database = name, "created store database");
    Ok(DatabaseStatus::Created)
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
