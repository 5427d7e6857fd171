use clap::Parser;
use tracing::{error, info};

use identity_core::tracing::{LogFormat, init_tracing};
use identity_store::config::InitConfig;
use identity_store::domain::types::DatabaseStatus;
use identity_store::error::InitError;
use identity_store::infra::db::{DbConnector, DbLegacySource};
use identity_store::infra::provision::ensure_database;
use identity_store::usecase::initialize::InitializeUseCase;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing(LogFormat::from_env());

    let config = InitConfig::parse();

    if let Err(e) = run(config).await {
        error!(kind = e.kind(), error = ?e, "identity store initialization failed");
        return Err(e.into());
    }
    Ok(())
}

async fn run(config: InitConfig) -> Result<(), InitError> {
    let database = ensure_database(&config.database_url).await?;

    // The legacy database is only read when this run will seed.
    let seeding = database.status == DatabaseStatus::Created && !config.schema_only;
    let legacy = match (&config.legacy_database_url, seeding) {
        (Some(url), true) => Some(DbLegacySource::connect(url).await?),
        _ => None,
    };

    let usecase = InitializeUseCase {
        connector: DbConnector { url: database.url },
        legacy,
        schema_only: config.schema_only,
    };
    let result = usecase.execute(database.status).await;
    if let Some(legacy) = usecase.legacy {
        legacy.close().await;
    }
    let report = result?;

    let created: Vec<&str> = report.created_tables.iter().map(|t| t.name()).collect();
    match report.seed {
        Some(seed) => info!(
            ?created,
            users = seed.users,
            roles = seed.roles,
            memberships = seed.memberships,
            claims = seed.claims,
            logins = seed.logins,
            "identity store initialized and seeded"
        ),
        None => info!(?created, "identity store initialized"),
    }
    Ok(())
}
