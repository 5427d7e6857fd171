use clap::Parser;

/// Identity store initializer configuration, from flags or environment.
#[derive(Debug, Parser)]
#[command(about = "Create the identity store schema and seed it from legacy tables")]
pub struct InitConfig {
    /// Identity store connection URL. Env var: `DATABASE_URL`.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Legacy identity database to seed from. Seeding is skipped when unset.
    /// Env var: `LEGACY_DATABASE_URL`.
    #[arg(long, env = "LEGACY_DATABASE_URL")]
    pub legacy_database_url: Option<String>,

    /// Create missing tables only, never seed. Env var: `IDENTITY_SCHEMA_ONLY`.
    #[arg(long, env = "IDENTITY_SCHEMA_ONLY")]
    pub schema_only: bool,
}
