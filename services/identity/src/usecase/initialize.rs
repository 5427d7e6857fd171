use tracing::{info, warn};

use crate::domain::repository::{LegacyIdentitySource, StoreConnector, StoreSession};
use crate::domain::types::{DatabaseStatus, InitReport};
use crate::error::InitError;
use crate::usecase::schema::EnsureSchemaUseCase;
use crate::usecase::seed::SeedIdentityUseCase;

// ── Initialize ───────────────────────────────────────────────────────────────

/// Store initialization in two phases, each on its own session: ensure the
/// schema, then seed from the legacy source when the database is new.
pub struct InitializeUseCase<C: StoreConnector, L: LegacyIdentitySource> {
    pub connector: C,
    /// Legacy tables to seed from. Without one, seeding is skipped.
    pub legacy: Option<L>,
    /// Stop after the schema phase.
    pub schema_only: bool,
}

impl<C: StoreConnector, L: LegacyIdentitySource> InitializeUseCase<C, L> {
    pub async fn execute(&self, status: DatabaseStatus) -> Result<InitReport, InitError> {
        let session = self.connector.open().await?;
        let created = EnsureSchemaUseCase {
            repo: session.schema(),
        }
        .execute()
        .await;
        session.close().await;
        let created_tables = created?;

        let mut report = InitReport {
            created_tables,
            seed: None,
        };

        if status == DatabaseStatus::Existing {
            info!("store database already existed, skipping seed");
            return Ok(report);
        }
        if self.schema_only {
            info!("schema-only run, skipping seed");
            return Ok(report);
        }
        let Some(legacy) = &self.legacy else {
            warn!("no legacy source configured, store left empty");
            return Ok(report);
        };

        let session = self.connector.open().await?;
        let seeded = SeedIdentityUseCase {
            source: legacy,
            store: session.store(),
        }
        .execute()
        .await;
        session.close().await;
        report.seed = Some(seeded?);

        Ok(report)
    }
}
