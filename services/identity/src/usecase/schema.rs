use tracing::{debug, info};

use identity_migration::{IdentityTable, tables};

use crate::domain::repository::SchemaRepository;
use crate::error::InitError;

// ── EnsureSchema ─────────────────────────────────────────────────────────────

/// Creates whichever identity tables the catalog does not list, in
/// dependency order. Running it again against the same store is a no-op.
pub struct EnsureSchemaUseCase<R: SchemaRepository> {
    pub repo: R,
}

impl<R: SchemaRepository> EnsureSchemaUseCase<R> {
    /// Returns the tables created by this call, in creation order.
    pub async fn execute(&self) -> Result<Vec<IdentityTable>, InitError> {
        let order = tables::creation_order()?;
        let existing = self.repo.list_existing_tables().await?;
        info!(
            existing = existing.len(),
            expected = order.len(),
            "inspected identity tables"
        );

        let mut created = Vec::new();
        for table in order {
            if existing.contains(&table) {
                debug!(%table, "table exists, skipping");
                continue;
            }
            self.repo.create_table(table).await?;
            info!(%table, "created table");
            created.push(table);
        }
        Ok(created)
    }
}
