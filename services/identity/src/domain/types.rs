use identity_domain::graph::GraphSummary;
use identity_migration::IdentityTable;

/// Whether the store database existed before this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseStatus {
    Created,
    Existing,
}

/// Outcome of one initialization run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitReport {
    /// Tables created by this run, in creation order.
    pub created_tables: Vec<IdentityTable>,
    /// Counts of the seeded graph; `None` when seeding did not run.
    pub seed: Option<GraphSummary>,
}
