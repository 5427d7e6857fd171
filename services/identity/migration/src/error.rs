use crate::tables::IdentityTable;

/// Violations of the fixed table set. These indicate a programming error in
/// the table definitions, never a runtime condition of the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("unknown identity table `{0}`")]
    UnknownTable(String),
    #[error("table {0} is defined more than once")]
    DuplicateTable(IdentityTable),
    #[error("table {table} depends on undefined table {dependency}")]
    MissingDependency {
        table: IdentityTable,
        dependency: IdentityTable,
    },
    #[error("dependency cycle among tables {0:?}")]
    DependencyCycle(Vec<IdentityTable>),
}
