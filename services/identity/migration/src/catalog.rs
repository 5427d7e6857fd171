//! Catalog query listing which identity tables already exist.

use std::collections::BTreeSet;

use sea_orm::{DbBackend, Statement};

use crate::error::SchemaError;
use crate::tables::IdentityTable;

/// Column holding the table name in rows returned by [`existing_tables_statement`].
pub const TABLE_NAME_COLUMN: &str = "table_name";

/// Single query against the store's system catalog, filtered on the five
/// identity table names. Row order is unspecified.
pub fn existing_tables_statement(backend: DbBackend) -> Statement {
    let names = IdentityTable::ALL
        .iter()
        .map(|t| format!("'{}'", t.name()))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = match backend {
        DbBackend::Sqlite => format!(
            "SELECT name AS {TABLE_NAME_COLUMN} FROM sqlite_master \
             WHERE type = 'table' AND name IN ({names})"
        ),
        DbBackend::Postgres => format!(
            "SELECT table_name::text AS {TABLE_NAME_COLUMN} FROM information_schema.tables \
             WHERE table_schema = current_schema() AND table_name IN ({names})"
        ),
        DbBackend::MySql => format!(
            "SELECT table_name AS {TABLE_NAME_COLUMN} FROM information_schema.tables \
             WHERE table_schema = DATABASE() AND table_name IN ({names})"
        ),
    };
    Statement::from_string(backend, sql)
}

/// Map catalog names back to tables. The query only selects identity tables,
/// so any other name means the filter and the table set disagree.
pub fn parse_table_names<I, S>(names: I) -> Result<BTreeSet<IdentityTable>, SchemaError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| name.as_ref().parse::<IdentityTable>())
        .collect()
}
