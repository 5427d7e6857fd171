use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use sea_orm_migration::prelude::TableCreateStatement;

use crate::error::SchemaError;
use crate::{create_roles, create_user_claims, create_user_logins, create_user_roles, create_users};

/// One of the five identity tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IdentityTable {
    Users,
    Roles,
    UserRoles,
    UserClaims,
    UserLogins,
}

impl IdentityTable {
    pub const ALL: [Self; 5] = [
        Self::Users,
        Self::Roles,
        Self::UserRoles,
        Self::UserClaims,
        Self::UserLogins,
    ];

    /// Physical table name as it appears in the store catalog.
    pub fn name(self) -> &'static str {
        match self {
            Self::Users => "AspNetUsers",
            Self::Roles => "AspNetRoles",
            Self::UserRoles => "AspNetUserRoles",
            Self::UserClaims => "AspNetUserClaims",
            Self::UserLogins => "AspNetUserLogins",
        }
    }

    /// `CREATE TABLE IF NOT EXISTS` statement for this table.
    pub fn create_statement(self) -> TableCreateStatement {
        match self {
            Self::Users => create_users::statement(),
            Self::Roles => create_roles::statement(),
            Self::UserRoles => create_user_roles::statement(),
            Self::UserClaims => create_user_claims::statement(),
            Self::UserLogins => create_user_logins::statement(),
        }
    }
}

impl fmt::Display for IdentityTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IdentityTable {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| SchemaError::UnknownTable(s.to_owned()))
    }
}

/// DDL for a table given by its physical name.
pub fn create_statement_for(name: &str) -> Result<TableCreateStatement, SchemaError> {
    Ok(name.parse::<IdentityTable>()?.create_statement())
}

/// A table together with the tables its foreign keys reference.
#[derive(Debug, Clone, Copy)]
pub struct TableSpec {
    pub table: IdentityTable,
    pub depends_on: &'static [IdentityTable],
}

pub const IDENTITY_TABLES: [TableSpec; 5] = [
    TableSpec {
        table: IdentityTable::Users,
        depends_on: &[],
    },
    TableSpec {
        table: IdentityTable::Roles,
        depends_on: &[],
    },
    TableSpec {
        table: IdentityTable::UserRoles,
        depends_on: &[IdentityTable::Users, IdentityTable::Roles],
    },
    TableSpec {
        table: IdentityTable::UserClaims,
        depends_on: &[IdentityTable::Users],
    },
    TableSpec {
        table: IdentityTable::UserLogins,
        depends_on: &[IdentityTable::Users],
    },
];

/// Creation order of the identity tables.
pub fn creation_order() -> Result<Vec<IdentityTable>, SchemaError> {
    creation_order_of(&IDENTITY_TABLES)
}

/// Topological order of `specs`: every table comes after the tables it
/// depends on. Ties keep declaration order.
pub fn creation_order_of(specs: &[TableSpec]) -> Result<Vec<IdentityTable>, SchemaError> {
    let mut defined = BTreeSet::new();
    for spec in specs {
        if !defined.insert(spec.table) {
            return Err(SchemaError::DuplicateTable(spec.table));
        }
    }
    for spec in specs {
        if let Some(missing) = spec.depends_on.iter().find(|d| !defined.contains(*d)) {
            return Err(SchemaError::MissingDependency {
                table: spec.table,
                dependency: *missing,
            });
        }
    }

    let mut placed = BTreeSet::new();
    let mut ordered = Vec::with_capacity(specs.len());
    while ordered.len() < specs.len() {
        let ready = specs.iter().find(|s| {
            !placed.contains(&s.table) && s.depends_on.iter().all(|d| placed.contains(d))
        });
        let Some(spec) = ready else {
            let stuck = specs
                .iter()
                .map(|s| s.table)
                .filter(|t| !placed.contains(t))
                .collect();
            return Err(SchemaError::DependencyCycle(stuck));
        };
        placed.insert(spec.table);
        ordered.push(spec.table);
    }
    Ok(ordered)
}
