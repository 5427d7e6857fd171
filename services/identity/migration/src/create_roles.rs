use sea_orm_migration::prelude::*;

use identity_schema::asp_net_roles::{Column, Entity};

pub(crate) fn statement() -> TableCreateStatement {
    Table::create()
        .table(Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(Column::Id)
                .string_len(128)
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(Column::Name).string_len(256).null())
        .to_owned()
}
