use sea_orm_migration::prelude::*;

use identity_schema::asp_net_users::{Column, Entity};

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
        .col(ColumnDef::new(Column::Email).string_len(256).null())
        .col(ColumnDef::new(Column::EmailConfirmed).boolean().not_null())
        .col(ColumnDef::new(Column::PasswordHash).text().null())
        .col(ColumnDef::new(Column::SecurityStamp).text().null())
        .col(ColumnDef::new(Column::PhoneNumber).text().null())
        .col(
            ColumnDef::new(Column::PhoneNumberConfirmed)
                .boolean()
                .not_null(),
        )
        .col(ColumnDef::new(Column::TwoFactorEnabled).boolean().not_null())
        .col(ColumnDef::new(Column::LockoutEndDateUtc).date_time().null())
        .col(ColumnDef::new(Column::LockoutEnabled).boolean().not_null())
        .col(ColumnDef::new(Column::AccessFailedCount).integer().not_null())
        .col(
            ColumnDef::new(Column::UserName)
                .string_len(256)
                .not_null()
                .unique_key(),
        )
        .to_owned()
}
