use sea_orm_migration::prelude::*;

use identity_schema::asp_net_user_logins::{Column, Entity};
use identity_schema::asp_net_users;

pub(crate) fn statement() -> TableCreateStatement {
    Table::create()
        .table(Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(Column::LoginProvider)
                .string_len(128)
                .not_null(),
        )
        .col(ColumnDef::new(Column::ProviderKey).string_len(128).not_null())
        .col(ColumnDef::new(Column::UserId).string_len(128).not_null())
        .primary_key(
            Index::create()
                .name("PK_AspNetUserLogins")
                .col(Column::LoginProvider)
                .col(Column::ProviderKey)
                .col(Column::UserId),
        )
        .foreign_key(
            ForeignKey::create()
                .name("FK_AspNetUserLogins_AspNetUsers_UserId")
                .from(Entity, Column::UserId)
                .to(asp_net_users::Entity, asp_net_users::Column::Id),
        )
        .to_owned()
}
