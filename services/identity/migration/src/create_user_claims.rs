use sea_orm_migration::prelude::*;

use identity_schema::asp_net_user_claims::{Column, Entity};
use identity_schema::asp_net_users;

pub(crate) fn statement() -> TableCreateStatement {
    Table::create()
        .table(Entity)
        .if_not_exists()
        .col(ColumnDef::new(Column::Id).integer().not_null())
        .col(ColumnDef::new(Column::UserId).string_len(128).not_null())
        .col(ColumnDef::new(Column::ClaimType).text().null())
        .col(ColumnDef::new(Column::ClaimValue).text().null())
        .primary_key(Index::create().name("PK_AspNetUserClaims").col(Column::Id))
        .foreign_key(
            ForeignKey::create()
                .name("FK_AspNetUserClaims_AspNetUsers_UserId")
                .from(Entity, Column::UserId)
                .to(asp_net_users::Entity, asp_net_users::Column::Id),
        )
        .to_owned()
}
