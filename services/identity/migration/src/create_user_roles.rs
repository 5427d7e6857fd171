use sea_orm_migration::prelude::*;

use identity_schema::asp_net_user_roles::{Column, Entity};
use identity_schema::{asp_net_roles, asp_net_users};

pub(crate) fn statement() -> TableCreateStatement {
    Table::create()
        .table(Entity)
        .if_not_exists()
        .col(ColumnDef::new(Column::UserId).string_len(128).not_null())
        .col(ColumnDef::new(Column::RoleId).string_len(128).not_null())
        .primary_key(
            Index::create()
                .name("PK_AspNetUserRoles")
                .col(Column::UserId),
        )
        .foreign_key(
            ForeignKey::create()
                .name("FK_AspNetUserRoles_AspNetUsers_UserId")
                .from(Entity, Column::UserId)
                .to(asp_net_users::Entity, asp_net_users::Column::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("FK_AspNetUserRoles_AspNetRoles_RoleId")
                .from(Entity, Column::RoleId)
                .to(asp_net_roles::Entity, asp_net_roles::Column::Id),
        )
        .to_owned()
}
