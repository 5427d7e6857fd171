use sea_orm::entity::prelude::*;

/// Role membership. The primary key covers `UserId` only, so a user holds at
/// most one role in this schema.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "AspNetUserRoles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "UserId")]
    pub user_id: String,
    #[sea_orm(column_name = "RoleId")]
    pub role_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::asp_net_users::Entity",
        from = "Column::UserId",
        to = "super::asp_net_users::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::asp_net_roles::Entity",
        from = "Column::RoleId",
        to = "super::asp_net_roles::Column::Id"
    )]
    Role,
}

impl Related<super::asp_net_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::asp_net_roles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Role.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
