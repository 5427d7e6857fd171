use sea_orm::entity::prelude::*;

/// External login keyed by (provider, provider key, user).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "AspNetUserLogins")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "LoginProvider")]
    pub login_provider: String,
    #[sea_orm(primary_key, auto_increment = false, column_name = "ProviderKey")]
    pub provider_key: String,
    #[sea_orm(primary_key, auto_increment = false, column_name = "UserId")]
    pub user_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::asp_net_users::Entity",
        from = "Column::UserId",
        to = "super::asp_net_users::Column::Id"
    )]
    User,
}

impl Related<super::asp_net_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
