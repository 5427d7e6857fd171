use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "AspNetUserClaims")]
pub struct Model {
    /// Carried over from the legacy row, never generated.
    #[sea_orm(primary_key, auto_increment = false, column_name = "Id")]
    pub id: i32,
    #[sea_orm(column_name = "UserId")]
    pub user_id: String,
    #[sea_orm(column_name = "ClaimType")]
    pub claim_type: Option<String>,
    #[sea_orm(column_name = "ClaimValue")]
    pub claim_value: Option<String>,
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
