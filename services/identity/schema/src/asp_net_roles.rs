use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "AspNetRoles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "Id")]
    pub id: String,
    #[sea_orm(column_name = "Name")]
    pub name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::asp_net_user_roles::Entity")]
    UserRoles,
}

impl Related<super::asp_net_user_roles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRoles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
