use sea_orm::entity::prelude::*;

/// User account record.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "AspNetUsers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "Id")]
    pub id: String,
    #[sea_orm(column_name = "Email")]
    pub email: Option<String>,
    #[sea_orm(column_name = "EmailConfirmed")]
    pub email_confirmed: bool,
    #[sea_orm(column_name = "PasswordHash")]
    pub password_hash: Option<String>,
    #[sea_orm(column_name = "SecurityStamp")]
    pub security_stamp: Option<String>,
    #[sea_orm(column_name = "PhoneNumber")]
    pub phone_number: Option<String>,
    #[sea_orm(column_name = "PhoneNumberConfirmed")]
    pub phone_number_confirmed: bool,
    #[sea_orm(column_name = "TwoFactorEnabled")]
    pub two_factor_enabled: bool,
    #[sea_orm(column_name = "LockoutEndDateUtc")]
    pub lockout_end_date_utc: Option<chrono::NaiveDateTime>,
    #[sea_orm(column_name = "LockoutEnabled")]
    pub lockout_enabled: bool,
    #[sea_orm(column_name = "AccessFailedCount")]
    pub access_failed_count: i32,
    #[sea_orm(unique, column_name = "UserName")]
    pub user_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::asp_net_user_roles::Entity")]
    UserRoles,
    #[sea_orm(has_many = "super::asp_net_user_claims::Entity")]
    UserClaims,
    #[sea_orm(has_many = "super::asp_net_user_logins::Entity")]
    UserLogins,
}

impl Related<super::asp_net_user_roles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRoles.def()
    }
}

impl Related<super::asp_net_user_claims::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserClaims.def()
    }
}

impl Related<super::asp_net_user_logins::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserLogins.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
