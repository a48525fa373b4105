use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hardware_identifiers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_credential_id: i32,
    #[sea_orm(unique)]
    pub hardware_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user_credentials::Entity",
        from = "Column::UserCredentialId",
        to = "super::user_credentials::Column::Id"
    )]
    UserCredential,
}

impl Related<super::user_credentials::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserCredential.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
