use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_credentials")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::hardware_identifiers::Entity")]
    HardwareIdentifiers,
}

impl Related<super::hardware_identifiers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HardwareIdentifiers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
