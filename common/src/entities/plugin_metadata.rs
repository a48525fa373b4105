use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "plugin_metadata")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub image_url: String,
    pub video_url: String,
    pub top_pick: bool,
    pub tier: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::plugin_price_details::Entity")]
    PriceDetails,
    #[sea_orm(has_many = "super::plugin_config_options::Entity")]
    ConfigOptions,
    #[sea_orm(has_many = "super::plugin_pack_items::Entity")]
    PackItems,
}

impl Related<super::plugin_price_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PriceDetails.def()
    }
}

impl Related<super::plugin_config_options::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ConfigOptions.def()
    }
}

impl Related<super::plugin_pack_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PackItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
