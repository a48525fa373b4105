use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "plugin_pack_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub pack_id: i32,
    pub plugin_metadata_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::plugin_packs::Entity",
        from = "Column::PackId",
        to = "super::plugin_packs::Column::Id"
    )]
    Pack,
    #[sea_orm(
        belongs_to = "super::plugin_metadata::Entity",
        from = "Column::PluginMetadataId",
        to = "super::plugin_metadata::Column::Id"
    )]
    Plugin,
}

impl Related<super::plugin_packs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pack.def()
    }
}

impl Related<super::plugin_metadata::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Plugin.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
