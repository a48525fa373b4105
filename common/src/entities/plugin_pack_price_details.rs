use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "plugin_pack_price_details")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub month: i32,
    pub three_month: i32,
    pub year: i32,
    pub plugin_pack_id: i32,
    /// Shared with the plugin price shape. Pack rows never reference a plugin.
    #[sea_orm(nullable)]
    pub plugin_metadata_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::plugin_packs::Entity",
        from = "Column::PluginPackId",
        to = "super::plugin_packs::Column::Id"
    )]
    Pack,
}

impl Related<super::plugin_packs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pack.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
