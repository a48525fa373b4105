use crate::domain::json::decode_values;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "plugin_config_options")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub section: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_name = "type")]
    pub kind: String,
    pub is_bool: bool,
    /// JSON array of strings, NULL when the option has no value list.
    #[sea_orm(column_type = "Text", nullable)]
    pub values: Option<String>,
    pub plugin_metadata_id: i32,
}

impl Model {
    /// Decodes the stored value list back into the ordered strings it was built from.
    pub fn values_list(&self) -> Result<Vec<String>, serde_json::Error> {
        decode_values(self.values.as_deref())
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::plugin_metadata::Entity",
        from = "Column::PluginMetadataId",
        to = "super::plugin_metadata::Column::Id"
    )]
    Plugin,
}

impl Related<super::plugin_metadata::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Plugin.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
