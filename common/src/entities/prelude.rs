pub use super::hardware_identifiers::Entity as HardwareIdentifiers;
pub use super::plugin_config_options::Entity as PluginConfigOptions;
pub use super::plugin_metadata::Entity as PluginMetadata;
pub use super::plugin_pack_items::Entity as PluginPackItems;
pub use super::plugin_pack_price_details::Entity as PluginPackPriceDetails;
pub use super::plugin_packs::Entity as PluginPacks;
pub use super::plugin_price_details::Entity as PluginPriceDetails;
pub use super::user_credentials::Entity as UserCredentials;
