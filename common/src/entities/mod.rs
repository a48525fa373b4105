pub mod hardware_identifiers;
pub mod plugin_config_options;
pub mod plugin_metadata;
pub mod plugin_pack_items;
pub mod plugin_pack_price_details;
pub mod plugin_packs;
pub mod plugin_price_details;
pub mod prelude;
pub mod user_credentials;
