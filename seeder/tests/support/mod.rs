#![allow(dead_code)]

use common::db;
use common::entities::prelude::*;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use seeder::import::{ConfigOptionRecord, PackRecord, PluginRecord, PriceDetailsRecord};
use std::io::Write;

pub async fn setup_db() -> DatabaseConnection {
    let db = db::establish_connection("sqlite::memory:")
        .await
        .expect("Failed to connect to test database");
    db::ensure_tables(&db)
        .await
        .expect("Failed to create tables");
    db
}

pub fn write_json(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct RowCounts {
    pub plugins: u64,
    pub plugin_price_details: u64,
    pub config_options: u64,
    pub packs: u64,
    pub pack_price_details: u64,
    pub pack_items: u64,
}

pub async fn row_counts(db: &DatabaseConnection) -> RowCounts {
    RowCounts {
        plugins: PluginMetadata::find().count(db).await.unwrap(),
        plugin_price_details: PluginPriceDetails::find().count(db).await.unwrap(),
        config_options: PluginConfigOptions::find().count(db).await.unwrap(),
        packs: PluginPacks::find().count(db).await.unwrap(),
        pack_price_details: PluginPackPriceDetails::find().count(db).await.unwrap(),
        pack_items: PluginPackItems::find().count(db).await.unwrap(),
    }
}

pub fn prices(month: i32, three_month: i32, year: i32) -> PriceDetailsRecord {
    PriceDetailsRecord {
        month,
        three_month,
        year,
    }
}

pub fn option(name: &str, values: &[&str]) -> ConfigOptionRecord {
    ConfigOptionRecord {
        name: name.to_string(),
        section: "General".to_string(),
        description: format!("{} option", name),
        kind: if values.is_empty() { "bool" } else { "select" }.to_string(),
        is_bool: values.is_empty(),
        values: values.iter().map(|v| v.to_string()).collect(),
    }
}

pub fn plugin(name: &str) -> PluginRecord {
    PluginRecord {
        name: name.to_string(),
        title: format!("{} title", name),
        description: format!("{} description", name),
        image_url: format!("https://cdn.example/{}.png", name),
        video_url: String::new(),
        top_pick: false,
        tier: 1,
        price_details: prices(100, 270, 1000),
        configuration_options: vec![option("enabled", &[])],
    }
}

pub fn pack(name: &str, plugins: &[&str]) -> PackRecord {
    PackRecord {
        name: name.to_string(),
        title: format!("{} title", name),
        description: format!("{} description", name),
        image_url: format!("https://cdn.example/{}.png", name),
        discount: 0.1,
        active: true,
        plugins: plugins.iter().map(|p| p.to_string()).collect(),
        price_details: prices(900, 2400, 8000),
    }
}
