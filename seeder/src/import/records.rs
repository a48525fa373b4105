//! Input records as they appear in the JSON seed files.
//!
//! Every field falls back to its zero value when absent.
//! Unknown fields such as `id` are ignored.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PluginRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub top_pick: bool,
    #[serde(default)]
    pub tier: i32,
    #[serde(default)]
    pub price_details: PriceDetailsRecord,
    #[serde(default)]
    pub configuration_options: Vec<ConfigOptionRecord>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PriceDetailsRecord {
    #[serde(default)]
    pub month: i32,
    #[serde(default)]
    pub three_month: i32,
    #[serde(default)]
    pub year: i32,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOptionRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub is_bool: bool,
    #[serde(default)]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub discount: f32,
    #[serde(default)]
    pub active: bool,
    /// Names of member plugins.
    #[serde(default)]
    pub plugins: Vec<String>,
    #[serde(default)]
    pub price_details: PriceDetailsRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_record_reads_camel_case_fields() {
        let raw = r#"{
            "id": 42,
            "name": "autoclicker",
            "title": "Auto Clicker",
            "description": "Clicks for you",
            "imageUrl": "https://cdn.example/ac.png",
            "videoUrl": "https://cdn.example/ac.mp4",
            "topPick": true,
            "tier": 2,
            "priceDetails": {"month": 500, "threeMonth": 1300, "year": 4500, "pluginMetadataId": 9},
            "configurationOptions": [
                {"name": "speed", "section": "General", "description": "Clicks per second",
                 "type": "select", "isBool": false, "values": ["slow", "fast"]}
            ]
        }"#;

        let record: PluginRecord = serde_json::from_str(raw).unwrap();

        assert_eq!(record.name, "autoclicker");
        assert_eq!(record.image_url, "https://cdn.example/ac.png");
        assert!(record.top_pick);
        assert_eq!(record.tier, 2);
        assert_eq!(
            record.price_details,
            PriceDetailsRecord {
                month: 500,
                three_month: 1300,
                year: 4500
            }
        );
        assert_eq!(record.configuration_options.len(), 1);
        assert_eq!(record.configuration_options[0].kind, "select");
        assert_eq!(record.configuration_options[0].values, vec!["slow", "fast"]);
    }

    #[test]
    fn plugin_record_defaults_missing_fields() {
        let record: PluginRecord = serde_json::from_str(r#"{"name": "bare"}"#).unwrap();

        assert_eq!(record.title, "");
        assert!(!record.top_pick);
        assert_eq!(record.price_details, PriceDetailsRecord::default());
        assert!(record.configuration_options.is_empty());
    }

    #[test]
    fn missing_name_decodes_to_empty_string() {
        let record: PluginRecord = serde_json::from_str(r#"{"title": "nameless"}"#).unwrap();
        assert_eq!(record.name, "");
        assert_eq!(record.title, "nameless");

        let pack: PackRecord = serde_json::from_str(r#"{"plugins": ["a"]}"#).unwrap();
        assert_eq!(pack.name, "");
    }

    #[test]
    fn pack_record_reads_membership_and_prices() {
        let raw = r#"{
            "name": "skilling",
            "title": "Skilling Pack",
            "discount": 0.15,
            "active": true,
            "plugins": ["autoclicker", "fisher"],
            "priceDetails": {"month": 900, "threeMonth": 2400, "year": 8000}
        }"#;

        let record: PackRecord = serde_json::from_str(raw).unwrap();

        assert_eq!(record.plugins, vec!["autoclicker", "fisher"]);
        assert!((record.discount - 0.15).abs() < f32::EPSILON);
        assert!(record.active);
        assert_eq!(record.price_details.three_month, 2400);
        assert_eq!(record.image_url, "");
    }
}
