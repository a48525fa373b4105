//! Storage encoding for configuration option value lists.
//!
//! Value lists live in a single text column as a JSON array of strings. An
//! empty list is stored as NULL rather than `[]`.

pub fn encode_values(values: &[String]) -> Result<Option<String>, serde_json::Error> {
    if values.is_empty() {
        return Ok(None);
    }
    serde_json::to_string(values).map(Some)
}

pub fn decode_values(stored: Option<&str>) -> Result<Vec<String>, serde_json::Error> {
    match stored {
        Some(raw) if !raw.trim().is_empty() => serde_json::from_str(raw),
        _ => Ok(Vec::new()),
    }
}
