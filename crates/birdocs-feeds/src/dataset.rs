//! Serde model of a CMS dataset response.
//!
//! ```json
//! { "data": [ { "content": { "Year": "2025", "Rulings": "<p>…</p>" } } ] }
//! ```
//!
//! `content` varies per template, so it stays a [`serde_json::Value`].

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    pub data: Vec<DatasetItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetItem {
    #[serde(default)]
    pub content: Value,
}

impl Dataset {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

impl DatasetItem {
    /// A string-ish field of an object `content`. Numbers are rendered.
    pub fn field(&self, key: &str) -> Option<String> {
        match self.content.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// The embedded HTML table: string content itself, or the first string
    /// field holding a `<table`.
    pub fn table_html(&self) -> Option<&str> {
        match &self.content {
            Value::String(s) => Some(s.as_str()),
            Value::Object(map) => map
                .values()
                .filter_map(Value::as_str)
                .find(|s| s.to_ascii_lowercase().contains("<table")),
            _ => None,
        }
    }
}
