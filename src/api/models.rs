use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Custom deserializer: the service formats prices as strings ("$12.99")
/// but numbers are accepted and stringified.
fn deserialize_price<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) if !s.is_empty() => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        _ => Ok(None),
    }
}

/// Custom deserializer: empty or non-string values are treated as missing
fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) if !s.is_empty() => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Custom deserializer: keeps only the string entries of an attribute array
fn deserialize_attributes<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect()),
        _ => Ok(Vec::new()),
    }
}

/// One product record returned by the search endpoint.
///
/// Every field is optional; records are read defensively and unknown keys
/// are ignored.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Product {
    #[serde(deserialize_with = "deserialize_text", default)]
    pub name: Option<String>,
    #[serde(deserialize_with = "deserialize_price", default)]
    pub price: Option<String>,
    #[serde(deserialize_with = "deserialize_text", default)]
    pub url: Option<String>,
    #[serde(deserialize_with = "deserialize_attributes", default)]
    pub attributes: Vec<String>,
}

impl Product {
    /// Read a record from an arbitrary JSON value, falling back to an empty
    /// record when the value is not an object.
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}

/// Raw search response, kept unmodified for JSON output.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    raw: Value,
}

impl SearchResults {
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Product records from the `products` array; empty when absent.
    pub fn products(&self) -> Vec<Product> {
        self.raw
            .get("products")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(Product::from_value).collect())
            .unwrap_or_default()
    }
}
