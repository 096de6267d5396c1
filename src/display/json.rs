use crate::error::DisplayError;
use crate::utils::error_helpers::convert_serialize_error;
use serde_json::Value;

/// Pretty-print the raw response with two-space indentation, unfiltered
pub fn render_json(value: &Value) -> Result<String, DisplayError> {
    serde_json::to_string_pretty(value).map_err(convert_serialize_error)
}
