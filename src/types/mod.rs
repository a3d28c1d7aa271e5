//! All data types for the Reclink library.

pub mod error;

pub use error::{ReclinkError, ReclinkResult};

/// Maximum length of a record or dataset identifier, in characters.
pub const MAX_ID_LEN: usize = 255;

/// Character reserved out of identifiers. Downstream tooling joins a dataset
/// id and a record id with it when a flat qualified key is needed.
pub const RESERVED_ID_CHAR: char = '*';

/// Returns a short name for the JSON type of a value, for error messages.
pub fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
