//! Schema-free record — one attribute per key of a raw JSON object.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::types::{value_kind, ReclinkError, ReclinkResult};

use super::{Record, RecordConfig};

/// Record whose attributes are derived directly from the keys of a raw JSON
/// object. The entry literally named `id` is not an attribute; it is exposed
/// through [`Record::id`] instead.
///
/// Attribute reads fall back to the raw object until [`Record::materialize`]
/// copied every entry into the per-instance cache; after that the raw object
/// may be discarded.
#[derive(Debug, Clone)]
pub struct AutoRecord {
    id: String,
    attributes: BTreeMap<String, Value>,
    raw: Option<Value>,
}

impl AutoRecord {
    /// Build a record from a raw JSON object. The object must carry a string
    /// `id` entry.
    pub fn from_raw(raw: Value) -> ReclinkResult<Self> {
        let id = match raw.get("id") {
            None => return Err(ReclinkError::MissingId),
            Some(Value::String(s)) => s.clone(),
            Some(other) => return Err(ReclinkError::NonStringId(value_kind(other))),
        };
        Ok(Self {
            id,
            attributes: BTreeMap::new(),
            raw: Some(raw),
        })
    }

    /// Finalization config for this kind: the raw object is dropped once all
    /// attributes are materialized.
    pub fn config() -> RecordConfig {
        RecordConfig { drop_raw: true }
    }

    /// Whether the raw object is still held.
    pub fn has_raw(&self) -> bool {
        self.raw.is_some()
    }

    /// Names of the materialized attributes.
    pub fn attribute_names(&self) -> Vec<&str> {
        self.attributes.keys().map(|k| k.as_str()).collect()
    }
}

impl Record for AutoRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn attribute(&self, name: &str) -> Option<&Value> {
        if name == "id" {
            return None;
        }
        if let Some(value) = self.attributes.get(name) {
            return Some(value);
        }
        self.raw.as_ref().and_then(|raw| raw.get(name))
    }

    fn materialize(&mut self) -> ReclinkResult<()> {
        if let Some(Value::Object(map)) = &self.raw {
            for (key, value) in map {
                if key == "id" {
                    continue;
                }
                self.attributes
                    .entry(key.clone())
                    .or_insert_with(|| value.clone());
            }
        }
        Ok(())
    }

    fn discard_raw(&mut self) {
        self.raw = None;
    }
}

impl PartialEq for AutoRecord {
    /// Equal iff the ids match.
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for AutoRecord {}
