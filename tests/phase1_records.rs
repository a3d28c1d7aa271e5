//! Phase 1 tests: record contract, validation, finalization.

use reclink::record::{finalize, records_equal, validate_id, AutoRecord, Record, RecordConfig};
use reclink::types::{ReclinkError, ReclinkResult};

use serde_json::{json, Value};

/// Typed record kind with an explicit per-instance cache, computed once in
/// `materialize`.
struct PersonRecord {
    raw: Option<Value>,
    cache: PersonCache,
}

#[derive(Default)]
struct PersonCache {
    id: String,
    name_key: Option<Value>,
}

impl PersonRecord {
    fn new(raw: Value) -> Self {
        let id = raw["id"].as_str().unwrap_or_default().to_string();
        Self {
            raw: Some(raw),
            cache: PersonCache {
                id,
                name_key: None,
            },
        }
    }
}

impl Record for PersonRecord {
    fn id(&self) -> &str {
        &self.cache.id
    }

    fn attribute(&self, name: &str) -> Option<&Value> {
        match name {
            "name_key" => self.cache.name_key.as_ref(),
            _ => None,
        }
    }

    fn materialize(&mut self) -> ReclinkResult<()> {
        if self.cache.name_key.is_none() {
            let name = self
                .raw
                .as_ref()
                .and_then(|raw| raw["name"].as_str())
                .unwrap_or_default();
            self.cache.name_key = Some(Value::String(name.to_lowercase()));
        }
        Ok(())
    }

    fn discard_raw(&mut self) {
        self.raw = None;
    }
}

// ==================== Identifier Validation ====================

#[test]
fn test_validate_id_accepts_plain_ids() {
    assert!(validate_id("a1").is_ok());
    assert!(validate_id(&"x".repeat(255)).is_ok());
    assert!(validate_id("record with spaces").is_ok());
}

#[test]
fn test_validate_id_rejects_empty() {
    match validate_id("") {
        Err(ReclinkError::IdLength(0)) => {}
        other => panic!("Expected IdLength(0), got {:?}", other),
    }
}

#[test]
fn test_validate_id_rejects_overlong() {
    match validate_id(&"x".repeat(256)) {
        Err(ReclinkError::IdLength(256)) => {}
        other => panic!("Expected IdLength(256), got {:?}", other),
    }
}

#[test]
fn test_validate_id_rejects_reserved_char() {
    match validate_id("census*a1") {
        Err(ReclinkError::IdReservedChar(id)) => assert_eq!(id, "census*a1"),
        other => panic!("Expected IdReservedChar, got {:?}", other),
    }
}

// ==================== AutoRecord ====================

#[test]
fn test_auto_record_requires_id() {
    let result = AutoRecord::from_raw(json!({"name": "john"}));
    assert!(matches!(result, Err(ReclinkError::MissingId)));
}

#[test]
fn test_auto_record_rejects_non_string_id() {
    match AutoRecord::from_raw(json!({"id": 42})) {
        Err(ReclinkError::NonStringId(kind)) => assert_eq!(kind, "number"),
        other => panic!("Expected NonStringId, got {:?}", other),
    }
}

#[test]
fn test_auto_record_exposes_id_not_as_attribute() {
    let record = AutoRecord::from_raw(json!({"id": "a1", "name": "john"})).unwrap();
    assert_eq!(record.id(), "a1");
    assert!(record.attribute("id").is_none());
}

#[test]
fn test_auto_record_attribute_reads_raw_before_materialize() {
    let record = AutoRecord::from_raw(json!({"id": "a1", "name": "john"})).unwrap();
    assert_eq!(record.attribute("name"), Some(&json!("john")));
    assert!(record.attribute("missing").is_none());
}

#[test]
fn test_finalize_materializes_and_drops_raw() {
    let mut record =
        AutoRecord::from_raw(json!({"id": "a1", "name": "john", "city": "berlin"})).unwrap();
    finalize(&mut record, AutoRecord::config()).unwrap();

    assert!(!record.has_raw());
    assert_eq!(record.attribute("name"), Some(&json!("john")));
    assert_eq!(record.attribute("city"), Some(&json!("berlin")));
    assert_eq!(record.attribute_names(), vec!["city", "name"]);
}

#[test]
fn test_finalize_keeps_raw_by_default() {
    let mut record = AutoRecord::from_raw(json!({"id": "a1", "name": "john"})).unwrap();
    finalize(&mut record, RecordConfig::default()).unwrap();
    assert!(record.has_raw());
}

#[test]
fn test_finalize_validates_id_format() {
    let mut record = AutoRecord::from_raw(json!({"id": "bad*id", "name": "john"})).unwrap();
    let result = finalize(&mut record, AutoRecord::config());
    assert!(matches!(result, Err(ReclinkError::IdReservedChar(_))));
}

// ==================== Typed Record Kind ====================

#[test]
fn test_cached_attribute_requires_materialize() {
    let mut record = PersonRecord::new(json!({"id": "p1", "name": "John Doe"}));
    assert!(record.attribute("name_key").is_none());

    record.materialize().unwrap();
    assert_eq!(record.attribute("name_key"), Some(&json!("john doe")));
}

#[test]
fn test_cached_attribute_computed_once() {
    let mut record = PersonRecord::new(json!({"id": "p1", "name": "John Doe"}));
    record.materialize().unwrap();

    // A second materialize must not recompute from the (changed) raw object.
    record.raw = Some(json!({"id": "p1", "name": "Jane Roe"}));
    record.materialize().unwrap();
    assert_eq!(record.attribute("name_key"), Some(&json!("john doe")));
}

#[test]
fn test_finalized_record_survives_raw_disposal() {
    let mut record = PersonRecord::new(json!({"id": "p1", "name": "John Doe"}));
    finalize(&mut record, RecordConfig { drop_raw: true }).unwrap();

    assert!(record.raw.is_none());
    assert_eq!(record.attribute("name_key"), Some(&json!("john doe")));
}

// ==================== Record Identity ====================

#[test]
fn test_records_equal_same_kind_same_id() {
    let a = AutoRecord::from_raw(json!({"id": "a1", "name": "john"})).unwrap();
    let b = AutoRecord::from_raw(json!({"id": "a1", "name": "jon"})).unwrap();
    assert!(records_equal(&a, &b));
    assert_eq!(a, b);
}

#[test]
fn test_records_equal_same_kind_different_id() {
    let a = AutoRecord::from_raw(json!({"id": "a1"})).unwrap();
    let b = AutoRecord::from_raw(json!({"id": "a2"})).unwrap();
    assert!(!records_equal(&a, &b));
    assert_ne!(a, b);
}

#[test]
fn test_records_equal_different_kinds_never_equal() {
    let a = AutoRecord::from_raw(json!({"id": "p1"})).unwrap();
    let b = PersonRecord::new(json!({"id": "p1"}));
    assert!(!records_equal(&a, &b));
}
