//! Record contract — identity, validation and cached derived attributes.
//!
//! A record wraps a raw data object and exposes a validated unique identifier
//! plus named derived attributes, which the blocking engine reads as blocking
//! keys. Records reference nothing outside themselves; blocks refer to them
//! only by (dataset-id, record-id) pairs.

pub mod auto;

pub use auto::AutoRecord;

use std::any::TypeId;

use serde_json::Value;

use crate::types::{ReclinkError, ReclinkResult, MAX_ID_LEN, RESERVED_ID_CHAR};

/// A record with a unique identifier and named derived attributes.
///
/// `materialize` and `discard_raw` default to no-ops for kinds that keep no
/// lazy state; kinds with cached attributes compute and store them in
/// `materialize` so that attribute access never fails once [`finalize`] ran.
pub trait Record {
    /// Unique identifier within the owning dataset. Must be 1-255 characters
    /// and free of the reserved `*` separator (checked by [`finalize`]).
    fn id(&self) -> &str;

    /// Look up a derived attribute by name.
    fn attribute(&self, name: &str) -> Option<&Value>;

    /// Compute and store every cached attribute.
    fn materialize(&mut self) -> ReclinkResult<()> {
        Ok(())
    }

    /// Drop the raw object this record was built from.
    fn discard_raw(&mut self) {}
}

/// Per-kind finalization behavior, passed explicitly to [`finalize`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordConfig {
    /// Drop the raw object once all cached attributes are materialized.
    pub drop_raw: bool,
}

/// Validate a record or dataset identifier.
///
/// Valid identifiers are 1-255 characters long and never contain the reserved
/// `*` character.
pub fn validate_id(id: &str) -> ReclinkResult<()> {
    let len = id.chars().count();
    if len == 0 || len > MAX_ID_LEN {
        return Err(ReclinkError::IdLength(len));
    }
    if id.contains(RESERVED_ID_CHAR) {
        return Err(ReclinkError::IdReservedChar(id.to_string()));
    }
    Ok(())
}

/// Finalize a freshly constructed record.
///
/// Forces computation of every cached attribute, validates the identifier,
/// and drops the raw object if the kind's configuration asks for it. Run this
/// once per record before handing it to a blocking pass; afterwards attribute
/// access never depends on the raw object.
pub fn finalize<R: Record>(record: &mut R, config: RecordConfig) -> ReclinkResult<()> {
    record.materialize()?;
    validate_id(record.id())?;
    if config.drop_raw {
        record.discard_raw();
    }
    Ok(())
}

/// Whether two records denote the same entity: equal iff they are of the
/// exact same concrete kind and carry the same id.
pub fn records_equal<A, B>(a: &A, b: &B) -> bool
where
    A: Record + 'static,
    B: Record + 'static,
{
    TypeId::of::<A>() == TypeId::of::<B>() && a.id() == b.id()
}
