//! Block generator contract — dataset -> block, and block + block -> block.

use serde_json::Value;

use crate::dataset::Dataset;
use crate::record::Record;
use crate::types::{value_kind, ReclinkError, ReclinkResult};

use super::{Block, BlockBlackList};

/// Where a blocking key comes from, chosen explicitly at call time.
///
/// A function source computes the key from the whole record; an attribute
/// source reads one named attribute, whose value must be a string.
pub enum KeySource<'a, R> {
    /// Derive the key by calling a function on the record.
    Function(&'a dyn Fn(&R) -> String),
    /// Read the key from the named attribute.
    Attribute(&'a str),
}

impl<R: Record> KeySource<'_, R> {
    /// Extract the blocking key for one record.
    ///
    /// On the attribute path, a missing attribute or a non-string value is an
    /// error; it is never coerced and never silently skipped.
    pub fn key_of(&self, record: &R) -> ReclinkResult<String> {
        match self {
            KeySource::Function(f) => Ok(f(record)),
            KeySource::Attribute(name) => match record.attribute(name) {
                Some(Value::String(s)) => Ok(s.clone()),
                Some(other) => Err(ReclinkError::NonStringKey {
                    record_id: record.id().to_string(),
                    found: value_kind(other),
                }),
                None => Err(ReclinkError::MissingAttribute {
                    record_id: record.id().to_string(),
                    attribute: name.to_string(),
                }),
            },
        }
    }
}

/// A blocking strategy: assigns each record of a dataset to blocks, and
/// merges per-dataset blocks into one combined structure.
pub trait BlockGenerator {
    /// Build a block from a dataset by extracting a key per record.
    ///
    /// `output` defaults to a fresh empty block. Records whose key is
    /// currently black-listed are skipped entirely; key-extraction errors
    /// abort the whole pass for this dataset.
    fn block<D: Dataset>(
        &self,
        dataset: &D,
        key_source: KeySource<'_, D::Record>,
        output: Option<Block>,
        black_list: Option<&mut BlockBlackList>,
    ) -> ReclinkResult<Block>;

    /// Merge two blocks into one: the key-wise union of both inputs'
    /// memberships. Same-dataset pairs under a shared key remain present;
    /// filtering them is the consumer's job (see
    /// [`Block::candidate_pairs`]).
    fn generate(
        &self,
        block1: &Block,
        block2: &Block,
        output: Option<Block>,
    ) -> ReclinkResult<Block> {
        let mut output = output.unwrap_or_default();
        for (key, dataset_id, record_id) in block1.iter() {
            output.add(key, dataset_id, record_id);
        }
        for (key, dataset_id, record_id) in block2.iter() {
            output.add(key, dataset_id, record_id);
        }
        Ok(output)
    }
}
