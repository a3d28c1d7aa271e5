//! Hash blocking — exact string match on the extracted key.

use log::{debug, trace};

use crate::dataset::Dataset;
use crate::record::Record;
use crate::types::ReclinkResult;

use super::{Block, BlockBlackList, BlockGenerator, KeySource};

/// Blocking strategy that groups records by exact string equality of the
/// extracted key.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashBlockGenerator;

impl HashBlockGenerator {
    /// Create a new hash block generator.
    pub fn new() -> Self {
        Self
    }
}

impl BlockGenerator for HashBlockGenerator {
    fn block<D: Dataset>(
        &self,
        dataset: &D,
        key_source: KeySource<'_, D::Record>,
        output: Option<Block>,
        mut black_list: Option<&mut BlockBlackList>,
    ) -> ReclinkResult<Block> {
        let mut block = output.unwrap_or_default();
        let mut skipped = 0usize;
        for record in dataset.records() {
            let key = key_source.key_of(record)?;
            if let Some(bl) = black_list.as_deref() {
                if bl.has(&key) {
                    trace!(
                        "skipping record {:?}: key {:?} is black-listed",
                        record.id(),
                        key
                    );
                    skipped += 1;
                    continue;
                }
            }
            block.add(&key, dataset.id(), record.id());
            if let Some(bl) = black_list.as_deref_mut() {
                bl.add(&key, &block);
            }
        }
        debug!(
            "hash blocking over dataset {:?}: {} keys, {} memberships, {} records skipped",
            dataset.id(),
            block.key_count(),
            block.len(),
            skipped
        );
        Ok(block)
    }
}
