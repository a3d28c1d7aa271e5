//! Token blocking — one block membership per whitespace token of the key.

use std::collections::BTreeSet;

use log::{debug, trace};

use crate::dataset::Dataset;
use crate::record::Record;
use crate::types::ReclinkResult;

use super::{Block, BlockBlackList, BlockGenerator, KeySource};

/// Blocking strategy that splits the extracted key on whitespace and adds
/// the record under every distinct token.
///
/// Broader recall than exact hashing on multi-word values; common tokens
/// cross a black-list threshold quickly, so a black list is recommended with
/// this strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenBlockGenerator;

impl TokenBlockGenerator {
    /// Create a new token block generator.
    pub fn new() -> Self {
        Self
    }
}

impl BlockGenerator for TokenBlockGenerator {
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
            let value = key_source.key_of(record)?;
            let tokens: BTreeSet<&str> = value.split_whitespace().collect();
            for token in tokens {
                if let Some(bl) = black_list.as_deref() {
                    if bl.has(token) {
                        trace!(
                            "skipping token {:?} of record {:?}: black-listed",
                            token,
                            record.id()
                        );
                        skipped += 1;
                        continue;
                    }
                }
                block.add(token, dataset.id(), record.id());
                if let Some(bl) = black_list.as_deref_mut() {
                    bl.add(token, &block);
                }
            }
        }
        debug!(
            "token blocking over dataset {:?}: {} keys, {} memberships, {} tokens skipped",
            dataset.id(),
            block.key_count(),
            block.len(),
            skipped
        );
        Ok(block)
    }
}
