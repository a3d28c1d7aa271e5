//! Reclink — blocking engine for entity resolution and record linkage.
//!
//! Partitions record collections into candidate blocks sharing a blocking key,
//! so that expensive pairwise comparison only runs within blocks instead of
//! across the full cross-product of two datasets.

pub mod blocking;
pub mod dataset;
pub mod record;
pub mod types;

// Re-export commonly used types at the crate root
pub use blocking::{
    Block, BlockBlackList, BlockGenerator, HashBlockGenerator, KeySource, TokenBlockGenerator,
};
pub use dataset::{Dataset, InMemoryDataset};
pub use record::{finalize, records_equal, validate_id, AutoRecord, Record, RecordConfig};
pub use types::{value_kind, ReclinkError, ReclinkResult, MAX_ID_LEN, RESERVED_ID_CHAR};
