//! Dataset contract — the external collaborator that feeds a blocking pass.

use serde_json::Value;

use crate::record::{finalize, validate_id, AutoRecord, Record, RecordConfig};
use crate::types::ReclinkResult;

/// A finite, restartable sequence of records with a stable dataset identifier.
///
/// The identifier qualifies record ids in (dataset-id, record-id) pairs, so it
/// follows the same validation rule as record ids.
pub trait Dataset {
    type Record: Record;

    /// Stable dataset identifier.
    fn id(&self) -> &str;

    /// All records, in dataset iteration order.
    fn records(&self) -> &[Self::Record];
}

/// Thin in-memory dataset used by tests, benches and demos.
pub struct InMemoryDataset<R> {
    id: String,
    records: Vec<R>,
}

impl<R: Record> InMemoryDataset<R> {
    /// Create an empty dataset with a validated identifier.
    pub fn new(id: impl Into<String>) -> ReclinkResult<Self> {
        let id = id.into();
        validate_id(&id)?;
        Ok(Self {
            id,
            records: Vec::new(),
        })
    }

    /// Finalize a record with the given config and append it.
    pub fn add_record(&mut self, mut record: R, config: RecordConfig) -> ReclinkResult<()> {
        finalize(&mut record, config)?;
        self.records.push(record);
        Ok(())
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl InMemoryDataset<AutoRecord> {
    /// Build a dataset of schema-free records from raw JSON objects.
    pub fn from_raw_objects(
        id: impl Into<String>,
        raw_objects: Vec<Value>,
    ) -> ReclinkResult<Self> {
        let mut dataset = Self::new(id)?;
        for raw in raw_objects {
            let record = AutoRecord::from_raw(raw)?;
            dataset.add_record(record, AutoRecord::config())?;
        }
        Ok(dataset)
    }
}

impl<R: Record> Dataset for InMemoryDataset<R> {
    type Record = R;

    fn id(&self) -> &str {
        &self.id
    }

    fn records(&self) -> &[R] {
        &self.records
    }
}
