//! Block — maps each blocking key to the record memberships sharing it.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::Serialize;

/// Mapping from blocking key to the set of (dataset-id, record-id) pairs that
/// share it.
///
/// Internally a two-level association, key -> dataset-id -> record-id set, so
/// both "iterate all (key, dataset-id, record-id) triples" and "look up all
/// members under a key" stay cheap. Within a key, memberships are unique.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Block {
    keys: HashMap<String, BTreeMap<String, BTreeSet<String>>>,
    #[serde(skip_serializing)]
    len: usize,
}

impl Block {
    /// Create a new, empty block.
    pub fn new() -> Self {
        Self {
            keys: HashMap::new(),
            len: 0,
        }
    }

    /// Insert a membership under a key. Idempotent for an identical
    /// (key, dataset-id, record-id) triple.
    pub fn add(&mut self, key: &str, dataset_id: &str, record_id: &str) {
        let inserted = self
            .keys
            .entry(key.to_string())
            .or_default()
            .entry(dataset_id.to_string())
            .or_default()
            .insert(record_id.to_string());
        if inserted {
            self.len += 1;
        }
    }

    /// All (dataset-id, record-id) pairs under a key.
    pub fn pairs(&self, key: &str) -> Vec<(&str, &str)> {
        match self.keys.get(key) {
            None => Vec::new(),
            Some(datasets) => datasets
                .iter()
                .flat_map(|(ds, rids)| rids.iter().map(move |rid| (ds.as_str(), rid.as_str())))
                .collect(),
        }
    }

    /// Number of memberships under a key.
    pub fn pair_count(&self, key: &str) -> usize {
        self.keys
            .get(key)
            .map(|datasets| datasets.values().map(|rids| rids.len()).sum())
            .unwrap_or(0)
    }

    /// Iterate all (key, dataset-id, record-id) triples. Restartable; covers
    /// every inserted membership exactly once, in no required order across
    /// keys.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.keys.iter().flat_map(|(key, datasets)| {
            datasets.iter().flat_map(move |(ds, rids)| {
                rids.iter()
                    .map(move |rid| (key.as_str(), ds.as_str(), rid.as_str()))
            })
        })
    }

    /// All blocking keys, sorted.
    pub fn block_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.keys.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        keys
    }

    /// Unordered pairs of distinct members sharing a key. With
    /// `cross_dataset_only` set, pairs drawn from the same dataset are
    /// filtered out. A pair sharing several keys appears once per shared key.
    pub fn candidate_pairs(
        &self,
        cross_dataset_only: bool,
    ) -> Vec<((&str, &str), (&str, &str))> {
        let mut result = Vec::new();
        for datasets in self.keys.values() {
            let members: Vec<(&str, &str)> = datasets
                .iter()
                .flat_map(|(ds, rids)| rids.iter().map(move |rid| (ds.as_str(), rid.as_str())))
                .collect();
            for i in 0..members.len() {
                for j in (i + 1)..members.len() {
                    if cross_dataset_only && members[i].0 == members[j].0 {
                        continue;
                    }
                    result.push((members[i], members[j]));
                }
            }
        }
        result
    }

    /// Number of distinct blocking keys.
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Total number of memberships across all keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the block holds no memberships.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
