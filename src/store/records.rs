use crate::scenario::types::ScenarioRecord;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use thiserror::Error;

/// Failures surfaced by the record store.
///
/// `DuplicateName` is kept separate from any other failure mode so the caller
/// can tell the client to pick a different name instead of retrying blindly.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("a scenario named '{0}' already exists")]
    DuplicateName(String),
}

/// In-process record store for scenario metadata.
///
/// Records are keyed by scenario name, so the map itself is the uniqueness
/// index: two concurrent inserts with the same name race on one map entry and
/// exactly one of them wins.
pub struct ScenarioStore {
    records: DashMap<String, ScenarioRecord>,
}

impl ScenarioStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Atomic uniqueness-constrained insert.
    ///
    /// The entry API holds the shard lock for the name across the occupancy
    /// check and the write, which is what makes the duplicate check reliable
    /// under concurrent submissions.
    pub fn insert(&self, record: ScenarioRecord) -> Result<(), StoreError> {
        match self.records.entry(record.name.clone()) {
            Entry::Occupied(_) => Err(StoreError::DuplicateName(record.name)),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    pub fn find_by_name(&self, name: &str) -> Option<ScenarioRecord> {
        self.records.get(name).map(|entry| entry.value().clone())
    }

    /// Returns up to `limit` records ordered by creation time, newest first.
    pub fn find_recent(&self, limit: usize) -> Vec<ScenarioRecord> {
        let mut records: Vec<ScenarioRecord> = self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        sort_newest_first(&mut records);
        records.truncate(limit);
        records
    }

    /// Returns up to `limit` records whose name contains `query`
    /// (case-insensitive), ordered by creation time, newest first.
    pub fn find_name_contains(&self, query: &str, limit: usize) -> Vec<ScenarioRecord> {
        let needle = query.to_lowercase();
        let mut records: Vec<ScenarioRecord> = self
            .records
            .iter()
            .filter(|entry| entry.key().to_lowercase().contains(&needle))
            .map(|entry| entry.value().clone())
            .collect();

        sort_newest_first(&mut records);
        records.truncate(limit);
        records
    }

    /// Removes the record carrying `uuid`, returning it if it existed.
    ///
    /// Used by the submission saga to roll back an insert whose bundle files
    /// failed to reach the disk.
    pub fn remove_by_uuid(&self, uuid: &str) -> Option<ScenarioRecord> {
        let name = self
            .records
            .iter()
            .find(|entry| entry.value().uuid == uuid)
            .map(|entry| entry.key().clone())?;

        self.records.remove(&name).map(|(_, record)| record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for ScenarioStore {
    fn default() -> Self {
        Self::new()
    }
}

fn sort_newest_first(records: &mut [ScenarioRecord]) {
    // Secondary key keeps the order stable when two records share a timestamp.
    records.sort_by(|a, b| {
        b.created
            .cmp(&a.created)
            .then_with(|| a.name.cmp(&b.name))
    });
}
