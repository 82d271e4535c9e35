use pageforge_model::ComponentRecord;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Duplicate component id: {0}")]
    DuplicateId(String),
}

/// Ordered, copy-on-write sequence of component records.
///
/// Insertion order is render order is stacking order. Every operation
/// leaves `self` untouched and returns a new store; unchanged stores share
/// their backing storage, so the no-op paths are a pointer copy.
///
/// Id uniqueness is an invariant: `add` rejects duplicates instead of
/// overwriting, and `from_records` refuses to construct a store that
/// violates it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComponentStore {
    records: Arc<Vec<ComponentRecord>>,
}

impl ComponentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from an existing sequence, validating id uniqueness.
    pub fn from_records(records: Vec<ComponentRecord>) -> Result<Self, StoreError> {
        for (i, record) in records.iter().enumerate() {
            if records[..i].iter().any(|r| r.id == record.id) {
                return Err(StoreError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self {
            records: Arc::new(records),
        })
    }

    /// Append a record. Duplicate ids are rejected; the store is unchanged.
    pub fn add(&self, record: ComponentRecord) -> Result<Self, StoreError> {
        if self.contains(&record.id) {
            return Err(StoreError::DuplicateId(record.id));
        }

        debug!(id = %record.id, kind = %record.kind, "store: add");
        let mut records = (*self.records).clone();
        records.push(record);
        Ok(Self {
            records: Arc::new(records),
        })
    }

    /// Replace the record with a matching id, preserving its position.
    ///
    /// Updating an unknown id is a no-op: the returned store equals `self`.
    pub fn update(&self, record: ComponentRecord) -> Self {
        let Some(index) = self.records.iter().position(|r| r.id == record.id) else {
            debug!(id = %record.id, "store: update of unknown id, no-op");
            return self.clone();
        };

        debug!(id = %record.id, "store: update");
        let mut records = (*self.records).clone();
        records[index] = record;
        Self {
            records: Arc::new(records),
        }
    }

    /// Delete the record with `id` if present; unknown ids are a no-op.
    pub fn remove(&self, id: &str) -> Self {
        let Some(index) = self.records.iter().position(|r| r.id == id) else {
            debug!(id, "store: remove of unknown id, no-op");
            return self.clone();
        };

        debug!(id, "store: remove");
        let mut records = (*self.records).clone();
        records.remove(index);
        Self {
            records: Arc::new(records),
        }
    }

    pub fn get(&self, id: &str) -> Option<&ComponentRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    pub fn records(&self) -> &[ComponentRecord] {
        &self.records
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
