//! # Store Mutations
//!
//! Semantic operations on the component sequence.
//!
//! ## Mutation Semantics
//!
//! ### Insert
//! - Appends to the end of the sequence
//! - Fails on a duplicate id (no silent overwrite)
//!
//! ### Update
//! - Atomic replacement of the matching record (not a field merge)
//! - Position in the sequence is preserved
//! - Unknown id is a no-op
//!
//! ### Remove
//! - Unknown id is a no-op; removing twice equals removing once

use crate::store::{ComponentStore, StoreError};
use pageforge_model::ComponentRecord;
use serde::{Deserialize, Serialize};

/// Semantic mutations over the component store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Append a new record at the end of the sequence
    Insert { record: ComponentRecord },

    /// Replace the record with a matching id (atomic replacement)
    Update { record: ComponentRecord },

    /// Delete a record from the sequence
    Remove { id: String },
}

impl Mutation {
    /// Validate without applying.
    pub fn validate(&self, store: &ComponentStore) -> Result<(), StoreError> {
        match self {
            Mutation::Insert { record } => {
                if store.contains(&record.id) {
                    Err(StoreError::DuplicateId(record.id.clone()))
                } else {
                    Ok(())
                }
            }
            // Unknown ids are contractual no-ops, so these always validate.
            Mutation::Update { .. } | Mutation::Remove { .. } => Ok(()),
        }
    }

    /// Apply to a store, returning the successor store value.
    pub fn apply(&self, store: &ComponentStore) -> Result<ComponentStore, StoreError> {
        match self {
            Mutation::Insert { record } => store.add(record.clone()),
            Mutation::Update { record } => Ok(store.update(record.clone())),
            Mutation::Remove { id } => Ok(store.remove(id)),
        }
    }
}
