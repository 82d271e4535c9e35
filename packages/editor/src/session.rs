//! # Edit Session Management
//!
//! One session per actively edited page. All mutations for a page flow
//! through its session on a single logical thread; the session owns the
//! current store value and hands out cheap snapshots.

use crate::mutations::Mutation;
use crate::store::{ComponentStore, StoreError};
use pageforge_model::{ComponentRecord, PageDocument};
use serde_json::{Map, Value};
use tracing::debug;

/// Editing state for a single page.
#[derive(Debug)]
pub struct EditSession {
    /// Page this session edits.
    pub page_id: String,

    /// Current version number (increments on each applied mutation).
    version: u64,

    /// Current selection (component ids).
    selected: Vec<String>,

    store: ComponentStore,
}

impl EditSession {
    pub fn new(page_id: impl Into<String>, store: ComponentStore) -> Self {
        Self {
            page_id: page_id.into(),
            version: 0,
            selected: Vec::new(),
            store,
        }
    }

    /// Open a session over a page document's component sequence.
    pub fn open(page: &PageDocument) -> Result<Self, StoreError> {
        let store = ComponentStore::from_records(page.components.clone())?;
        Ok(Self::new(page.id.clone(), store))
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Snapshot of the current store; unaffected by later mutations.
    pub fn store(&self) -> ComponentStore {
        self.store.clone()
    }

    pub fn records(&self) -> &[ComponentRecord] {
        self.store.records()
    }

    /// Apply a mutation; on success the session advances one version.
    ///
    /// A failed mutation leaves both the store and the version untouched.
    pub fn apply(&mut self, mutation: Mutation) -> Result<u64, StoreError> {
        mutation.validate(&self.store)?;
        self.store = mutation.apply(&self.store)?;
        self.version += 1;

        // Selection must not point at removed components.
        if let Mutation::Remove { id } = &mutation {
            self.selected.retain(|s| s != id);
        }

        Ok(self.version)
    }

    /// Apply late-arriving content for a component, if it still exists.
    ///
    /// Network completions (upload URLs, accepted suggestions) resolve after
    /// arbitrary delay; the user may have removed the component meanwhile.
    /// Existence is re-checked against the CURRENT store here - a completion
    /// for a removed component is dropped, not an error.
    pub fn apply_if_present(&mut self, id: &str, content: Map<String, Value>) -> bool {
        let Some(existing) = self.store.get(id) else {
            debug!(id, "late completion for removed component, dropping");
            return false;
        };

        let record = ComponentRecord {
            id: existing.id.clone(),
            kind: existing.kind.clone(),
            content,
        };
        self.store = self.store.update(record);
        self.version += 1;
        true
    }

    /// Merge single content key into a component, if it still exists.
    pub fn set_content_if_present(&mut self, id: &str, key: &str, value: Value) -> bool {
        let Some(existing) = self.store.get(id) else {
            debug!(id, key, "late content for removed component, dropping");
            return false;
        };

        let mut record = existing.clone();
        record.content.insert(key.to_string(), value);
        self.store = self.store.update(record);
        self.version += 1;
        true
    }

    pub fn select(&mut self, ids: Vec<String>) {
        self.selected = ids.into_iter().filter(|id| self.store.contains(id)).collect();
    }

    pub fn selection(&self) -> &[String] {
        &self.selected
    }

    /// Write the session's records back into a page document for persisting.
    pub fn write_back(&self, page: &mut PageDocument) {
        page.components = self.store.records().to_vec();
        page.touch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(ids: &[&str]) -> EditSession {
        let mut store = ComponentStore::new();
        for id in ids {
            store = store.add(ComponentRecord::new(*id, "Text")).unwrap();
        }
        EditSession::new("page-1", store)
    }

    #[test]
    fn test_version_advances_only_on_success() {
        let mut session = session_with(&["a"]);
        assert_eq!(session.version(), 0);

        session
            .apply(Mutation::Insert {
                record: ComponentRecord::new("b", "Hero"),
            })
            .unwrap();
        assert_eq!(session.version(), 1);

        let err = session.apply(Mutation::Insert {
            record: ComponentRecord::new("b", "Hero"),
        });
        assert!(err.is_err());
        assert_eq!(session.version(), 1);
    }

    #[test]
    fn test_stale_completion_is_noop_after_remove() {
        let mut session = session_with(&["img-1"]);

        session
            .apply(Mutation::Remove {
                id: "img-1".to_string(),
            })
            .unwrap();

        // The upload that was in flight when the user deleted the component.
        let mut content = Map::new();
        content.insert("src".to_string(), Value::from("https://cdn.test/late.png"));

        assert!(!session.apply_if_present("img-1", content));
        assert!(session.records().is_empty());
    }

    #[test]
    fn test_completion_applies_when_component_survives() {
        let mut session = session_with(&["img-1"]);

        assert!(session.set_content_if_present(
            "img-1",
            "src",
            Value::from("https://cdn.test/ok.png")
        ));

        let record = &session.records()[0];
        assert_eq!(record.str_field("src"), Some("https://cdn.test/ok.png"));
        // Existing content keys survive a single-key merge.
        assert_eq!(record.kind, "Text");
    }

    #[test]
    fn test_selection_drops_removed_components() {
        let mut session = session_with(&["a", "b"]);
        session.select(vec!["a".to_string(), "b".to_string()]);

        session
            .apply(Mutation::Remove {
                id: "a".to_string(),
            })
            .unwrap();

        assert_eq!(session.selection(), ["b".to_string()]);
    }

    #[test]
    fn test_snapshot_is_immune_to_later_mutations() {
        let mut session = session_with(&["a"]);
        let snapshot = session.store();

        session
            .apply(Mutation::Remove {
                id: "a".to_string(),
            })
            .unwrap();

        assert!(snapshot.contains("a"));
        assert!(session.records().is_empty());
    }
}
