//! End-to-end store behavior: operation sequences replayed through sessions.

use pageforge_editor::{ComponentStore, EditSession, Mutation, StoreError};
use pageforge_model::ComponentRecord;

#[test]
fn test_canvas_editing_scenario() {
    // Empty canvas, drop a top bar, then a grid.
    let mut session = EditSession::new("page-1", ComponentStore::new());

    session
        .apply(Mutation::Insert {
            record: ComponentRecord::new("a", "TopBar"),
        })
        .unwrap();
    session
        .apply(Mutation::Insert {
            record: ComponentRecord::new("b", "Grid").with_content("columns", 3),
        })
        .unwrap();

    let ids: Vec<_> = session.records().iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids, vec!["a", "b"]);

    // Remove the top bar: only the grid remains.
    session
        .apply(Mutation::Remove {
            id: "a".to_string(),
        })
        .unwrap();
    let ids: Vec<_> = session.records().iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids, vec!["b"]);

    // Update the grid: only its content changes, id and position hold.
    session
        .apply(Mutation::Update {
            record: ComponentRecord::new("b", "Grid").with_content("columns", 4),
        })
        .unwrap();

    let record = &session.records()[0];
    assert_eq!(record.id, "b");
    assert_eq!(record.kind, "Grid");
    assert_eq!(record.u64_field("columns"), Some(4));
    assert_eq!(session.records().len(), 1);
}

#[test]
fn test_duplicate_drop_is_rejected_not_overwritten() {
    let mut session = EditSession::new("page-1", ComponentStore::new());

    session
        .apply(Mutation::Insert {
            record: ComponentRecord::new("x", "Hero").with_content("title", "first"),
        })
        .unwrap();

    let err = session
        .apply(Mutation::Insert {
            record: ComponentRecord::new("x", "Hero").with_content("title", "second"),
        })
        .unwrap_err();
    assert_eq!(err, StoreError::DuplicateId("x".to_string()));

    assert_eq!(session.records().len(), 1);
    assert_eq!(session.records()[0].str_field("title"), Some("first"));
}

/// Replaying any add/update/remove sequence yields exactly the state implied
/// by the operations, with no duplicate ids.
#[test]
fn test_replay_property_over_mixed_sequence() {
    let ops = vec![
        Mutation::Insert {
            record: ComponentRecord::new("a", "TopBar"),
        },
        Mutation::Insert {
            record: ComponentRecord::new("b", "Hero"),
        },
        Mutation::Remove {
            id: "ghost".to_string(),
        },
        Mutation::Update {
            record: ComponentRecord::new("b", "Hero").with_content("title", "v2"),
        },
        Mutation::Insert {
            record: ComponentRecord::new("c", "Footer"),
        },
        Mutation::Remove {
            id: "a".to_string(),
        },
        Mutation::Update {
            record: ComponentRecord::new("ghost", "Text"),
        },
        Mutation::Remove {
            id: "a".to_string(),
        },
    ];

    let mut store = ComponentStore::new();
    for op in &ops {
        store = op.apply(&store).unwrap();
    }

    // Model the same sequence with a plain ordered map.
    let expected_ids = vec!["b", "c"];
    let ids: Vec<_> = store.ids().collect();
    assert_eq!(ids, expected_ids);
    assert_eq!(store.get("b").unwrap().str_field("title"), Some("v2"));

    // No duplicate ids can survive any sequence.
    let mut seen = std::collections::HashSet::new();
    assert!(store.ids().all(|id| seen.insert(id)));
}

#[test]
fn test_every_intermediate_store_remains_observable() {
    let mut snapshots = Vec::new();
    let mut store = ComponentStore::new();

    for id in ["a", "b", "c"] {
        store = store.add(ComponentRecord::new(id, "Text")).unwrap();
        snapshots.push(store.clone());
    }
    store = store.remove("b");

    assert_eq!(snapshots[0].len(), 1);
    assert_eq!(snapshots[1].len(), 2);
    assert_eq!(snapshots[2].len(), 3);
    assert!(snapshots[2].contains("b"));
    assert!(!store.contains("b"));
}

#[test]
fn test_mutations_round_trip_through_json() {
    let ops = vec![
        Mutation::Insert {
            record: ComponentRecord::new("a", "Hero").with_content("title", "hi"),
        },
        Mutation::Remove {
            id: "a".to_string(),
        },
    ];

    let json = serde_json::to_string(&ops).unwrap();
    let back: Vec<Mutation> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ops);

    let mut store = ComponentStore::new();
    for op in &back {
        store = op.apply(&store).unwrap();
    }
    assert!(store.is_empty());
}
