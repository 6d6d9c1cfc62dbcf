//! Stateful reconciler: owns the displayed list and its snapshot cache
use crate::config::ReconcilerConfig;
use crate::diff_engine::DiffEngine;
use crate::errors::ReconcilerError;
use crate::types::{LiveEvent, Operation, Snapshot};
use std::collections::HashSet;

/// Holds the currently displayed live events together with the snapshots they were
/// last diffed as. Both are replaced wholesale on every pass.
///
/// Not synchronized. Feed it from one thread (see [`crate::live_data::LiveData`] for
/// marshaling updates from elsewhere).
#[derive(Debug, Default)]
pub struct Reconciler {
    config: ReconcilerConfig,
    items: Vec<LiveEvent>,
    cache: Vec<Snapshot>,
}

impl Reconciler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ReconcilerConfig) -> Self {
        Reconciler {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &ReconcilerConfig {
        &self.config
    }

    pub fn items(&self) -> &[LiveEvent] {
        &self.items
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.cache
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Diffs `new_items` against the cached snapshots, then makes `new_items` the
    /// displayed list. The returned operations are relative to the previous list.
    pub fn submit_list(&mut self, new_items: Vec<LiveEvent>) -> Vec<Operation> {
        if self.config.check_unique_ids {
            if let Err(e) = validate_unique_ids(&new_items) {
                log::warn!("Reconciler::submit_list: {}", e);
            }
        }

        let operations = DiffEngine::new(&self.cache, &new_items, &self.config).reconcile();

        self.cache = Snapshot::capture_all(&new_items);
        self.items = new_items;
        log::debug!(
            "Reconciler::submit_list: {} operations, {} rows displayed",
            operations.len(),
            self.items.len()
        );
        operations
    }

    /// Appends `tail` to the displayed list. `None` leaves everything untouched.
    pub fn add_items(&mut self, tail: Option<Vec<LiveEvent>>) -> Option<Vec<Operation>> {
        let tail = tail?;
        let mut list = Vec::with_capacity(self.items.len() + tail.len());
        list.extend(self.items.iter().cloned());
        list.extend(tail);
        Some(self.submit_list(list))
    }
}

/// Fails on the first repeated `item_id`.
pub fn validate_unique_ids(items: &[LiveEvent]) -> Result<(), ReconcilerError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.item_id.as_str()) {
            return Err(ReconcilerError::DuplicateIdentity {
                item_id: item.item_id.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LiveEventState;

    fn item(id: &str) -> LiveEvent {
        LiveEvent::new(id, LiveEventState::Ready)
    }

    #[test]
    fn cache_follows_submitted_list() {
        let mut reconciler = Reconciler::new();
        let ops = reconciler.submit_list(vec![item("a"), item("b")]);
        assert_eq!(
            ops,
            vec![Operation::Insert { index: 0 }, Operation::Insert { index: 1 }]
        );
        let ids: Vec<_> = reconciler.snapshots().iter().map(|s| s.item_id()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(!reconciler.is_empty());
    }

    #[test]
    fn content_only_change_is_an_update() {
        let mut reconciler = Reconciler::new();
        let mut list = vec![item("a"), item("b")];
        reconciler.submit_list(list.clone());

        list[1].title = Some("Renamed".into());
        assert_eq!(reconciler.submit_list(list), vec![Operation::Update { index: 1 }]);
    }

    #[test]
    fn add_items_none_is_a_noop() {
        let mut reconciler = Reconciler::new();
        reconciler.submit_list(vec![item("a")]);
        assert!(reconciler.add_items(None).is_none());
        assert_eq!(reconciler.items().len(), 1);
    }

    #[test]
    fn add_items_appends() {
        let mut reconciler = Reconciler::new();
        reconciler.submit_list(vec![item("a")]);
        let ops = reconciler.add_items(Some(vec![item("b"), item("c")])).unwrap();
        assert_eq!(
            ops,
            vec![Operation::Insert { index: 1 }, Operation::Insert { index: 2 }]
        );
        assert_eq!(reconciler.items().len(), 3);
    }

    #[test]
    fn duplicate_ids_are_detected() {
        let err = validate_unique_ids(&[item("a"), item("b"), item("a")]).unwrap_err();
        assert!(matches!(err, ReconcilerError::DuplicateIdentity { item_id } if item_id == "a"));
        assert!(validate_unique_ids(&[item("a"), item("b")]).is_ok());
    }

    #[test]
    fn checked_config_still_reconciles_duplicates() {
        let mut reconciler = Reconciler::with_config(ReconcilerConfig {
            check_unique_ids: true,
            ..ReconcilerConfig::default()
        });
        let ops = reconciler.submit_list(vec![item("a"), item("a")]);
        assert_eq!(ops.len(), 2);
    }
}
