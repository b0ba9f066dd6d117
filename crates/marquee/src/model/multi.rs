//! Selection model that tracks an unordered set of selected items.

use std::collections::HashMap;
use std::hash::Hash;

use parking_lot::RwLock;

use marquee_core::Signal;

use super::key::{KeyExtractor, identity_key};
use super::traits::SelectionModel;

/// A selection model where any number of items can be selected.
///
/// Selected items are stored keyed by their extracted key, so distinct
/// instances with the same key count as one selection (the latest instance
/// wins). No ordering is maintained.
///
/// # Signals
///
/// - `selection_changed`: emitted once per call that changes set
///   membership. Redundant selects and deselects are silent.
pub struct MultiSelectionModel<T, K = T> {
    key_extractor: RwLock<KeyExtractor<T, K>>,
    /// Selected items keyed by selection key.
    selected: RwLock<HashMap<K, T>>,
    /// Emitted when set membership changes.
    pub selection_changed: Signal<()>,
}

impl<T: Clone + Eq + Hash + 'static> MultiSelectionModel<T> {
    /// Creates a model where items serve as their own selection keys.
    pub fn new() -> Self {
        Self::with_key_extractor(identity_key())
    }
}

impl<T: Clone + Eq + Hash + 'static> Default for MultiSelectionModel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + 'static, K: Eq + Hash + 'static> MultiSelectionModel<T, K> {
    /// Creates a model with an explicit key extractor.
    pub fn with_key_extractor(key_extractor: KeyExtractor<T, K>) -> Self {
        Self {
            key_extractor: RwLock::new(key_extractor),
            selected: RwLock::new(HashMap::new()),
            selection_changed: Signal::new(),
        }
    }

    /// Replaces the key extractor used for all subsequent calls.
    ///
    /// Already-selected items keep the keys they were recorded under.
    pub fn set_key_extractor(&self, key_extractor: KeyExtractor<T, K>) {
        *self.key_extractor.write() = key_extractor;
    }

    /// Returns whether the item's key is in the selected set.
    pub fn is_selected(&self, item: &T) -> bool {
        let key_of = self.key_extractor.read().clone();
        let key = key_of(item);
        self.selected.read().contains_key(&key)
    }

    /// Adds the item to or removes it from the selected set.
    ///
    /// Emits `selection_changed` only when membership actually changes.
    pub fn set_selected(&self, item: &T, selected: bool) {
        let key_of = self.key_extractor.read().clone();
        let key = key_of(item);

        let changed = {
            let mut current = self.selected.write();
            if selected {
                // Latest instance wins; re-selecting is not a net change.
                current.insert(key, item.clone()).is_none()
            } else {
                current.remove(&key).is_some()
            }
        };

        if changed {
            tracing::trace!(target: "marquee::model", selected, "multi selection changed");
            self.selection_changed.emit(());
        }
    }

    /// Returns the selected items, in no particular order.
    pub fn selected_items(&self) -> Vec<T> {
        self.selected.read().values().cloned().collect()
    }

    /// Returns the number of selected items.
    pub fn selected_count(&self) -> usize {
        self.selected.read().len()
    }

    /// Returns `true` if any items are selected.
    pub fn has_selection(&self) -> bool {
        !self.selected.read().is_empty()
    }

    /// Deselects everything, notifying once if the set was non-empty.
    pub fn clear(&self) {
        let had_selection = {
            let mut current = self.selected.write();
            let had = !current.is_empty();
            current.clear();
            had
        };
        if had_selection {
            self.selection_changed.emit(());
        }
    }
}

impl<T, K> SelectionModel<T> for MultiSelectionModel<T, K>
where
    T: Clone + Send + Sync + 'static,
    K: Eq + Hash + Send + Sync + 'static,
{
    fn is_selected(&self, item: &T) -> bool {
        MultiSelectionModel::is_selected(self, item)
    }

    fn set_selected(&self, item: &T, selected: bool) {
        MultiSelectionModel::set_selected(self, item, selected);
    }

    fn selection_changed(&self) -> &Signal<()> {
        &self.selection_changed
    }
}

static_assertions::assert_impl_all!(MultiSelectionModel<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn count_changes(model: &MultiSelectionModel<String>) -> Arc<AtomicUsize> {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        model.selection_changed.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });
        count
    }

    #[test]
    fn test_select_multiple() {
        let model = MultiSelectionModel::new();
        let count = count_changes(&model);

        model.set_selected(&"a".to_string(), true);
        model.set_selected(&"b".to_string(), true);
        assert!(model.is_selected(&"a".to_string()));
        assert!(model.is_selected(&"b".to_string()));
        assert_eq!(model.selected_count(), 2);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_redundant_calls_are_silent() {
        let model = MultiSelectionModel::new();
        model.set_selected(&"a".to_string(), true);

        let count = count_changes(&model);
        model.set_selected(&"a".to_string(), true); // already selected
        model.set_selected(&"b".to_string(), false); // never selected
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(model.selected_count(), 1);
    }

    #[test]
    fn test_deselect() {
        let model = MultiSelectionModel::new();
        model.set_selected(&"a".to_string(), true);
        model.set_selected(&"b".to_string(), true);

        let count = count_changes(&model);
        model.set_selected(&"a".to_string(), false);
        assert!(!model.is_selected(&"a".to_string()));
        assert!(model.is_selected(&"b".to_string()));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_selected_items_snapshot() {
        let model = MultiSelectionModel::new();
        model.set_selected(&"a".to_string(), true);
        model.set_selected(&"b".to_string(), true);

        let mut items = model.selected_items();
        items.sort();
        assert_eq!(items, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_clear() {
        let model = MultiSelectionModel::new();
        model.set_selected(&"a".to_string(), true);
        model.set_selected(&"b".to_string(), true);

        let count = count_changes(&model);
        model.clear();
        assert!(!model.has_selection());
        assert_eq!(count.load(Ordering::SeqCst), 1);

        // Clearing an empty set is silent.
        model.clear();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_key_extractor_dedupes_instances() {
        let model: MultiSelectionModel<String, String> =
            MultiSelectionModel::with_key_extractor(Arc::new(|s: &String| s.to_uppercase()));
        let count = count_changes(&model);

        model.set_selected(&"item".to_string(), true);
        model.set_selected(&"ITEM".to_string(), true);
        assert_eq!(model.selected_count(), 1);
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(model.selected_items(), vec!["ITEM".to_string()]);
    }
}
