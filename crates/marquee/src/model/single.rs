//! Selection model that allows at most one selected item.

use std::hash::Hash;

use parking_lot::RwLock;

use marquee_core::Signal;

use super::key::{KeyExtractor, identity_key};
use super::traits::SelectionModel;

/// A selection model where selecting an item replaces the previous one.
///
/// Items are identified by a key extractor (the item's own value by
/// default). Selecting an item that is already selected refreshes the
/// stored instance without notifying; deselecting an item that is not the
/// current selection is a silent no-op.
///
/// # Signals
///
/// - `selection_changed`: emitted once per call that changes which key is
///   selected. Replacing one selection with another is a single net change.
pub struct SingleSelectionModel<T, K = T> {
    key_extractor: RwLock<KeyExtractor<T, K>>,
    /// The selected key and the most recent item instance seen for it.
    selected: RwLock<Option<(K, T)>>,
    /// Emitted when the selected key changes.
    pub selection_changed: Signal<()>,
}

impl<T: Clone + Eq + Hash + 'static> SingleSelectionModel<T> {
    /// Creates a model where items serve as their own selection keys.
    pub fn new() -> Self {
        Self::with_key_extractor(identity_key())
    }
}

impl<T: Clone + Eq + Hash + 'static> Default for SingleSelectionModel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + 'static, K: Eq + Hash + 'static> SingleSelectionModel<T, K> {
    /// Creates a model with an explicit key extractor.
    pub fn with_key_extractor(key_extractor: KeyExtractor<T, K>) -> Self {
        Self {
            key_extractor: RwLock::new(key_extractor),
            selected: RwLock::new(None),
            selection_changed: Signal::new(),
        }
    }

    /// Replaces the key extractor used for all subsequent calls.
    ///
    /// The current selection keeps the key it was recorded under.
    pub fn set_key_extractor(&self, key_extractor: KeyExtractor<T, K>) {
        *self.key_extractor.write() = key_extractor;
    }

    /// Returns whether the item's key matches the current selection.
    pub fn is_selected(&self, item: &T) -> bool {
        let key_of = self.key_extractor.read().clone();
        let key = key_of(item);
        self.selected.read().as_ref().is_some_and(|(k, _)| *k == key)
    }

    /// Selects or deselects the item.
    ///
    /// Selecting replaces any previous selection; deselecting only takes
    /// effect if the item's key matches the current selection.
    pub fn set_selected(&self, item: &T, selected: bool) {
        let key_of = self.key_extractor.read().clone();
        let key = key_of(item);

        let changed = {
            let mut current = self.selected.write();
            let same_key = current.as_ref().is_some_and(|(k, _)| *k == key);
            if selected {
                // Latest instance wins even when the key is unchanged.
                *current = Some((key, item.clone()));
                !same_key
            } else if same_key {
                *current = None;
                true
            } else {
                false
            }
        };

        if changed {
            tracing::trace!(target: "marquee::model", selected, "single selection changed");
            self.selection_changed.emit(());
        }
    }

    /// Returns the selected item, if any.
    pub fn selected_item(&self) -> Option<T> {
        self.selected.read().as_ref().map(|(_, item)| item.clone())
    }

    /// Returns `true` if an item is selected.
    pub fn has_selection(&self) -> bool {
        self.selected.read().is_some()
    }

    /// Clears the selection, notifying if one existed.
    pub fn clear(&self) {
        let had_selection = self.selected.write().take().is_some();
        if had_selection {
            self.selection_changed.emit(());
        }
    }
}

impl<T, K> SelectionModel<T> for SingleSelectionModel<T, K>
where
    T: Clone + Send + Sync + 'static,
    K: Eq + Hash + Send + Sync + 'static,
{
    fn is_selected(&self, item: &T) -> bool {
        SingleSelectionModel::is_selected(self, item)
    }

    fn set_selected(&self, item: &T, selected: bool) {
        SingleSelectionModel::set_selected(self, item, selected);
    }

    fn selection_changed(&self) -> &Signal<()> {
        &self.selection_changed
    }
}

static_assertions::assert_impl_all!(SingleSelectionModel<String>: Send, Sync);
