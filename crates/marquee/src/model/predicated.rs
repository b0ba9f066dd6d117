//! Selection model that tracks exceptions against a default predicate.
//!
//! [`PredicatedSelectionModel`] is useful when selection is the rule
//! rather than the exception: a predicate decides which items are selected
//! by default, and only items explicitly toggled away from that verdict
//! are recorded. The exception map shrinks back when an item is toggled
//! to match its default again, so memory stays proportional to the number
//! of overrides, not the size of the collection.
//!
//! # Example
//!
//! ```
//! use marquee::model::PredicatedSelectionModel;
//!
//! // Items under 100 are selected unless the user says otherwise.
//! let model = PredicatedSelectionModel::new(|n: &u32| *n < 100);
//!
//! model.selection_changed.connect(|_| {
//!     println!("Selection changed somewhere");
//! });
//!
//! assert!(model.is_selected(&5));
//! model.set_selected(&5, false); // records an exception, notifies
//! assert!(!model.is_selected(&5));
//! model.set_selected(&5, true);  // back to the default, exception removed
//! assert_eq!(model.exception_count(), 0);
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use parking_lot::RwLock;

use marquee_core::Signal;

use super::key::{KeyExtractor, SelectionPredicate, identity_key};
use super::traits::SelectionModel;

/// Manages selection state as an exception list against a default predicate.
///
/// An item's observable state is its recorded exception if one exists,
/// otherwise the predicate's verdict. An exception entry exists only while
/// the recorded state differs from the verdict the predicate gave when the
/// state was recorded; setting an item back to its default removes the
/// entry.
///
/// Items are identified by a key extractor (the item's own value by
/// default), so two distinct instances can denote the same selectable
/// entity. Both the predicate and the extractor can be swapped at runtime;
/// neither swap rewrites already-recorded exceptions.
///
/// # Signals
///
/// - `selection_changed`: emitted exactly once per call that flips an
///   item's observable state, with no payload. Listeners re-query
///   [`is_selected`](Self::is_selected) for the items they care about.
pub struct PredicatedSelectionModel<T, K = T> {
    /// Default verdict for items with no recorded exception.
    predicate: RwLock<SelectionPredicate<T>>,

    /// Maps an item to its selection key. Used for all subsequent calls
    /// after a swap; recorded exception keys are not recomputed.
    key_extractor: RwLock<KeyExtractor<T, K>>,

    /// Explicit overrides, keyed by selection key. An entry is present iff
    /// the recorded state diverges from the default verdict.
    exceptions: RwLock<HashMap<K, bool>>,

    /// Emitted when an item's observable selection state flips.
    pub selection_changed: Signal<()>,
}

impl<T: Clone + Eq + Hash + 'static> PredicatedSelectionModel<T> {
    /// Creates a model where items serve as their own selection keys.
    pub fn new<P>(predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::with_key_extractor(predicate, identity_key())
    }
}

impl<T: 'static, K: Eq + Hash + 'static> PredicatedSelectionModel<T, K> {
    /// Creates a model with an explicit key extractor.
    pub fn with_key_extractor<P>(predicate: P, key_extractor: KeyExtractor<T, K>) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: RwLock::new(std::sync::Arc::new(predicate)),
            key_extractor: RwLock::new(key_extractor),
            exceptions: RwLock::new(HashMap::new()),
            selection_changed: Signal::new(),
        }
    }

    /// Replaces the default predicate used for all subsequent calls.
    ///
    /// Recorded exceptions are not re-evaluated against the new predicate;
    /// an entry recorded under the old predicate stays until the item is
    /// explicitly set back to whatever the current predicate says.
    pub fn set_default_predicate<P>(&self, predicate: P)
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        *self.predicate.write() = std::sync::Arc::new(predicate);
    }

    /// Replaces the key extractor used for all subsequent calls.
    ///
    /// The exception map is not rekeyed: entries recorded under the old
    /// extractor keep their old keys and only match items whose new key
    /// happens to collide with them.
    pub fn set_key_extractor(&self, key_extractor: KeyExtractor<T, K>) {
        *self.key_extractor.write() = key_extractor;
    }

    /// Returns the item's observable selection state.
    ///
    /// The recorded exception for `key(item)` wins if present; otherwise
    /// the default predicate decides.
    pub fn is_selected(&self, item: &T) -> bool {
        let key_of = self.key_extractor.read().clone();
        let key = key_of(item);
        if let Some(&state) = self.exceptions.read().get(&key) {
            return state;
        }
        let default_of = self.predicate.read().clone();
        default_of(item)
    }

    /// Sets the item's selection state.
    ///
    /// If `selected` matches the predicate's verdict for the item, any
    /// recorded exception is removed; otherwise `key(item) -> selected` is
    /// recorded. `selection_changed` is emitted exactly once iff the
    /// observable state flipped; redundant repeated calls are silent.
    ///
    /// Internal locks are released before emission, so a listener may
    /// re-query the model or disconnect itself.
    pub fn set_selected(&self, item: &T, selected: bool) {
        let key_of = self.key_extractor.read().clone();
        let default_of = self.predicate.read().clone();
        let key = key_of(item);
        let default = default_of(item);

        let changed = {
            let mut exceptions = self.exceptions.write();
            let before = exceptions.get(&key).copied().unwrap_or(default);
            if selected == default {
                exceptions.remove(&key);
            } else {
                exceptions.insert(key, selected);
            }
            before != selected
        };

        if changed {
            tracing::trace!(target: "marquee::model", selected, "selection state flipped");
            self.selection_changed.emit(());
        }
    }

    /// Returns the number of recorded exceptions.
    pub fn exception_count(&self) -> usize {
        self.exceptions.read().len()
    }

    /// Removes every recorded exception, restoring the predicate's verdict
    /// for all items.
    ///
    /// Emits `selection_changed` once if any entry was removed.
    pub fn clear_exceptions(&self) {
        let had_exceptions = {
            let mut exceptions = self.exceptions.write();
            let had = !exceptions.is_empty();
            exceptions.clear();
            had
        };
        if had_exceptions {
            tracing::trace!(target: "marquee::model", "cleared selection exceptions");
            self.selection_changed.emit(());
        }
    }
}

impl<T: 'static, K: Eq + Hash + Clone + 'static> PredicatedSelectionModel<T, K> {
    /// Returns a snapshot of the recorded exceptions.
    ///
    /// Mutating the snapshot never affects the model.
    pub fn exceptions(&self) -> HashMap<K, bool> {
        self.exceptions.read().clone()
    }

    /// Copies the recorded exceptions into a caller-provided map.
    ///
    /// The output map is cleared first, so it holds exactly the current
    /// exception entries afterwards.
    pub fn get_exceptions<'a>(&self, output: &'a mut HashMap<K, bool>) -> &'a mut HashMap<K, bool> {
        output.clear();
        let exceptions = self.exceptions.read();
        output.extend(exceptions.iter().map(|(k, &v)| (k.clone(), v)));
        output
    }
}

impl<T, K> SelectionModel<T> for PredicatedSelectionModel<T, K>
where
    T: Send + Sync + 'static,
    K: Eq + Hash + Send + Sync + 'static,
{
    fn is_selected(&self, item: &T) -> bool {
        PredicatedSelectionModel::is_selected(self, item)
    }

    fn set_selected(&self, item: &T, selected: bool) {
        PredicatedSelectionModel::set_selected(self, item, selected);
    }

    fn selection_changed(&self) -> &Signal<()> {
        &self.selection_changed
    }
}

static_assertions::assert_impl_all!(PredicatedSelectionModel<String>: Send, Sync);
