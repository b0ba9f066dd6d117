//! Predicate and key-extraction closures used by the selection models.

use std::sync::Arc;

/// Decides whether an item is selected by default.
///
/// Must be pure and side-effect-free; models call it only for items with
/// no explicitly recorded state.
pub type SelectionPredicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Maps an item to the identity used for selection bookkeeping.
///
/// A key extractor lets two distinct item instances denote the same
/// selectable entity (for example, records re-fetched from a server).
pub type KeyExtractor<T, K> = Arc<dyn Fn(&T) -> K + Send + Sync>;

/// The default key extractor: the item's own value is its key.
pub fn identity_key<T: Clone>() -> KeyExtractor<T, T> {
    Arc::new(|item: &T| item.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_key() {
        let key_of = identity_key::<String>();
        assert_eq!(key_of(&"abc".to_string()), "abc");
    }
}
