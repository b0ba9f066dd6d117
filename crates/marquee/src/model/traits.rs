//! The core trait for selection models.

use marquee_core::Signal;

/// Tracks which items in a displayed collection are selected.
///
/// Views program against this trait so the selection policy (predicate
/// exceptions, single, multi) can be swapped without touching view code.
///
/// # Change Notification
///
/// `selection_changed` carries no payload: consumers re-query
/// [`is_selected`](Self::is_selected) for whichever items they care about.
/// Notifications are delivered synchronously, inline with the
/// [`set_selected`](Self::set_selected) call that triggered them, and fire
/// exactly once per call that actually flips observable state. Redundant
/// calls are silent.
pub trait SelectionModel<T>: Send + Sync {
    /// Returns whether the item is currently selected.
    fn is_selected(&self, item: &T) -> bool;

    /// Sets the selection state of the item.
    ///
    /// Emits `selection_changed` only if the item's observable state
    /// actually changes as a result of this call.
    fn set_selected(&self, item: &T, selected: bool);

    /// Returns the signal emitted on net selection changes.
    fn selection_changed(&self) -> &Signal<()>;
}
