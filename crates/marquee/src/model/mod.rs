//! Selection models for item views.
//!
//! This module provides a family of models that track which items in a
//! displayed collection are selected and notify listeners of changes.
//! Each model identifies items through a [`KeyExtractor`], so distinct
//! instances can denote the same selectable entity, and each emits a
//! zero-payload `selection_changed` signal exactly once per call that
//! flips observable state.
//!
//! # Models
//!
//! - [`PredicatedSelectionModel`]: a default predicate decides selection;
//!   only explicit overrides are recorded, as a shrinking exception map
//! - [`SingleSelectionModel`]: at most one item selected at a time
//! - [`MultiSelectionModel`]: an unordered selected set
//!
//! # Example
//!
//! ```
//! use marquee::model::PredicatedSelectionModel;
//!
//! let model = PredicatedSelectionModel::new(|s: &String| s.ends_with(".rs"));
//!
//! model.selection_changed.connect(|_| {
//!     // Zero-payload event: re-query the items you care about.
//!     println!("Selection changed");
//! });
//!
//! assert!(model.is_selected(&"main.rs".to_string()));
//! model.set_selected(&"main.rs".to_string(), false);
//! assert!(!model.is_selected(&"main.rs".to_string()));
//! ```

pub mod key;
mod multi;
mod predicated;
mod single;
mod traits;

pub use key::{KeyExtractor, SelectionPredicate, identity_key};
pub use multi::MultiSelectionModel;
pub use predicated::PredicatedSelectionModel;
pub use single::SingleSelectionModel;
pub use traits::SelectionModel;
