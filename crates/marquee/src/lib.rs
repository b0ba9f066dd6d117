//! Marquee: selection models for item views.
//!
//! Marquee tracks which items in a displayed collection are selected and
//! notifies listeners synchronously when the selection changes. It is
//! rendering-agnostic: there are no widgets here, only the bookkeeping a
//! view needs to answer "is this item selected?" cheaply and to learn when
//! the answer changes.
//!
//! # Quick Start
//!
//! ```
//! use marquee::model::PredicatedSelectionModel;
//! use std::sync::Arc;
//!
//! // Rows flagged as urgent are selected unless the user overrides them.
//! #[derive(Clone, PartialEq, Eq, Hash)]
//! struct Row { id: u64, urgent: bool }
//!
//! let model = PredicatedSelectionModel::with_key_extractor(
//!     |row: &Row| row.urgent,
//!     Arc::new(|row: &Row| row.id),
//! );
//!
//! let row = Row { id: 7, urgent: true };
//! assert!(model.is_selected(&row));
//!
//! model.set_selected(&row, false);
//! assert!(!model.is_selected(&row));
//!
//! // A re-fetched instance of the same record shares its selection state.
//! let refetched = Row { id: 7, urgent: true };
//! assert!(!model.is_selected(&refetched));
//! ```
//!
//! # Crates
//!
//! - `marquee` (this crate): the selection model family
//! - `marquee-core`: the signal/slot system the models notify through

pub mod model;

pub use marquee_core::{ConnectionGuard, ConnectionId, Signal};
