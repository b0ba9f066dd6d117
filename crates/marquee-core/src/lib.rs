//! Core systems for Marquee.
//!
//! This crate provides the infrastructure shared by the Marquee selection
//! models:
//!
//! - **Signal/Slot System**: Type-safe, synchronous change notification
//!
//! # Signal/Slot Example
//!
//! ```
//! use marquee_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
