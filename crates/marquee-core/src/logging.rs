//! Logging facilities for Marquee.
//!
//! Marquee uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "marquee_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "marquee_core::signal";
    /// Selection model target.
    pub const MODEL: &str = "marquee::model";
}
