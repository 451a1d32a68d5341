//! Core data types for the fare monitor.

pub mod cycle;
pub mod format;
pub mod query;
pub mod threshold;

pub use cycle::*;
pub use format::*;
pub use query::*;
pub use threshold::*;
