//! Display framework for CLI output formatting.
//!
//! Shared primitives for colors, tables and the pending-request spinner.

pub mod colors;
pub mod progress;
pub mod table;

pub use colors::*;
pub use progress::{create_spinner, ProgressBarExt};
pub use table::TableFormatter;
