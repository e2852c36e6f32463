//! Output for the run
//!
//! This module provides:
//! - The fixed-width report file writer
//! - Color-coded console status lines

pub mod console;
mod report;

pub use console::Status;
pub use report::{format_row, ReportWriter};
