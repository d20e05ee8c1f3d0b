//! User interface module - terminal output for the dotver binary.
//!
//! - `formatter` - Pure formatting functions and coloured diagnostics
//! - This module - printing of command outcomes

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_error, display_status, display_success, format_report,
    version_report, NOT_AVAILABLE,
};

use crate::cli::Outcome;

/// Print a command outcome: warnings to stderr, the answer to stdout.
pub fn display_outcome(outcome: &Outcome) {
    for warning in &outcome.warnings {
        display_boundary_warning(warning);
    }
    if !outcome.output.is_empty() {
        println!("{}", outcome.output);
    }
}
