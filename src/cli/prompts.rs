//! Centralized warning and error messages for CLI output.

use super::quiet;
use crate::terminal::{print_error, print_warning};

/// Warning to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        print_warning(msg);
    }
}

/// Usage error, with a pointer to --help
pub fn usage_error(msg: &str) {
    print_error(msg);
    if !quiet::enabled() {
        eprintln!("\nFor more information, try '--help'.");
    }
}

/// Large batches straight to a terminal are rarely what was meant
pub fn many_to_terminal(amount: usize) {
    warn(&format!(
        "Printing {amount} passwords to the terminal; use -q and redirect to a file to keep them."
    ));
}
