//! Terminal output utilities.
//!
//! Box drawing, ANSI helpers.

use std::io::{self, Write};

use crossterm::style::Stylize;
use crossterm::tty::IsTty;

// ============================================================================
// Styled Output Helpers
// ============================================================================

/// Print error message in red to stderr.
pub fn print_error(msg: &str) {
    if io::stderr().is_tty() {
        eprintln!("{}", msg.red());
    } else {
        eprintln!("{msg}");
    }
}

/// Print warning message in yellow to stderr.
pub fn print_warning(msg: &str) {
    if io::stderr().is_tty() {
        eprintln!("{}", msg.yellow());
    } else {
        eprintln!("{msg}");
    }
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// ┌─ Title ───────────────────────────┐
pub fn box_top<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    if title.is_empty() {
        writeln!(out, "┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        writeln!(out, "┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// │ content                                        │
pub fn box_line<W: Write>(out: &mut W, content: &str) -> io::Result<()> {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(content.chars().count());
    writeln!(out, "│ {}{} │", content, " ".repeat(padding))
}

/// │          content          │
pub fn box_line_center<W: Write>(out: &mut W, content: &str) -> io::Result<()> {
    let inner_width = BOX_WIDTH - 4;
    let total_padding = inner_width.saturating_sub(content.chars().count());
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    writeln!(
        out,
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    )
}

/// └───────────────────────────────────────────────────────┘
pub fn box_bottom<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// Frame a single value so leading and trailing spaces stay visible.
///
/// +----------+
/// | value    |
/// +----------+
pub fn frame<W: Write>(out: &mut W, value: &str) -> io::Result<()> {
    let rule = "-".repeat(value.chars().count());
    writeln!(out, "+-{rule}-+")?;
    writeln!(out, "| {value} |")?;
    writeln!(out, "+-{rule}-+")
}
