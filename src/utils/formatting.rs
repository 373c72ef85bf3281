//! Formatting utilities used for terminal output.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Columns taken by `s` in a terminal (emoji count as two).
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Right-pad to `width` terminal columns, not bytes.
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(fill))
}

pub fn separator(ch: char, width: usize) -> String {
    std::iter::repeat_n(ch, width).collect()
}
