/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const INVERSE: &str = "\x1b[7m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Clear screen and move the cursor home.
pub const CLEAR: &str = "\x1b[2J\x1b[H";

/// Wrap `value` in `color` when colors are enabled, return it as-is otherwise.
pub fn paint(value: &str, color: &str, enabled: bool) -> String {
    if enabled && !value.is_empty() {
        format!("{color}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Card accent:
/// past → grey
/// important → yellow
/// otherwise → reset
pub fn color_for_card(past: bool, important: bool) -> &'static str {
    if past {
        GREY
    } else if important {
        YELLOW
    } else {
        RESET
    }
}
