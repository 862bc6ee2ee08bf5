//! Terminal detection utilities.

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};

/// Set by `--no-color`; wins over every environment convention.
static COLOR_DISABLED: AtomicBool = AtomicBool::new(false);

/// Returns `true` if stdout is connected to a terminal (TTY).
pub fn is_tty() -> bool {
    crossterm::tty::IsTty::is_tty(&std::io::stdout())
}

/// Turns color off for the rest of the process.
pub fn disable_color() {
    COLOR_DISABLED.store(true, Ordering::Relaxed);
}

/// Determines if ANSI color codes should be used.
///
/// Respects standard conventions:
/// - `NO_COLOR` (any value): disables color (<https://no-color.org/>)
/// - `CLICOLOR=0`: disables color
/// - `TERM=dumb`: disables color
/// - `CLICOLOR_FORCE` (any value): forces color even in non-TTY
/// - Falls back to TTY detection
pub fn supports_color() -> bool {
    if COLOR_DISABLED.load(Ordering::Relaxed) {
        return false;
    }

    if env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if env::var("CLICOLOR").as_deref() == Ok("0") {
        return false;
    }

    if env::var("TERM").as_deref() == Ok("dumb") {
        return false;
    }

    if env::var_os("CLICOLOR_FORCE").is_some() {
        return true;
    }

    is_tty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disable_color_wins() {
        disable_color();
        assert!(!supports_color());
    }
}
