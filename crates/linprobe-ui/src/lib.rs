//! Terminal styling for linprobe output.
//!
//! Provides Ayu-themed color styling, pass/fail icons and terminal
//! detection for the probe's console report.

pub mod styles;
pub mod terminal;
