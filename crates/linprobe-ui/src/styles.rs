//! Ayu color theme and styling functions for linprobe output.
//!
//! Uses the Ayu Dark color palette. Color source:
//! <https://github.com/ayu-theme/ayu-colors>
//!
//! Only outcomes and actionable workflow-state categories get color; plain
//! details use standard text.

use linprobe_core::enums::WorkflowStateType;
use owo_colors::OwoColorize;

use crate::terminal::supports_color;

// ---------------------------------------------------------------------------
// Ayu Dark color palette (RGB values)
// ---------------------------------------------------------------------------

const PASS: (u8, u8, u8) = (0xc2, 0xd9, 0x4c); // #c2d94c - bright green
const WARN: (u8, u8, u8) = (0xff, 0xb4, 0x54); // #ffb454 - bright yellow
const FAIL: (u8, u8, u8) = (0xf0, 0x71, 0x78); // #f07178 - bright red
const MUTED: (u8, u8, u8) = (0x6c, 0x76, 0x80); // #6c7680 - muted gray
const ACCENT: (u8, u8, u8) = (0x59, 0xc2, 0xff); // #59c2ff - bright blue

// Workflow state colors
const STATE_STARTED: (u8, u8, u8) = (0xff, 0xb4, 0x54); // #ffb454 - yellow
const STATE_COMPLETED: (u8, u8, u8) = (0x80, 0x90, 0xa0); // #8090a0 - dimmed
const STATE_TRIAGE: (u8, u8, u8) = (0xd2, 0xa6, 0xff); // #d2a6ff - purple

// ---------------------------------------------------------------------------
// Icons
// ---------------------------------------------------------------------------

pub const ICON_PASS: &str = "\u{2713}"; // ✓
pub const ICON_WARN: &str = "\u{26A0}"; // ⚠
pub const ICON_FAIL: &str = "\u{2716}"; // ✖
pub const ICON_SKIP: &str = "-";
pub const ICON_INFO: &str = "\u{2139}"; // ℹ

pub const TREE_CHILD: &str = "\u{23BF} "; // ⎿

const SEPARATOR_WIDTH: usize = 50;

// ---------------------------------------------------------------------------
// Helper: apply truecolor only when color is supported
// ---------------------------------------------------------------------------

fn color_str(s: &str, rgb: (u8, u8, u8)) -> String {
    if supports_color() {
        s.truecolor(rgb.0, rgb.1, rgb.2).to_string()
    } else {
        s.to_string()
    }
}

fn color_bold_str(s: &str, rgb: (u8, u8, u8)) -> String {
    if supports_color() {
        s.truecolor(rgb.0, rgb.1, rgb.2).bold().to_string()
    } else {
        s.to_string()
    }
}

// ---------------------------------------------------------------------------
// Core semantic render helpers
// ---------------------------------------------------------------------------

pub fn render_pass(s: &str) -> String {
    color_str(s, PASS)
}

pub fn render_warn(s: &str) -> String {
    color_str(s, WARN)
}

pub fn render_fail(s: &str) -> String {
    color_str(s, FAIL)
}

pub fn render_muted(s: &str) -> String {
    color_str(s, MUTED)
}

pub fn render_accent(s: &str) -> String {
    color_str(s, ACCENT)
}

pub fn render_bold(s: &str) -> String {
    if supports_color() {
        s.bold().to_string()
    } else {
        s.to_string()
    }
}

/// Renders a stage heading, e.g. `=== Test 1: Get Team Info ===`.
pub fn render_heading(s: &str) -> String {
    color_bold_str(&format!("=== {s} ==="), ACCENT)
}

/// Renders the heavy separator used around banners.
pub fn render_separator_heavy() -> String {
    render_muted(&"=".repeat(SEPARATOR_WIDTH))
}

/// Renders the light separator used inside banners.
pub fn render_separator() -> String {
    render_muted(&"\u{2500}".repeat(SEPARATOR_WIDTH))
}

// ---------------------------------------------------------------------------
// Icon renderers
// ---------------------------------------------------------------------------

pub fn render_pass_icon() -> String {
    color_str(ICON_PASS, PASS)
}

pub fn render_warn_icon() -> String {
    color_str(ICON_WARN, WARN)
}

pub fn render_fail_icon() -> String {
    color_str(ICON_FAIL, FAIL)
}

pub fn render_skip_icon() -> String {
    color_str(ICON_SKIP, MUTED)
}

pub fn render_info_icon() -> String {
    color_str(ICON_INFO, ACCENT)
}

// ---------------------------------------------------------------------------
// Workflow state rendering
// ---------------------------------------------------------------------------

/// Renders a workflow state category.
/// Started is yellow, completed/canceled dimmed, triage purple; the initial
/// categories and unknown tags use standard text.
pub fn render_state_type(state_type: &WorkflowStateType) -> String {
    let s = state_type.as_str();
    match state_type {
        WorkflowStateType::Started => color_str(s, STATE_STARTED),
        WorkflowStateType::Completed | WorkflowStateType::Canceled => {
            color_str(s, STATE_COMPLETED)
        }
        WorkflowStateType::Triage => color_str(s, STATE_TRIAGE),
        _ => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_wraps_title() {
        assert!(render_heading("Test 1: Get Team Info").contains("=== Test 1: Get Team Info ==="));
    }

    #[test]
    fn state_type_contains_name() {
        assert!(render_state_type(&WorkflowStateType::Started).contains("started"));
        assert!(render_state_type(&WorkflowStateType::Other("paused".into())).contains("paused"));
    }

    #[test]
    fn icons_contain_glyphs() {
        assert!(render_pass_icon().contains(ICON_PASS));
        assert!(render_fail_icon().contains(ICON_FAIL));
        assert!(render_warn_icon().contains(ICON_WARN));
    }
}
