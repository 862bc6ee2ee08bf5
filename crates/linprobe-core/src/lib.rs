//! Core types for the linprobe integration checks.
//!
//! This crate contains the Linear entities the probe reads and writes, plus
//! the fixed content used for the throwaway test issue.

pub mod comment;
pub mod content;
pub mod enums;
pub mod issue;
pub mod state;
pub mod team;
