//! Configuration management for linprobe.
//!
//! Configuration is layered with figment: built-in defaults, then the
//! `LINEAR_*` credentials, then `LINPROBE_*` tuning knobs, then whatever
//! overrides the CLI supplies. [`load`] validates the merged result into a
//! [`ProbeConfig`].

pub mod config;

pub use config::{
    API_KEY_VAR, ConfigError, Credentials, DEFAULT_API_URL, Overrides, ProbeConfig, Result,
    TEAM_ID_VAR, figment, figment_defaults, load,
};
