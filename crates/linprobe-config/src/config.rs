//! Configuration types and loading.
//!
//! The main entry point is [`load`], which extracts a [`RawConfig`] from a
//! figment and validates it into a [`ProbeConfig`]. The process environment
//! is wired up by [`figment`].

use std::env;
use std::fmt;
use std::time::Duration;

use figment::providers::{Env, Serialized};
use figment::value::{Dict, Map, Value};
use figment::{Figment, Metadata, Profile, Provider};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use linprobe_core::content::SEARCH_TERM;

/// Environment variable holding the Linear API key.
pub const API_KEY_VAR: &str = "LINEAR_API_KEY";

/// Environment variable holding the team key or UUID.
pub const TEAM_ID_VAR: &str = "LINEAR_TEAM_ID";

/// The Linear GraphQL endpoint.
pub const DEFAULT_API_URL: &str = "https://api.linear.app/graphql";

/// Number of leading API key characters shown in redacted form.
const REDACTED_PREFIX_LEN: usize = 10;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more required environment variables are unset or blank.
    #[error("please set {} environment {}", .vars.join(" and "), variable_noun(.vars))]
    Missing {
        /// Names of the missing variables, in declaration order.
        vars: Vec<&'static str>,
    },

    /// A configuration value could not be extracted (e.g. a non-numeric delay).
    #[error("invalid configuration: {0}")]
    Extract(#[from] figment::Error),
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

fn variable_noun(vars: &[&str]) -> &'static str {
    if vars.len() == 1 {
        "variable"
    } else {
        "variables"
    }
}

impl ConfigError {
    /// Returns `true` if this is a [`ConfigError::Missing`].
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }
}

// ---------------------------------------------------------------------------
// Raw (unvalidated) configuration
// ---------------------------------------------------------------------------

/// Configuration exactly as figment extracts it, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawConfig {
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default)]
    pub team_id: Option<String>,

    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Pause between creating and updating the test issue.
    #[serde(default = "default_update_delay_secs")]
    pub update_delay_secs: u64,

    /// Cancellation window before the test issue is deleted.
    #[serde(default = "default_delete_delay_secs")]
    pub delete_delay_secs: u64,

    #[serde(default = "default_search_term")]
    pub search_term: String,

    /// Leave the test issue in place instead of deleting it.
    #[serde(default)]
    pub keep_issue: bool,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            team_id: None,
            api_url: default_api_url(),
            update_delay_secs: default_update_delay_secs(),
            delete_delay_secs: default_delete_delay_secs(),
            search_term: default_search_term(),
            keep_issue: false,
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_update_delay_secs() -> u64 {
    1
}

fn default_delete_delay_secs() -> u64 {
    5
}

fn default_search_term() -> String {
    SEARCH_TERM.to_string()
}

/// Values supplied on the command line. Unset fields leave lower layers alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_delay_secs: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_delay_secs: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_issue: Option<bool>,
}

// ---------------------------------------------------------------------------
// Validated configuration
// ---------------------------------------------------------------------------

/// The two required credentials.
///
/// `Debug` never prints the full API key.
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    team_id: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, team_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            team_id: team_id.into(),
        }
    }

    /// The raw API key, sent verbatim in the `Authorization` header.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The team identifier as configured (a human key or a UUID).
    pub fn team_id(&self) -> &str {
        &self.team_id
    }

    /// The API key cut to its first few characters, for display.
    pub fn redacted_key(&self) -> String {
        let prefix: String = self.api_key.chars().take(REDACTED_PREFIX_LEN).collect();
        format!("{prefix}...")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.redacted_key())
            .field("team_id", &self.team_id)
            .finish()
    }
}

/// Fully validated configuration for one probe run.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub credentials: Credentials,
    pub api_url: String,
    pub update_delay: Duration,
    pub delete_delay: Duration,
    pub search_term: String,
    pub keep_issue: bool,
}

impl ProbeConfig {
    /// Builds a configuration with default settings around the given credentials.
    pub fn new(credentials: Credentials) -> Self {
        let raw = RawConfig::default();
        Self {
            credentials,
            api_url: raw.api_url,
            update_delay: Duration::from_secs(raw.update_delay_secs),
            delete_delay: Duration::from_secs(raw.delete_delay_secs),
            search_term: raw.search_term,
            keep_issue: raw.keep_issue,
        }
    }

    /// Zeroes both pauses.
    pub fn without_delays(mut self) -> Self {
        self.update_delay = Duration::ZERO;
        self.delete_delay = Duration::ZERO;
        self
    }
}

impl TryFrom<RawConfig> for ProbeConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self> {
        let api_key = non_blank(raw.api_key);
        let team_id = non_blank(raw.team_id);

        let mut vars = Vec::new();
        if api_key.is_none() {
            vars.push(API_KEY_VAR);
        }
        if team_id.is_none() {
            vars.push(TEAM_ID_VAR);
        }

        match (api_key, team_id) {
            (Some(api_key), Some(team_id)) => Ok(Self {
                credentials: Credentials::new(api_key, team_id),
                api_url: raw.api_url,
                update_delay: Duration::from_secs(raw.update_delay_secs),
                delete_delay: Duration::from_secs(raw.delete_delay_secs),
                search_term: raw.search_term,
                keep_issue: raw.keep_issue,
            }),
            _ => Err(ConfigError::Missing { vars }),
        }
    }
}

/// Trims a value and treats blank as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Verbatim environment provider
// ---------------------------------------------------------------------------

/// Reads `<prefix><KEY>` variables as plain strings.
///
/// figment's `Env` parses values, so a team key like `1234` or an API key like
/// `true` would arrive as a number or a bool. Free-form values go through
/// this provider instead.
struct VerbatimEnv {
    prefix: &'static str,
    keys: &'static [&'static str],
}

impl VerbatimEnv {
    const fn new(prefix: &'static str, keys: &'static [&'static str]) -> Self {
        Self { prefix, keys }
    }

    fn var_name(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key.to_ascii_uppercase())
    }
}

impl Provider for VerbatimEnv {
    fn metadata(&self) -> Metadata {
        Metadata::named(format!("`{}*` environment variable(s)", self.prefix))
    }

    fn data(&self) -> std::result::Result<Map<Profile, Dict>, figment::Error> {
        let mut dict = Dict::new();
        for key in self.keys {
            if let Ok(value) = env::var(self.var_name(key)) {
                dict.insert((*key).to_string(), Value::from(value));
            }
        }

        Ok(Profile::Default.collect(dict))
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Builds the figment that reads defaults and the process environment.
///
/// `LINEAR_API_KEY`, `LINEAR_TEAM_ID` and `LINEAR_API_URL` provide the
/// connection; `LINPROBE_UPDATE_DELAY_SECS`, `LINPROBE_DELETE_DELAY_SECS`,
/// `LINPROBE_SEARCH_TERM` and `LINPROBE_KEEP_ISSUE` tune the run.
pub fn figment() -> Figment {
    figment_defaults()
        .merge(VerbatimEnv::new("LINEAR_", &["api_key", "team_id", "api_url"]))
        .merge(Env::prefixed("LINPROBE_").only(&[
            "update_delay_secs",
            "delete_delay_secs",
            "keep_issue",
        ]))
        .merge(VerbatimEnv::new("LINPROBE_", &["search_term"]))
}

/// A figment holding only the built-in defaults, without reading the
/// environment.
pub fn figment_defaults() -> Figment {
    Figment::from(Serialized::defaults(RawConfig::default()))
}

/// Extracts and validates configuration from the given figment.
///
/// # Errors
///
/// Returns [`ConfigError::Missing`] if either credential is unset or blank,
/// or [`ConfigError::Extract`] if a value has the wrong type.
pub fn load(figment: &Figment) -> Result<ProbeConfig> {
    let raw: RawConfig = figment.extract()?;
    ProbeConfig::try_from(raw)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
