//! Run context for the probe stages.
//!
//! The [`ProbeContext`] holds what every stage needs: the API client and the
//! validated configuration. The resolved team is not part of it; stages that
//! need it take it as an argument.

use linprobe_client::{LinearClient, Transport};
use linprobe_config::ProbeConfig;

/// Context passed to every stage.
///
/// Constructed once by the runner after configuration is loaded.
pub struct ProbeContext<'a, T> {
    pub client: &'a LinearClient<T>,
    pub config: &'a ProbeConfig,
}

impl<'a, T: Transport> ProbeContext<'a, T> {
    pub fn new(client: &'a LinearClient<T>, config: &'a ProbeConfig) -> Self {
        Self { client, config }
    }

    /// The team identifier exactly as configured (key or UUID).
    pub fn configured_team_id(&self) -> &str {
        self.config.credentials.team_id()
    }
}
