//! Test 1: resolve the configured team to its canonical record.

use linprobe_client::{ClientError, Transport};
use linprobe_core::team::Team;

use crate::context::ProbeContext;
use crate::output;

/// Looks up the configured team. The returned team's UUID is what every
/// later stage uses.
pub fn resolve_team<T: Transport>(ctx: &ProbeContext<'_, T>) -> Result<Team, ClientError> {
    output::heading("Test 1: Get Team Info");

    match ctx.client.team(ctx.configured_team_id()) {
        Ok(team) => {
            output::pass(&format!(
                "Team found: {} ({}) {}",
                team.name, team.key, team.id
            ));
            Ok(team)
        }
        Err(e) => {
            output::fail(&format!("Failed to get team: {e}"));
            Err(e)
        }
    }
}
