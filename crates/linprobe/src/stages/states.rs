//! Test 2: list the team's workflow states.

use linprobe_client::{Transport, attempt};
use linprobe_core::state::{WorkflowState, retain_team_states};
use linprobe_core::team::Team;

use crate::context::ProbeContext;
use crate::output;
use crate::stages::QueryPath;

/// Fetches the team's workflow states.
///
/// Falls back to the unfiltered listing, filtered locally, when the
/// team-filtered query fails. Never fails: if both queries fail the result
/// is empty.
pub fn list_states<T: Transport>(ctx: &ProbeContext<'_, T>, team: &Team) -> Vec<WorkflowState> {
    output::heading("Test 2: Get Workflow States");

    let result = attempt(
        || {
            ctx.client
                .workflow_states(&team.id)
                .map(|states| (states, QueryPath::Primary))
        },
        |err| {
            output::fail(&format!("Failed to get states: {err}"));
            output::info("Trying alternative query...");
            ctx.client.all_workflow_states().map(|all| {
                let states = retain_team_states(all, &team.id, ctx.configured_team_id());
                (states, QueryPath::Fallback)
            })
        },
    );

    match result {
        Ok((states, path)) => {
            let suffix = match path {
                QueryPath::Primary => "",
                QueryPath::Fallback => " for team",
            };
            output::pass(&format!(
                "Found {} workflow states{suffix}:",
                states.len()
            ));
            for state in &states {
                output::detail(&format!("- {}", output::format_state(state)));
            }
            states
        }
        Err(e) => {
            output::fail(&format!("Alternative query also failed: {e}"));
            Vec::new()
        }
    }
}
