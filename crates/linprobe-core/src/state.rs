//! Workflow state types and the selection rules the lifecycle check uses.

use serde::{Deserialize, Serialize};

use crate::enums::WorkflowStateType;
use crate::team::TeamRef;

/// A workflow state of a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowState {
    pub id: String,

    pub name: String,

    #[serde(rename = "type")]
    pub state_type: WorkflowStateType,

    /// Only present when states were fetched without a team filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<TeamRef>,
}

/// Picks the state a new test issue should be filed in.
///
/// Prefers the first `unstarted` or `backlog` state, falling back to the
/// first state of any kind. Returns `None` for an empty list.
pub fn select_initial_state(states: &[WorkflowState]) -> Option<&WorkflowState> {
    states
        .iter()
        .find(|s| s.state_type.is_initial())
        .or_else(|| states.first())
}

/// Keeps the states that belong to the given team.
///
/// A state matches when its embedded team id equals `team_uuid` or its team
/// key equals `configured_id`. States without an embedded team are dropped.
pub fn retain_team_states(
    states: Vec<WorkflowState>,
    team_uuid: &str,
    configured_id: &str,
) -> Vec<WorkflowState> {
    states
        .into_iter()
        .filter(|s| {
            s.team
                .as_ref()
                .is_some_and(|t| t.matches(team_uuid, configured_id))
        })
        .collect()
}
