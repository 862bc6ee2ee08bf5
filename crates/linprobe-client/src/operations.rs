//! Typed Linear operations built on [`LinearClient::request`].

use serde::Deserialize;
use serde_json::json;

use linprobe_core::comment::{CommentCreateInput, CommentPayload};
use linprobe_core::issue::{DeletePayload, Issue, IssueCreateInput, IssuePayload, IssueUpdateInput};
use linprobe_core::state::WorkflowState;
use linprobe_core::team::Team;

use crate::client::LinearClient;
use crate::error::{ClientError, Result};
use crate::queries;
use crate::transport::Transport;

#[derive(Deserialize)]
struct Connection<N> {
    nodes: Vec<N>,
}

#[derive(Deserialize)]
struct TeamData {
    team: Option<Team>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorkflowStatesData {
    workflow_states: Connection<WorkflowState>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchIssuesData {
    search_issues: Connection<Issue>,
}

#[derive(Deserialize)]
struct IssuesData {
    issues: Connection<Issue>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IssueCreateData {
    issue_create: Option<IssuePayload>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IssueUpdateData {
    issue_update: Option<IssuePayload>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentCreateData {
    comment_create: Option<CommentPayload>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IssueDeleteData {
    issue_delete: Option<DeletePayload>,
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(ClientError::MissingData { field })
}

impl<T: Transport> LinearClient<T> {
    /// Looks up a team by key or UUID.
    pub fn team(&self, id: &str) -> Result<Team> {
        let data: TeamData = self.request_as("GetTeam", queries::GET_TEAM, json!({ "id": id }))?;
        required(data.team, "team")
    }

    /// Workflow states filtered server-side by team UUID.
    pub fn workflow_states(&self, team_id: &str) -> Result<Vec<WorkflowState>> {
        let data: WorkflowStatesData = self.request_as(
            "GetStates",
            queries::GET_STATES,
            json!({ "teamId": team_id }),
        )?;
        Ok(data.workflow_states.nodes)
    }

    /// Every workflow state visible to the key, each with its team reference.
    pub fn all_workflow_states(&self) -> Result<Vec<WorkflowState>> {
        let data: WorkflowStatesData =
            self.request_as("AllWorkflowStates", queries::ALL_WORKFLOW_STATES, json!({}))?;
        Ok(data.workflow_states.nodes)
    }

    /// Full-text issue search.
    pub fn search_issues(&self, term: &str) -> Result<Vec<Issue>> {
        let data: SearchIssuesData = self.request_as(
            "SearchIssues",
            queries::SEARCH_ISSUES,
            json!({ "searchText": term }),
        )?;
        Ok(data.search_issues.nodes)
    }

    /// The most recent issues of a team.
    pub fn team_issues(&self, team_id: &str, first: u32) -> Result<Vec<Issue>> {
        let data: IssuesData = self.request_as(
            "GetIssues",
            queries::GET_ISSUES,
            json!({ "teamId": team_id, "first": first }),
        )?;
        Ok(data.issues.nodes)
    }

    pub fn create_issue(&self, input: &IssueCreateInput) -> Result<IssuePayload> {
        let data: IssueCreateData = self.request_as(
            "CreateIssue",
            queries::CREATE_ISSUE,
            json!({ "input": input }),
        )?;
        required(data.issue_create, "issueCreate")
    }

    pub fn update_issue(&self, id: &str, input: &IssueUpdateInput) -> Result<IssuePayload> {
        let data: IssueUpdateData = self.request_as(
            "UpdateIssue",
            queries::UPDATE_ISSUE,
            json!({ "id": id, "input": input }),
        )?;
        required(data.issue_update, "issueUpdate")
    }

    pub fn create_comment(&self, input: &CommentCreateInput) -> Result<CommentPayload> {
        let data: CommentCreateData =
            self.request_as("AddComment", queries::ADD_COMMENT, json!(input))?;
        required(data.comment_create, "commentCreate")
    }

    pub fn delete_issue(&self, id: &str) -> Result<DeletePayload> {
        let data: IssueDeleteData =
            self.request_as("DeleteIssue", queries::DELETE_ISSUE, json!({ "id": id }))?;
        required(data.issue_delete, "issueDelete")
    }
}
