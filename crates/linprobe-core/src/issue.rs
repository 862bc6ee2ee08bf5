//! Issue types and mutation inputs/payloads.

use serde::{Deserialize, Serialize};

/// A Linear issue.
///
/// Queries select different subsets of fields, so everything except `id`
/// is defaulted when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,

    /// Human-readable identifier such as `ENG-123`.
    #[serde(default)]
    pub identifier: String,

    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Input for the `issueCreate` mutation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCreateInput {
    pub team_id: String,
    pub title: String,
    pub description: String,
    pub state_id: String,
}

/// Partial input for the `issueUpdate` mutation. `None` fields are left
/// unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IssueUpdateInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Result of the `issueCreate` and `issueUpdate` mutations.
#[derive(Debug, Clone, Deserialize)]
pub struct IssuePayload {
    pub success: bool,

    #[serde(default)]
    pub issue: Option<Issue>,
}

impl IssuePayload {
    /// Returns the issue only when the mutation reported success and
    /// included the issue.
    pub fn into_created(self) -> Option<Issue> {
        if self.success { self.issue } else { None }
    }
}

/// Result of the `issueDelete` mutation.
#[derive(Debug, Clone, Deserialize)]
pub struct DeletePayload {
    pub success: bool,
}
