//! Comment types.

use serde::{Deserialize, Serialize};

/// A comment on an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,

    pub body: String,
}

/// Input for the `commentCreate` mutation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentCreateInput {
    pub issue_id: String,
    pub body: String,
}

/// Result of the `commentCreate` mutation.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentPayload {
    pub success: bool,

    #[serde(default)]
    pub comment: Option<Comment>,
}
