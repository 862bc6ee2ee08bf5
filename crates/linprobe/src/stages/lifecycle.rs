//! Tests 4-7: drive one throwaway issue through create, update, comment and
//! delete.
//!
//! The steps run strictly in order. Creation gates everything after it;
//! update, comment and delete failures are reported and the run moves on.

use std::thread;
use std::time::Duration;

use chrono::Utc;
use tracing::debug;

use linprobe_client::Transport;
use linprobe_core::comment::CommentCreateInput;
use linprobe_core::content::{
    TEST_ISSUE_TITLE, UPDATED_ISSUE_TITLE, comment_body, issue_description, updated_description,
};
use linprobe_core::issue::{IssueCreateInput, IssueUpdateInput};
use linprobe_core::state::{WorkflowState, select_initial_state};
use linprobe_core::team::Team;

use crate::context::ProbeContext;
use crate::output;
use crate::stages::StepOutcome;

/// The issue created by the lifecycle run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedIssue {
    pub id: String,
    pub identifier: String,
    pub url: Option<String>,
    /// The description sent at creation; the update step appends to it.
    pub description: String,
}

/// Per-step outcomes once the issue exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleReport {
    pub issue: CreatedIssue,
    pub update: StepOutcome,
    pub comment: StepOutcome,
    pub delete: StepOutcome,
}

/// How far the lifecycle got.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleOutcome {
    /// No workflow states were available, so nothing was attempted.
    Skipped { reason: String },
    /// The create call failed; no further calls were made.
    CreateFailed { reason: String },
    Completed(LifecycleReport),
}

/// Runs the whole lifecycle against the resolved team.
pub fn run_lifecycle<T: Transport>(
    ctx: &ProbeContext<'_, T>,
    team: &Team,
    states: &[WorkflowState],
) -> LifecycleOutcome {
    let issue = match create_issue(ctx, team, states) {
        Ok(issue) => issue,
        Err(outcome) => {
            output::warn("Skipping update, comment and delete: no test issue");
            return outcome;
        }
    };

    pause(ctx.config.update_delay);
    let update = update_issue(ctx, &issue);
    let comment = add_comment(ctx, &issue);

    let delete = if ctx.config.keep_issue {
        output::heading("Test 7: Delete Test Issue");
        output::warn("Skipping: keeping the test issue as requested");
        if let Some(url) = &issue.url {
            output::detail(&format!("Test issue: {url}"));
        }
        StepOutcome::Skipped
    } else {
        output::deletion_banner(issue.url.as_deref(), ctx.config.delete_delay);
        pause(ctx.config.delete_delay);
        delete_issue(ctx, &issue)
    };

    LifecycleOutcome::Completed(LifecycleReport {
        issue,
        update,
        comment,
        delete,
    })
}

fn pause(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}

/// Test 4. Returns the created issue, or the outcome that ends the lifecycle.
fn create_issue<T: Transport>(
    ctx: &ProbeContext<'_, T>,
    team: &Team,
    states: &[WorkflowState],
) -> Result<CreatedIssue, LifecycleOutcome> {
    output::heading("Test 4: Create Test Issue");

    let Some(state) = select_initial_state(states) else {
        let reason = "No workflow states available".to_string();
        output::warn(&format!("Skipping: {reason}"));
        return Err(LifecycleOutcome::Skipped { reason });
    };
    output::detail(&format!(
        "Using state: {} ({})",
        state.name, state.state_type
    ));

    let input = IssueCreateInput {
        team_id: team.id.clone(),
        title: TEST_ISSUE_TITLE.to_string(),
        description: issue_description(Utc::now()),
        state_id: state.id.clone(),
    };
    output::detail(&format!("Sending mutation with teamId: {}", input.team_id));
    output::detail(&format!("StateId: {}", input.state_id));
    debug!(input = %serde_json::to_string(&input).unwrap_or_default(), "issueCreate input");

    let payload = match ctx.client.create_issue(&input) {
        Ok(payload) => payload,
        Err(e) => {
            output::fail(&format!("Failed to create issue: {e}"));
            return Err(LifecycleOutcome::CreateFailed {
                reason: e.to_string(),
            });
        }
    };
    debug!(success = payload.success, issue = ?payload.issue, "issueCreate result");

    let success = payload.success;
    match payload.into_created() {
        Some(issue) => {
            output::pass("Test issue created successfully:");
            output::detail(&format!("ID: {}", issue.identifier));
            if let Some(url) = &issue.url {
                output::detail(&format!("URL: {url}"));
            }
            Ok(CreatedIssue {
                id: issue.id,
                identifier: issue.identifier,
                url: issue.url,
                description: input.description,
            })
        }
        None => {
            let reason = if success {
                "response did not include the issue"
            } else {
                "API reported success: false"
            };
            output::fail(&format!("Failed to create issue: {reason}"));
            Err(LifecycleOutcome::CreateFailed {
                reason: reason.to_string(),
            })
        }
    }
}

/// Test 5.
fn update_issue<T: Transport>(ctx: &ProbeContext<'_, T>, issue: &CreatedIssue) -> StepOutcome {
    output::heading("Test 5: Update Test Issue");

    let input = IssueUpdateInput {
        title: Some(UPDATED_ISSUE_TITLE.to_string()),
        description: Some(updated_description(&issue.description, Utc::now())),
    };
    let result = ctx
        .client
        .update_issue(&issue.id, &input)
        .map(|p| p.success);
    report_step(&result, "Issue updated successfully", "Failed to update issue")
}

/// Test 6.
fn add_comment<T: Transport>(ctx: &ProbeContext<'_, T>, issue: &CreatedIssue) -> StepOutcome {
    output::heading("Test 6: Add Comment to Test Issue");

    let input = CommentCreateInput {
        issue_id: issue.id.clone(),
        body: comment_body(Utc::now()),
    };
    let result = ctx.client.create_comment(&input).map(|p| p.success);
    report_step(&result, "Comment added successfully", "Failed to add comment")
}

/// Test 7.
fn delete_issue<T: Transport>(ctx: &ProbeContext<'_, T>, issue: &CreatedIssue) -> StepOutcome {
    output::heading("Test 7: Delete Test Issue");

    let result = ctx.client.delete_issue(&issue.id).map(|p| p.success);
    report_step(
        &result,
        "Test issue deleted successfully",
        "Failed to delete issue",
    )
}

fn report_step(
    result: &Result<bool, linprobe_client::ClientError>,
    success: &str,
    failure: &str,
) -> StepOutcome {
    match result {
        Ok(true) => output::pass(success),
        Ok(false) => output::fail(failure),
        Err(e) => output::fail(&format!("{failure}: {e}")),
    }
    StepOutcome::from_mutation(result)
}
