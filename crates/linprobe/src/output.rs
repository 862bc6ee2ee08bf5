//! Console output helpers for the `linprobe` CLI.
//!
//! Progress goes to stdout; failures go to stderr. None of this is meant to
//! be machine-parsed.

use std::time::Duration;

use linprobe_config::ProbeConfig;
use linprobe_core::state::WorkflowState;
use linprobe_ui::styles::{
    TREE_CHILD, render_accent, render_bold, render_fail, render_fail_icon, render_heading,
    render_info_icon, render_muted, render_pass, render_pass_icon, render_separator,
    render_separator_heavy, render_skip_icon, render_state_type, render_warn, render_warn_icon,
};

use crate::runner::RunReport;
use crate::stages::StepOutcome;
use crate::stages::lifecycle::LifecycleOutcome;

/// Prints a stage heading preceded by a blank line.
pub fn heading(title: &str) {
    println!("\n{}", render_heading(title));
}

pub fn pass(message: &str) {
    println!("{} {}", render_pass_icon(), message);
}

pub fn fail(message: &str) {
    eprintln!("{} {}", render_fail_icon(), render_fail(message));
}

pub fn warn(message: &str) {
    println!("{} {}", render_warn_icon(), render_warn(message));
}

pub fn info(message: &str) {
    println!("\n  {} {}", render_info_icon(), message);
}

/// Prints an indented detail line under the previous message.
pub fn detail(message: &str) {
    println!("  {message}");
}

/// Formats a workflow state as `Name (type): id`.
pub fn format_state(state: &WorkflowState) -> String {
    format!(
        "{} ({}): {}",
        state.name,
        render_state_type(&state.state_type),
        render_muted(&state.id)
    )
}

pub fn start_banner(config: &ProbeConfig) {
    println!("{}", render_bold("Starting Linear API Integration Tests"));
    println!("{}", render_separator_heavy());
    println!("API Key: {}", config.credentials.redacted_key());
    println!("Team ID: {}", config.credentials.team_id());
}

/// Announces the cancellation window before the test issue is deleted.
pub fn deletion_banner(url: Option<&str>, delay: Duration) {
    println!("\n{}", render_separator_heavy());
    if let Some(url) = url {
        println!("Test issue created: {}", render_accent(url));
    }
    println!(
        "The test issue will be automatically deleted in {} seconds...",
        delay.as_secs()
    );
    println!("Press Ctrl+C to keep it for inspection");
}

/// One summary line for a non-fatal step.
pub fn format_outcome(label: &str, outcome: &StepOutcome) -> String {
    match outcome {
        StepOutcome::Succeeded => format!("{} {label}", render_pass_icon()),
        StepOutcome::Rejected => format!(
            "{} {label} {}",
            render_fail_icon(),
            render_muted("(rejected by API)")
        ),
        StepOutcome::Failed(reason) => format!(
            "{} {label} {}",
            render_fail_icon(),
            render_muted(&format!("({reason})"))
        ),
        StepOutcome::Skipped => format!("{} {label} {}", render_skip_icon(), render_muted("(skipped)")),
    }
}

/// Lines of the end-of-run summary, one per stage.
pub fn summary_lines(report: &RunReport) -> Vec<String> {
    let mut lines = vec![
        format_outcome(
            &format!("Team {} ({})", report.team.key, report.team.id),
            &StepOutcome::Succeeded,
        ),
        format_outcome(
            &format!("Workflow states: {}", report.states.len()),
            &if report.states.is_empty() {
                StepOutcome::Failed("none found".into())
            } else {
                StepOutcome::Succeeded
            },
        ),
        format_outcome(
            "Issue search",
            &if report.search_verified {
                StepOutcome::Succeeded
            } else {
                StepOutcome::Failed("not verified".into())
            },
        ),
    ];

    match &report.lifecycle {
        LifecycleOutcome::Skipped { reason } => {
            lines.push(format_outcome(
                &format!("Issue lifecycle: {reason}"),
                &StepOutcome::Skipped,
            ));
        }
        LifecycleOutcome::CreateFailed { reason } => {
            lines.push(format_outcome(
                "Create issue",
                &StepOutcome::Failed(reason.clone()),
            ));
        }
        LifecycleOutcome::Completed(lifecycle) => {
            lines.push(format_outcome(
                &format!("Create issue {}", lifecycle.issue.identifier),
                &StepOutcome::Succeeded,
            ));
            for (label, outcome) in [
                ("Update issue", &lifecycle.update),
                ("Add comment", &lifecycle.comment),
                ("Delete issue", &lifecycle.delete),
            ] {
                lines.push(format!("{TREE_CHILD}{}", format_outcome(label, outcome)));
            }
        }
    }
    lines
}

/// Prints the summary and the completion banner.
pub fn completion(report: &RunReport) {
    println!("\n{}", render_separator());
    for line in summary_lines(report) {
        println!("{line}");
    }
    println!("{}", render_separator_heavy());
    println!("{} {}", render_pass_icon(), render_pass("All tests completed!"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use linprobe_core::team::Team;
    use linprobe_ui::terminal::disable_color;
    use pretty_assertions::assert_eq;

    use crate::stages::lifecycle::{CreatedIssue, LifecycleReport};

    fn report(lifecycle: LifecycleOutcome) -> RunReport {
        RunReport {
            team: Team {
                id: "uuid-1".into(),
                name: "Engineering".into(),
                key: "ENG".into(),
            },
            states: vec![WorkflowState {
                id: "s1".into(),
                name: "Backlog".into(),
                state_type: "backlog".into(),
                team: None,
            }],
            search_verified: true,
            lifecycle,
        }
    }

    #[test]
    fn state_line_format() {
        disable_color();
        let state = WorkflowState {
            id: "s1".into(),
            name: "Todo".into(),
            state_type: "unstarted".into(),
            team: None,
        };
        assert_eq!(format_state(&state), "Todo (unstarted): s1");
    }

    #[test]
    fn outcome_lines() {
        disable_color();
        assert_eq!(format_outcome("Update issue", &StepOutcome::Succeeded), "✓ Update issue");
        assert_eq!(
            format_outcome("Add comment", &StepOutcome::Rejected),
            "✖ Add comment (rejected by API)"
        );
        assert_eq!(
            format_outcome("Delete issue", &StepOutcome::Skipped),
            "- Delete issue (skipped)"
        );
    }

    #[test]
    fn summary_for_completed_lifecycle() {
        disable_color();
        let lines = summary_lines(&report(LifecycleOutcome::Completed(LifecycleReport {
            issue: CreatedIssue {
                id: "i1".into(),
                identifier: "ENG-1".into(),
                url: None,
                description: String::new(),
            },
            update: StepOutcome::Succeeded,
            comment: StepOutcome::Failed("boom".into()),
            delete: StepOutcome::Succeeded,
        })));
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "✓ Team ENG (uuid-1)");
        assert_eq!(lines[3], "✓ Create issue ENG-1");
        assert!(lines[5].ends_with("✖ Add comment (boom)"));
    }

    #[test]
    fn summary_for_skipped_lifecycle() {
        disable_color();
        let lines = summary_lines(&report(LifecycleOutcome::Skipped {
            reason: "No workflow states available".into(),
        }));
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[3],
            "- Issue lifecycle: No workflow states available (skipped)"
        );
    }
}
