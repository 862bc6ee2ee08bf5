//! The orchestrator: runs every stage in order and collects a [`RunReport`].
//!
//! Only two things abort a run: configuration that fails to load (before any
//! request is made) and a team that cannot be resolved. Everything else is
//! reported and the run continues.

use anyhow::{Context, Result};
use figment::Figment;

use linprobe_client::{LinearClient, Transport};
use linprobe_config::{ProbeConfig, TEAM_ID_VAR};
use linprobe_core::state::WorkflowState;
use linprobe_core::team::Team;

use crate::context::ProbeContext;
use crate::output;
use crate::stages::lifecycle::{self, LifecycleOutcome};
use crate::stages::{search, states, team};

/// What a completed run observed.
#[derive(Debug)]
pub struct RunReport {
    pub team: Team,
    pub states: Vec<WorkflowState>,
    pub search_verified: bool,
    pub lifecycle: LifecycleOutcome,
}

/// Loads configuration, builds the transport, and runs the probe.
///
/// `connect` is only called once configuration is valid, so a missing
/// credential never reaches the network.
pub fn launch<T, F>(figment: &Figment, connect: F) -> Result<RunReport>
where
    T: Transport,
    F: FnOnce(&ProbeConfig) -> T,
{
    let config = linprobe_config::load(figment)?;
    let client = LinearClient::new(connect(&config));
    run(&client, &config)
}

/// Runs every stage against an already configured client.
pub fn run<T: Transport>(client: &LinearClient<T>, config: &ProbeConfig) -> Result<RunReport> {
    let ctx = ProbeContext::new(client, config);
    output::start_banner(config);

    let team = team::resolve_team(&ctx).with_context(|| {
        format!("cannot proceed without a valid team; check your {TEAM_ID_VAR}")
    })?;

    let states = states::list_states(&ctx, &team);
    let search_verified = search::probe_search(&ctx);
    let lifecycle = lifecycle::run_lifecycle(&ctx, &team, &states);

    let report = RunReport {
        team,
        states,
        search_verified,
        lifecycle,
    };
    output::completion(&report);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::providers::Serialized;
    use linprobe_client::ClientError;
    use linprobe_client::stub::StubTransport;
    use linprobe_config::{ConfigError, Credentials, Overrides};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::stages::StepOutcome;

    fn config() -> ProbeConfig {
        ProbeConfig::new(Credentials::new("lin_api_test_key", "ENG")).without_delays()
    }

    fn team_found() -> serde_json::Value {
        json!({"team": {"id": "uuid-1", "name": "Engineering", "key": "ENG"}})
    }

    #[test]
    fn happy_path_runs_every_stage_in_order() {
        let stub = StubTransport::new()
            .with_data(team_found())
            .with_data(json!({"workflowStates": {"nodes": [
                {"id": "s1", "name": "Backlog", "type": "backlog"}
            ]}}))
            .with_data(json!({"searchIssues": {"nodes": []}}))
            .with_data(json!({"issueCreate": {"success": true, "issue": {
                "id": "i1", "identifier": "ENG-1", "url": "http://x/i1"
            }}}))
            .with_data(json!({"issueUpdate": {"success": true}}))
            .with_data(json!({"commentCreate": {"success": true}}))
            .with_data(json!({"issueDelete": {"success": true}}));
        let client = LinearClient::new(&stub);

        let report = run(&client, &config()).unwrap();

        assert_eq!(
            stub.operations(),
            vec![
                "GetTeam",
                "GetStates",
                "SearchIssues",
                "CreateIssue",
                "UpdateIssue",
                "AddComment",
                "DeleteIssue",
            ]
        );
        let requests = stub.requests();
        assert_eq!(requests[1].variable_str("teamId"), Some("uuid-1"));
        assert_eq!(requests[3].variables["input"]["teamId"], json!("uuid-1"));
        assert_eq!(requests[3].variables["input"]["stateId"], json!("s1"));
        assert_eq!(requests[6].variable_str("id"), Some("i1"));

        assert!(report.search_verified);
        match report.lifecycle {
            LifecycleOutcome::Completed(lifecycle) => {
                assert_eq!(lifecycle.issue.url.as_deref(), Some("http://x/i1"));
                assert_eq!(lifecycle.update, StepOutcome::Succeeded);
                assert_eq!(lifecycle.comment, StepOutcome::Succeeded);
                assert_eq!(lifecycle.delete, StepOutcome::Succeeded);
            }
            other => panic!("expected completed lifecycle, got {other:?}"),
        }
    }

    #[test]
    fn team_failure_aborts_before_other_stages() {
        let stub = StubTransport::new()
            .with_errors(&["Entity not found: Team"])
            .with_data(json!({"workflowStates": {"nodes": []}}));
        let client = LinearClient::new(&stub);

        let err = run(&client, &config()).unwrap_err();

        assert_eq!(stub.operations(), vec!["GetTeam"]);
        assert!(err.to_string().contains(TEAM_ID_VAR));
        let cause = err.downcast_ref::<ClientError>().unwrap();
        assert!(cause.is_graphql());
    }

    #[test]
    fn missing_credentials_make_no_requests() {
        let stub = StubTransport::new().with_data(team_found());
        let figment = linprobe_config::figment_defaults()
            .merge(Serialized::default("team_id", "ENG"));

        let err = launch(&figment, |_| &stub).unwrap_err();

        assert_eq!(stub.call_count(), 0);
        let cause = err.downcast_ref::<ConfigError>().unwrap();
        assert!(cause.is_missing());
    }

    #[test]
    fn launch_uses_loaded_config() {
        let stub = StubTransport::new().with_errors(&["boom"]);
        let figment = linprobe_config::figment_defaults()
            .merge(Serialized::default("api_key", "lin_api_test_key"))
            .merge(Serialized::default("team_id", "ENG"))
            .merge(Serialized::defaults(Overrides {
                update_delay_secs: Some(0),
                delete_delay_secs: Some(0),
                keep_issue: None,
            }));

        let mut seen_team = None;
        let result = launch(&figment, |config| {
            seen_team = Some(config.credentials.team_id().to_string());
            &stub
        });

        assert!(result.is_err());
        assert_eq!(seen_team.as_deref(), Some("ENG"));
        assert_eq!(stub.requests()[0].variable_str("id"), Some("ENG"));
    }

    #[test]
    fn search_fallback_uses_configured_team_once() {
        let stub = StubTransport::new()
            .with_data(team_found())
            .with_data(json!({"workflowStates": {"nodes": []}}))
            .with_errors(&["searchIssues is not available"])
            .with_data(json!({"issues": {"nodes": [{"id": "i9", "identifier": "ENG-9", "title": "t"}]}}));
        let client = LinearClient::new(&stub);

        let report = run(&client, &config()).unwrap();

        assert_eq!(
            stub.operations(),
            vec!["GetTeam", "GetStates", "SearchIssues", "GetIssues"]
        );
        assert_eq!(stub.requests()[3].variable_str("teamId"), Some("ENG"));
        assert!(report.search_verified);
        assert!(matches!(report.lifecycle, LifecycleOutcome::Skipped { .. }));
    }

    #[test]
    fn state_failures_skip_lifecycle_but_complete_run() {
        let stub = StubTransport::new()
            .with_data(team_found())
            .with_errors(&["filter not supported"])
            .with_errors(&["forbidden"])
            .with_data(json!({"searchIssues": {"nodes": []}}));
        let client = LinearClient::new(&stub);

        let report = run(&client, &config()).unwrap();

        assert_eq!(
            stub.operations(),
            vec!["GetTeam", "GetStates", "AllWorkflowStates", "SearchIssues"]
        );
        assert!(report.states.is_empty());
        assert!(matches!(report.lifecycle, LifecycleOutcome::Skipped { .. }));
    }
}
