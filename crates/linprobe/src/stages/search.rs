//! Test 3: probe issue search.
//!
//! Results are only counted; nothing downstream consumes them.

use linprobe_client::queries::RECENT_ISSUES_PAGE_SIZE;
use linprobe_client::{Transport, attempt};

use crate::context::ProbeContext;
use crate::output;
use crate::stages::QueryPath;

/// Returns `true` if either full-text search or the recent-issues listing
/// answered.
pub fn probe_search<T: Transport>(ctx: &ProbeContext<'_, T>) -> bool {
    output::heading("Test 3: Search for Issues");

    let result = attempt(
        || {
            ctx.client
                .search_issues(&ctx.config.search_term)
                .map(|issues| (issues.len(), QueryPath::Primary))
        },
        |err| {
            output::fail(&format!("Failed to search issues: {err}"));
            output::info("Trying alternative query...");
            ctx.client
                .team_issues(ctx.configured_team_id(), RECENT_ISSUES_PAGE_SIZE)
                .map(|issues| (issues.len(), QueryPath::Fallback))
        },
    );

    match result {
        Ok((count, QueryPath::Primary)) => {
            output::pass(&format!("Search completed. Found {count} issues"));
            true
        }
        Ok((count, QueryPath::Fallback)) => {
            output::pass(&format!(
                "Alternative query worked. Found {count} recent issues"
            ));
            true
        }
        Err(e) => {
            output::fail(&format!("Alternative query also failed: {e}"));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linprobe_client::LinearClient;
    use linprobe_client::stub::StubTransport;
    use linprobe_config::{Credentials, ProbeConfig};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn config() -> ProbeConfig {
        ProbeConfig::new(Credentials::new("k", "ENG"))
    }

    #[test]
    fn search_success_skips_fallback() {
        let stub = StubTransport::new()
            .with_data(json!({"searchIssues": {"nodes": [{"id": "i1", "identifier": "ENG-1", "title": "t"}]}}));
        let client = LinearClient::new(&stub);
        let config = config();
        let ctx = ProbeContext::new(&client, &config);

        assert!(probe_search(&ctx));
        assert_eq!(stub.operations(), vec!["SearchIssues"]);
        assert_eq!(
            stub.requests()[0].variable_str("searchText"),
            Some("https://github.com/test/test/issues/1")
        );
    }

    #[test]
    fn search_error_falls_back_once_with_configured_team() {
        let stub = StubTransport::new()
            .with_errors(&["Search is unavailable"])
            .with_data(json!({"issues": {"nodes": []}}));
        let client = LinearClient::new(&stub);
        let config = config();
        let ctx = ProbeContext::new(&client, &config);

        assert!(probe_search(&ctx));
        assert_eq!(stub.operations(), vec!["SearchIssues", "GetIssues"]);
        assert_eq!(stub.requests()[1].variable_str("teamId"), Some("ENG"));
    }

    #[test]
    fn both_failing_is_unverified() {
        let stub = StubTransport::new()
            .with_errors(&["Search is unavailable"])
            .with_errors(&["Forbidden"]);
        let client = LinearClient::new(&stub);
        let config = config();
        let ctx = ProbeContext::new(&client, &config);

        assert!(!probe_search(&ctx));
        assert_eq!(stub.call_count(), 2);
    }
}
