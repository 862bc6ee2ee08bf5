//! Fixed content for the throwaway test issue.
//!
//! All generators take the timestamp explicitly so output is reproducible.

use chrono::{DateTime, SecondsFormat, Utc};

/// Term used by the search probe.
pub const SEARCH_TERM: &str = "https://github.com/test/test/issues/1";

/// Marker URL embedded in every test issue description.
pub const MARKER_URL: &str = "https://github.com/test/test/issues/999";

/// Title of a freshly created test issue.
pub const TEST_ISSUE_TITLE: &str = "[TEST] GitHub Integration Test Issue";

/// Title the update step writes.
pub const UPDATED_ISSUE_TITLE: &str = "[TEST] Updated GitHub Integration Test Issue";

/// Formats a timestamp the way every generated text does (`...T12:00:00.000Z`).
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Description of a freshly created test issue.
pub fn issue_description(created_at: DateTime<Utc>) -> String {
    format!(
        "This is a test issue created to verify GitHub-Linear integration. \
         GitHub Issue: {MARKER_URL}. Created by: Test Script. Created at: {}. \
         This issue can be safely deleted.",
        timestamp(created_at)
    )
}

/// Appends the update marker to an existing description.
pub fn updated_description(original: &str, updated_at: DateTime<Utc>) -> String {
    format!("{original}\n\n**Updated at**: {}", timestamp(updated_at))
}

/// Body of the test comment.
pub fn comment_body(posted_at: DateTime<Utc>) -> String {
    format!(
        "**Test Comment from GitHub Integration**\n\n\
         This is a test comment to verify that GitHub comments can be synced to Linear.\n\n\
         Posted at: {}",
        timestamp(posted_at)
    )
}
