//! GraphQL documents sent to the Linear API.

/// Page size of the recent-issues listing used when search is unavailable.
pub const RECENT_ISSUES_PAGE_SIZE: u32 = 10;

pub const GET_TEAM: &str = r#"
query GetTeam($id: String!) {
  team(id: $id) {
    id
    name
    key
  }
}"#;

pub const GET_STATES: &str = r#"
query GetStates($teamId: ID!) {
  workflowStates(filter: { team: { id: { eq: $teamId } } }) {
    nodes {
      id
      name
      type
    }
  }
}"#;

pub const ALL_WORKFLOW_STATES: &str = r#"
query AllWorkflowStates {
  workflowStates {
    nodes {
      id
      name
      type
      team {
        id
        key
      }
    }
  }
}"#;

pub const SEARCH_ISSUES: &str = r#"
query SearchIssues($searchText: String!) {
  searchIssues(term: $searchText) {
    nodes {
      id
      identifier
      title
      description
    }
  }
}"#;

pub const GET_ISSUES: &str = r#"
query GetIssues($teamId: ID!, $first: Int!) {
  issues(first: $first, filter: { team: { id: { eq: $teamId } } }) {
    nodes {
      id
      identifier
      title
    }
  }
}"#;

pub const CREATE_ISSUE: &str = r#"
mutation CreateIssue($input: IssueCreateInput!) {
  issueCreate(input: $input) {
    success
    issue {
      id
      identifier
      url
      title
    }
  }
}"#;

pub const UPDATE_ISSUE: &str = r#"
mutation UpdateIssue($id: String!, $input: IssueUpdateInput!) {
  issueUpdate(id: $id, input: $input) {
    success
    issue {
      id
      title
      description
    }
  }
}"#;

pub const ADD_COMMENT: &str = r#"
mutation AddComment($issueId: String!, $body: String!) {
  commentCreate(input: { issueId: $issueId, body: $body }) {
    success
    comment {
      id
      body
    }
  }
}"#;

pub const DELETE_ISSUE: &str = r#"
mutation DeleteIssue($id: String!) {
  issueDelete(id: $id) {
    success
  }
}"#;
