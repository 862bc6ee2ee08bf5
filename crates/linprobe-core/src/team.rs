//! Team types.

use serde::{Deserialize, Serialize};

/// A Linear team as returned by the `team(id:)` query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Canonical UUID of the team.
    pub id: String,

    pub name: String,

    /// Short human key (e.g. `ENG`) used as the issue identifier prefix.
    pub key: String,
}

/// The team reference embedded in a workflow state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRef {
    pub id: String,
    pub key: String,
}

impl TeamRef {
    /// Returns `true` if this reference names the team with the given UUID
    /// or the given human key.
    pub fn matches(&self, uuid: &str, key: &str) -> bool {
        self.id == uuid || self.key == key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_deserializes_from_graphql_shape() {
        let team: Team =
            serde_json::from_str(r#"{"id":"uuid-1","name":"Engineering","key":"ENG"}"#).unwrap();
        assert_eq!(team.id, "uuid-1");
        assert_eq!(team.key, "ENG");
    }

    #[test]
    fn team_ref_matches_uuid_or_key() {
        let r = TeamRef {
            id: "uuid-1".into(),
            key: "ENG".into(),
        };
        assert!(r.matches("uuid-1", "OPS"));
        assert!(r.matches("uuid-2", "ENG"));
        assert!(!r.matches("uuid-2", "OPS"));
    }
}
