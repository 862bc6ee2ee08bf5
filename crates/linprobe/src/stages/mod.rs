//! The individual probe stages, run in order by [`crate::runner`].

pub mod lifecycle;
pub mod search;
pub mod states;
pub mod team;

use linprobe_client::ClientError;

/// Which query produced a stage's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryPath {
    Primary,
    Fallback,
}

/// Outcome of a single non-fatal step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Succeeded,
    /// The API answered but reported `success: false`.
    Rejected,
    /// The request itself failed.
    Failed(String),
    Skipped,
}

impl StepOutcome {
    /// Folds a mutation result into an outcome.
    pub fn from_mutation(result: &Result<bool, ClientError>) -> Self {
        match result {
            Ok(true) => Self::Succeeded,
            Ok(false) => Self::Rejected,
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}
