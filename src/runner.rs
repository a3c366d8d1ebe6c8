//! Stop-on-first-failure check execution.

use crate::checks::Check;
use crate::error::CheckError;

/// Terminal result of a run. Exactly one is produced per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every check passed.
    Passed,
    /// A check returned false. Remaining checks were not run.
    CheckFailed { title: String, url: String },
    /// A check could not be evaluated. This is a bug or an input the tool
    /// does not understand, not a problem with the package.
    InternalError { title: String, cause: CheckError },
}

impl RunOutcome {
    /// Process exit code for this outcome: 0 passed, 1 failed, 2 internal error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Passed => 0,
            Self::CheckFailed { .. } => 1,
            Self::InternalError { .. } => 2,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// Run checks in order, stopping at the first failure or error.
pub fn run(checks: &[Check<'_>]) -> RunOutcome {
    for check in checks {
        match check.evaluate() {
            Ok(true) => {
                tracing::debug!(check = check.title, "check passed");
            }
            Ok(false) => {
                tracing::debug!(check = check.title, "check failed");
                return RunOutcome::CheckFailed {
                    title: check.title.to_string(),
                    url: check.url.clone(),
                };
            }
            Err(cause) => {
                tracing::debug!(check = check.title, error = %cause, "check raised an error");
                return RunOutcome::InternalError {
                    title: check.title.to_string(),
                    cause,
                };
            }
        }
    }
    tracing::debug!(count = checks.len(), "all checks passed");
    RunOutcome::Passed
}
