//! Failure reporting.
//!
//! A passing run prints nothing. Failures and internal errors are written to
//! stderr as short human-readable lines.

use std::io::{self, Write};

use crate::runner::RunOutcome;

/// Notice printed before the cause of an internal error.
pub const INTERNAL_ERROR_NOTICE: &str = "run failed (internal tool error, please report this!)";

/// Color scheme for report labels
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Red for the failed-check label
    pub fn failure(text: &str) -> ColoredString {
        text.red()
    }

    /// Yellow for the remediation label
    pub fn remedy(text: &str) -> ColoredString {
        text.yellow()
    }

    /// Bold red for error labels
    pub fn error(text: &str) -> ColoredString {
        text.red().bold()
    }

    /// Bold for the check title
    pub fn title(text: &str) -> ColoredString {
        text.bold()
    }
}

/// Lines describing an outcome. Empty for a passing run.
pub fn outcome_lines(outcome: &RunOutcome) -> Vec<String> {
    match outcome {
        RunOutcome::Passed => Vec::new(),
        RunOutcome::CheckFailed { title, url } => vec![
            format!("{} {}", colors::failure("Check failed:"), colors::title(title)),
            format!("{} {}", colors::remedy("How to fix:"), url),
        ],
        RunOutcome::InternalError { title, cause } => vec![
            INTERNAL_ERROR_NOTICE.to_string(),
            format!(
                "{} {} (while evaluating check \"{}\")",
                colors::error("Error:"),
                cause,
                title
            ),
        ],
    }
}

/// Write the outcome report to `out`.
pub fn write_outcome(out: &mut impl Write, outcome: &RunOutcome) -> io::Result<()> {
    for line in outcome_lines(outcome) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Report an outcome on stderr.
pub fn report(outcome: &RunOutcome) {
    let stderr = io::stderr();
    let _ = write_outcome(&mut stderr.lock(), outcome);
}

/// Report a failure to load the package inputs on stderr.
pub fn report_load_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", colors::error("Error:"), err);
}
