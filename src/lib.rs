//! # package-check - Publishing checks for npm packages
//!
//! Inspects the `package.json` and `README.md` in a directory and reports
//! whether the package is ready to publish as a modern ES module package.
//!
//! ## Overview
//!
//! A fixed list of checks runs in order against a read-only [`CheckContext`].
//! The first check that fails stops the run and its title and remediation
//! link are reported. A check whose predicate raises an error is reported as
//! an internal tool failure instead.
//!
//! ## Modules
//!
//! - [`manifest`] - JSON manifest access with JavaScript property semantics
//! - [`checks`] - The check predicates and the ordered check list
//! - [`repo_url`] - Repository URL normalization
//! - [`runner`] - Stop-on-first-failure check execution
//! - [`platform`] - Process adapter for the working directory and files
//! - [`config`] - Run configuration
//! - [`ui`] - Failure reporting
//!
//! ## Example
//!
//! ```
//! use package_check::checks::{package_checks, CheckContext};
//! use package_check::manifest::Manifest;
//! use package_check::runner::{run, RunOutcome};
//!
//! let manifest = Manifest::parse(r#"{"type": "module"}"#).unwrap();
//! let ctx = CheckContext::new(manifest, "# hello\n");
//!
//! let outcome = run(&package_checks(&ctx));
//! match outcome {
//!     RunOutcome::CheckFailed { title, .. } => assert_eq!(title, "Export Map"),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```

pub mod checks;
pub mod config;
pub mod error;
pub mod manifest;
pub mod platform;
pub mod repo_url;
pub mod runner;
pub mod ui;

pub use checks::{package_checks, Check, CheckContext};
pub use error::CheckError;
pub use runner::{run, RunOutcome};

/// Default file names looked up in the package directory.
pub mod paths {
    /// Package manifest: `package.json`
    pub const MANIFEST_FILE: &str = "package.json";
    /// Package readme: `README.md`
    pub const README_FILE: &str = "README.md";
}
