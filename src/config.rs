//! Run configuration.
//!
//! The tool takes no required input: by default it inspects `package.json`
//! and `README.md` in the current directory. `--dir` points it somewhere
//! else.

use std::path::PathBuf;

use crate::paths::{MANIFEST_FILE, README_FILE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Package directory; `None` means the current directory.
    pub root: Option<PathBuf>,
    pub manifest_file: String,
    pub readme_file: String,
    /// Log verbosity from repeated `-v` flags.
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: None,
            manifest_file: MANIFEST_FILE.to_string(),
            readme_file: README_FILE.to_string(),
            verbosity: 0,
        }
    }
}

impl Config {
    /// Build from CLI values.
    pub fn new(dir: Option<PathBuf>, verbosity: u8) -> Self {
        Self {
            root: dir,
            verbosity,
            ..Self::default()
        }
    }

    /// Default `tracing` filter directive for the configured verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "package_check=debug",
            _ => "trace",
        }
    }
}
