//! Process adapter.
//!
//! Everything that touches process-wide state (the working directory and the
//! filesystem) goes through [`Platform`], so the checks and runner stay pure.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::checks::CheckContext;
use crate::config::Config;
use crate::manifest::Manifest;

/// Access to the working directory and file contents.
pub trait Platform {
    fn current_dir(&self) -> Result<PathBuf>;

    fn read_to_string(&self, path: &Path) -> Result<String>;
}

/// The real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsPlatform;

impl Platform for OsPlatform {
    fn current_dir(&self) -> Result<PathBuf> {
        std::env::current_dir().context("Failed to determine current directory")
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))
    }
}

/// In-memory platform for tests.
#[derive(Debug, Clone)]
pub struct InMemoryPlatform {
    cwd: PathBuf,
    files: HashMap<PathBuf, String>,
}

impl InMemoryPlatform {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            files: HashMap::new(),
        }
    }

    /// Add a file. Relative paths are resolved against the working directory.
    pub fn with_file(mut self, path: impl AsRef<Path>, contents: impl Into<String>) -> Self {
        let path = self.cwd.join(path);
        self.files.insert(path, contents.into());
        self
    }
}

impl Platform for InMemoryPlatform {
    fn current_dir(&self) -> Result<PathBuf> {
        Ok(self.cwd.clone())
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .with_context(|| format!("Failed to read {}: file not found", path.display()))
    }
}

/// Read the manifest and readme named by `config` into a [`CheckContext`].
pub fn load_context(platform: &dyn Platform, config: &Config) -> Result<CheckContext> {
    let root = match &config.root {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => platform.current_dir()?.join(dir),
        None => platform.current_dir()?,
    };

    let manifest_path = root.join(&config.manifest_file);
    let readme_path = root.join(&config.readme_file);
    tracing::info!(manifest = %manifest_path.display(), readme = %readme_path.display(), "loading package");

    let manifest_text = platform.read_to_string(&manifest_path)?;
    let readme = platform.read_to_string(&readme_path)?;
    let manifest = Manifest::parse(&manifest_text)
        .with_context(|| format!("Failed to parse {}", manifest_path.display()))?;

    Ok(CheckContext::new(manifest, readme))
}
