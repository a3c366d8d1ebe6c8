use assert_cmd::Command;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// PackageHarness provides an isolated package directory for driving the
/// package-check binary.
pub struct PackageHarness {
    pub dir: TempDir,
}

impl PackageHarness {
    /// Creates an empty package directory (no manifest, no readme).
    pub fn empty() -> Self {
        PackageHarness {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Creates a package directory with the given manifest and readme.
    pub fn new(manifest: &Value, readme: &str) -> Self {
        let harness = Self::empty();
        harness.write_manifest(manifest);
        harness.write_readme(readme);
        harness
    }

    /// Creates a package that passes every check.
    pub fn complete() -> Self {
        Self::new(&complete_manifest(), "# y\n\nA package.\n")
    }

    /// Returns the package directory path.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_manifest(&self, manifest: &Value) {
        let text = serde_json::to_string_pretty(manifest).expect("Failed to serialize manifest");
        self.write_raw_manifest(&text);
    }

    pub fn write_raw_manifest(&self, text: &str) {
        fs::write(self.path().join("package.json"), text).expect("Failed to write package.json");
    }

    pub fn write_readme(&self, text: &str) {
        fs::write(self.path().join("README.md"), text).expect("Failed to write README.md");
    }

    /// Command for the binary, run inside the package directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("package-check").expect("Failed to find binary");
        cmd.current_dir(self.path())
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }
}

/// A manifest that satisfies every check.
pub fn complete_manifest() -> Value {
    json!({
        "name": "y",
        "type": "module",
        "exports": {".": "./index.js"},
        "files": ["dist"],
        "keywords": ["a"],
        "license": "MIT",
        "types": "./index.d.ts",
        "repository": {"url": "git+https://github.com/x/y.git"}
    })
}

/// `complete_manifest()` with `key` removed.
pub fn manifest_without(key: &str) -> Value {
    let mut manifest = complete_manifest();
    manifest
        .as_object_mut()
        .expect("manifest is an object")
        .remove(key);
    manifest
}
