//! Package publishing checks.
//!
//! Each check is a title, a remediation link, and a predicate closing over a
//! shared [`CheckContext`]. Predicates only read the context. The order of
//! [`package_checks`] decides which failure is reported first.

use serde_json::Value;

use crate::error::CheckError;
use crate::manifest::{is_truthy, length_is_truthy, property, Manifest};
use crate::repo_url::normalize_repository_url;

const DOCS_BASE: &str = "https://docs.skypack.dev/package-authors/package-checks";

/// Inputs shared by every check in a run.
#[derive(Debug, Clone)]
pub struct CheckContext {
    pub manifest: Manifest,
    pub readme: String,
}

impl CheckContext {
    pub fn new(manifest: Manifest, readme: impl Into<String>) -> Self {
        Self {
            manifest,
            readme: readme.into(),
        }
    }
}

type Predicate<'a> = Box<dyn Fn() -> Result<bool, CheckError> + 'a>;

/// A named publishing check.
pub struct Check<'a> {
    pub title: &'static str,
    pub url: String,
    predicate: Predicate<'a>,
}

impl<'a> Check<'a> {
    pub fn new(
        title: &'static str,
        url: impl Into<String>,
        predicate: impl Fn() -> Result<bool, CheckError> + 'a,
    ) -> Self {
        Self {
            title,
            url: url.into(),
            predicate: Box::new(predicate),
        }
    }

    /// Evaluate the predicate. `Err` means the check could not be evaluated.
    pub fn evaluate(&self) -> Result<bool, CheckError> {
        (self.predicate)()
    }
}

impl std::fmt::Debug for Check<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Check")
            .field("title", &self.title)
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

fn docs_url(anchor: &str) -> String {
    format!("{}#{}", DOCS_BASE, anchor)
}

/// The full check list, in evaluation order.
pub fn package_checks(ctx: &CheckContext) -> Vec<Check<'_>> {
    let manifest = &ctx.manifest;
    vec![
        Check::new("ES Module Entrypoint", docs_url("esm"), move || {
            has_esm_entrypoint(manifest)
        }),
        Check::new("Export Map", docs_url("export-map"), move || {
            has_export_map(manifest)
        }),
        Check::new("No Unnecessary Files", docs_url("files"), move || {
            has_files(manifest)
        }),
        Check::new("Keywords", docs_url("keywords"), move || {
            has_keywords(manifest)
        }),
        // Only reachable once "Keywords" passed, so this narrows to non-empty.
        Check::new("Keywords (Empty)", docs_url("keywords"), move || {
            has_nonempty_keywords(manifest)
        }),
        Check::new("License", docs_url("license"), move || {
            has_license(manifest)
        }),
        Check::new("README", docs_url("readme"), move || Ok(has_readme(&ctx.readme))),
        Check::new("Repository URL", docs_url("repository"), move || {
            has_repository_url(manifest)
        }),
        Check::new("TypeScript Types", docs_url("types"), move || {
            has_types(manifest)
        }),
    ]
}

// ============================================================================
// PREDICATES
// ============================================================================

/// An `exports` map with an `import` condition (top level or one level
/// down), a `module` field, `"type": "module"`, or a `.mjs` `main`.
pub fn has_esm_entrypoint(manifest: &Manifest) -> Result<bool, CheckError> {
    let exports = manifest.field("exports")?;
    if is_truthy(exports)
        && (is_truthy(property("exports", exports, "import")?) || has_nested_import(exports)?)
    {
        return Ok(true);
    }
    if is_truthy(manifest.field("module")?) {
        return Ok(true);
    }
    if manifest.field("type")?.as_str() == Some("module") {
        return Ok(true);
    }
    Ok(manifest
        .field("main")?
        .as_str()
        .is_some_and(|main| main.ends_with(".mjs")))
}

/// Search export sub-targets in document order for a truthy `import`.
fn has_nested_import(exports: &Value) -> Result<bool, CheckError> {
    let targets: Vec<(String, &Value)> = match exports {
        Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        _ => return Ok(false),
    };

    for (key, target) in targets {
        match target {
            Value::Null => {
                return Err(CheckError::nullish(format!("exports[{:?}]", key), "import"));
            }
            Value::Object(map) => {
                if map.get("import").is_some_and(is_truthy) {
                    return Ok(true);
                }
            }
            _ => {}
        }
    }
    Ok(false)
}

pub fn has_export_map(manifest: &Manifest) -> Result<bool, CheckError> {
    Ok(is_truthy(manifest.field("exports")?))
}

pub fn has_files(manifest: &Manifest) -> Result<bool, CheckError> {
    Ok(is_truthy(manifest.field("files")?))
}

pub fn has_keywords(manifest: &Manifest) -> Result<bool, CheckError> {
    Ok(is_truthy(manifest.field("keywords")?))
}

/// Reads `keywords.length`; a missing `keywords` is an error, not a failure.
pub fn has_nonempty_keywords(manifest: &Manifest) -> Result<bool, CheckError> {
    length_is_truthy("keywords", manifest.field("keywords")?)
}

pub fn has_license(manifest: &Manifest) -> Result<bool, CheckError> {
    Ok(is_truthy(manifest.field("license")?))
}

pub fn has_readme(readme: &str) -> bool {
    !readme.is_empty()
}

/// A structured `repository` whose `url` normalizes to a canonical URL.
pub fn has_repository_url(manifest: &Manifest) -> Result<bool, CheckError> {
    let repository = manifest.field("repository")?;
    if !is_truthy(repository) {
        return Ok(false);
    }
    let url = property("repository", repository, "url")?;
    let normalized = match url {
        Value::String(raw) if !raw.is_empty() => normalize_repository_url(raw),
        _ => None,
    };
    Ok(normalized.is_some_and(|u| !u.is_empty()))
}

/// `types`, or the legacy `typings` alias.
pub fn has_types(manifest: &Manifest) -> Result<bool, CheckError> {
    Ok(is_truthy(manifest.field("types")?) || is_truthy(manifest.field("typings")?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn manifest(value: Value) -> Manifest {
        Manifest::from_value(value)
    }

    #[test]
    fn test_check_order_and_urls() {
        let ctx = CheckContext::new(manifest(json!({})), "");
        let checks = package_checks(&ctx);
        let pairs: Vec<(&str, &str)> = checks.iter().map(|c| (c.title, c.url.as_str())).collect();
        assert_eq!(
            pairs,
            vec![
                ("ES Module Entrypoint", "https://docs.skypack.dev/package-authors/package-checks#esm"),
                ("Export Map", "https://docs.skypack.dev/package-authors/package-checks#export-map"),
                ("No Unnecessary Files", "https://docs.skypack.dev/package-authors/package-checks#files"),
                ("Keywords", "https://docs.skypack.dev/package-authors/package-checks#keywords"),
                ("Keywords (Empty)", "https://docs.skypack.dev/package-authors/package-checks#keywords"),
                ("License", "https://docs.skypack.dev/package-authors/package-checks#license"),
                ("README", "https://docs.skypack.dev/package-authors/package-checks#readme"),
                ("Repository URL", "https://docs.skypack.dev/package-authors/package-checks#repository"),
                ("TypeScript Types", "https://docs.skypack.dev/package-authors/package-checks#types"),
            ]
        );
    }

    #[test]
    fn test_esm_fails_without_any_signal() {
        assert!(!has_esm_entrypoint(&manifest(json!({}))).unwrap());
        assert!(!has_esm_entrypoint(&manifest(json!({
            "main": "index.js",
            "type": "commonjs",
            "exports": {".": "./index.js"}
        })))
        .unwrap());
    }

    #[test]
    fn test_esm_each_disjunct_passes() {
        let cases = [
            json!({"exports": {"import": "./index.mjs"}}),
            json!({"exports": {".": {"import": "./index.mjs", "require": "./index.cjs"}}}),
            json!({"module": "./dist/index.js"}),
            json!({"type": "module"}),
            json!({"main": "./dist/index.mjs"}),
        ];
        for case in cases {
            assert!(has_esm_entrypoint(&manifest(case.clone())).unwrap(), "{}", case);
        }
    }

    #[test]
    fn test_esm_nested_import_only_one_level_deep() {
        let deep = json!({"exports": {".": {"node": {"import": "./x.mjs"}}}});
        assert!(!has_esm_entrypoint(&manifest(deep)).unwrap());
    }

    #[test]
    fn test_esm_falsy_import_does_not_count() {
        let m = json!({"exports": {"import": "", ".": {"import": null}}});
        assert!(!has_esm_entrypoint(&manifest(m)).unwrap());
    }

    #[test]
    fn test_esm_array_exports() {
        let m = json!({"exports": [{"import": "./a.mjs"}, "./a.js"]});
        assert!(has_esm_entrypoint(&manifest(m)).unwrap());
    }

    #[test]
    fn test_esm_null_subtarget_before_match_is_error() {
        let m = json!({"exports": {"./legacy": null, ".": {"import": "./a.mjs"}}});
        let err = has_esm_entrypoint(&manifest(m)).unwrap_err();
        assert!(err.to_string().contains("import"));
    }

    #[test]
    fn test_esm_null_subtarget_after_match_is_fine() {
        let m = json!({"exports": {".": {"import": "./a.mjs"}, "./legacy": null}});
        assert!(has_esm_entrypoint(&manifest(m)).unwrap());
    }

    #[test]
    fn test_esm_null_manifest_is_error() {
        assert!(has_esm_entrypoint(&manifest(Value::Null)).is_err());
    }

    #[test]
    fn test_export_map_is_truthiness_of_exports() {
        assert!(has_export_map(&manifest(json!({"exports": "./index.js"}))).unwrap());
        assert!(has_export_map(&manifest(json!({"exports": {}}))).unwrap());
        assert!(!has_export_map(&manifest(json!({"exports": ""}))).unwrap());
        assert!(!has_export_map(&manifest(json!({"exports": false}))).unwrap());
        assert!(!has_export_map(&manifest(json!({}))).unwrap());
    }

    #[test]
    fn test_files_license_keywords() {
        let full = manifest(json!({"files": ["dist"], "license": "MIT", "keywords": []}));
        assert!(has_files(&full).unwrap());
        assert!(has_license(&full).unwrap());
        assert!(has_keywords(&full).unwrap());

        let empty = manifest(json!({"license": ""}));
        assert!(!has_files(&empty).unwrap());
        assert!(!has_license(&empty).unwrap());
        assert!(!has_keywords(&empty).unwrap());
    }

    #[test]
    fn test_nonempty_keywords() {
        assert!(!has_nonempty_keywords(&manifest(json!({"keywords": []}))).unwrap());
        assert!(has_nonempty_keywords(&manifest(json!({"keywords": ["a"]}))).unwrap());
        assert!(has_nonempty_keywords(&manifest(json!({}))).is_err());
    }

    #[test]
    fn test_readme() {
        assert!(has_readme("# pkg"));
        assert!(!has_readme(""));
    }

    #[test]
    fn test_repository_url() {
        let ok = manifest(json!({"repository": {"type": "git", "url": "git+https://github.com/x/y.git"}}));
        assert!(has_repository_url(&ok).unwrap());

        for m in [
            json!({}),
            json!({"repository": "x/y"}),
            json!({"repository": {"type": "git"}}),
            json!({"repository": {"url": ""}}),
            json!({"repository": {"url": 42}}),
            json!({"repository": {"url": "not a repository"}}),
            json!({"repository": {"url": "https://github.com/owner"}}),
            json!({"repository": {"url": "github:owner"}}),
        ] {
            assert!(!has_repository_url(&manifest(m.clone())).unwrap(), "{}", m);
        }
    }

    #[test]
    fn test_types_or_typings() {
        assert!(has_types(&manifest(json!({"types": "./index.d.ts"}))).unwrap());
        assert!(has_types(&manifest(json!({"typings": "./index.d.ts"}))).unwrap());
        assert!(!has_types(&manifest(json!({"types": ""}))).unwrap());
    }

    #[test]
    fn test_checks_do_not_mutate_context() {
        let ctx = CheckContext::new(manifest(json!({"type": "module"})), "readme");
        let before = ctx.manifest.clone();
        for check in package_checks(&ctx) {
            let _ = check.evaluate();
        }
        assert_eq!(ctx.manifest, before);
        assert_eq!(ctx.readme, "readme");
    }
}
