//! Repository URL normalization.
//!
//! Manifests spell repository locations many ways (`git+https://…`,
//! `git@github.com:owner/repo.git`, `github:owner/repo`, bare `owner/repo`).
//! [`normalize_repository_url`] reduces all of them to the `https://` URL of
//! the repository's web page.

use url::Url;

/// Hosts reachable through `<prefix>:owner/repo` shorthand.
const SHORTHAND_HOSTS: &[(&str, &str)] = &[
    ("github", "github.com"),
    ("gitlab", "gitlab.com"),
    ("bitbucket", "bitbucket.org"),
];

/// Default host for bare `owner/repo` shorthand.
const DEFAULT_HOST: &str = "github.com";

/// Schemes that can point at a browsable repository.
const REPOSITORY_SCHEMES: &[&str] = &["https", "http", "git", "ssh"];

/// Normalize a manifest `repository.url` to a canonical `https://` URL.
///
/// Returns `None` when the input cannot be read as a repository location.
pub fn normalize_repository_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let input = trimmed.strip_prefix("git+").unwrap_or(trimmed);

    if input.contains("://") {
        return from_url(input);
    }
    if let Some(url) = from_shorthand(input) {
        return Some(url);
    }
    if let Some(url) = from_scp_style(input) {
        return Some(url);
    }
    from_bare_shorthand(input)
}

fn from_url(input: &str) -> Option<String> {
    let url = Url::parse(input).ok()?;
    if !REPOSITORY_SCHEMES.contains(&url.scheme()) {
        return None;
    }
    let host = url.host_str()?;
    let host = match (url.scheme(), url.port()) {
        ("http" | "https", Some(port)) => format!("{}:{}", host, port),
        _ => host.to_string(),
    };
    canonical(&host, url.path())
}

/// `github:owner/repo`, `gitlab:owner/repo`, `bitbucket:owner/repo`
fn from_shorthand(input: &str) -> Option<String> {
    let (prefix, path) = input.split_once(':')?;
    let host = SHORTHAND_HOSTS
        .iter()
        .find(|(name, _)| *name == prefix)
        .map(|(_, host)| *host)?;
    canonical(host, strip_committish(path))
}

/// `git@github.com:owner/repo.git`
fn from_scp_style(input: &str) -> Option<String> {
    let (user_host, path) = input.split_once(':')?;
    let host = match user_host.rsplit_once('@') {
        Some((user, host)) if !user.is_empty() => host,
        _ => return None,
    };
    if !is_hostname(host) || path.starts_with("//") {
        return None;
    }
    canonical(host, strip_committish(path))
}

/// `owner/repo`
fn from_bare_shorthand(input: &str) -> Option<String> {
    let path = strip_committish(input);
    let (owner, repo) = path.split_once('/')?;
    let valid = |part: &str| {
        !part.is_empty()
            && part
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    };
    if !valid(owner) || !valid(repo) || owner.starts_with('.') {
        return None;
    }
    canonical(DEFAULT_HOST, path)
}

fn strip_committish(path: &str) -> &str {
    path.split('#').next().unwrap_or(path)
}

fn is_hostname(host: &str) -> bool {
    !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.'))
}

/// Join host and repository path, dropping a trailing `/` and `.git`.
///
/// GitHub and Bitbucket paths are cut to `owner/repo`; GitLab keeps nested
/// groups but still needs at least `group/project`.
fn canonical(host: &str, path: &str) -> Option<String> {
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return None;
    }
    let segments = match host {
        "github.com" | "bitbucket.org" => segments.get(..2)?,
        "gitlab.com" if segments.len() < 2 => return None,
        _ => &segments[..],
    };

    let (repo, owners) = segments.split_last()?;
    let repo = repo.strip_suffix(".git").unwrap_or(repo);
    if repo.is_empty() {
        return None;
    }
    let mut parts = owners.to_vec();
    parts.push(repo);
    Some(format!("https://{}/{}", host, parts.join("/")))
}
