//! Test fixtures for GitHub payloads
//!
//! The organization and repository payloads live under `tests/fixtures/` so
//! the integration tests can serve the same data over HTTP.

#![allow(dead_code)]

use serde_json::{Map, Value, json};

/// Org endpoint for the `google` fixture
pub const ORG_GOOGLE_URL: &str = "https://api.github.com/orgs/google";

/// `repos_url` advertised by the `google` fixture
pub const REPOS_URL: &str = "https://api.github.com/orgs/google/repos";

const ORG_GOOGLE_JSON: &str = include_str!("../../tests/fixtures/org_google.json");
const REPOS_GOOGLE_JSON: &str = include_str!("../../tests/fixtures/repos_google.json");

/// Organization payload for `google`
pub fn org_payload() -> Value {
    serde_json::from_str(ORG_GOOGLE_JSON).expect("org fixture is valid JSON")
}

/// Repository list served at [`REPOS_URL`]
pub fn repos_payload() -> Value {
    serde_json::from_str(REPOS_GOOGLE_JSON).expect("repos fixture is valid JSON")
}

/// Every repository name in the fixture, in payload order
pub fn expected_repos() -> Vec<String> {
    [
        "episodes.dart",
        "cpp-netlib",
        "dagger",
        "ios-webkit-debug-proxy",
        "google.github.io",
        "kratu",
        "build-debian-cloud",
        "traceur-compiler",
        "firmata.py",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Fixture repositories licensed `apache-2.0`
pub fn apache2_repos() -> Vec<String> {
    ["dagger", "kratu", "traceur-compiler", "firmata.py"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Builder for repository payloads.
///
/// # Example
/// ```ignore
/// let repo = RepoBuilder::new("dagger").license("apache-2.0").build();
/// ```
#[derive(Debug, Clone)]
pub struct RepoBuilder {
    name: String,
    license: Option<String>,
}

impl RepoBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            license: None,
        }
    }

    /// Set the `license.key` field
    pub fn license(mut self, key: impl Into<String>) -> Self {
        self.license = Some(key.into());
        self
    }

    pub fn build(self) -> Value {
        let mut repo = Map::new();
        repo.insert("name".to_string(), Value::String(self.name));
        if let Some(key) = self.license {
            repo.insert("license".to_string(), json!({ "key": key }));
        }
        Value::Object(repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nested::access_nested_str;

    #[test]
    fn test_fixture_org_advertises_repos_url() {
        assert_eq!(
            access_nested_str(&org_payload(), &["repos_url"]).unwrap(),
            REPOS_URL
        );
    }

    #[test]
    fn test_fixture_repo_count_matches_expected() {
        let repos = repos_payload();
        assert_eq!(repos.as_array().map(Vec::len), Some(expected_repos().len()));
    }

    #[test]
    fn test_repo_builder_without_license() {
        assert_eq!(RepoBuilder::new("repo1").build(), json!({"name": "repo1"}));
    }
}
