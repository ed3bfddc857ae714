//! GitHub organization client
//!
//! [`GithubOrgClient`] reads an organization's metadata once per instance,
//! follows its `repos_url`, and lists repository names, optionally keeping
//! only repositories under a given license.

use log::debug;
use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::fetch::{HttpFetcher, JsonFetcher};
use crate::memo::Memoized;
use crate::nested::{access_nested_map, access_nested_str};

#[cfg(test)]
pub mod fixtures;

/// Public GitHub API base URL
pub const API_BASE_URL: &str = "https://api.github.com";

/// Organization endpoint template; `{org}` is replaced by the org name
pub const ORG_URL: &str = "https://api.github.com/orgs/{org}";

/// GitHub organization client
#[derive(Debug)]
pub struct GithubOrgClient<F: JsonFetcher = HttpFetcher> {
    org_name: String,
    base_url: String,
    fetcher: F,
    org: Memoized<Value>,
}

impl GithubOrgClient<HttpFetcher> {
    /// Create a client for `org_name` against the public GitHub API
    pub fn new(org_name: impl Into<String>) -> Result<Self> {
        Ok(Self::with_fetcher(org_name, HttpFetcher::new()?))
    }

    /// Whether `repo.license.key` equals `license_key`.
    ///
    /// A missing or malformed license reads as "no match".
    ///
    /// Lives in the non-generic impl so `GithubOrgClient::has_license` needs
    /// no type annotation: inference settles on the default fetcher, the same
    /// way `HashMap::new` picks `RandomState`.
    pub fn has_license(repo: &Value, license_key: &str) -> bool {
        license_key_of(repo) == Some(license_key)
    }
}

impl<F: JsonFetcher> GithubOrgClient<F> {
    /// Create a client that fetches through `fetcher`
    pub fn with_fetcher(org_name: impl Into<String>, fetcher: F) -> Self {
        Self {
            org_name: org_name.into(),
            base_url: API_BASE_URL.to_string(),
            fetcher,
            org: Memoized::new("org"),
        }
    }

    /// Point the client at another API root (GitHub Enterprise, test servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Organization name this client was built for
    pub fn org_name(&self) -> &str {
        &self.org_name
    }

    /// URL of the organization metadata endpoint
    pub fn org_url(&self) -> String {
        if self.base_url == API_BASE_URL {
            ORG_URL.replace("{org}", &self.org_name)
        } else {
            format!("{}/orgs/{}", self.base_url, self.org_name)
        }
    }

    /// Organization metadata, fetched on first access and cached afterwards
    pub fn org(&self) -> Result<&Value> {
        self.org
            .get_or_try_compute(|| self.fetcher.get_json(&self.org_url()))
    }

    /// `repos_url` field of the organization payload
    pub fn public_repos_url(&self) -> Result<&str> {
        access_nested_str(self.org()?, &["repos_url"])
    }

    /// Raw repository list from `repos_url`.
    ///
    /// Fetched on every call; only the organization payload is cached.
    pub fn repos_payload(&self) -> Result<Vec<Value>> {
        let url = self.public_repos_url()?.to_string();
        match self.fetcher.get_json(&url)? {
            Value::Array(repos) => Ok(repos),
            _ => Err(ApiError::UnexpectedType {
                key: "repos_url".to_string(),
                expected: "array of repositories",
            }
            .into()),
        }
    }

    /// Names of the organization's public repositories, in API order.
    ///
    /// With `license`, only repositories whose `license.key` equals it are
    /// kept.
    pub fn public_repos(&self, license: Option<&str>) -> Result<Vec<String>> {
        self.license_filtered_repos(license)?
            .iter()
            .map(|repo| access_nested_str(repo, &["name"]).map(str::to_string))
            .collect()
    }

    /// Raw repository entries, fetched once, keeping those under `license`
    /// (all of them when `license` is `None`), in API order.
    pub fn license_filtered_repos(&self, license: Option<&str>) -> Result<Vec<Value>> {
        let repos = self.repos_payload()?;
        debug!("Fetched {} repositories for {}", repos.len(), self.org_name);

        let kept: Vec<Value> = repos
            .into_iter()
            .filter(|repo| matches_license(repo, license))
            .collect();

        if let Some(key) = license {
            debug!("{} repositories match license {}", kept.len(), key);
        }

        Ok(kept)
    }
}

/// License filter: every repository passes when `license` is `None`,
/// otherwise [`GithubOrgClient::has_license`] decides.
pub fn matches_license(repo: &Value, license: Option<&str>) -> bool {
    license.is_none_or(|key| GithubOrgClient::has_license(repo, key))
}

/// `license.key` of a repository payload, if present and a string
pub fn license_key_of(repo: &Value) -> Option<&str> {
    access_nested_map(repo, &["license", "key"])
        .ok()
        .and_then(Value::as_str)
}
