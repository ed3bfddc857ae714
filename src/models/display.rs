//! Display model implementations for table and JSON output

use colored::Colorize;
use serde::Serialize;
use serde_json::Value;
use tabled::Tabled;

use crate::client::license_key_of;
use crate::error::{Error, Result};
use crate::nested::access_nested_str;
use crate::output::{Formattable, OutputFormat, json, table};

/// Placeholder for absent values
const NONE: &str = "--";

fn str_field(payload: &Value, key: &str) -> Option<String> {
    payload.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Repository display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RepoDisplay {
    /// Repository name
    #[tabled(rename = "NAME")]
    pub name: String,

    /// License key, `--` when the repository has none
    #[tabled(rename = "LICENSE")]
    pub license: String,
}

impl TryFrom<&Value> for RepoDisplay {
    type Error = Error;

    /// Fails like `public_repos` does when `name` is absent or not a string.
    fn try_from(repo: &Value) -> Result<Self> {
        Ok(Self {
            name: access_nested_str(repo, &["name"])?.to_string(),
            license: license_key_of(repo).unwrap_or(NONE).to_string(),
        })
    }
}

/// Organization summary built from the org payload.
///
/// JSON output emits the untouched payload; the other formats show the
/// handful of fields people look at.
#[derive(Debug, Clone)]
pub struct OrgSummary {
    pub login: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub repos_url: Option<String>,
    pub public_repos: Option<u64>,
    pub raw: Value,
}

impl From<&Value> for OrgSummary {
    fn from(org: &Value) -> Self {
        Self {
            login: str_field(org, "login").unwrap_or_else(|| NONE.to_string()),
            name: str_field(org, "name"),
            description: str_field(org, "description"),
            repos_url: str_field(org, "repos_url"),
            public_repos: org.get("public_repos").and_then(Value::as_u64),
            raw: org.clone(),
        }
    }
}

impl OrgSummary {
    fn fields(&self) -> Vec<(&'static str, String)> {
        let or_none = |v: &Option<String>| v.clone().unwrap_or_else(|| NONE.to_string());
        vec![
            ("login", self.login.clone()),
            ("name", or_none(&self.name)),
            ("description", or_none(&self.description)),
            ("repos_url", or_none(&self.repos_url)),
            (
                "public_repos",
                self.public_repos
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| NONE.to_string()),
            ),
        ]
    }
}

impl Formattable for OrgSummary {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json(&self.raw)?),
            OutputFormat::Table => Ok(table::format_fields(&self.fields())),
            OutputFormat::Pretty => {
                let title = self.name.as_deref().unwrap_or(&self.login);
                let mut out = format!("{} ({})\n", title.bold(), self.login.cyan());
                if let Some(ref description) = self.description {
                    out.push_str(&format!("  {}\n", description.dimmed()));
                }
                for (key, value) in self.fields().into_iter().skip(3) {
                    out.push_str(&format!("  {:<14} {}\n", format!("{key}:"), value));
                }
                Ok(out.trim_end().to_string())
            }
        }
    }
}
