//! Config editing commands

use colored::Colorize;

use ghorg::config::Config;
use ghorg::error::{ConfigError, Result};

use crate::cli::args::GlobalOptions;

/// Set the default organization
pub fn set_org(opts: &GlobalOptions, org: &str) -> Result<()> {
    let org = org.trim();
    if org.is_empty() {
        return Err(ConfigError::Invalid("organization name is empty".to_string()).into());
    }

    let mut config = Config::load_at(opts.config_ref())?;
    config.default_org = Some(org.to_string());
    config.save_at(opts.config_ref())?;

    println!("{} Set default organization to: {}", "✓".green(), org.bold());
    Ok(())
}

/// Set the API root
pub fn set_api_base(opts: &GlobalOptions, url: &str) -> Result<()> {
    let url = url.trim().trim_end_matches('/');
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::Invalid(format!("API root must be an http(s) URL: {url}")).into());
    }

    let mut config = Config::load_at(opts.config_ref())?;
    config.api_base = Some(url.to_string());
    config.save_at(opts.config_ref())?;

    println!("{} Set API root to: {}", "✓".green(), url.bold());
    Ok(())
}
