//! Repository listing command

use colored::Colorize;
use log::debug;

use ghorg::error::Result;
use ghorg::models::RepoDisplay;
use ghorg::output::{Formattable, OutputFormat, json};

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;

/// Run the repos command
///
/// Table output shows each repository with its license; pretty output prints
/// the names only; JSON output is the list of names.
pub fn list(opts: &GlobalOptions, org: Option<&str>, license: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.client(org)?;

    match ctx.format {
        OutputFormat::Json => {
            let names = client.public_repos(license)?;
            println!(
                "{}",
                json::format_json_from(&names, client.public_repos_url()?)?
            );
        }
        OutputFormat::Table => {
            let rows = client
                .license_filtered_repos(license)?
                .iter()
                .map(RepoDisplay::try_from)
                .collect::<Result<Vec<_>>>()?;
            debug!("Displaying {} repositories", rows.len());
            rows.print(ctx.format)?;
        }
        OutputFormat::Pretty => {
            let names = client.public_repos(license)?;
            let heading = match license {
                Some(key) => format!("{} repositories licensed {}", client.org_name(), key),
                None => format!("{} repositories", client.org_name()),
            };
            println!("{} ({})", heading.bold(), names.len());
            for name in names {
                println!("  {}", name);
            }
        }
    }

    Ok(())
}
