//! Status command implementation

use colored::Colorize;

use ghorg::client::API_BASE_URL;
use ghorg::config::Config;
use ghorg::error::Result;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "ghorg Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not created yet)".dimmed()
        );
    }

    let ctx = CommandContext::new(opts)?;

    match ctx.config.default_org {
        Some(ref org) => println!("{} Default organization: {}", "✓".green(), org),
        None => {
            println!("{} Default organization not set", "✗".red());
            println!("  → Run 'ghorg config set-org <ORG>' to configure");
        }
    }

    if ctx.api_base == API_BASE_URL {
        println!("API root: {}", ctx.api_base);
    } else {
        println!("API root: {} {}", ctx.api_base, "(custom)".yellow());
    }

    Ok(())
}
