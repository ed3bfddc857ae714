//! ghorg CLI - inspect GitHub organizations and their repositories

use clap::Parser;

mod cli;

use cli::args::GlobalOptions;
use cli::{Cli, Commands, ConfigCommands};
use ghorg::Result;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise `--debug` selects debug, else warnings only.
fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Org { org } => cli::org::show(&opts, org.as_deref()),
        Commands::Repos { org, license } => {
            cli::repo::list(&opts, org.as_deref(), license.as_deref())
        }
        Commands::Status => cli::status::run(&opts),
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::SetOrg { org } => cli::config::set_org(&opts, &org),
            ConfigCommands::SetApiBase { url } => cli::config::set_api_base(&opts, &url),
        },
        Commands::Version => {
            println!("ghorg version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
