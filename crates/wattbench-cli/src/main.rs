use anyhow::Result;
use clap::Parser;

use wattbench_cli::cli::{Cli, Commands};
use wattbench_cli::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Run(options) => commands::run::execute(options),
        Commands::List => commands::list::execute(),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new(
            "wattbench_cli=debug,wattbench_core=debug,wattbench_browser=debug,wattbench_scenarios=debug",
        )
    } else {
        EnvFilter::new(
            "wattbench_cli=info,wattbench_core=info,wattbench_browser=info,wattbench_scenarios=info",
        )
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
