use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use wattbench_core::BrowserKind;

#[derive(Debug, Parser)]
#[command(name = "wattbench")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Drives a browser through fixed-duration usage scenarios for power measurement",
    long_about = "Wattbench runs scripted browser scenarios in identical wall-clock slots, so \
                  external power meters see the same workload shape on every browser and device \
                  and their readings stay comparable."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Execute a measurement run
    Run(RunOptions),

    /// List the registered scenarios and their slot durations
    List,
}

#[derive(Debug, Args)]
pub struct RunOptions {
    /// Browser to drive (chrome, chromium, edge)
    #[arg(long)]
    pub browser: BrowserKind,

    /// Scenario names in run order, or "all" for the standard ordering
    #[arg(long, num_args = 1.., required = true, value_name = "NAME")]
    pub scenario: Vec<String>,

    /// How many times to repeat the whole scenario list
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub loops: u32,

    /// Path to the JSON credential file for login scenarios
    #[arg(long, default_value = "config.json", value_name = "FILE")]
    pub config: PathBuf,

    /// Explicit path to the browser binary
    #[arg(long, value_name = "PATH")]
    pub browser_path: Option<PathBuf>,

    /// Use a persistent named profile instead of a throwaway one
    #[arg(long)]
    pub profile: Option<String>,

    /// Do not draw the progress bar (useful in CI logs)
    #[arg(long)]
    pub no_progress: bool,
}
