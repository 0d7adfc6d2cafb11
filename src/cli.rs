use std::path::PathBuf;

use clap::Parser;

/// Syncs google sheets with admin data to squad admin files
#[derive(Parser, Debug)]
#[command(name = "squadsheets", version)]
pub struct Cli {
    /// Configuration file
    #[arg(short, long, default_value = "squadsheets.cfg")]
    pub config: PathBuf,

    /// Squad configuration directory
    #[arg(short = 'd', long = "configdir")]
    pub config_dir: PathBuf,

    /// Log file (logs go to stderr when absent)
    #[arg(short, long)]
    pub log: Option<PathBuf>,

    /// Verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Include the ASC whitelist
    #[arg(short, long)]
    pub whitelist: bool,
}
