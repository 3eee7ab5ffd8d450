//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "rss-summary")]
#[command(version)]
#[command(about = "Fetch an RSS feed and print a summary of its items")]
pub struct Cli {
    /// Feed URL; prompted for interactively when omitted
    pub url: Option<String>,

    /// Load settings from a TOML file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Exit with a non-zero status when a stage fails
    #[arg(long)]
    pub strict_exit: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
