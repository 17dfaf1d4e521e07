//! CLI argument definitions and parsing
use crate::report::DEFAULT_FORMAT;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "accuse",
    version,
    about = "Accuses the authors of every line of version-controlled files between two dates",
    long_about = "Accuse attributes every line of the tracked files in a repository to the \
                  commit that introduced it, filters the attributions by author, whitespace, \
                  and time window, and can aggregate per-author contribution statistics."
)]
pub struct Cli {
    /// Repository directory to search for files in
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    pub repo: PathBuf,

    /// Author to restrict the listing to; repeatable, matched case-insensitively
    #[arg(short = 'b', long = "author", value_name = "NAME")]
    pub author: Vec<String>,

    /// Start of the time window (ISO 8601 or month/day/year)
    #[arg(short = 's', long = "since", value_name = "DATE")]
    pub since: Option<String>,

    /// End of the time window (defaults to now)
    #[arg(short = 'u', long = "until", value_name = "DATE")]
    pub until: Option<String>,

    /// Shift the window start back this many days
    #[arg(short = 'd', long, value_name = "N", default_value_t = 0)]
    pub days_ago: i64,

    /// Shift the window start back this many weeks
    #[arg(short = 'w', long, value_name = "N", default_value_t = 0)]
    pub weeks_ago: i64,

    /// Shift the window start back this many minutes
    #[arg(short = 'm', long, value_name = "N", default_value_t = 0)]
    pub minutes_ago: i64,

    /// File pattern to search for; repeatable
    #[arg(short = 'i', long = "include", value_name = "GLOB", default_value = "**/*")]
    pub include: Vec<String>,

    /// File pattern to exclude; repeatable
    #[arg(short = 'x', long = "exclude", value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Format template for each accusation line
    #[arg(short = 'f', long, value_name = "TEMPLATE", default_value = DEFAULT_FORMAT)]
    pub format: String,

    /// Write the accusation listing to this file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Keep accusations whose content is only whitespace
    #[arg(long)]
    pub keep_whitespace: bool,

    /// Suppress warnings
    #[arg(long)]
    pub silence_warnings: bool,

    /// Print per-author statistics after the listing
    #[arg(long)]
    pub stats: bool,

    /// Emit the per-author statistics as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Increase logging verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
