//! Run configuration resolved from command-line arguments
//!
//! Validation is eager: date literals are parsed and the time window is
//! checked for ordering while the configuration is built, so a bad
//! invocation fails before any blame retrieval starts.

mod window;

pub use window::{parse_date, TimeWindow};

use crate::cli::Cli;
use crate::error::{AccuseError, Result};
use std::path::{Path, PathBuf};

/// Fully resolved options for one run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Repository working directory the adapter runs in
    pub repo_dir: PathBuf,
    /// Case-folded author allow-list; empty allows all
    pub authors: Vec<String>,
    pub window: TimeWindow,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    /// Template for each accusation line
    pub format: String,
    /// Listing destination; stdout when unset
    pub output: Option<PathBuf>,
    pub keep_whitespace: bool,
    pub silence_warnings: bool,
    pub stats: bool,
    pub json: bool,
}

impl RunConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let window = TimeWindow::resolve(
            cli.since.as_deref(),
            cli.until.as_deref(),
            cli.days_ago,
            cli.weeks_ago,
            cli.minutes_ago,
        )?;

        Ok(Self {
            repo_dir: expand_path(&cli.repo)?,
            authors: cli.author.iter().map(|a| a.to_lowercase()).collect(),
            window,
            include: cli.include.clone(),
            exclude: cli.exclude.clone(),
            format: cli.format.clone(),
            output: cli.output.clone(),
            keep_whitespace: cli.keep_whitespace,
            silence_warnings: cli.silence_warnings,
            stats: cli.stats,
            json: cli.json,
        })
    }
}

/// Expand a leading `~/` to the user's home directory
fn expand_path(path: &Path) -> Result<PathBuf> {
    let path_str = path
        .to_str()
        .ok_or_else(|| AccuseError::Config("Invalid path encoding".to_string()))?;

    if let Some(stripped) = path_str.strip_prefix("~/") {
        let home = dirs::home_dir()
            .ok_or_else(|| AccuseError::Config("Cannot determine home directory".to_string()))?;
        Ok(home.join(stripped))
    } else {
        Ok(path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("accuse").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn authors_are_case_folded() {
        let config = RunConfig::from_cli(&cli(&["--author", "Alice", "--author", "BOB"])).unwrap();
        assert_eq!(config.authors, vec!["alice", "bob"]);
    }

    #[test]
    fn inverted_dates_fail_before_any_work() {
        let err = RunConfig::from_cli(&cli(&["--since", "2022-06-01", "--until", "2022-01-01"]))
            .unwrap_err();
        assert!(matches!(err, AccuseError::InvalidWindow { .. }));
    }

    #[test]
    fn bad_date_literal_is_echoed() {
        let err = RunConfig::from_cli(&cli(&["--until", "not-a-date"])).unwrap_err();
        match err {
            AccuseError::DateParse { input } => assert_eq!(input, "not-a-date"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn tilde_paths_expand_to_home() {
        let expanded = expand_path(Path::new("~/projects/demo")).unwrap();
        assert!(!expanded.starts_with("~"));
        assert!(expanded.ends_with("projects/demo"));
    }
}
