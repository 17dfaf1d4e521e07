use accuse::blame::{AttributionCollector, AttributionRecord, GitCli};
use accuse::cli::Cli;
use accuse::config::RunConfig;
use accuse::error::{AccuseError, Result};
use accuse::filtering::FilterPipeline;
use accuse::{files, report, stats};

use std::fs::File;
use std::io::{self, Write};

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    // Fail fast: the window is resolved and validated before any retrieval
    let config = RunConfig::from_cli(&cli)?;

    run(&config)
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = match verbose {
        0 => "accuse=warn",
        1 => "accuse=info",
        _ => "accuse=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // Diagnostics stay on stderr; stdout is reserved for the report
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(config: &RunConfig) -> Result<()> {
    let files = files::find_files(&config.repo_dir, &config.include, &config.exclude)?;
    tracing::info!("searching for blame in {} candidate files", files.len());
    for (i, file) in files.iter().enumerate() {
        tracing::debug!("   {}. {}", i + 1, file.display());
    }

    let collector = AttributionCollector::new(GitCli, config.silence_warnings)?;
    let by_file = collector.collect(&files, &config.repo_dir);

    let all_records: Vec<&AttributionRecord> = by_file.values().flatten().collect();

    let pipeline = FilterPipeline::new(
        config.authors.clone(),
        config.keep_whitespace,
        config.window,
    );
    let displayed = pipeline.apply(all_records.iter().copied());

    write_listing(config, &displayed)?;

    if config.stats || config.json {
        // Statistics run over the window-filtered set only, so shares
        // cover every contributor even when the listing is author-filtered
        let in_window = all_records
            .iter()
            .copied()
            .filter(|r| config.window.contains(r.timestamp));
        let by_author = stats::aggregate(in_window);

        if config.json {
            println!("{}", report::stats_json(&by_author)?);
        } else {
            report::print_stats(&by_author, config.window.start);
        }
    }

    if displayed.is_empty() && !config.silence_warnings {
        tracing::warn!(
            "No accusations found. Your filters might have excluded all the available \
             files, or there might not be any commits within the specified date range. \
             Try --verbose for more information, or adjust --since/--until."
        );
    }

    Ok(())
}

fn write_listing(config: &RunConfig, displayed: &[AttributionRecord]) -> Result<()> {
    match &config.output {
        Some(path) => {
            let mut file = File::create(path).map_err(|e| AccuseError::Io {
                source: e,
                context: format!("Failed to create output file: {}", path.display()),
            })?;
            report::write_accusations(&mut file, displayed, &config.format)?;
            tracing::info!("accusations written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            report::write_accusations(&mut lock, displayed, &config.format)?;
            lock.flush().map_err(|e| AccuseError::Io {
                source: e,
                context: "Failed to flush stdout".to_string(),
            })?;
        }
    }
    Ok(())
}
