//! Blame retrieval and parsing
//!
//! The collector drives the version-control adapter once per candidate file,
//! hands the raw porcelain text to the parser, and accumulates per-file
//! record sequences. Failures are isolated per file: a bad file is logged
//! and skipped, never aborting the run.

mod adapter;
mod parser;
mod types;

pub use adapter::{BlameSource, BlameSourceError, Encoding, GitCli};
pub use parser::BlameParser;
pub use types::AttributionRecord;

use crate::error::{AccuseError, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Why one file produced no records
enum FileFailure {
    NotTracked,
    Binary,
    Undecodable,
    Malformed(AccuseError),
    Io(std::io::Error),
}

/// Orchestrates per-file blame retrieval and parsing with partial-failure
/// semantics
pub struct AttributionCollector<S: BlameSource> {
    source: S,
    parser: BlameParser,
    silence_warnings: bool,
}

impl<S: BlameSource> AttributionCollector<S> {
    pub fn new(source: S, silence_warnings: bool) -> Result<Self> {
        Ok(Self {
            source,
            parser: BlameParser::new()?,
            silence_warnings,
        })
    }

    /// Collect attribution records for every file.
    ///
    /// Results are keyed by path in a sorted map so downstream output order
    /// is stable. Files that fail retrieval, decoding, or parsing are
    /// omitted from the result.
    pub fn collect(
        &self,
        files: &[PathBuf],
        repo_dir: &Path,
    ) -> BTreeMap<PathBuf, Vec<AttributionRecord>> {
        let mut by_file = BTreeMap::new();
        for file in files {
            tracing::debug!(file = %file.display(), "checking");
            match self.collect_file(file, repo_dir) {
                Ok(records) => {
                    by_file.insert(file.clone(), records);
                }
                Err(FileFailure::NotTracked) => {
                    tracing::debug!(file = %file.display(), "not tracked, skipping");
                }
                Err(FileFailure::Binary) => {
                    tracing::debug!(file = %file.display(), "binary file, skipping");
                }
                Err(FileFailure::Undecodable) => {
                    if !self.silence_warnings {
                        tracing::warn!(
                            file = %file.display(),
                            "could not decode blame output with any encoding, skipping"
                        );
                    }
                }
                Err(FileFailure::Malformed(err)) => {
                    tracing::error!(file = %file.display(), error = %err, "skipping file");
                }
                Err(FileFailure::Io(err)) => {
                    if !self.silence_warnings {
                        tracing::warn!(file = %file.display(), error = %err, "skipping file");
                    }
                }
            }
        }
        by_file
    }

    /// Retrieve and parse one file, tagging any failure with its reason.
    ///
    /// Retrieval is attempted in UTF-8 first; a decode failure triggers a
    /// single Latin-1 retry with a warning.
    fn collect_file(
        &self,
        file: &Path,
        repo_dir: &Path,
    ) -> std::result::Result<Vec<AttributionRecord>, FileFailure> {
        let raw = match self.source.line_metadata(file, repo_dir, Encoding::Utf8) {
            Ok(raw) => raw,
            Err(BlameSourceError::Decode { .. }) => {
                if !self.silence_warnings {
                    tracing::warn!(
                        file = %file.display(),
                        "not valid UTF-8, falling back to Latin-1; you might not want \
                         to include this file in your search"
                    );
                }
                self.source
                    .line_metadata(file, repo_dir, Encoding::Latin1)
                    .map_err(|err| match err {
                        BlameSourceError::Decode { .. } => FileFailure::Undecodable,
                        BlameSourceError::NotTracked => FileFailure::NotTracked,
                        BlameSourceError::BinaryFile => FileFailure::Binary,
                        BlameSourceError::Io(err) => FileFailure::Io(err),
                    })?
            }
            Err(BlameSourceError::NotTracked) => return Err(FileFailure::NotTracked),
            Err(BlameSourceError::BinaryFile) => return Err(FileFailure::Binary),
            Err(BlameSourceError::Io(err)) => return Err(FileFailure::Io(err)),
        };

        self.parser
            .parse(&raw, file)
            .map_err(FileFailure::Malformed)
    }
}
