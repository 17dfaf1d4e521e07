//! Candidate file discovery
//!
//! Walks the repository directory, keeps regular files matching the include
//! globs, and subtracts the exclude globs. Hidden files and directories are
//! skipped so `.git` internals never reach the blame adapter. Patterns match
//! against repository-relative paths; the returned list holds absolute
//! paths, sorted and free of duplicates.

use crate::error::{AccuseError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Expand include/exclude patterns into a sorted candidate file list
pub fn find_files(repo_dir: &Path, include: &[String], exclude: &[String]) -> Result<Vec<PathBuf>> {
    let include_set = build_globset(include)?;
    let exclude_set = build_globset(exclude)?;

    let mut files = Vec::new();
    let walker = WalkDir::new(repo_dir)
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry));

    for entry in walker.filter_map(|entry| entry.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(repo_dir)
            .unwrap_or_else(|_| entry.path());
        if include_set.is_match(relative) && !exclude_set.is_match(relative) {
            files.push(entry.path().to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with('.'))
            .unwrap_or(false)
}

/// Compile patterns into a matcher; a directory pattern also matches
/// everything beneath it
fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(compile(pattern)?);
        let nested = format!("{}/**/*", pattern.trim_end_matches('/'));
        builder.add(compile(&nested)?);
    }
    builder.build().map_err(|e| AccuseError::Pattern {
        pattern: patterns.join(", "),
        message: e.to_string(),
    })
}

fn compile(pattern: &str) -> Result<Glob> {
    Glob::new(pattern).map_err(|e| AccuseError::Pattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}
