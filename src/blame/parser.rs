// Parser for `git blame --line-porcelain` output.
//
// Each line of the blamed file is reported as one section: a header line
// `<40-hex commit> <orig line> <final line> [<hunk len>]`, a run of
// key/value metadata lines, and exactly one content line prefixed with a
// single tab.
use crate::blame::types::AttributionRecord;
use crate::error::{AccuseError, Result};
use chrono::{Local, TimeZone};
use regex::Regex;
use std::path::Path;

/// Splits a porcelain blob into per-line sections and extracts the
/// attribution fields from each one
pub struct BlameParser {
    header: Regex,
    author: Regex,
    author_time: Regex,
}

impl BlameParser {
    /// Compile the section patterns
    pub fn new() -> Result<Self> {
        Ok(Self {
            header: Regex::new(r"(?m)^[0-9a-fA-F]{40} \d+ \d+.*\n")?,
            author: Regex::new(r"(?m)^author (.*)")?,
            author_time: Regex::new(r"(?m)^author-time (\d+)")?,
        })
    }

    /// Parse one file's raw porcelain blob into attribution records
    ///
    /// Records come out in file line order, one per section. A section
    /// missing its `author` or `author-time` field fails the whole file.
    pub fn parse(&self, raw: &str, source_file: &Path) -> Result<Vec<AttributionRecord>> {
        let mut records = Vec::new();
        for (index, section) in self.header.split(raw).enumerate() {
            // The text preceding the first header is always empty
            if index == 0 {
                continue;
            }
            records.push(self.parse_section(section, index, source_file)?);
        }
        Ok(records)
    }

    fn parse_section(
        &self,
        section: &str,
        index: usize,
        source_file: &Path,
    ) -> Result<AttributionRecord> {
        // Case is folded here and not recoverable downstream; filtering and
        // grouping both compare case-insensitively. An empty author is valid.
        let author = self
            .author
            .captures(section)
            .map(|c| c[1].to_lowercase())
            .ok_or_else(|| AccuseError::BlameParse {
                file: source_file.to_path_buf(),
                section: index,
                field: "author",
            })?;

        let epoch: i64 = self
            .author_time
            .captures(section)
            .and_then(|c| c[1].parse().ok())
            .ok_or_else(|| AccuseError::BlameParse {
                file: source_file.to_path_buf(),
                section: index,
                field: "author-time",
            })?;

        let timestamp = Local
            .timestamp_opt(epoch, 0)
            .single()
            .map(|t| t.naive_local())
            .ok_or_else(|| AccuseError::BlameParse {
                file: source_file.to_path_buf(),
                section: index,
                field: "author-time",
            })?;

        Ok(AttributionRecord {
            author,
            timestamp,
            content: section_content(section),
            source_file: source_file.to_path_buf(),
        })
    }
}

/// Extract the content line of a section, stripping exactly one leading tab.
///
/// The section text ends with the content line's newline, so the line sits
/// second to last; interior tabs and trailing whitespace stay untouched.
fn section_content(section: &str) -> String {
    let lines: Vec<&str> = section.split('\n').collect();
    let line = match lines.as_slice() {
        [.., content, ""] => *content,
        [.., content] => *content,
        [] => "",
    };
    line.strip_prefix('\t').unwrap_or(line).to_string()
}
