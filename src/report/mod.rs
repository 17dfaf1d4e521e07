//! Accusation rendering and statistics output
//!
//! The listing goes to the primary report stream (stdout or the `--output`
//! file); statistics and diagnostics go to stderr so the two never mix.

use crate::blame::AttributionRecord;
use crate::error::{AccuseError, Result};
use crate::stats::AuthorStats;
use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use std::io::Write;

/// Default template for one accusation line
pub const DEFAULT_FORMAT: &str = "{name:12} ({author} on {date} at {time}): {content}";

/// Render one record through a format template.
///
/// Supported placeholders: `{name}` (file basename, with an optional
/// `{name:N}` pad-to-width form), `{path}`, `{author}`, `{date}`
/// (mm/dd/yyyy), `{time}` (HH:MM), and `{content}`. Unknown placeholders
/// pass through untouched.
pub fn render_record(template: &str, record: &AttributionRecord) -> String {
    let name = record
        .source_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut out = String::with_capacity(template.len() + record.content.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '}' && chars.peek() == Some(&'}') {
            chars.next();
            out.push('}');
            continue;
        }
        if c != '{' {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&'{') {
            chars.next();
            out.push('{');
            continue;
        }

        let mut field = String::new();
        for c in chars.by_ref() {
            if c == '}' {
                break;
            }
            field.push(c);
        }

        let (key, width) = match field.split_once(':') {
            Some((key, width)) => (key, width.parse::<usize>().ok()),
            None => (field.as_str(), None),
        };

        let value = match key {
            "name" => name.clone(),
            "path" => record.source_file.display().to_string(),
            "author" => record.author.clone(),
            "date" => record.timestamp.format("%m/%d/%Y").to_string(),
            "time" => record.timestamp.format("%H:%M").to_string(),
            "content" => record.content.clone(),
            _ => format!("{{{field}}}"),
        };

        match width {
            Some(width) => {
                out.push_str(&value);
                for _ in value.chars().count()..width {
                    out.push(' ');
                }
            }
            None => out.push_str(&value),
        }
    }

    out
}

/// Write the filtered accusation listing to the report stream
pub fn write_accusations(
    out: &mut dyn Write,
    records: &[AttributionRecord],
    template: &str,
) -> Result<()> {
    for record in records {
        writeln!(out, "{}", render_record(template, record)).map_err(|e| AccuseError::Io {
            source: e,
            context: "Failed to write accusation listing".to_string(),
        })?;
    }
    Ok(())
}

/// Print the per-author statistics to the diagnostic stream
pub fn print_stats(stats: &BTreeMap<String, AuthorStats>, window_start: NaiveDateTime) {
    let since = window_start.format("%m/%d/%Y");
    for (author, s) in stats {
        eprintln!("{author}:");
        eprintln!("    {} characters", s.chars);
        eprintln!("    {} lines", s.lines);
        eprintln!("    {} non-whitespace lines", s.non_blank_lines);
        eprintln!("    {} two-or-more-char lines", s.substantial_lines);
        eprintln!("    {} non-whitespace characters", s.non_blank_chars);
        eprintln!(
            "    Composes {:2.0}% of changes since {since}",
            s.percent_share
        );
    }
}

/// Serialize the per-author statistics map as pretty JSON
pub fn stats_json(stats: &BTreeMap<String, AuthorStats>) -> Result<String> {
    serde_json::to_string_pretty(stats).map_err(|e| AccuseError::Json {
        source: e,
        context: "Failed to serialize statistics".to_string(),
    })
}
