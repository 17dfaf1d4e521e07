//! Per-author contribution statistics
//!
//! Statistics are computed over the time-window-filtered record set but
//! deliberately ignore the author allow-list, so percentage shares reflect
//! the whole contributor population even when the displayed listing is
//! narrowed to one author.

use crate::blame::AttributionRecord;
use ahash::{HashMap, HashMapExt};
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregated contribution counters for one author
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuthorStats {
    /// Total attributed lines
    pub lines: u64,
    /// Total characters across attributed lines
    pub chars: u64,
    /// Lines whose content is not only whitespace
    pub non_blank_lines: u64,
    /// Lines whose trimmed content is at least two characters
    pub substantial_lines: u64,
    /// Characters left after removing all spaces and tabs
    pub non_blank_chars: u64,
    /// chars / lines, zero when the author has no lines
    pub avg_line_len: f64,
    /// This author's non-blank characters as a percentage of everyone's
    pub percent_share: f64,
}

/// Reduce a record sequence into per-author statistics.
///
/// The accumulator map is scoped to this call; the returned map is sorted
/// by author so reporting order is deterministic.
pub fn aggregate<'a>(
    records: impl IntoIterator<Item = &'a AttributionRecord>,
) -> BTreeMap<String, AuthorStats> {
    let mut buckets: HashMap<String, AuthorStats> = HashMap::new();

    for record in records {
        let stats = buckets.entry(record.author.clone()).or_default();
        let trimmed = record
            .content
            .trim_matches(|c: char| c == ' ' || c == '\t');

        stats.lines += 1;
        stats.chars += record.content.chars().count() as u64;
        if !trimmed.is_empty() {
            stats.non_blank_lines += 1;
        }
        if trimmed.chars().count() >= 2 {
            stats.substantial_lines += 1;
        }
        stats.non_blank_chars += record
            .content
            .chars()
            .filter(|c| *c != ' ' && *c != '\t')
            .count() as u64;
    }

    let total_non_blank: u64 = buckets.values().map(|s| s.non_blank_chars).sum();

    for stats in buckets.values_mut() {
        if stats.lines > 0 {
            stats.avg_line_len = stats.chars as f64 / stats.lines as f64;
        }
        // A zero global total reports zero shares rather than dividing
        if total_non_blank > 0 {
            stats.percent_share = stats.non_blank_chars as f64 / total_non_blank as f64 * 100.0;
        }
    }

    buckets.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use std::path::PathBuf;

    fn record(author: &str, content: &str) -> AttributionRecord {
        AttributionRecord {
            author: author.to_string(),
            timestamp: "2022-01-01T00:00:00".parse::<NaiveDateTime>().unwrap(),
            content: content.to_string(),
            source_file: PathBuf::from("demo.txt"),
        }
    }

    #[test]
    fn counters_accumulate_per_author() {
        let records = vec![
            record("alice", "fn main() {"),
            record("alice", "    println!(\"hi\");"),
            record("alice", "  "),
            record("alice", "}"),
            record("bob", "\tlet x = 1;"),
        ];
        let stats = aggregate(&records);

        let alice = &stats["alice"];
        assert_eq!(alice.lines, 4);
        assert_eq!(alice.chars, 11 + 19 + 2 + 1);
        assert_eq!(alice.non_blank_lines, 3);
        // "}" trims to one character, so it is not substantial
        assert_eq!(alice.substantial_lines, 2);
        assert_eq!(alice.non_blank_chars, 9 + 15 + 0 + 1);
        assert!((alice.avg_line_len - 33.0 / 4.0).abs() < 1e-9);

        let bob = &stats["bob"];
        assert_eq!(bob.lines, 1);
        assert_eq!(bob.non_blank_chars, 7);
    }

    #[test]
    fn percent_shares_sum_to_one_hundred() {
        let records = vec![
            record("alice", "aaaa"),
            record("bob", "bb"),
            record("carol", "cccccc"),
        ];
        let stats = aggregate(&records);
        let total: f64 = stats.values().map(|s| s.percent_share).sum();
        assert!((total - 100.0).abs() < 1e-6, "sum was {total}");
    }

    #[test]
    fn zero_total_reports_zero_shares_not_nan() {
        let records = vec![record("alice", "   "), record("bob", "\t")];
        let stats = aggregate(&records);
        for s in stats.values() {
            assert_eq!(s.percent_share, 0.0);
        }
    }

    #[test]
    fn empty_record_set_yields_empty_map() {
        assert!(aggregate(std::iter::empty::<&AttributionRecord>()).is_empty());
    }

    #[test]
    fn identical_lines_stay_separate_records() {
        let records = vec![record("alice", "dup"), record("alice", "dup")];
        let stats = aggregate(&records);
        assert_eq!(stats["alice"].lines, 2);
        assert_eq!(stats["alice"].chars, 6);
    }

    #[test]
    fn output_is_sorted_by_author() {
        let records = vec![record("zed", "z"), record("amy", "a"), record("mia", "m")];
        let authors: Vec<_> = aggregate(&records).into_keys().collect();
        assert_eq!(authors, vec!["amy", "mia", "zed"]);
    }
}
