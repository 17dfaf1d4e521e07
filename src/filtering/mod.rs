//! Predicate filtering over attribution records
//!
//! Three independent predicates narrow the record set for display: an
//! author allow-list, a whitespace check, and the time window. All three
//! must pass for a record to be retained, and they commute, so evaluation
//! order never changes the result.

use crate::blame::AttributionRecord;
use crate::config::TimeWindow;

/// Composes the author, whitespace, and time-window predicates
pub struct FilterPipeline {
    /// Case-folded allow-list; empty allows all
    authors: Vec<String>,
    keep_whitespace: bool,
    window: TimeWindow,
}

impl FilterPipeline {
    pub fn new(authors: Vec<String>, keep_whitespace: bool, window: TimeWindow) -> Self {
        Self {
            authors,
            keep_whitespace,
            window,
        }
    }

    /// Whether a single record passes every predicate
    pub fn matches(&self, record: &AttributionRecord) -> bool {
        self.author_allowed(&record.author)
            && (self.keep_whitespace || !is_blank(&record.content))
            && self.window.contains(record.timestamp)
    }

    /// Narrow a record sequence to the records passing every predicate,
    /// preserving order
    pub fn apply<'a>(
        &self,
        records: impl IntoIterator<Item = &'a AttributionRecord>,
    ) -> Vec<AttributionRecord> {
        records
            .into_iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }

    fn author_allowed(&self, author: &str) -> bool {
        self.authors.is_empty() || self.authors.iter().any(|allowed| allowed == author)
    }
}

/// A line is blank when trimming spaces and tabs leaves nothing
pub fn is_blank(content: &str) -> bool {
    content
        .trim_matches(|c: char| c == ' ' || c == '\t')
        .is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use std::path::PathBuf;

    fn record(author: &str, timestamp: &str, content: &str) -> AttributionRecord {
        AttributionRecord {
            author: author.to_string(),
            timestamp: timestamp.parse::<NaiveDateTime>().unwrap(),
            content: content.to_string(),
            source_file: PathBuf::from("demo.txt"),
        }
    }

    fn window(start: &str, end: &str) -> TimeWindow {
        TimeWindow {
            start: start.parse().unwrap(),
            end: end.parse().unwrap(),
        }
    }

    fn sample() -> Vec<AttributionRecord> {
        vec![
            record("alice", "2022-01-01T10:00:00", "fn main() {"),
            record("alice", "2022-01-01T10:00:00", "    \t"),
            record("bob", "2022-06-01T09:00:00", "}"),
            record("carol", "2023-03-01T08:00:00", "// late addition"),
        ]
    }

    fn all_of_2022() -> TimeWindow {
        window("2022-01-01T00:00:00", "2022-12-31T23:59:59")
    }

    #[test]
    fn empty_allow_list_is_identity_on_authors() {
        let records = sample();
        let keep_all = FilterPipeline::new(vec![], true, all_of_2022());
        let filtered = keep_all.apply(&records);
        // Only the window predicate applies; carol's 2023 record drops
        assert_eq!(filtered.len(), 3);
        assert_eq!(filtered[0], records[0]);
        assert_eq!(filtered[1], records[1]);
        assert_eq!(filtered[2], records[2]);
    }

    #[test]
    fn allow_list_with_no_match_yields_empty_set() {
        let records = sample();
        let pipeline = FilterPipeline::new(vec!["mallory".to_string()], true, all_of_2022());
        assert!(pipeline.apply(&records).is_empty());
    }

    #[test]
    fn allow_list_membership_uses_folded_names() {
        let records = sample();
        let pipeline = FilterPipeline::new(vec!["bob".to_string()], true, all_of_2022());
        let filtered = pipeline.apply(&records);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].author, "bob");
    }

    #[test]
    fn whitespace_toggle_partitions_the_input() {
        let records = sample();
        let keeping = FilterPipeline::new(vec![], true, all_of_2022()).apply(&records);
        let dropping = FilterPipeline::new(vec![], false, all_of_2022()).apply(&records);

        // Dropping is a subset of keeping, and the difference is exactly
        // the blank records
        assert!(dropping.iter().all(|r| keeping.contains(r)));
        let excluded: Vec<_> = keeping
            .iter()
            .filter(|r| !dropping.contains(r))
            .collect();
        assert!(excluded.iter().all(|r| is_blank(&r.content)));
        assert_eq!(dropping.len() + excluded.len(), keeping.len());
    }

    #[test]
    fn window_predicate_is_inclusive_on_both_ends() {
        let records = vec![
            record("alice", "2022-01-01T00:00:00", "start edge"),
            record("alice", "2022-12-31T23:59:59", "end edge"),
            record("alice", "2021-12-31T23:59:59", "too early"),
        ];
        let pipeline = FilterPipeline::new(vec![], true, all_of_2022());
        let filtered = pipeline.apply(&records);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn blank_detection_covers_spaces_and_tabs_only() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t \t"));
        assert!(!is_blank(" x "));
        assert!(!is_blank("."));
    }
}
