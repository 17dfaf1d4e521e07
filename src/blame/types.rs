use chrono::NaiveDateTime;
use std::path::PathBuf;

/// One line of a file's current revision, credited to the commit that
/// introduced it.
///
/// Records are immutable after parsing; downstream stages only filter them
/// into new sequences or reduce them into aggregates.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributionRecord {
    /// Case-folded name of the contributor credited for the line.
    /// An empty name is valid (anonymous contributor).
    pub author: String,
    /// When the attributed commit was authored, in local civil time
    pub timestamp: NaiveDateTime,
    /// The exact line text with one leading tab stripped; interior tabs and
    /// trailing whitespace preserved verbatim
    pub content: String,
    /// File this record belongs to, carried for grouping
    pub source_file: PathBuf,
}
