use crate::error::{AccuseError, Result};
use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Closed interval of instants used to include or exclude attribution
/// records by timestamp
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeWindow {
    /// Resolve a window from date literals and relative shifts.
    ///
    /// The start is the explicit date (or now, when only a shift was given)
    /// minus the shift; with neither, there is no lower bound. The end
    /// defaults to now. An inverted window is a configuration error, raised
    /// here so bad input fails before any retrieval work.
    pub fn resolve(
        since: Option<&str>,
        until: Option<&str>,
        days_ago: i64,
        weeks_ago: i64,
        minutes_ago: i64,
    ) -> Result<Self> {
        let shift = shift_duration(days_ago, weeks_ago, minutes_ago)?;

        let start = if since.is_some() || !shift.is_zero() {
            let base = match since {
                Some(literal) => parse_date(literal)?,
                None => Local::now().naive_local(),
            };
            base.checked_sub_signed(shift)
                .ok_or_else(|| AccuseError::Config("date shift out of range".to_string()))?
        } else {
            NaiveDateTime::MIN
        };

        let end = match until {
            Some(literal) => parse_date(literal)?,
            None => Local::now().naive_local(),
        };

        if end < start {
            return Err(AccuseError::InvalidWindow { start, end });
        }

        Ok(Self { start, end })
    }

    /// Whether an instant falls inside the interval, inclusive on both ends
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant <= self.end
    }
}

fn shift_duration(days: i64, weeks: i64, minutes: i64) -> Result<Duration> {
    let out_of_range = |what: &str| AccuseError::Config(format!("{what} shift out of range"));

    let days = Duration::try_days(days).ok_or_else(|| out_of_range("day"))?;
    let weeks = Duration::try_weeks(weeks).ok_or_else(|| out_of_range("week"))?;
    let minutes = Duration::try_minutes(minutes).ok_or_else(|| out_of_range("minute"))?;

    days.checked_add(&weeks)
        .and_then(|d| d.checked_add(&minutes))
        .ok_or_else(|| out_of_range("combined"))
}

/// Parse a date literal: extended ISO 8601 (date or date-time) or the
/// `month/day/year` shorthand. Bare dates resolve to midnight.
pub fn parse_date(input: &str) -> Result<NaiveDateTime> {
    if let Ok(datetime) = input.parse::<NaiveDateTime>() {
        return Ok(datetime);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S") {
        return Ok(datetime);
    }
    if let Ok(date) = input.parse::<NaiveDate>() {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%m/%d/%Y") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    Err(AccuseError::DateParse {
        input: input.to_string(),
    })
}
