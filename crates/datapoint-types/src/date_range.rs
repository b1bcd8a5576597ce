//! Date range for data retrieval.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::{DatapointError, DateRangeError};

/// Accepted layouts for date-time input, tried in order.
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Accepted layouts for date-only input; the time is midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d"];

/// Parses a user supplied date or date-time.
///
/// Dates (`2024-01-15`, `20240115`) resolve to midnight. Date-times accept
/// minute or second precision with either `T` or a space as separator.
///
/// # Errors
///
/// Returns [`DatapointError::InvalidDate`] if no layout matches.
pub fn parse_date_time(input: &str) -> Result<NaiveDateTime, DatapointError> {
    let input = input.trim();

    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(dt);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return Ok(date.and_time(NaiveTime::MIN));
        }
    }

    Err(DatapointError::InvalidDate(input.to_string()))
}

/// A closed range of local wall-clock times for data retrieval.
///
/// The range is timezone-free until [`DateRange::localize`] pins it to a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Start (inclusive).
    pub start: NaiveDateTime,
    /// End (inclusive).
    pub end: NaiveDateTime,
}

impl DateRange {
    /// Creates a new date range, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a range from midnight of `start` to midnight of `end`.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        Self::new(start.and_time(NaiveTime::MIN), end.and_time(NaiveTime::MIN))
    }

    /// Parses both ends with [`parse_date_time`] and validates the order.
    ///
    /// # Errors
    ///
    /// Returns an error if either end is not a recognised date or start > end.
    pub fn parse(start: &str, end: &str) -> Result<Self, DatapointError> {
        let start = parse_date_time(start)?;
        let end = parse_date_time(end)?;
        Ok(Self::new(start, end)?)
    }

    /// Returns true if the range covers no time at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Pins both ends to `tz` and converts them to UTC.
    ///
    /// Ambiguous local times (DST fold) resolve to the earlier instant.
    ///
    /// # Errors
    ///
    /// Returns an error if either end falls in a DST gap.
    pub fn localize<Tz: TimeZone>(
        &self,
        tz: &Tz,
    ) -> Result<(DateTime<Utc>, DateTime<Utc>), DateRangeError> {
        let pin = |local: NaiveDateTime| {
            tz.from_local_datetime(&local)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc))
                .ok_or(DateRangeError::NonexistentLocalTime(local))
        };
        Ok((pin(self.start)?, pin(self.end)?))
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
