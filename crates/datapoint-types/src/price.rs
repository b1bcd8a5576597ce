//! Price point and series representation.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A single price observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Timestamp of the observation (UTC).
    pub timestamp: DateTime<Utc>,
    /// Observed price.
    pub price: f64,
}

impl PricePoint {
    /// Creates a new price point.
    #[must_use]
    pub const fn new(timestamp: DateTime<Utc>, price: f64) -> Self {
        Self { timestamp, price }
    }

    /// Creates a price point from a millisecond Unix timestamp.
    ///
    /// Returns `None` if the timestamp is out of range.
    #[must_use]
    pub fn from_millis(timestamp_ms: i64, price: f64) -> Option<Self> {
        DateTime::from_timestamp_millis(timestamp_ms).map(|timestamp| Self::new(timestamp, price))
    }

    /// Returns the timestamp in milliseconds since the Unix epoch.
    #[must_use]
    pub fn timestamp_millis(&self) -> i64 {
        self.timestamp.timestamp_millis()
    }

    /// Returns the calendar date of this point as seen in `tz`.
    #[must_use]
    pub fn local_date<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        self.timestamp.with_timezone(tz).date_naive()
    }
}

/// Time-ordered series of price points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Creates a series, sorting points by timestamp.
    ///
    /// Points sharing a timestamp keep the first occurrence.
    #[must_use]
    pub fn new(mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.timestamp);
        points.dedup_by_key(|p| p.timestamp);
        Self { points }
    }

    /// Returns the points in time order.
    #[must_use]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Consumes the series, returning its points.
    #[must_use]
    pub fn into_points(self) -> Vec<PricePoint> {
        self.points
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the series has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the arithmetic mean of all prices, or `None` for an empty series.
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        if self.points.is_empty() {
            return None;
        }
        let sum: f64 = self.points.iter().map(|p| p.price).sum();
        Some(sum / self.points.len() as f64)
    }

    /// Returns the point with the highest price, or `None` for an empty series.
    ///
    /// When several points share the maximum, the earliest one wins.
    #[must_use]
    pub fn peak(&self) -> Option<PricePoint> {
        self.points.iter().copied().fold(None, |best, p| match best {
            Some(b) if b.price >= p.price => Some(b),
            _ => Some(p),
        })
    }

    /// Returns the points whose calendar date in `tz` equals `date`.
    #[must_use]
    pub fn on_date<Tz: TimeZone>(&self, date: NaiveDate, tz: &Tz) -> Self {
        Self {
            points: self
                .points
                .iter()
                .filter(|p| p.local_date(tz) == date)
                .copied()
                .collect(),
        }
    }

    /// Returns the points within the closed interval `[start, end]`.
    #[must_use]
    pub fn within(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            points: self
                .points
                .iter()
                .filter(|p| p.timestamp >= start && p.timestamp <= end)
                .copied()
                .collect(),
        }
    }
}

impl FromIterator<PricePoint> for PriceSeries {
    fn from_iter<I: IntoIterator<Item = PricePoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
