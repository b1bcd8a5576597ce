//! ENTSO-E market document parsing.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, NaiveDateTime, Utc};
use datapoint_types::{PricePoint, PriceSeries, Resolution};
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

/// Reason text ENTSO-E returns when a query matches nothing.
const NO_MATCHING_DATA: &str = "No matching data found";

/// Root element of an error reply.
const ACKNOWLEDGEMENT_ROOT: &str = "Acknowledgement_MarketDocument";

/// Errors that can occur while reading a market document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// Body is not a well-formed market document.
    #[error("Invalid XML: {0}")]
    Xml(String),

    /// Server answered with an acknowledgement instead of data.
    #[error("Acknowledgement {code}: {text}")]
    Acknowledgement {
        /// Reason code.
        code: String,
        /// Reason text.
        text: String,
    },

    /// Interval bound could not be parsed.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Period resolution is not supported.
    #[error("Unsupported resolution: {0}")]
    UnsupportedResolution(String),
}

impl DocumentError {
    /// Returns true if the server reported that no data matched the query.
    #[must_use]
    pub fn is_no_matching_data(&self) -> bool {
        matches!(self, Self::Acknowledgement { text, .. } if text.contains(NO_MATCHING_DATA))
    }
}

#[derive(Debug, Deserialize)]
struct MarketDocument {
    #[serde(rename = "TimeSeries", default)]
    time_series: Vec<TimeSeries>,
}

#[derive(Debug, Deserialize)]
struct TimeSeries {
    #[serde(rename = "Period", default)]
    periods: Vec<Period>,
}

#[derive(Debug, Deserialize)]
struct Period {
    #[serde(rename = "timeInterval")]
    time_interval: TimeInterval,
    resolution: String,
    #[serde(rename = "Point", default)]
    points: Vec<Point>,
}

#[derive(Debug, Deserialize)]
struct TimeInterval {
    start: String,
    end: String,
}

#[derive(Debug, Deserialize)]
struct Point {
    position: u32,
    #[serde(rename = "price.amount")]
    price_amount: f64,
}

#[derive(Debug, Deserialize)]
struct AcknowledgementDocument {
    #[serde(rename = "Reason", default)]
    reasons: Vec<Reason>,
}

#[derive(Debug, Deserialize)]
struct Reason {
    code: String,
    #[serde(default)]
    text: Option<String>,
}

/// Parses a day-ahead price document into a time-ordered series.
///
/// A document may carry the same prices at several resolutions; only one is
/// kept, hourly when present, otherwise the finest one.
///
/// Each `Period` spans `timeInterval` in steps of its `resolution`. Point
/// `n` starts at `start + (n - 1) * resolution`. Positions left out of a
/// period repeat the previous price (curve type A03). Overlapping periods
/// keep the first value seen for an instant.
///
/// # Errors
///
/// Returns [`DocumentError::Acknowledgement`] if the body is an error reply,
/// or another variant if the document cannot be read.
pub fn parse_day_ahead_document(xml: &str) -> Result<PriceSeries, DocumentError> {
    if xml.contains(ACKNOWLEDGEMENT_ROOT) {
        return Err(parse_acknowledgement(xml));
    }

    let document: MarketDocument =
        quick_xml::de::from_str(xml).map_err(|e| DocumentError::Xml(e.to_string()))?;

    let mut by_resolution: HashMap<Resolution, Vec<PricePoint>> = HashMap::new();
    for series in &document.time_series {
        for period in &series.periods {
            let (resolution, points) = period_points(period)?;
            by_resolution.entry(resolution).or_default().extend(points);
        }
    }

    let Some(resolution) = preferred_resolution(by_resolution.keys().copied()) else {
        return Ok(PriceSeries::default());
    };
    if by_resolution.len() > 1 {
        warn!(
            kept = resolution.as_str(),
            resolutions = by_resolution.len(),
            "document mixes resolutions, keeping one"
        );
    }
    Ok(PriceSeries::new(
        by_resolution.remove(&resolution).unwrap_or_default(),
    ))
}

/// Hourly prices when present, otherwise the finest resolution available.
fn preferred_resolution(available: impl Iterator<Item = Resolution>) -> Option<Resolution> {
    available.min_by_key(|r| (*r != Resolution::Hour1, r.minutes()))
}

/// Extracts the first reason of an acknowledgement document.
fn parse_acknowledgement(xml: &str) -> DocumentError {
    match quick_xml::de::from_str::<AcknowledgementDocument>(xml) {
        Ok(ack) => match ack.reasons.into_iter().next() {
            Some(reason) => DocumentError::Acknowledgement {
                code: reason.code,
                text: reason.text.unwrap_or_default(),
            },
            None => DocumentError::Acknowledgement {
                code: String::new(),
                text: String::new(),
            },
        },
        Err(e) => DocumentError::Xml(e.to_string()),
    }
}

/// Expands one period into price points, forward-filling skipped positions.
fn period_points(period: &Period) -> Result<(Resolution, Vec<PricePoint>), DocumentError> {
    let start = parse_instant(&period.time_interval.start)?;
    let end = parse_instant(&period.time_interval.end)?;
    let resolution: Resolution = period
        .resolution
        .parse()
        .map_err(|_| DocumentError::UnsupportedResolution(period.resolution.clone()))?;

    let slots = u32::try_from((end - start).num_minutes() / resolution.minutes()).unwrap_or(0);
    let prices: BTreeMap<u32, f64> = period
        .points
        .iter()
        .map(|p| (p.position, p.price_amount))
        .collect();

    if let Some((&last_position, _)) = prices.last_key_value() {
        if last_position > slots {
            warn!(
                last_position,
                slots,
                interval_start = %start,
                "period has points beyond its interval, dropping them"
            );
        }
    }

    let step = resolution.step();
    let mut points = Vec::with_capacity(slots as usize);
    let mut current = None;
    for position in 1..=slots {
        if let Some(&price) = prices.get(&position) {
            current = Some(price);
        }
        if let Some(price) = current {
            let offset = i32::try_from(position - 1).unwrap_or(i32::MAX);
            points.push(PricePoint::new(start + step * offset, price));
        }
    }

    Ok((resolution, points))
}

/// Parses an ENTSO-E interval bound such as `2023-12-31T23:00Z`.
fn parse_instant(s: &str) -> Result<DateTime<Utc>, DocumentError> {
    let s = s.trim();
    ["%Y-%m-%dT%H:%MZ", "%Y-%m-%dT%H:%M:%SZ"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| DocumentError::InvalidTimestamp(s.to_string()))
}
