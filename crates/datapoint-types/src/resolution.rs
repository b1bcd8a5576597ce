//! Sampling resolution of a day-ahead price series.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sampling resolution, as published in ISO 8601 duration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Resolution {
    /// 15-minute market time unit.
    #[serde(rename = "PT15M")]
    Minute15,
    /// 30-minute market time unit.
    #[serde(rename = "PT30M")]
    Minute30,
    /// Hourly market time unit.
    #[default]
    #[serde(rename = "PT60M")]
    Hour1,
    /// Daily market time unit.
    #[serde(rename = "P1D")]
    Day1,
}

impl Resolution {
    /// Returns the step length in minutes.
    #[must_use]
    pub const fn minutes(&self) -> i64 {
        match self {
            Self::Minute15 => 15,
            Self::Minute30 => 30,
            Self::Hour1 => 60,
            Self::Day1 => 1440,
        }
    }

    /// Returns the step length as a duration.
    #[must_use]
    pub fn step(&self) -> TimeDelta {
        TimeDelta::minutes(self.minutes())
    }

    /// Returns the ISO 8601 representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minute15 => "PT15M",
            Self::Minute30 => "PT30M",
            Self::Hour1 => "PT60M",
            Self::Day1 => "P1D",
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Resolution {
    type Err = ResolutionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PT15M" => Ok(Self::Minute15),
            "PT30M" => Ok(Self::Minute30),
            "PT60M" | "PT1H" => Ok(Self::Hour1),
            "P1D" => Ok(Self::Day1),
            _ => Err(ResolutionParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid resolution string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionParseError(String);

impl std::fmt::Display for ResolutionParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown resolution: {}. Valid options: PT15M, PT30M, PT60M, P1D", self.0)
    }
}

impl std::error::Error for ResolutionParseError {}
