//! Electricity market area definitions.

use serde::{Deserialize, Serialize};

/// A day-ahead electricity bidding zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketArea {
    /// Lowercase city name identifying the area (e.g., "oslo").
    area: String,
    /// Market code (e.g., "NO_1").
    code: String,
    /// ENTSO-E Energy Identification Code of the bidding zone.
    eic: String,
}

impl MarketArea {
    /// Creates a new market area.
    #[must_use]
    pub fn new(area: impl Into<String>, code: impl Into<String>, eic: impl Into<String>) -> Self {
        Self {
            area: area.into(),
            code: code.into(),
            eic: eic.into(),
        }
    }

    /// Returns the lowercase city name.
    #[must_use]
    pub fn area(&self) -> &str {
        &self.area
    }

    /// Returns the market code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the ENTSO-E EIC domain code.
    #[must_use]
    pub fn eic(&self) -> &str {
        &self.eic
    }
}

impl std::fmt::Display for MarketArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code, self.area)
    }
}
