//! Upstream data source abstractions.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use datapoint_types::{MarketArea, PriceSeries, Result};

/// A provider of recent price history for a cryptocurrency.
#[async_trait]
pub trait PriceHistorySource: Send + Sync {
    /// Returns the price history of `coin_id` over the last `days` days.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be retrieved or decoded.
    async fn price_history(&self, coin_id: &str, days: u32) -> Result<PriceSeries>;
}

/// A provider of day-ahead electricity prices.
#[async_trait]
pub trait DayAheadSource: Send + Sync {
    /// Returns the day-ahead prices of `area` between `start` and `end`.
    ///
    /// # Errors
    ///
    /// Returns an error if the prices cannot be retrieved or decoded.
    async fn day_ahead_prices(
        &self,
        area: &MarketArea,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<PriceSeries>;
}
