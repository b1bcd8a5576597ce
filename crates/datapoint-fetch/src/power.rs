//! Mean day-ahead electricity price over a period.

use chrono::TimeDelta;
use chrono_tz::Tz;
use datapoint_markets::MarketRegistry;
use datapoint_types::{DatapointError, DateRange, PriceSeries, Result};
use tracing::{debug, info};

use crate::{DayAheadSource, EntsoeClient, EntsoeConfig};

/// Timezone the requested dates are interpreted in.
pub const PRICE_TIMEZONE: Tz = chrono_tz::Europe::Oslo;

/// Days added on both sides of the requested window.
///
/// Sources answer for a half-open period, so the point at the window end is
/// only returned when the request reaches past it.
const REQUEST_PADDING_DAYS: i64 = 1;

/// Aggregates day-ahead prices from a [`DayAheadSource`].
#[derive(Debug, Clone)]
pub struct PowerPriceAggregator<S> {
    source: S,
}

impl<S: DayAheadSource> PowerPriceAggregator<S> {
    /// Creates an aggregator over `source`.
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns the day-ahead prices of a market between two local dates.
    ///
    /// `market` may be a market code (`NO_1`) or an area name (`oslo`). Both
    /// dates are read as Oslo local time and the window is closed at both ends.
    ///
    /// # Errors
    ///
    /// Returns [`DatapointError::UnknownMarket`] for an unrecognised market,
    /// a date error for unparsable or reversed dates, [`DatapointError::NoData`]
    /// for an empty window, or the source error.
    pub async fn hourly_prices(
        &self,
        market: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<PriceSeries> {
        let area = MarketRegistry::global()
            .resolve(market)
            .ok_or_else(|| DatapointError::UnknownMarket(market.to_string()))?;
        let range = DateRange::parse(start_date, end_date)?;
        if range.is_empty() {
            return Err(DatapointError::no_data(format!(
                "{} prices for the empty period {range}",
                area.code()
            )));
        }

        let (start, end) = range.localize(&PRICE_TIMEZONE)?;
        debug!(code = area.code(), %start, %end, "fetching day-ahead window");

        let padding = TimeDelta::days(REQUEST_PADDING_DAYS);
        let series = self
            .source
            .day_ahead_prices(area, start - padding, end + padding)
            .await?;
        Ok(series.within(start, end))
    }

    /// Returns the arithmetic mean of the day-ahead prices in the window.
    ///
    /// # Errors
    ///
    /// See [`PowerPriceAggregator::hourly_prices`]. A window without prices
    /// yields [`DatapointError::NoData`].
    pub async fn calculate_mean_price(
        &self,
        market: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<f64> {
        let series = self.hourly_prices(market, start_date, end_date).await?;
        let mean = series.mean().ok_or_else(|| {
            DatapointError::no_data(format!("{market} prices from {start_date} to {end_date}"))
        })?;
        info!(market, points = series.len(), mean, "computed mean day-ahead price");
        Ok(mean)
    }
}

/// Computes the mean day-ahead price of `market` using ENTSO-E.
///
/// # Errors
///
/// Returns [`DatapointError::Authentication`] if the key is missing or
/// rejected, otherwise see [`PowerPriceAggregator::calculate_mean_price`].
pub async fn calculate_mean_price(
    config: EntsoeConfig,
    market: &str,
    start_date: &str,
    end_date: &str,
) -> Result<f64> {
    let client = EntsoeClient::with_defaults(config)?;
    PowerPriceAggregator::new(client)
        .calculate_mean_price(market, start_date, end_date)
        .await
}
