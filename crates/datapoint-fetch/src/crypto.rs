//! Yesterday's peak price of a cryptocurrency.

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use datapoint_types::{DatapointError, PriceSeries, Result};
use tracing::debug;

use crate::{CoinGeckoClient, PriceHistorySource};

/// Cryptocurrency used when none is given.
pub const DEFAULT_CRYPTOCURRENCY: &str = "Ethereum";

/// Days of history requested so that all of yesterday is covered.
pub const HISTORY_DAYS: u32 = 2;

/// Computes peak prices from a [`PriceHistorySource`].
#[derive(Debug, Clone)]
pub struct CryptoPeakFetcher<S> {
    source: S,
}

impl<S: PriceHistorySource> CryptoPeakFetcher<S> {
    /// Creates a fetcher over `source`.
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns the highest price of `symbol` during yesterday, local time.
    ///
    /// # Errors
    ///
    /// Returns [`DatapointError::NoData`] if the history holds no point from
    /// yesterday, or the source error if the history cannot be fetched.
    pub async fn peak_price(&self, symbol: &str) -> Result<f64> {
        let now = Local::now();
        self.peak_price_on(symbol, yesterday(now), &Local).await
    }

    /// Returns the highest price of `symbol` on `date` as seen in `tz`.
    ///
    /// # Errors
    ///
    /// See [`CryptoPeakFetcher::peak_price`].
    pub async fn peak_price_on<Tz: TimeZone>(
        &self,
        symbol: &str,
        date: NaiveDate,
        tz: &Tz,
    ) -> Result<f64> {
        let history = self.source.price_history(symbol, HISTORY_DAYS).await?;
        debug!(symbol, %date, points = history.len(), "filtering price history");
        peak_on_date(&history, date, tz)
            .ok_or_else(|| DatapointError::no_data(format!("{symbol} prices on {date}")))
    }
}

/// The calendar day before `now`, in `now`'s timezone.
///
/// Steps back one calendar day rather than 24 hours, so days of 23 or 25
/// hours around DST changes do not skip or repeat a date.
#[must_use]
pub fn yesterday<Tz: TimeZone>(now: DateTime<Tz>) -> NaiveDate {
    let today = now.date_naive();
    today.pred_opt().unwrap_or(today)
}

/// Highest price among the points falling on `date` in `tz`.
#[must_use]
pub fn peak_on_date<Tz: TimeZone>(series: &PriceSeries, date: NaiveDate, tz: &Tz) -> Option<f64> {
    series.on_date(date, tz).peak().map(|p| p.price)
}

/// Fetches yesterday's peak price of `symbol` from the public CoinGecko API.
///
/// # Errors
///
/// Returns an error if the request fails or yesterday has no prices.
pub async fn get_peak_price(symbol: &str) -> Result<f64> {
    let client = CoinGeckoClient::with_defaults()?;
    CryptoPeakFetcher::new(client).peak_price(symbol).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use async_trait::async_trait;
    use chrono::Utc;
    use datapoint_types::PricePoint;
    use std::sync::Mutex;

    struct FakeHistory {
        series: PriceSeries,
        requests: Mutex<Vec<(String, u32)>>,
    }

    impl FakeHistory {
        fn new(points: Vec<PricePoint>) -> Self {
            Self {
                series: PriceSeries::new(points),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PriceHistorySource for FakeHistory {
        async fn price_history(&self, coin_id: &str, days: u32) -> Result<PriceSeries> {
            self.requests
                .lock()
                .unwrap()
                .push((coin_id.to_string(), days));
            Ok(self.series.clone())
        }
    }

    fn at(day: u32, hour: u32, price: f64) -> PricePoint {
        PricePoint::new(Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap(), price)
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    #[tokio::test]
    async fn test_peak_of_yesterday() {
        let source = FakeHistory::new(vec![
            at(13, 22, 500.0),
            at(14, 1, 100.0),
            at(14, 12, 150.0),
            at(14, 23, 120.0),
            at(15, 3, 900.0),
        ]);
        let fetcher = CryptoPeakFetcher::new(source);
        let peak = fetcher.peak_price_on("ethereum", date(14), &Utc).await.unwrap();
        assert_relative_eq!(peak, 150.0);

        let requests = fetcher.source.requests.lock().unwrap();
        assert_eq!(requests.as_slice(), &[("ethereum".to_string(), HISTORY_DAYS)]);
    }

    #[tokio::test]
    async fn test_no_points_yesterday() {
        let source = FakeHistory::new(vec![at(15, 3, 900.0)]);
        let fetcher = CryptoPeakFetcher::new(source);
        let err = fetcher
            .peak_price_on("ethereum", date(14), &Utc)
            .await
            .unwrap_err();
        assert!(err.is_no_data());
    }

    #[tokio::test]
    async fn test_source_error_propagates() {
        struct Failing;

        #[async_trait]
        impl PriceHistorySource for Failing {
            async fn price_history(&self, _: &str, _: u32) -> Result<PriceSeries> {
                Err(DatapointError::Http("connection refused".to_string()))
            }
        }

        let err = CryptoPeakFetcher::new(Failing)
            .peak_price_on("ethereum", date(14), &Utc)
            .await
            .unwrap_err();
        assert!(matches!(err, DatapointError::Http(_)));
    }

    #[test]
    fn test_yesterday_crosses_month() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 0, 30, 0).unwrap();
        assert_eq!(yesterday(now), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_yesterday_after_short_dst_day() {
        // 2024-03-31 is 23 hours long in Oslo.
        let oslo = chrono_tz::Europe::Oslo;
        let now = oslo.with_ymd_and_hms(2024, 4, 1, 0, 30, 0).unwrap();
        assert_eq!(yesterday(now), NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
    }

    #[test]
    fn test_yesterday_after_long_dst_day() {
        // 2024-10-27 is 25 hours long in Oslo.
        let oslo = chrono_tz::Europe::Oslo;
        let now = oslo.with_ymd_and_hms(2024, 10, 27, 23, 30, 0).unwrap();
        assert_eq!(yesterday(now), NaiveDate::from_ymd_opt(2024, 10, 26).unwrap());
    }

    #[test]
    fn test_peak_on_date_respects_timezone() {
        // 23:30 UTC on the 13th is already the 14th in Oslo.
        let series = PriceSeries::new(vec![
            PricePoint::new(Utc.with_ymd_and_hms(2024, 3, 13, 23, 30, 0).unwrap(), 300.0),
            at(14, 10, 200.0),
        ]);
        let oslo = chrono_tz::Europe::Oslo;
        assert_eq!(peak_on_date(&series, date(14), &oslo), Some(300.0));
        assert_eq!(peak_on_date(&series, date(14), &Utc), Some(200.0));
        assert_eq!(peak_on_date(&series, date(12), &Utc), None);
    }
}
