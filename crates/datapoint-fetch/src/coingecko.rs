//! CoinGecko market chart source.

use async_trait::async_trait;
use datapoint_types::{DatapointError, PricePoint, PriceSeries, Result};
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::url::{COINGECKO_BASE_URL, market_chart_query, market_chart_url};
use crate::{ApiClient, ClientConfig, PriceHistorySource};

/// Header carrying a CoinGecko demo API key.
const DEMO_API_KEY_HEADER: &str = "x-cg-demo-api-key";

/// Configuration for the CoinGecko source.
#[derive(Debug, Clone)]
pub struct CoinGeckoConfig {
    /// API base URL.
    pub base_url: String,
    /// Optional demo API key.
    pub api_key: Option<String>,
    /// Quote currency.
    pub vs_currency: String,
}

impl Default for CoinGeckoConfig {
    fn default() -> Self {
        Self {
            base_url: COINGECKO_BASE_URL.to_string(),
            api_key: None,
            vs_currency: "usd".to_string(),
        }
    }
}

impl CoinGeckoConfig {
    /// Sets the demo API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Market chart response body.
///
/// Every series holds `[timestamp_ms, value]` pairs.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketChart {
    /// Price history.
    pub prices: Vec<(i64, Option<f64>)>,
    /// Market capitalisation history.
    #[serde(default)]
    pub market_caps: Vec<(i64, Option<f64>)>,
    /// Traded volume history.
    #[serde(default)]
    pub total_volumes: Vec<(i64, Option<f64>)>,
}

impl MarketChart {
    /// Converts the `prices` array into a series.
    ///
    /// Pairs with a null or non-finite price, or an out-of-range timestamp,
    /// are skipped.
    #[must_use]
    pub fn price_series(&self) -> PriceSeries {
        let total = self.prices.len();
        let series: PriceSeries = self
            .prices
            .iter()
            .filter_map(|&(ts, price)| {
                price
                    .filter(|p| p.is_finite())
                    .and_then(|p| PricePoint::from_millis(ts, p))
            })
            .collect();

        if series.len() < total {
            warn!(
                skipped = total - series.len(),
                "dropped null, invalid or duplicate price pairs from market chart"
            );
        }
        series
    }
}

/// CoinGecko HTTP client.
#[derive(Debug, Clone)]
pub struct CoinGeckoClient {
    api: ApiClient,
    config: CoinGeckoConfig,
}

impl CoinGeckoClient {
    /// Creates a new CoinGecko client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: CoinGeckoConfig, client_config: ClientConfig) -> Result<Self> {
        let api = ApiClient::new(client_config).map_err(|e| DatapointError::Http(e.to_string()))?;
        Ok(Self { api, config })
    }

    /// Creates a client for the public API with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self> {
        Self::new(CoinGeckoConfig::default(), ClientConfig::default())
    }

    /// Returns the source configuration.
    #[must_use]
    pub const fn config(&self) -> &CoinGeckoConfig {
        &self.config
    }

    /// Fetches the raw market chart for `coin_id` over `days` days.
    ///
    /// # Errors
    ///
    /// Returns an error if the coin id is empty, the request fails, or the
    /// body is not a market chart.
    pub async fn market_chart(&self, coin_id: &str, days: u32) -> Result<MarketChart> {
        let coin_id = coin_id.trim();
        if coin_id.is_empty() || coin_id.contains(['/', '?', '#']) {
            return Err(DatapointError::InvalidInput(format!(
                "invalid cryptocurrency id: {coin_id:?}"
            )));
        }

        let url = market_chart_url(&self.config.base_url, coin_id);
        let query = market_chart_query(&self.config.vs_currency, days);
        debug!(%url, days, "requesting market chart");

        let chart: MarketChart = self.api.get_json(&url, &query, self.headers()?).await?;
        Ok(chart)
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        if let Some(key) = &self.config.api_key {
            let value = HeaderValue::from_str(key).map_err(|_| {
                DatapointError::Authentication("API key contains invalid characters".to_string())
            })?;
            headers.insert(DEMO_API_KEY_HEADER, value);
        }
        Ok(headers)
    }
}

#[async_trait]
impl PriceHistorySource for CoinGeckoClient {
    async fn price_history(&self, coin_id: &str, days: u32) -> Result<PriceSeries> {
        let chart = self.market_chart(coin_id, days).await?;
        Ok(chart.price_series())
    }
}
