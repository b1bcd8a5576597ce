//! ENTSO-E Transparency Platform day-ahead price source.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use datapoint_types::{DatapointError, MarketArea, PriceSeries, Result};
use reqwest::header::HeaderMap;
use tracing::debug;

use crate::client::excerpt;
use crate::document::{DocumentError, parse_day_ahead_document};
use crate::url::{ENTSOE_BASE_URL, day_ahead_query};
use crate::{ApiClient, ApiError, ApiResponse, ClientConfig, DayAheadSource};

/// Configuration for the ENTSO-E source.
#[derive(Clone)]
pub struct EntsoeConfig {
    /// API endpoint.
    pub base_url: String,
    /// Security token issued by the Transparency Platform.
    pub api_key: String,
}

impl EntsoeConfig {
    /// Creates a configuration for the public endpoint.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: ENTSOE_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Sets the API endpoint.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl std::fmt::Debug for EntsoeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntsoeConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// ENTSO-E HTTP client.
#[derive(Debug, Clone)]
pub struct EntsoeClient {
    api: ApiClient,
    config: EntsoeConfig,
}

impl EntsoeClient {
    /// Creates a new ENTSO-E client.
    ///
    /// # Errors
    ///
    /// Returns [`DatapointError::Authentication`] if the API key is blank, or
    /// an HTTP error if the client cannot be created.
    pub fn new(config: EntsoeConfig, client_config: ClientConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(DatapointError::Authentication(
                "ENTSO-E API key is missing".to_string(),
            ));
        }
        let api = ApiClient::new(client_config).map_err(|e| DatapointError::Http(e.to_string()))?;
        Ok(Self { api, config })
    }

    /// Creates a client with default HTTP settings.
    ///
    /// # Errors
    ///
    /// See [`EntsoeClient::new`].
    pub fn with_defaults(config: EntsoeConfig) -> Result<Self> {
        Self::new(config, ClientConfig::default())
    }

    /// Returns the source configuration.
    #[must_use]
    pub const fn config(&self) -> &EntsoeConfig {
        &self.config
    }
}

#[async_trait]
impl DayAheadSource for EntsoeClient {
    async fn day_ahead_prices(
        &self,
        area: &MarketArea,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<PriceSeries> {
        let mut query = day_ahead_query(area.eic(), start, end);
        debug!(
            code = area.code(),
            url = %self.config.base_url,
            ?query,
            "requesting day-ahead prices"
        );
        query.push(("securityToken", self.config.api_key.trim().to_string()));

        let response = self
            .api
            .get_text(&self.config.base_url, &query, HeaderMap::new())
            .await?;
        interpret_response(&response, area)
    }
}

/// Turns a raw ENTSO-E response into a series or a classified error.
///
/// Error replies carry an acknowledgement document whatever their status, so
/// the body is read before the status is judged.
fn interpret_response(response: &ApiResponse, area: &MarketArea) -> Result<PriceSeries> {
    if matches!(response.status, 401 | 403) {
        return Err(ApiError::from_status(response.status, &response.body).into());
    }

    match parse_day_ahead_document(&response.body) {
        Ok(series) if response.is_success() => {
            debug!(code = area.code(), points = series.len(), "parsed day-ahead prices");
            Ok(series)
        }
        Ok(_) => Err(ApiError::from_status(response.status, &response.body).into()),
        Err(e) if e.is_no_matching_data() => Err(DatapointError::no_data(format!(
            "{} day-ahead prices",
            area.code()
        ))),
        Err(DocumentError::Acknowledgement { code, text }) => Err(DatapointError::Status {
            status: response.status,
            message: format!("{code}: {text}"),
        }),
        Err(_) if !response.is_success() => {
            Err(ApiError::from_status(response.status, &response.body).into())
        }
        Err(e) => Err(DatapointError::Parse(format!(
            "{e} (body: {})",
            excerpt(&response.body)
        ))),
    }
}
