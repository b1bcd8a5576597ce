//! Everyday market, host and dataset data points.
//!
//! This is a facade crate that re-exports functionality from the datapoint
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use datapoint_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let peak = get_peak_price(DEFAULT_CRYPTOCURRENCY).await?;
//!     println!("Yesterday's peak: {peak:.2} USD");
//!
//!     let config = EntsoeConfig::new(std::env::var("ENTSOE_API_KEY")?);
//!     let mean = calculate_mean_price(config, "NO_1", "2024-01-01", "2024-01-02").await?;
//!     println!("Mean NO_1 price: {mean:.2} EUR/MWh");
//!
//!     println!("Running on {}", identify_os());
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/datapoint/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use datapoint_types::*;

// Re-export market registry
pub use datapoint_markets::{MarketRegistry, list_market_codes, market_area_to_code};

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use datapoint_fetch::{
    ApiError, ClientConfig, CoinGeckoClient, CoinGeckoConfig, CryptoPeakFetcher,
    DEFAULT_CRYPTOCURRENCY, DayAheadSource, DocumentError, EntsoeClient, EntsoeConfig,
    PowerPriceAggregator, PriceHistorySource, calculate_mean_price, get_peak_price,
};

// Re-export dataset loader
#[cfg(feature = "dataset")]
pub use datapoint_dataset::{DatasetError, OutputFormat, load_properties, read_properties};

// Re-export host inspection
#[cfg(feature = "host")]
pub use datapoint_host::identify_os;

/// Prelude module for convenient imports.
///
/// ```
/// use datapoint_lib::prelude::*;
/// ```
pub mod prelude {
    pub use datapoint_types::{
        DatapointError, DateRange, MarketArea, OsFamily, PricePoint, PriceSeries, PropertyRecord,
        Result,
    };

    pub use datapoint_markets::{MarketRegistry, list_market_codes, market_area_to_code};

    #[cfg(feature = "fetch")]
    pub use datapoint_fetch::{
        CoinGeckoClient, CryptoPeakFetcher, DEFAULT_CRYPTOCURRENCY, EntsoeClient, EntsoeConfig,
        PowerPriceAggregator, calculate_mean_price, get_peak_price,
    };

    #[cfg(feature = "dataset")]
    pub use datapoint_dataset::{OutputFormat, load_properties};

    #[cfg(feature = "host")]
    pub use datapoint_host::identify_os;
}
