//! HTTP sources and price reductions for the datapoint utilities.
//!
//! This crate talks to the upstream services and reduces their answers:
//!
//! - [`CoinGeckoClient`] - Cryptocurrency price history
//! - [`EntsoeClient`] - ENTSO-E day-ahead electricity prices
//! - [`parse_day_ahead_document`] - ENTSO-E XML document parsing
//! - [`CryptoPeakFetcher`] - Yesterday's peak price of a cryptocurrency
//! - [`PowerPriceAggregator`] - Mean day-ahead price over a period
//!
//! Both reductions work against the [`PriceHistorySource`] and
//! [`DayAheadSource`] traits, so they can be driven without the network.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/datapoint/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod coingecko;
mod crypto;
mod document;
mod entsoe;
mod power;
mod source;
pub mod url;

pub use client::{ApiClient, ApiError, ApiResponse, ClientConfig};
pub use coingecko::{CoinGeckoClient, CoinGeckoConfig, MarketChart};
pub use crypto::{
    CryptoPeakFetcher, DEFAULT_CRYPTOCURRENCY, HISTORY_DAYS, get_peak_price, peak_on_date,
    yesterday,
};
pub use document::{DocumentError, parse_day_ahead_document};
pub use entsoe::{EntsoeClient, EntsoeConfig};
pub use power::{PRICE_TIMEZONE, PowerPriceAggregator, calculate_mean_price};
pub use source::{DayAheadSource, PriceHistorySource};
