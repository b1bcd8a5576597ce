//! Core types for the datapoint utilities.
//!
//! This crate provides the fundamental data structures used throughout datapoint:
//!
//! - [`PricePoint`] - A single timestamped price
//! - [`PriceSeries`] - An ordered series of price points
//! - [`DateRange`] - Date range for data retrieval
//! - [`MarketArea`] - Electricity bidding zone with its market and EIC codes
//! - [`Resolution`] - Sampling resolution of a day-ahead series
//! - [`PropertyRecord`] - A property listing row
//! - [`OsFamily`] - Normalized host operating system family

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/datapoint/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod date_range;
mod error;
mod market;
mod os;
mod price;
mod property;
mod resolution;

pub use date_range::{DateRange, parse_date_time};
pub use error::{DatapointError, DateRangeError, Result};
pub use market::MarketArea;
pub use os::OsFamily;
pub use price::{PricePoint, PriceSeries};
pub use property::PropertyRecord;
pub use resolution::{Resolution, ResolutionParseError};
