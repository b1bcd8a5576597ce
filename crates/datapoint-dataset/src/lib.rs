//! Property listing dataset for the datapoint utilities.
//!
//! - [`load_properties`] - Load and clean a property CSV export
//! - [`read_properties`] - The same over any reader
//! - [`OutputFormat`] - CSV or JSON output of [`PropertyRecord`]s
//!
//! [`PropertyRecord`]: datapoint_types::PropertyRecord

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/datapoint/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod loader;
mod writer;

pub use error::DatasetError;
pub use loader::{MISSING_VALUES, REQUIRED_COLUMNS, is_missing, load_properties, read_properties};
pub use writer::{OutputFormat, write_csv, write_json};
