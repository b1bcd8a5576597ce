//! Host operating system identification for datapoint.
//!
//! - [`identify_os`] - Normalized OS family of the running host
//! - [`platform`] - Raw platform identifier reported by the standard library

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/datapoint/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use datapoint_types::OsFamily;
use tracing::debug;

/// Returns the raw platform identifier (e.g., `linux`, `macos`, `windows`).
#[must_use]
pub const fn platform() -> &'static str {
    std::env::consts::OS
}

/// Identifies the operating system family of the running host.
///
/// Platforms other than Windows, macOS and Linux map to [`OsFamily::Unknown`].
#[must_use]
pub fn identify_os() -> OsFamily {
    let platform = platform();
    debug!(platform, "identifying host operating system");
    OsFamily::from_platform(platform)
}
