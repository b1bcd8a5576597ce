//! Electricity market area registry for datapoint.
//!
//! This crate maps the human-readable names of the Norwegian bidding zones to
//! their market codes and ENTSO-E EIC codes.
//!
//! # Example
//!
//! ```
//! use datapoint_markets::MarketRegistry;
//!
//! let registry = MarketRegistry::global();
//!
//! assert_eq!(registry.code_for_area("Oslo"), Some("NO_1"));
//! assert_eq!(registry.code_for_area("narnia"), None);
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/datapoint/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::sync::OnceLock;

use datapoint_types::MarketArea;

/// The market area table embedded at compile time.
const MARKET_AREAS_JSON: &str = include_str!("../data/market_areas.json");

/// Global registry instance.
static REGISTRY: OnceLock<MarketRegistry> = OnceLock::new();

/// Registry of the supported bidding zones, in market code order.
#[derive(Debug)]
pub struct MarketRegistry {
    areas: Vec<MarketArea>,
}

impl MarketRegistry {
    /// Returns the global market registry.
    ///
    /// The registry is initialized lazily on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        REGISTRY.get_or_init(Self::load)
    }

    /// Loads market areas from the embedded JSON data.
    fn load() -> Self {
        let areas: Vec<MarketArea> =
            serde_json::from_str(MARKET_AREAS_JSON).expect("Invalid market_areas.json");
        Self { areas }
    }

    /// Returns all market codes in order.
    #[must_use]
    pub fn codes(&self) -> Vec<&str> {
        self.areas.iter().map(MarketArea::code).collect()
    }

    /// Returns all city names in market code order.
    #[must_use]
    pub fn areas(&self) -> Vec<&str> {
        self.areas.iter().map(MarketArea::area).collect()
    }

    /// Looks up the market code for a city name (case-insensitive).
    #[must_use]
    pub fn code_for_area(&self, area: &str) -> Option<&str> {
        self.by_area(area).map(MarketArea::code)
    }

    /// Looks up a market area by city name (case-insensitive).
    #[must_use]
    pub fn by_area(&self, area: &str) -> Option<&MarketArea> {
        let area = area.to_lowercase();
        self.areas.iter().find(|a| a.area() == area)
    }

    /// Looks up a market area by market code (case-insensitive).
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&MarketArea> {
        self.areas
            .iter()
            .find(|a| a.code().eq_ignore_ascii_case(code))
    }

    /// Resolves either a market code or a city name.
    #[must_use]
    pub fn resolve(&self, code_or_area: &str) -> Option<&MarketArea> {
        self.get(code_or_area).or_else(|| self.by_area(code_or_area))
    }

    /// Returns all market areas as an iterator.
    pub fn all(&self) -> impl Iterator<Item = &MarketArea> {
        self.areas.iter()
    }

    /// Returns the number of market areas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

/// Returns every market code, `NO_1` through `NO_5`.
#[must_use]
pub fn list_market_codes() -> Vec<String> {
    MarketRegistry::global()
        .codes()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Converts a market area name into its market code.
///
/// The lookup lowercases `market_area` first; unknown names yield `None`.
#[must_use]
pub fn market_area_to_code(market_area: &str) -> Option<&'static str> {
    MarketRegistry::global().code_for_area(market_area)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_loads() {
        let registry = MarketRegistry::global();
        assert_eq!(registry.len(), 5);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_list_market_codes() {
        assert_eq!(list_market_codes(), ["NO_1", "NO_2", "NO_3", "NO_4", "NO_5"]);
    }

    #[test]
    fn test_area_to_code() {
        assert_eq!(market_area_to_code("oslo"), Some("NO_1"));
        assert_eq!(market_area_to_code("kristiansand"), Some("NO_2"));
        assert_eq!(market_area_to_code("trondheim"), Some("NO_3"));
        assert_eq!(market_area_to_code("tromsø"), Some("NO_4"));
        assert_eq!(market_area_to_code("bergen"), Some("NO_5"));
    }

    #[test]
    fn test_area_to_code_case_insensitive() {
        assert_eq!(market_area_to_code("Oslo"), Some("NO_1"));
        assert_eq!(market_area_to_code("BERGEN"), Some("NO_5"));
        assert_eq!(market_area_to_code("TROMSØ"), Some("NO_4"));
        assert_eq!(market_area_to_code("TrOnDhEiM"), Some("NO_3"));
    }

    #[test]
    fn test_area_to_code_unknown() {
        assert_eq!(market_area_to_code("narnia"), None);
        assert_eq!(market_area_to_code(""), None);
        assert_eq!(market_area_to_code("NO_1"), None);
    }

    #[test]
    fn test_get_by_code() {
        let registry = MarketRegistry::global();
        let no5 = registry.get("no_5").expect("NO_5 should exist");
        assert_eq!(no5.area(), "bergen");
        assert_eq!(no5.eic(), "10Y1001A1001A48H");
    }

    #[test]
    fn test_resolve() {
        let registry = MarketRegistry::global();
        assert_eq!(registry.resolve("NO_2").unwrap().area(), "kristiansand");
        assert_eq!(registry.resolve("Trondheim").unwrap().code(), "NO_3");
        assert!(registry.resolve("narnia").is_none());
    }

    #[test]
    fn test_areas_in_code_order() {
        let areas = MarketRegistry::global().areas();
        assert_eq!(areas, ["oslo", "kristiansand", "trondheim", "tromsø", "bergen"]);
    }
}
