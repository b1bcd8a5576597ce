//! Upstream URL and query construction.

use chrono::{DateTime, Utc};

/// Base URL of the CoinGecko public API.
pub const COINGECKO_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Endpoint of the ENTSO-E Transparency Platform REST API.
pub const ENTSOE_BASE_URL: &str = "https://web-api.tp.entsoe.eu/api";

/// ENTSO-E document type for day-ahead prices.
pub const DAY_AHEAD_DOCUMENT_TYPE: &str = "A44";

/// Builds the market chart URL for a coin.
///
/// URL format: `{base}/coins/{coin_id}/market_chart`; the coin id is lowercased.
///
/// # Example
///
/// ```
/// use datapoint_fetch::url::{COINGECKO_BASE_URL, market_chart_url};
///
/// let url = market_chart_url(COINGECKO_BASE_URL, "Ethereum");
/// assert_eq!(url, "https://api.coingecko.com/api/v3/coins/ethereum/market_chart");
/// ```
#[must_use]
pub fn market_chart_url(base_url: &str, coin_id: &str) -> String {
    format!(
        "{}/coins/{}/market_chart",
        base_url.trim_end_matches('/'),
        coin_id.trim().to_lowercase()
    )
}

/// Query parameters for a market chart request.
#[must_use]
pub fn market_chart_query(vs_currency: &str, days: u32) -> Vec<(&'static str, String)> {
    vec![
        ("vs_currency", vs_currency.to_lowercase()),
        ("days", days.to_string()),
    ]
}

/// Formats an instant the way ENTSO-E expects period bounds (`yyyyMMddHHmm`, UTC).
#[must_use]
pub fn entsoe_period(instant: DateTime<Utc>) -> String {
    instant.format("%Y%m%d%H%M").to_string()
}

/// Query parameters for a day-ahead price request, without the security token.
///
/// Day-ahead prices are published per bidding zone, so the same EIC code is
/// used as both the in and out domain.
#[must_use]
pub fn day_ahead_query(
    eic: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Vec<(&'static str, String)> {
    vec![
        ("documentType", DAY_AHEAD_DOCUMENT_TYPE.to_string()),
        ("in_Domain", eic.to_string()),
        ("out_Domain", eic.to_string()),
        ("periodStart", entsoe_period(start)),
        ("periodEnd", entsoe_period(end)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_market_chart_url_lowercases() {
        let url = market_chart_url(COINGECKO_BASE_URL, "BitCoin");
        assert_eq!(
            url,
            "https://api.coingecko.com/api/v3/coins/bitcoin/market_chart"
        );
    }

    #[test]
    fn test_market_chart_url_trailing_slash() {
        let url = market_chart_url("http://localhost:8080/", "ethereum");
        assert_eq!(url, "http://localhost:8080/coins/ethereum/market_chart");
    }

    #[test]
    fn test_market_chart_query() {
        let query = market_chart_query("USD", 2);
        assert_eq!(
            query,
            vec![("vs_currency", "usd".to_string()), ("days", "2".to_string())]
        );
    }

    #[test]
    fn test_entsoe_period() {
        let instant = Utc.with_ymd_and_hms(2023, 12, 31, 23, 0, 0).unwrap();
        assert_eq!(entsoe_period(instant), "202312312300");
    }

    #[test]
    fn test_day_ahead_query() {
        let start = Utc.with_ymd_and_hms(2023, 12, 31, 23, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 1, 23, 0, 0).unwrap();
        let query = day_ahead_query("10YNO-1--------2", start, end);

        assert_eq!(query[0], ("documentType", "A44".to_string()));
        assert_eq!(query[1].1, "10YNO-1--------2");
        assert_eq!(query[2].1, "10YNO-1--------2");
        assert_eq!(query[3], ("periodStart", "202312312300".to_string()));
        assert_eq!(query[4], ("periodEnd", "202401012300".to_string()));
        assert!(query.iter().all(|(k, _)| *k != "securityToken"));
    }
}
