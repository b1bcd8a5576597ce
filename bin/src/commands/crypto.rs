//! Crypto peak command implementation.

use anyhow::{Context, Result};
use datapoint_lib::{ClientConfig, CoinGeckoClient, CoinGeckoConfig, CryptoPeakFetcher};

/// Print yesterday's peak USD price of `coin`.
pub(crate) async fn crypto_peak(coin: &str, api_key: Option<String>) -> Result<()> {
    let mut config = CoinGeckoConfig::default();
    if let Some(key) = api_key {
        config = config.with_api_key(key);
    }
    let client = CoinGeckoClient::new(config, ClientConfig::default())?;

    let peak = CryptoPeakFetcher::new(client)
        .peak_price(coin)
        .await
        .with_context(|| format!("Failed to get yesterday's peak price of {coin}"))?;

    println!("{peak}");
    Ok(())
}
