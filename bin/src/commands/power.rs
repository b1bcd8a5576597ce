//! Power mean command implementation.

use anyhow::{Context, Result};
use datapoint_lib::prelude::*;

/// Print the mean day-ahead price of `market` between two Oslo dates.
pub(crate) async fn power_mean(
    market: &str,
    start: &str,
    end: &str,
    api_key: Option<String>,
) -> Result<()> {
    let api_key = api_key
        .context("No ENTSO-E API key: pass --api-key or set ENTSOE_API_KEY")?;

    let mean = calculate_mean_price(EntsoeConfig::new(api_key), market, start, end)
        .await
        .with_context(|| format!("Failed to get mean price of {market} from {start} to {end}"))?;

    println!("{mean}");
    Ok(())
}
