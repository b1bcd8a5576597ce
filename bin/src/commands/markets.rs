//! Market registry commands.

use anyhow::{Context, Result};
use datapoint_lib::prelude::*;

use crate::display::print_markets;

/// List every supported market with its area and EIC code.
pub(crate) fn list_codes() -> Result<()> {
    let registry = MarketRegistry::global();
    print_markets(registry.all());
    println!("\nTotal: {} markets", registry.len());
    Ok(())
}

/// Print the market code of a city.
pub(crate) fn show_code(area: &str) -> Result<()> {
    let code = market_area_to_code(area).with_context(|| {
        format!(
            "Unknown market area: {area}. Known areas: {}",
            MarketRegistry::global().areas().join(", ")
        )
    })?;
    println!("{code}");
    Ok(())
}
