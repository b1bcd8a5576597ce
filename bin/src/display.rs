//! Display utilities and output formatting for the datapoint CLI.

use anyhow::{Context, Result};
use clap::ValueEnum;
use datapoint_lib::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Output format for property listings.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Csv => Self::Csv,
            Format::Json => Self::Json,
        }
    }
}

/// Write property records to `output`, or stdout when no path is given.
pub(crate) fn write_properties(
    records: &[PropertyRecord],
    output: Option<&Path>,
    format: Format,
) -> Result<()> {
    let format = OutputFormat::from(format);
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            format.write(records, &mut writer)?;
            writer.flush()?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            format.write(records, &mut writer)?;
        }
    }
    Ok(())
}

/// Print a table of market areas.
pub(crate) fn print_markets<'a>(markets: impl IntoIterator<Item = &'a MarketArea>) {
    println!("{:<8} {:<14} {:<18}", "CODE", "AREA", "EIC");
    println!("{}", "-".repeat(42));
    for market in markets {
        println!(
            "{:<8} {:<14} {:<18}",
            market.code(),
            market.area(),
            market.eic()
        );
    }
}
