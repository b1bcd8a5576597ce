//! datapoint CLI - crypto peaks, Nordic power prices, host OS and property listings.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use datapoint_lib::DEFAULT_CRYPTOCURRENCY;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "datapoint")]
#[command(about = "Small market, host and dataset data points", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Yesterday's peak USD price of a cryptocurrency
    CryptoPeak {
        /// CoinGecko coin id (e.g., ethereum, bitcoin)
        #[arg(default_value = DEFAULT_CRYPTOCURRENCY)]
        coin: String,

        /// CoinGecko demo API key
        #[arg(long, env = "COINGECKO_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },

    /// List the supported power market codes
    MarketCodes,

    /// Show the market code of a city
    MarketCode {
        /// City name (e.g., oslo, bergen)
        area: String,
    },

    /// Mean day-ahead power price over a period
    PowerMean {
        /// Market code (e.g., NO_1) or city name
        market: String,

        /// Start date in Oslo time (YYYY-MM-DD)
        #[arg(short, long)]
        start: String,

        /// End date in Oslo time (YYYY-MM-DD)
        #[arg(short, long)]
        end: String,

        /// ENTSO-E security token
        #[arg(long, env = "ENTSOE_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },

    /// Identify the host operating system
    Os,

    /// Load and clean a property listing CSV
    Properties {
        /// CSV export to read
        file: PathBuf,

        /// Keep only listings in this location
        #[arg(short, long)]
        location: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,

        /// Output file path. Defaults to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides the flags.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Loaded before parsing so `.env` values feed the `env` bound flags.
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded environment file");
    }

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::CryptoPeak { coin, api_key } => {
            commands::crypto::crypto_peak(&coin, api_key).await
        }
        Commands::MarketCodes => commands::markets::list_codes(),
        Commands::MarketCode { area } => commands::markets::show_code(&area),
        Commands::PowerMean {
            market,
            start,
            end,
            api_key,
        } => commands::power::power_mean(&market, &start, &end, api_key).await,
        Commands::Os => commands::host::show_os(),
        Commands::Properties {
            file,
            location,
            format,
            output,
        } => commands::properties::properties(&file, location.as_deref(), format, output),
    }
}
