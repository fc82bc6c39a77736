#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod ui;
pub mod utils;

pub use app::{App, ChartSession, ChartSnapshot, ResponseOutcome, ViewPhase};
pub use config::{COINGECKO, HalvingStyle, StaleResponsePolicy};
pub use data::{CoinGeckoProvider, FetchError, FetchResponse, FetchTicket, parse_market_chart};
pub use domain::{PricePoint, TimeRange};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Range selected at start-up
    #[arg(long, value_enum, ignore_case = true, default_value_t = TimeRange::OneYear)]
    pub range: TimeRange,

    /// How halving dates are drawn
    #[arg(long, value_enum, default_value_t = HalvingStyle::Markers)]
    pub halving_style: HalvingStyle,

    /// Let whichever fetch resolves last replace the chart, even if a newer one was requested
    #[arg(long, default_value_t = false)]
    pub last_resolved_wins: bool,

    /// Market data API base URL
    #[arg(long, default_value = COINGECKO.base_url)]
    pub api_base: String,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            range: TimeRange::default(),
            halving_style: HalvingStyle::default(),
            last_resolved_wins: false,
            api_base: COINGECKO.base_url.to_string(),
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> anyhow::Result<App> {
    App::new(cc, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_match_the_plain_page() {
        let cli = Cli::parse_from(["rainbow-chart"]);
        assert_eq!(cli.range, TimeRange::OneYear);
        assert_eq!(cli.halving_style, HalvingStyle::Markers);
        assert!(!cli.last_resolved_wins);
        assert_eq!(cli.api_base, "https://api.coingecko.com/api/v3");
    }

    #[test]
    fn cli_accepts_range_labels() {
        let cli = Cli::parse_from([
            "rainbow-chart",
            "--range",
            "ytd",
            "--halving-style",
            "price-traces",
            "--last-resolved-wins",
        ]);
        assert_eq!(cli.range, TimeRange::YearToDate);
        assert_eq!(cli.halving_style, HalvingStyle::PriceTraces);
        assert!(cli.last_resolved_wins);
    }
}
