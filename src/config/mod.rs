//! Configuration module for the rainbow chart.

mod coingecko;
mod debug;
mod rainbow;
mod types;

mod plot;

pub use coingecko::{COINGECKO, CoinGeckoConfig, market_chart_url};
pub use debug::DF;
pub use plot::PLOT_CONFIG;
pub use rainbow::{BAND_COUNT, HALVING_DATES, RAINBOW, RainbowConfig};
pub use types::{HalvingStyle, StaleResponsePolicy};
