mod dispatcher;
mod market_chart;
#[cfg(all(test, not(target_arch = "wasm32")))]
mod mock;
mod provider;

pub use {
    dispatcher::{FetchDispatcher, FetchResponse, FetchTicket},
    market_chart::{FetchError, MarketChartResponse, parse_market_chart},
    provider::{CoinGeckoProvider, PriceHistoryProvider, SharedProvider},
};
