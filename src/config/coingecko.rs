/// Market data endpoint settings. Requests use reqwest's default timeout and are
/// never retried.
pub struct CoinGeckoConfig {
    pub base_url: &'static str,
    pub coin_id: &'static str,
    pub vs_currency: &'static str,
}

pub const COINGECKO: CoinGeckoConfig = CoinGeckoConfig {
    base_url: "https://api.coingecko.com/api/v3",
    coin_id: "bitcoin",
    vs_currency: "usd",
};

/// Full `market_chart` URL for a `days` query value (`1`, `30`, `365`, `ytd`, `max`).
pub fn market_chart_url(base_url: &str, days: &str) -> String {
    format!(
        "{}/coins/{}/market_chart?vs_currency={}&days={}",
        base_url.trim_end_matches('/'),
        COINGECKO.coin_id,
        COINGECKO.vs_currency,
        days
    )
}
