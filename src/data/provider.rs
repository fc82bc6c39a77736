use async_trait::async_trait;

use crate::{
    config::{COINGECKO, market_chart_url},
    data::{FetchError, MarketChartResponse},
    domain::{PricePoint, TimeRange},
};

#[cfg(not(target_arch = "wasm32"))]
use std::sync::Arc;

#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

/// Abstract interface for fetching a price history.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait PriceHistoryProvider {
    /// One request per call. No retry, no caching.
    async fn fetch_prices(&self, range: TimeRange) -> Result<Vec<PricePoint>, FetchError>;
}

#[cfg(not(target_arch = "wasm32"))]
pub type SharedProvider = Arc<dyn PriceHistoryProvider + Send + Sync>;

#[cfg(target_arch = "wasm32")]
pub type SharedProvider = Rc<dyn PriceHistoryProvider>;

pub struct CoinGeckoProvider {
    client: reqwest::Client,
    base_url: String,
}

impl CoinGeckoProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn url_for(&self, range: TimeRange) -> String {
        market_chart_url(&self.base_url, range.api_days())
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new(COINGECKO.base_url)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl PriceHistoryProvider for CoinGeckoProvider {
    async fn fetch_prices(&self, range: TimeRange) -> Result<Vec<PricePoint>, FetchError> {
        let url = self.url_for(range);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body: MarketChartResponse = response.json().await?;
        body.try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_market_chart_urls() {
        let provider = CoinGeckoProvider::default();
        assert_eq!(
            provider.url_for(TimeRange::OneMonth),
            "https://api.coingecko.com/api/v3/coins/bitcoin/market_chart?vs_currency=usd&days=30"
        );
        assert_eq!(
            provider.url_for(TimeRange::All),
            "https://api.coingecko.com/api/v3/coins/bitcoin/market_chart?vs_currency=usd&days=max"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_ignored() {
        let provider = CoinGeckoProvider::new("http://localhost:8080/api/v3/");
        assert_eq!(
            provider.url_for(TimeRange::YearToDate),
            "http://localhost:8080/api/v3/coins/bitcoin/market_chart?vs_currency=usd&days=ytd"
        );
    }

    #[test]
    fn decoded_body_converts_like_the_text_parser() {
        let body = r#"{"prices":[[1700000000000,37000.5]],"total_volumes":[]}"#;
        let decoded: MarketChartResponse = serde_json::from_str(body).unwrap();
        let points: Vec<PricePoint> = decoded.try_into().unwrap();
        assert_eq!(points, crate::data::parse_market_chart(body).unwrap());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn shared_provider_is_called_once_per_fetch() {
        use crate::data::mock::ScriptedProvider;

        let scripted = Arc::new(ScriptedProvider::always_ok(vec![1.0, 2.0]));
        let provider: SharedProvider = scripted.clone();

        let first = provider.fetch_prices(TimeRange::OneYear).await.unwrap();
        let second = provider.fetch_prices(TimeRange::OneYear).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(scripted.calls(), 2);
    }
}
