// Wire format of the CoinGecko `market_chart` endpoint and its conversion to price points.

use std::{error::Error, fmt};

use serde::Deserialize;

use crate::{domain::PricePoint, utils::epoch_ms_to_date};

/// Why a fetch produced no usable series. Never shown in the UI, only logged.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Connection, DNS, TLS or body-read failure.
    Network(String),
    /// Upstream answered with a non-2xx status.
    Status(u16),
    /// Body was not the expected `{ prices: [[ms, price], ...] }` shape.
    Malformed(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network failure: {}", msg),
            FetchError::Status(code) => write!(f, "Upstream returned HTTP {}", code),
            FetchError::Malformed(msg) => write!(f, "Malformed market_chart response: {}", msg),
        }
    }
}

impl Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            FetchError::Status(status.as_u16())
        } else if e.is_decode() {
            FetchError::Malformed(e.to_string())
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Malformed(e.to_string())
    }
}

/// Only `prices` is read; `market_caps` and `total_volumes` are ignored.
#[derive(Debug, Deserialize)]
pub struct MarketChartResponse {
    pub prices: Vec<(f64, f64)>,
}

impl TryFrom<MarketChartResponse> for Vec<PricePoint> {
    type Error = FetchError;

    // All-or-nothing: one bad pair rejects the whole response.
    fn try_from(response: MarketChartResponse) -> Result<Self, Self::Error> {
        response
            .prices
            .into_iter()
            .enumerate()
            .map(|(i, (epoch_ms, price))| {
                if !epoch_ms.is_finite() {
                    return Err(FetchError::Malformed(format!(
                        "pair {}: timestamp {} is not finite",
                        i, epoch_ms
                    )));
                }
                if !price.is_finite() || price <= 0.0 {
                    return Err(FetchError::Malformed(format!(
                        "pair {}: price {} is not a positive number",
                        i, price
                    )));
                }
                let timestamp_ms = epoch_ms as i64;
                let date = epoch_ms_to_date(timestamp_ms).ok_or_else(|| {
                    FetchError::Malformed(format!(
                        "pair {}: timestamp {} out of range",
                        i, timestamp_ms
                    ))
                })?;
                Ok(PricePoint::new(timestamp_ms, date, price))
            })
            .collect()
    }
}

pub fn parse_market_chart(body: &str) -> Result<Vec<PricePoint>, FetchError> {
    let response: MarketChartResponse = serde_json::from_str(body)?;
    response.try_into()
}
