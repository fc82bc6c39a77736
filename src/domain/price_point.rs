use chrono::NaiveDate;

use crate::utils::date_to_string;

/// One upstream price sample. The feed carries a single price per sample, so
/// the OHLC fields all hold that price; no spread is synthesized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub timestamp_ms: i64,
    pub date: NaiveDate,
    pub price: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl PricePoint {
    pub fn new(timestamp_ms: i64, date: NaiveDate, price: f64) -> Self {
        Self {
            timestamp_ms,
            date,
            price,
            open: price,
            high: price,
            low: price,
            close: price,
        }
    }

    pub fn date_label(&self) -> String {
        date_to_string(self.date)
    }
}
