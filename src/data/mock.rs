// In-memory provider for tests.

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;

use crate::{
    data::{FetchError, PriceHistoryProvider},
    domain::{PricePoint, TimeRange},
    utils::epoch_ms_to_date,
};

pub(crate) struct ScriptedProvider {
    outcome: Result<Vec<f64>, FetchError>,
    calls: AtomicUsize,
    ranges: Mutex<Vec<TimeRange>>,
}

impl ScriptedProvider {
    pub(crate) fn always_ok(prices: Vec<f64>) -> Self {
        Self {
            outcome: Ok(prices),
            calls: AtomicUsize::new(0),
            ranges: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn always_err(err: FetchError) -> Self {
        Self {
            outcome: Err(err),
            calls: AtomicUsize::new(0),
            ranges: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn requested_ranges(&self) -> Vec<TimeRange> {
        self.ranges.lock().unwrap().clone()
    }
}

#[async_trait]
impl PriceHistoryProvider for ScriptedProvider {
    async fn fetch_prices(&self, range: TimeRange) -> Result<Vec<PricePoint>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.ranges.lock().unwrap().push(range);
        let prices = self.outcome.clone()?;
        Ok(prices
            .into_iter()
            .enumerate()
            .map(|(i, price)| {
                let ts = 1_700_000_000_000 + i as i64 * 86_400_000;
                PricePoint::new(ts, epoch_ms_to_date(ts).unwrap(), price)
            })
            .collect())
    }
}
