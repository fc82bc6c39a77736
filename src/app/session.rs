use std::sync::Arc;

use crate::{
    analysis::{RainbowPoint, augment},
    config::StaleResponsePolicy,
    data::{FetchResponse, FetchTicket},
    domain::{PricePoint, TimeRange},
    utils::AppInstant,
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Everything the chart draws from. A new snapshot replaces the old one on
/// every change; the series itself is shared, never edited in place.
#[derive(Debug, Clone)]
pub struct ChartSnapshot {
    /// Range highlighted in the selector.
    pub range: TimeRange,
    /// Range the series was fetched for, `None` before the first accepted fetch.
    pub series_range: Option<TimeRange>,
    pub series: Arc<[RainbowPoint]>,
}

impl ChartSnapshot {
    fn empty(range: TimeRange) -> Self {
        Self {
            range,
            series_range: None,
            series: Arc::from(Vec::new()),
        }
    }

    fn with_series(range: TimeRange, series_range: TimeRange, points: &[PricePoint]) -> Self {
        let series = crate::trace_time!("Rainbow augment", 2_000, { augment(points) });
        Self {
            range,
            series_range: Some(series_range),
            series: Arc::from(series),
        }
    }

    fn with_range(&self, range: TimeRange) -> Self {
        Self {
            range,
            ..self.clone()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = &PricePoint> {
        self.series.iter().map(|r| &r.point)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    /// No fetch accepted yet; the (empty) initial series is shown.
    Loading,
    /// At least one fetch has replaced the series.
    Populated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseOutcome {
    Applied { points: usize },
    Failed,
    Stale,
}

/// Range selection and fetch bookkeeping for one chart.
pub struct ChartSession {
    snapshot: ChartSnapshot,
    policy: StaleResponsePolicy,
    next_token: u64,
    latest_token: Option<u64>,
    in_flight: usize,
    phase: ViewPhase,
    last_update: Option<AppInstant>,
}

impl ChartSession {
    pub fn new(initial_range: TimeRange, policy: StaleResponsePolicy) -> Self {
        Self {
            snapshot: ChartSnapshot::empty(initial_range),
            policy,
            next_token: 1,
            latest_token: None,
            in_flight: 0,
            phase: ViewPhase::Loading,
            last_update: None,
        }
    }

    /// Makes `range` active and returns the ticket of the fetch to start.
    /// Re-selecting the active range still produces a fresh ticket.
    pub fn select_range(&mut self, range: TimeRange) -> FetchTicket {
        let ticket = FetchTicket {
            token: self.next_token,
            range,
        };
        self.next_token += 1;
        self.latest_token = Some(ticket.token);
        self.in_flight += 1;
        self.snapshot = self.snapshot.with_range(range);
        ticket
    }

    /// Folds one fetch result into the session. Failures are logged and
    /// leave the current series untouched.
    pub fn apply_response(&mut self, response: FetchResponse) -> ResponseOutcome {
        let FetchResponse { ticket, result } = response;
        self.in_flight = self.in_flight.saturating_sub(1);

        let points = match result {
            Ok(points) => points,
            Err(e) => {
                log::error!(
                    "Error fetching data for {} (fetch #{}): {}",
                    ticket.range,
                    ticket.token,
                    e
                );
                return ResponseOutcome::Failed;
            }
        };

        if self.is_stale(&ticket) {
            #[cfg(debug_assertions)]
            if DF.log_stale_responses {
                log::info!(
                    "Discarding stale response #{} for {} (latest is #{:?})",
                    ticket.token,
                    ticket.range,
                    self.latest_token
                );
            }
            return ResponseOutcome::Stale;
        }

        self.snapshot = ChartSnapshot::with_series(self.snapshot.range, ticket.range, &points);
        self.phase = ViewPhase::Populated;
        self.last_update = Some(AppInstant::now());

        #[cfg(debug_assertions)]
        if DF.log_fetch {
            log::info!(
                "Applied fetch #{}: {} points for {}",
                ticket.token,
                points.len(),
                ticket.range
            );
        }
        ResponseOutcome::Applied {
            points: points.len(),
        }
    }

    fn is_stale(&self, ticket: &FetchTicket) -> bool {
        match self.policy {
            StaleResponsePolicy::DiscardStale => self.latest_token != Some(ticket.token),
            StaleResponsePolicy::LastResolvedWins => false,
        }
    }

    pub fn snapshot(&self) -> &ChartSnapshot {
        &self.snapshot
    }

    pub fn range(&self) -> TimeRange {
        self.snapshot.range
    }

    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight > 0
    }

    pub fn policy(&self) -> StaleResponsePolicy {
        self.policy
    }

    pub fn last_update(&self) -> Option<AppInstant> {
        self.last_update
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::BAND_COUNT, data::FetchError, utils::epoch_ms_to_date};

    fn points(prices: &[f64]) -> Vec<PricePoint> {
        prices
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                let ts = 1_700_000_000_000 + i as i64 * 86_400_000;
                PricePoint::new(ts, epoch_ms_to_date(ts).unwrap(), p)
            })
            .collect()
    }

    fn ok(ticket: FetchTicket, prices: &[f64]) -> FetchResponse {
        FetchResponse {
            ticket,
            result: Ok(points(prices)),
        }
    }

    fn err(ticket: FetchTicket) -> FetchResponse {
        FetchResponse {
            ticket,
            result: Err(FetchError::Network("connection refused".to_string())),
        }
    }

    fn prices(session: &ChartSession) -> Vec<f64> {
        session.snapshot().points().map(|p| p.price).collect()
    }

    #[test]
    fn starts_loading_with_empty_series() {
        let session = ChartSession::new(TimeRange::default(), StaleResponsePolicy::default());
        assert_eq!(session.phase(), ViewPhase::Loading);
        assert_eq!(session.range(), TimeRange::OneYear);
        assert!(session.snapshot().is_empty());
        assert!(!session.is_fetching());
    }

    #[test]
    fn successful_fetch_populates_with_bands() {
        let mut session = ChartSession::new(TimeRange::OneYear, StaleResponsePolicy::default());
        let ticket = session.select_range(TimeRange::OneMonth);
        assert!(session.is_fetching());

        let outcome = session.apply_response(ok(ticket, &[1.0, 2.0, 3.0]));
        assert_eq!(outcome, ResponseOutcome::Applied { points: 3 });
        assert_eq!(session.phase(), ViewPhase::Populated);
        assert!(!session.is_fetching());
        assert_eq!(session.snapshot().series_range, Some(TimeRange::OneMonth));
        assert_eq!(session.snapshot().series.len(), 3);
        assert!(
            session
                .snapshot()
                .series
                .iter()
                .all(|r| r.bands.len() == BAND_COUNT)
        );
        assert!(session.last_update().is_some());
    }

    #[test]
    fn failure_keeps_previous_series() {
        let mut session = ChartSession::new(TimeRange::OneYear, StaleResponsePolicy::default());
        let first = session.select_range(TimeRange::OneYear);
        session.apply_response(ok(first, &[10.0, 11.0]));
        let before = session.snapshot().series.clone();

        let second = session.select_range(TimeRange::All);
        assert_eq!(session.apply_response(err(second)), ResponseOutcome::Failed);
        assert!(Arc::ptr_eq(&before, &session.snapshot().series));
        assert_eq!(prices(&session), vec![10.0, 11.0]);
        // Selector still shows the newly chosen range.
        assert_eq!(session.range(), TimeRange::All);
        assert_eq!(session.phase(), ViewPhase::Populated);
    }

    #[test]
    fn failure_before_first_success_stays_loading_and_empty() {
        let mut session = ChartSession::new(TimeRange::OneYear, StaleResponsePolicy::default());
        let ticket = session.select_range(TimeRange::OneYear);
        assert_eq!(session.apply_response(err(ticket)), ResponseOutcome::Failed);
        assert_eq!(session.phase(), ViewPhase::Loading);
        assert!(session.snapshot().is_empty());
        assert!(!session.is_fetching());
    }

    #[test]
    fn reselecting_same_range_issues_new_tickets() {
        let mut session = ChartSession::new(TimeRange::OneYear, StaleResponsePolicy::default());
        let a = session.select_range(TimeRange::OneMonth);
        let b = session.select_range(TimeRange::OneMonth);
        assert_ne!(a.token, b.token);
        assert_eq!(a.range, b.range);
        assert!(b.token > a.token);
    }

    #[test]
    fn stale_response_is_discarded_by_default() {
        let mut session = ChartSession::new(TimeRange::OneYear, StaleResponsePolicy::DiscardStale);
        let older = session.select_range(TimeRange::OneMonth);
        let newer = session.select_range(TimeRange::All);

        // Newer resolves first, older straggles in afterwards.
        session.apply_response(ok(newer, &[5.0]));
        assert_eq!(
            session.apply_response(ok(older, &[1.0, 1.0])),
            ResponseOutcome::Stale
        );
        assert_eq!(prices(&session), vec![5.0]);
        assert_eq!(session.snapshot().series_range, Some(TimeRange::All));
        assert!(!session.is_fetching());
    }

    #[test]
    fn last_resolved_wins_when_configured() {
        let mut session =
            ChartSession::new(TimeRange::OneYear, StaleResponsePolicy::LastResolvedWins);
        let older = session.select_range(TimeRange::OneMonth);
        let newer = session.select_range(TimeRange::All);

        session.apply_response(ok(newer, &[5.0]));
        assert_eq!(
            session.apply_response(ok(older, &[1.0, 1.0])),
            ResponseOutcome::Applied { points: 2 }
        );
        assert_eq!(prices(&session), vec![1.0, 1.0]);
        assert_eq!(session.range(), TimeRange::All);
        assert_eq!(session.snapshot().series_range, Some(TimeRange::OneMonth));
    }

    #[test]
    fn successful_fetch_replaces_rather_than_merges() {
        let mut session = ChartSession::new(TimeRange::OneYear, StaleResponsePolicy::default());
        let a = session.select_range(TimeRange::OneYear);
        session.apply_response(ok(a, &[1.0, 2.0, 3.0]));
        let b = session.select_range(TimeRange::OneDay);
        session.apply_response(ok(b, &[9.0]));
        assert_eq!(prices(&session), vec![9.0]);
    }
}
