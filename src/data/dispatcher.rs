// Runs fetches off the UI thread and hands results back over a channel.

use std::sync::mpsc::{self, Receiver, Sender};

use eframe::egui::Context;

use crate::{
    data::{FetchError, SharedProvider},
    domain::{PricePoint, TimeRange},
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Identifies one fetch. Tokens increase monotonically per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub token: u64,
    pub range: TimeRange,
}

#[derive(Debug)]
pub struct FetchResponse {
    pub ticket: FetchTicket,
    pub result: Result<Vec<PricePoint>, FetchError>,
}

pub struct FetchDispatcher {
    provider: SharedProvider,
    tx: Sender<FetchResponse>,
    repaint: Option<Context>,
    #[cfg(not(target_arch = "wasm32"))]
    runtime: tokio::runtime::Runtime,
}

impl FetchDispatcher {
    /// `repaint` is poked after each response so the UI wakes up to drain the channel.
    pub fn new(
        provider: SharedProvider,
        repaint: Option<Context>,
    ) -> anyhow::Result<(Self, Receiver<FetchResponse>)> {
        let (tx, rx) = mpsc::channel();

        #[cfg(not(target_arch = "wasm32"))]
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("price-fetch")
            .enable_all()
            .build()?;

        Ok((
            Self {
                provider,
                tx,
                repaint,
                #[cfg(not(target_arch = "wasm32"))]
                runtime,
            },
            rx,
        ))
    }

    /// Starts one request. Nothing is cancelled: earlier requests keep running.
    pub fn dispatch(&self, ticket: FetchTicket) {
        #[cfg(debug_assertions)]
        if DF.log_fetch {
            log::info!(
                "Dispatching fetch #{} for range {}",
                ticket.token,
                ticket.range
            );
        }

        let provider = self.provider.clone();
        let tx = self.tx.clone();
        let repaint = self.repaint.clone();
        let task = async move {
            let result = provider.fetch_prices(ticket.range).await;
            // Receiver gone means the app is shutting down.
            let _ = tx.send(FetchResponse { ticket, result });
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        };

        #[cfg(not(target_arch = "wasm32"))]
        let _ = self.runtime.spawn(task);

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(task);
    }
}
