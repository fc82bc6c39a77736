use {
    eframe::{
        Frame,
        egui::{Context, Key, Visuals},
    },
    std::{mem, sync::mpsc::Receiver},
};

use crate::{
    Cli,
    app::{AppState, ChartSession, PhaseView, PlotVisibility},
    config::{HalvingStyle, StaleResponsePolicy},
    data::{CoinGeckoProvider, FetchDispatcher, FetchResponse, SharedProvider},
    domain::TimeRange,
    ui::{PlotView, UI_CONFIG},
};

#[cfg(debug_assertions)]
use crate::config::DF;

#[cfg(not(target_arch = "wasm32"))]
use std::sync::Arc;

#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

pub struct App {
    pub(crate) session: ChartSession,
    pub(crate) plot_view: PlotView,
    pub(crate) plot_visibility: PlotVisibility,
    pub(crate) halving_style: HalvingStyle,
    dispatcher: FetchDispatcher,
    response_rx: Receiver<FetchResponse>,
    state: AppState,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> anyhow::Result<Self> {
        let policy = if args.last_resolved_wins {
            StaleResponsePolicy::LastResolvedWins
        } else {
            StaleResponsePolicy::DiscardStale
        };

        #[cfg(not(target_arch = "wasm32"))]
        let provider: SharedProvider = Arc::new(CoinGeckoProvider::new(args.api_base.clone()));
        #[cfg(target_arch = "wasm32")]
        let provider: SharedProvider = Rc::new(CoinGeckoProvider::new(args.api_base.clone()));

        let (dispatcher, response_rx) =
            FetchDispatcher::new(provider, Some(cc.egui_ctx.clone()))?;

        log::info!(
            "Starting chart: range {}, halvings as {}, stale policy {}",
            args.range,
            args.halving_style,
            policy
        );

        let mut app = Self {
            session: ChartSession::new(args.range, policy),
            plot_view: PlotView::default(),
            plot_visibility: PlotVisibility::default(),
            halving_style: args.halving_style,
            dispatcher,
            response_rx,
            state: AppState::default(),
        };

        // Initial load goes through the same path as a click.
        app.select_range(args.range);
        Ok(app)
    }

    /// Range selector entry point: always starts a new fetch, even for the active range.
    pub(crate) fn select_range(&mut self, range: TimeRange) {
        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!("Range selected: {}", range);
        }
        let ticket = self.session.select_range(range);
        self.dispatcher.dispatch(ticket);
    }

    fn drain_responses(&mut self) {
        while let Ok(response) = self.response_rx.try_recv() {
            self.session.apply_response(response);
        }
    }

    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let picked = ctx.input(|i| {
            [
                (Key::Num1, TimeRange::OneDay),
                (Key::Num2, TimeRange::OneMonth),
                (Key::Num3, TimeRange::OneYear),
                (Key::Num4, TimeRange::YearToDate),
                (Key::Num5, TimeRange::All),
            ]
            .into_iter()
            .find(|(key, _)| i.key_pressed(*key))
            .map(|(_, range)| range)
        });

        if let Some(range) = picked {
            self.select_range(range);
        }
    }

    /// Per-frame work shared by both phases.
    pub(crate) fn tick_chart(&mut self, ctx: &Context) {
        self.drain_responses();
        self.handle_global_shortcuts(ctx);
        self.render_top_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
        if self.session.is_fetching() {
            // Keep the spinner moving until the response lands.
            ctx.request_repaint();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Loading(mut s) => s.tick(self, ctx),
            AppState::Populated(mut s) => s.tick(self, ctx),
        };
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
