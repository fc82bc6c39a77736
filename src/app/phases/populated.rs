use eframe::egui::Context;

use crate::app::{App, phases::phase_view::PhaseView, state::{AppState, PopulatedState}};

impl PhaseView for PopulatedState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_chart(ctx);
        AppState::Populated(*self)
    }
}
