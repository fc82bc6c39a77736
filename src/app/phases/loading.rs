// app/phases/loading.rs

use eframe::egui::Context;

use crate::app::{
    App,
    phases::PhaseView,
    session::ViewPhase,
    state::{AppState, LoadingState, PopulatedState},
};

impl PhaseView for LoadingState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_chart(ctx);
        if app.session.phase() == ViewPhase::Populated {
            log::info!(">> First price series received. Chart populated.");
            AppState::Populated(PopulatedState)
        } else {
            AppState::Loading(*self)
        }
    }
}
