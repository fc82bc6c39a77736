// src/app/state.rs

pub(crate) enum AppState {
    Loading(LoadingState),
    Populated(PopulatedState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Loading(LoadingState)
    }
}

/// Nothing accepted yet. The chart shows the empty initial series.
#[derive(Clone, Copy, Default)]
pub(crate) struct LoadingState;

#[derive(Clone, Copy, Default)]
pub(crate) struct PopulatedState;

/// Which layers the user has switched on in the toolbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PlotVisibility {
    pub price: bool,
    pub rainbow: bool,
    pub halvings: bool,
}

impl Default for PlotVisibility {
    fn default() -> Self {
        Self {
            price: true,
            rainbow: true,
            halvings: true,
        }
    }
}
