mod phases;
mod root;
mod session;
mod state;

pub(crate) use phases::PhaseView;
pub(crate) use state::{AppState, PlotVisibility};

pub use root::App;
pub use session::{ChartSession, ChartSnapshot, ResponseOutcome, ViewPhase};
