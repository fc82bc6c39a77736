pub(super) mod phase_view;
pub(super) mod loading;
pub(super) mod populated;

pub(crate) use phase_view::PhaseView;
