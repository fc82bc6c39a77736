mod plot_layers;
mod ui_config;
mod ui_plot_view;
mod ui_render;
mod ui_text;
mod utils;

pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
pub(crate) use ui_plot_view::PlotView;
pub use utils::format_price;
