mod perf;
mod time_utils;

pub use time_utils::{
    AppInstant, TimeUtils, date_to_plot_x, date_to_string, days_since_anchor, epoch_ms_to_date,
    epoch_ms_to_plot_x, format_elapsed, plot_x_to_string,
};
