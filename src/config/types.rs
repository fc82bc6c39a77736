//! Runtime-selectable behaviours (exposed on the CLI).

use clap::ValueEnum;
use strum_macros::{Display, EnumIter};

/// How halving dates are drawn on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, ValueEnum)]
pub enum HalvingStyle {
    /// Vertical dashed lines at each halving date.
    #[default]
    #[strum(to_string = "Markers")]
    Markers,
    /// Four dashed traces over the price series, one legend entry per halving.
    #[strum(to_string = "Price traces")]
    PriceTraces,
}

/// What to do with a response that arrives after a newer request was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum StaleResponsePolicy {
    /// Only the most recently requested fetch may replace the series.
    #[default]
    DiscardStale,
    /// Whichever response resolves last wins, regardless of request order.
    LastResolvedWins,
}
