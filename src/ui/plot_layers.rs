use egui_plot::{Bar, BarChart, Line, LineStyle, PlotPoints, PlotUi, VLine};

use crate::{
    config::{PLOT_CONFIG, RAINBOW},
    domain::halving_markers,
    ui::{UI_TEXT, ui_plot_view::PlotCache, utils::format_price},
    utils::{TimeUtils, date_to_plot_x, plot_x_to_string},
};

/// Context passed to every layer during rendering.
pub struct LayerContext<'a> {
    pub cache: &'a PlotCache,
    /// Bottom of the visible log axis; price bars grow up from here.
    pub y_floor: f64,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

fn points(xs: &[f64], ys: &[f64]) -> PlotPoints<'static> {
    PlotPoints::new(xs.iter().zip(ys).map(|(&x, &y)| [x, y]).collect())
}

// ============================================================================
// 1. PRICE BARS
// ============================================================================
pub struct PriceBarLayer;

impl PlotLayer for PriceBarLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let cache = ctx.cache;
        if cache.xs.is_empty() {
            return;
        }

        let bars: Vec<Bar> = cache
            .xs
            .iter()
            .zip(&cache.log_prices)
            .map(|(&x, &log_price)| {
                Bar::new(x, log_price - ctx.y_floor)
                    .base_offset(ctx.y_floor)
                    .width(cache.bar_width)
                    .fill(PLOT_CONFIG.price_bar_color)
            })
            .collect();

        plot_ui.bar_chart(
            BarChart::new(UI_TEXT.plot_price_legend.as_str(), bars)
                .color(PLOT_CONFIG.price_bar_color)
                .element_formatter(Box::new(|bar, _chart| {
                    let top = bar.base_offset.unwrap_or(0.0) + bar.value;
                    format!(
                        "{}\n{}",
                        plot_x_to_string(bar.argument, TimeUtils::TOOLTIP_TIME_FORMAT),
                        format_price(10f64.powf(top))
                    )
                })),
        );
    }
}

// ============================================================================
// 2. RAINBOW BANDS
// ============================================================================
pub struct RainbowBandLayer;

impl PlotLayer for RainbowBandLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let cache = ctx.cache;
        for (i, band) in cache.log_bands.iter().enumerate() {
            plot_ui.line(
                Line::new(RAINBOW.labels[i], points(&cache.xs, band))
                    .color(RAINBOW.colors[i])
                    .width(PLOT_CONFIG.rainbow_line_width),
            );
        }
    }
}

// ============================================================================
// 3. HALVINGS
// ============================================================================

/// Vertical dashed line at each halving date.
pub struct HalvingMarkerLayer;

impl PlotLayer for HalvingMarkerLayer {
    fn render(&self, plot_ui: &mut PlotUi, _ctx: &LayerContext) {
        for marker in halving_markers() {
            plot_ui.vline(
                VLine::new(marker.label(), date_to_plot_x(marker.date))
                    .color(PLOT_CONFIG.halving_color)
                    .width(PLOT_CONFIG.halving_line_width)
                    .style(LineStyle::Dashed {
                        length: PLOT_CONFIG.halving_dash_length,
                    }),
            );
        }
    }
}

/// Legacy rendering: one dashed trace per halving, each following the price
/// itself rather than marking its date.
pub struct HalvingTraceLayer;

impl PlotLayer for HalvingTraceLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let cache = ctx.cache;
        for marker in halving_markers() {
            plot_ui.line(
                Line::new(marker.label(), points(&cache.xs, &cache.log_prices))
                    .color(PLOT_CONFIG.halving_color)
                    .width(PLOT_CONFIG.halving_line_width)
                    .style(LineStyle::Dashed {
                        length: PLOT_CONFIG.halving_dash_length,
                    }),
            );
        }
    }
}
