use std::{ops::RangeInclusive, sync::Arc};

use eframe::egui::Ui;
use egui_plot::{AxisHints, GridInput, GridMark, HPlacement, Legend, Plot, PlotPoint, VPlacement};

use crate::{
    analysis::RainbowPoint,
    app::{ChartSnapshot, PlotVisibility},
    config::{BAND_COUNT, HalvingStyle, PLOT_CONFIG},
    ui::{
        UI_TEXT,
        plot_layers::{
            HalvingMarkerLayer, HalvingTraceLayer, LayerContext, PlotLayer, PriceBarLayer,
            RainbowBandLayer,
        },
        utils::format_price,
    },
    utils::{TimeUtils, epoch_ms_to_plot_x, plot_x_to_string},
};

// Below this many days on screen the axis shows times as well as dates.
const INTRADAY_AXIS_DAYS: f64 = 3.0;

/// Plot-space geometry for one snapshot: x in days since the anchor, y in log10(USD).
pub struct PlotCache {
    series: Arc<[RainbowPoint]>,
    pub xs: Vec<f64>,
    pub log_prices: Vec<f64>,
    pub log_bands: [Vec<f64>; BAND_COUNT],
    pub bar_width: f64,
    pub x_range: Option<(f64, f64)>,
    pub price_range: Option<(f64, f64)>,
    pub band_range: Option<(f64, f64)>,
}

impl PlotCache {
    fn build(series: Arc<[RainbowPoint]>) -> Self {
        let xs: Vec<f64> = series
            .iter()
            .map(|r| epoch_ms_to_plot_x(r.point.timestamp_ms))
            .collect();
        let log_prices: Vec<f64> = series.iter().map(|r| r.point.price.log10()).collect();
        let log_bands: [Vec<f64>; BAND_COUNT] =
            std::array::from_fn(|i| series.iter().map(|r| r.bands[i].log10()).collect());

        let x_range = min_max(xs.iter().copied());
        let price_range = min_max(log_prices.iter().copied());
        let band_range = min_max(log_bands.iter().flatten().copied());

        let spacing = match (x_range, xs.len()) {
            (Some((lo, hi)), n) if n > 1 && hi > lo => (hi - lo) / (n - 1) as f64,
            _ => 1.0,
        };

        Self {
            series,
            xs,
            log_prices,
            log_bands,
            bar_width: spacing * PLOT_CONFIG.price_bar_width_pct,
            x_range,
            price_range,
            band_range,
        }
    }

    fn is_for(&self, series: &Arc<[RainbowPoint]>) -> bool {
        Arc::ptr_eq(&self.series, series)
    }

    /// Y bounds over the layers currently switched on.
    fn y_bounds(&self, visibility: &PlotVisibility) -> Option<(f64, f64)> {
        let mut ranges = Vec::with_capacity(2);
        // Halving traces sit on the price, so they need the price range too.
        if visibility.price || visibility.halvings {
            ranges.extend(self.price_range);
        }
        if visibility.rainbow {
            ranges.extend(self.band_range);
        }
        let (lo, hi) = ranges
            .into_iter()
            .reduce(|a, b| (a.0.min(b.0), a.1.max(b.1)))?;
        let pad = PLOT_CONFIG.plot_y_padding_log.max((hi - lo) * 0.05);
        Some((lo - pad, hi + pad))
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[derive(Default)]
pub struct PlotView {
    cache: Option<PlotCache>,
}

// Helper: Calculate a human-friendly step size (1, 2, 5, 10, 20, 50...)
fn calculate_adaptive_step(range: f64, target_count: f64) -> f64 {
    let raw_step = range / target_count.max(1.0);
    let mag = 10.0_f64.powi(raw_step.log10().floor() as i32);
    let normalized = raw_step / mag; // Scale to 1.0 .. 10.0

    let nice_step = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };

    nice_step * mag
}

/// Grid marks for a log10 price axis, placed at round prices.
fn log_price_marks(input: GridInput) -> Vec<GridMark> {
    let (min, max) = input.bounds;
    let span = max - min;
    if !span.is_finite() || span <= 0.0 {
        return Vec::new();
    }

    if span >= 1.0 {
        // Whole decades, plus 2x and 5x when there is room for them.
        let multipliers: &[f64] = if span < 4.0 { &[1.0, 2.0, 5.0] } else { &[1.0] };
        let mut marks = Vec::new();
        for decade in (min.floor() as i32)..=(max.ceil() as i32) {
            for &m in multipliers {
                let value = decade as f64 + m.log10();
                if value >= min && value <= max {
                    let step_size = if m == 1.0 { 1.0 } else { 0.3 };
                    marks.push(GridMark { value, step_size });
                }
            }
        }
        return marks;
    }

    // Less than a decade on screen: step linearly in price space.
    let (p_min, p_max) = (10f64.powf(min), 10f64.powf(max));
    let step = calculate_adaptive_step(p_max - p_min, 6.0);
    if step.is_nan() || step <= 0.0 {
        return Vec::new();
    }
    let start = (p_min / step).ceil() as i64;
    let end = (p_max / step).floor() as i64;
    (start..=end)
        .filter(|&i| i > 0)
        .map(|i| GridMark {
            value: (i as f64 * step).log10(),
            step_size: span / 6.0,
        })
        .collect()
}

fn axis_time_format(range: &RangeInclusive<f64>) -> &'static str {
    if range.end() - range.start() < INTRADAY_AXIS_DAYS {
        "%m-%d %H:%M"
    } else {
        TimeUtils::STANDARD_TIME_FORMAT
    }
}

fn create_time_axis() -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis.as_str())
        .formatter(|mark, range| plot_x_to_string(mark.value, axis_time_format(range)))
        .placement(VPlacement::Bottom)
}

fn create_y_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_y_axis.as_str())
        .formatter(|mark, _range| format_price(10f64.powf(mark.value)))
        .placement(HPlacement::Right)
}

fn hover_label(name: &str, value: &PlotPoint) -> String {
    let when = plot_x_to_string(value.x, TimeUtils::TOOLTIP_TIME_FORMAT);
    let price = format_price(10f64.powf(value.y));
    if name.is_empty() {
        format!("{}\n{}", when, price)
    } else {
        format!("{}\n{}\n{}", name, when, price)
    }
}

impl PlotView {
    fn cache_for(&mut self, snapshot: &ChartSnapshot) -> &PlotCache {
        let fresh = self
            .cache
            .as_ref()
            .is_some_and(|cache| cache.is_for(&snapshot.series));
        if !fresh {
            let cache = crate::trace_time!("Rebuild Plot Cache", 2_000, {
                PlotCache::build(snapshot.series.clone())
            });
            self.cache = Some(cache);
        }
        self.cache
            .get_or_insert_with(|| PlotCache::build(snapshot.series.clone()))
    }

    pub fn show_chart(
        &mut self,
        ui: &mut Ui,
        snapshot: &ChartSnapshot,
        visibility: &PlotVisibility,
        halving_style: HalvingStyle,
    ) {
        let cache = self.cache_for(snapshot);
        let y_bounds = cache.y_bounds(visibility);
        let x_bounds = cache.x_range.map(|(lo, hi)| {
            let pad = ((hi - lo) * PLOT_CONFIG.plot_x_padding_pct).max(cache.bar_width);
            (lo - pad, hi + pad)
        });

        Plot::new("price_chart")
            .legend(Legend::default())
            .custom_x_axes(vec![create_time_axis()])
            .custom_y_axes(vec![create_y_axis()])
            .y_grid_spacer(log_price_marks)
            .label_formatter(hover_label)
            .min_size(eframe::egui::vec2(0.0, PLOT_CONFIG.min_chart_height))
            .allow_double_click_reset(false)
            .allow_scroll(false)
            .allow_drag(false)
            .allow_zoom(false)
            .show(ui, |plot_ui| {
                if let Some((lo, hi)) = x_bounds {
                    plot_ui.set_plot_bounds_x(lo..=hi);
                }
                if let Some((lo, hi)) = y_bounds {
                    plot_ui.set_plot_bounds_y(lo..=hi);
                }

                let ctx = LayerContext {
                    cache,
                    y_floor: y_bounds.map(|(lo, _)| lo).unwrap_or(0.0),
                };

                // --- LAYER STACK ---
                let mut layers: Vec<Box<dyn PlotLayer>> = Vec::with_capacity(3);
                if visibility.price {
                    layers.push(Box::new(PriceBarLayer));
                }
                if visibility.rainbow {
                    layers.push(Box::new(RainbowBandLayer));
                }
                if visibility.halvings {
                    match halving_style {
                        HalvingStyle::Markers => layers.push(Box::new(HalvingMarkerLayer)),
                        HalvingStyle::PriceTraces => layers.push(Box::new(HalvingTraceLayer)),
                    }
                }

                for layer in layers {
                    layer.render(plot_ui, &ctx);
                }
            });
    }
}
