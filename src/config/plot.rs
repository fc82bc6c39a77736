//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    // --- PRICE ---
    pub price_bar_color: Color32,
    /// Bar width relative to the spacing between samples (0.0 to 1.0)
    pub price_bar_width_pct: f64,

    // --- RAINBOW ---
    pub rainbow_line_width: f32,

    // --- HALVINGS ---
    pub halving_color: Color32,
    pub halving_dash_length: f32,
    pub halving_line_width: f32,

    /// Y-Axis Padding in decades (log10 units), top and bottom
    pub plot_y_padding_log: f64,
    pub plot_x_padding_pct: f64,
    pub min_chart_height: f32,

    // --- SEMANTIC COLORS ---
    pub color_text_neutral: Color32,
    pub color_text_subdued: Color32,
    pub color_info: Color32,
    pub color_warning: Color32,
    pub color_active_range: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    price_bar_color: Color32::from_rgb(0x88, 0x84, 0xD8),
    price_bar_width_pct: 0.8,

    rainbow_line_width: 1.5,

    halving_color: Color32::RED,
    halving_dash_length: 5.0,
    halving_line_width: 1.5,

    plot_y_padding_log: 0.05,
    plot_x_padding_pct: 0.02,
    min_chart_height: 500.0,

    color_text_neutral: Color32::WHITE,
    color_text_subdued: Color32::GRAY,
    color_info: Color32::LIGHT_BLUE,
    color_warning: Color32::YELLOW,
    color_active_range: Color32::from_rgb(0x3B, 0x82, 0xF6),
};
