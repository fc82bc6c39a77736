use std::sync::LazyLock;

pub struct UiText {
    pub app_title: String,

    // --- TOOLBAR ---
    pub tb_range: String,
    pub tb_show_price: String,
    pub tb_show_rainbow: String,
    pub tb_show_halvings: String,
    pub tb_halving_style: String,
    pub hover_shortcut_prefix: String,

    // --- PLOT LABELS ---
    pub plot_x_axis: String,
    pub plot_y_axis: String,
    pub plot_price_legend: String,

    // --- CENTER PANEL ---
    pub cp_fetching: String,
    pub cp_waiting_first: String,
    pub cp_no_data: String,
    pub cp_first_load_failed: String,

    // --- STATUS BAR ---
    pub sb_range: String,
    pub sb_points: String,
    pub sb_showing: String,
    pub sb_updated: String,
    pub sb_ago: String,
    pub sb_never_updated: String,
    pub sb_fetching: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Bitcoin Price Chart".to_string(),

    tb_range: "Range:".to_string(),
    tb_show_price: "Price".to_string(),
    tb_show_rainbow: "Rainbow".to_string(),
    tb_show_halvings: "Halvings".to_string(),
    tb_halving_style: "Halving style".to_string(),
    hover_shortcut_prefix: "Shortcut: ".to_string(),

    plot_x_axis: "Date (UTC)".to_string(),
    plot_y_axis: "Price (USD, log)".to_string(),
    plot_price_legend: "Price".to_string(),

    cp_fetching: "Fetching prices...".to_string(),
    cp_waiting_first: "Waiting for the first price series".to_string(),
    cp_no_data: "No price data".to_string(),
    cp_first_load_failed: "The first fetch failed. Pick a range to try again".to_string(),

    sb_range: "Range".to_string(),
    sb_points: "points".to_string(),
    sb_showing: "showing".to_string(),
    sb_updated: "updated".to_string(),
    sb_ago: "ago".to_string(),
    sb_never_updated: "not loaded yet".to_string(),
    sb_fetching: "fetching".to_string(),
});
