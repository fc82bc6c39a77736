use eframe::egui::{Button, CentralPanel, ComboBox, Context, RichText, TopBottomPanel, Ui};
use strum::IntoEnumIterator;

use crate::{
    app::{App, ViewPhase},
    config::{HalvingStyle, PLOT_CONFIG},
    domain::TimeRange,
    ui::{UI_CONFIG, UI_TEXT},
    utils::format_elapsed,
};

impl App {
    pub(crate) fn render_top_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.top_panel_frame();

        TopBottomPanel::top("top_toolbar")
            .frame(frame)
            .min_height(30.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new(&UI_TEXT.app_title)
                            .strong()
                            .color(UI_CONFIG.colors.heading),
                    );
                    ui.separator();

                    // 1. RANGE SELECTOR
                    ui.label(&UI_TEXT.tb_range);
                    if let Some(range) = self.render_range_buttons(ui) {
                        self.select_range(range);
                    }

                    ui.separator();

                    // 2. LAYER VISIBILITY
                    ui.checkbox(&mut self.plot_visibility.price, &UI_TEXT.tb_show_price);
                    ui.checkbox(&mut self.plot_visibility.rainbow, &UI_TEXT.tb_show_rainbow);
                    ui.checkbox(&mut self.plot_visibility.halvings, &UI_TEXT.tb_show_halvings);

                    ComboBox::from_id_salt("halving_style")
                        .selected_text(self.halving_style.to_string())
                        .show_ui(ui, |ui| {
                            for style in HalvingStyle::iter() {
                                ui.selectable_value(
                                    &mut self.halving_style,
                                    style,
                                    style.to_string(),
                                );
                            }
                        })
                        .response
                        .on_hover_text(&UI_TEXT.tb_halving_style);
                });
            });
    }

    /// One button per range, the active one highlighted. Returns the clicked range,
    /// including a click on the range that is already active.
    fn render_range_buttons(&self, ui: &mut Ui) -> Option<TimeRange> {
        let active = self.session.range();
        let mut clicked = None;
        for (i, range) in TimeRange::iter().enumerate() {
            let is_active = range == active;
            let text = if is_active {
                RichText::new(range.to_string()).strong().color(PLOT_CONFIG.color_text_neutral)
            } else {
                RichText::new(range.to_string())
            };
            let mut button = Button::new(text).selected(is_active);
            if is_active {
                button = button.fill(PLOT_CONFIG.color_active_range);
            }
            let response = ui
                .add(button)
                .on_hover_text(format!("{}{}", UI_TEXT.hover_shortcut_prefix, i + 1));
            if response.clicked() {
                clicked = Some(range);
            }
        }
        clicked
    }

    pub(crate) fn render_status_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.bottom_panel_frame();
        TopBottomPanel::bottom("status_panel")
            .frame(frame)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let snapshot = self.session.snapshot();
                    ui.label(format!("{}: {}", UI_TEXT.sb_range, snapshot.range));
                    ui.separator();
                    ui.label(format!("{} {}", snapshot.series.len(), UI_TEXT.sb_points));

                    // Stale-but-consistent: say which range the series came from.
                    if let Some(series_range) = snapshot.series_range {
                        if series_range != snapshot.range {
                            ui.label(
                                RichText::new(format!("({} {})", UI_TEXT.sb_showing, series_range))
                                    .color(PLOT_CONFIG.color_text_subdued),
                            );
                        }
                    }
                    ui.separator();

                    match self.session.last_update() {
                        Some(at) => ui.label(format!(
                            "{} {} {}",
                            UI_TEXT.sb_updated,
                            format_elapsed(at.elapsed().as_secs()),
                            UI_TEXT.sb_ago
                        )),
                        None => ui.label(
                            RichText::new(&UI_TEXT.sb_never_updated)
                                .color(PLOT_CONFIG.color_text_subdued),
                        ),
                    };

                    if self.session.is_fetching() {
                        ui.separator();
                        ui.spinner();
                        ui.label(
                            RichText::new(&UI_TEXT.sb_fetching).color(PLOT_CONFIG.color_info),
                        );
                    }
                });
            });
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.central_panel_frame();

        CentralPanel::default().frame(frame).show(ctx, |ui| {
            let snapshot = self.session.snapshot().clone();

            if snapshot.is_empty() {
                let (title, subtitle) =
                    empty_chart_banner(self.session.phase(), self.session.is_fetching());
                render_banner(ui, title, subtitle, self.session.is_fetching());
            }

            self.plot_view
                .show_chart(ui, &snapshot, &self.plot_visibility, self.halving_style);
        });
    }
}

/// Banner text for an empty chart. Only claims a fetch is running when one is.
fn empty_chart_banner(phase: ViewPhase, fetching: bool) -> (&'static str, &'static str) {
    match (phase, fetching) {
        (ViewPhase::Loading, true) => (
            UI_TEXT.cp_fetching.as_str(),
            UI_TEXT.cp_waiting_first.as_str(),
        ),
        (ViewPhase::Loading, false) => (
            UI_TEXT.cp_no_data.as_str(),
            UI_TEXT.cp_first_load_failed.as_str(),
        ),
        (ViewPhase::Populated, true) => (
            UI_TEXT.cp_fetching.as_str(),
            UI_TEXT.cp_no_data.as_str(),
        ),
        (ViewPhase::Populated, false) => (
            UI_TEXT.cp_no_data.as_str(),
            UI_TEXT.cp_no_data.as_str(),
        ),
    }
}

fn render_banner(ui: &mut Ui, title: &str, subtitle: &str, busy: bool) {
    ui.vertical_centered(|ui| {
        ui.add_space(12.0);
        if busy {
            ui.spinner();
            ui.add_space(6.0);
        }
        ui.heading(RichText::new(title).color(PLOT_CONFIG.color_warning));
        if subtitle != title {
            ui.label(RichText::new(subtitle).color(PLOT_CONFIG.color_text_neutral));
        }
        ui.add_space(6.0);
    });
}
