use eframe::egui::{
    CentralPanel, ComboBox, Context, Frame, Key, RichText, SidePanel, TopBottomPanel,
};
use strum::IntoEnumIterator;

use crate::domain::{Interval, Period};
use crate::ui::app::{AppError, ConfluenceApp};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::utils::{
    colored_subsection_heading, format_price, section_heading, spaced_separator,
};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

impl ConfluenceApp {
    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new().fill(UI_CONFIG.colors.side_panel);
        SidePanel::left("query_panel")
            .min_width(UI_CONFIG.side_panel_min_width)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                let mut changed = false;

                section_heading(ui, UI_TEXT.query_heading);

                ui.label(colored_subsection_heading(UI_TEXT.symbol_label));
                let response = ui.text_edit_singleline(&mut self.symbol_input);
                if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                    changed = true;
                }

                ui.add_space(5.0);
                ComboBox::from_label(UI_TEXT.period_label)
                    .selected_text(self.query.period.to_string())
                    .show_ui(ui, |ui| {
                        for period in Period::iter() {
                            if ui
                                .selectable_value(
                                    &mut self.query.period,
                                    period,
                                    period.to_string(),
                                )
                                .changed()
                            {
                                changed = true;
                            }
                        }
                    });

                ComboBox::from_label(UI_TEXT.interval_label)
                    .selected_text(self.query.interval.to_string())
                    .show_ui(ui, |ui| {
                        for interval in Interval::iter() {
                            if ui
                                .selectable_value(
                                    &mut self.query.interval,
                                    interval,
                                    interval.to_string(),
                                )
                                .changed()
                            {
                                changed = true;
                            }
                        }
                    });

                spaced_separator(ui);
                if ui.button(UI_TEXT.refresh_button).clicked() {
                    changed = true;
                }

                if changed {
                    #[cfg(debug_assertions)]
                    if DEBUG_FLAGS.print_ui_interactions {
                        log::info!("Query inputs changed: {}", self.query);
                    }
                    self.apply_query_change();
                }
            });
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.is_fetching() {
                    ui.spinner();
                    ui.label(UI_TEXT.fetching_message);
                } else if let Some(scored) = &self.data_state.scored {
                    ui.label(format!(
                        "{} · {} points · via {}",
                        scored.query,
                        scored.series.len(),
                        scored.provider_signature
                    ));
                } else {
                    ui.label(self.query.to_string());
                }
            });
        });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new().fill(UI_CONFIG.colors.central_panel);
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                if let Some(error) = &self.data_state.last_error {
                    ui.add_space(20.0);
                    ui.colored_label(UI_CONFIG.colors.error, error.to_string());
                    match error {
                        AppError::NoData(_) => {
                            ui.label(UI_TEXT.no_data_hint);
                        }
                        AppError::BlankSymbol => {
                            ui.label(UI_TEXT.blank_symbol_hint);
                        }
                        _ => {}
                    }
                    return;
                }

                let Some(scored) = self.data_state.scored.clone() else {
                    if self.is_fetching() {
                        ui.add_space(20.0);
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label(UI_TEXT.fetching_message);
                        });
                    }
                    return;
                };

                section_heading(ui, UI_TEXT.score_heading);
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!("{} / 4", scored.confluence.score()))
                            .size(42.0)
                            .strong()
                            .color(UI_CONFIG.colors.score),
                    );
                    if let Some(last) = scored.series.last() {
                        ui.label(format!(
                            "{} · last close {}",
                            scored.query,
                            format_price(last.close)
                        ));
                    }
                });

                ui.add_space(5.0);
                ui.label(colored_subsection_heading(UI_TEXT.conditions_heading));
                if scored.confluence.satisfied.is_empty() {
                    ui.label("(none)");
                } else {
                    for condition in &scored.confluence.satisfied {
                        ui.label(format!("• {}", condition));
                    }
                }

                spaced_separator(ui);
                self.plot_view.show(ui, &scored);
            });
    }
}
