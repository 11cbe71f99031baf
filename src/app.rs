use std::path::PathBuf;

use chrono::{NaiveDate, Weekday};

use crate::controller::CalendarController;
use crate::settings::AppSettings;
use crate::ui;
use crate::ui::calendar_view::{CalendarViewState, ViewOptions};

/// Main application state.
pub struct CalendarApp {
    /// `None` when the initial window could not be built.
    pub controller: Option<CalendarController>,
    pub view_state: CalendarViewState,
    pub settings: AppSettings,
    settings_path: PathBuf,

    // Dialog state
    pub show_about: bool,
    pub show_go_to: bool,
    pub go_to_date: NaiveDate,

    // Status message
    pub status_message: String,
    pub load_error: Option<String>,
}

impl CalendarApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);
        ui::theme::apply_theme(&cc.egui_ctx);

        let settings_path = AppSettings::default_path();
        let settings = AppSettings::load(&settings_path);
        let today = chrono::Local::now().date_naive();

        Self::with_settings(settings, settings_path, today)
    }

    fn with_settings(settings: AppSettings, settings_path: PathBuf, initial_date: NaiveDate) -> Self {
        let mut view_state = CalendarViewState::default();
        let (controller, load_error) =
            match CalendarController::with_initial_date(initial_date, settings.calendar()) {
                Ok(controller) => {
                    view_state.reveal(initial_date);
                    (Some(controller.with_edge_threshold(settings.edge_threshold)), None)
                }
                Err(e) => {
                    log::error!("Failed to build calendar around {}: {}", initial_date, e);
                    (None, Some(e.to_string()))
                }
            };

        Self {
            controller,
            view_state,
            settings,
            settings_path,
            show_about: false,
            show_go_to: false,
            go_to_date: initial_date,
            status_message: "Ready".to_string(),
            load_error,
        }
    }

    // --- Navigation ---

    pub fn go_to_today(&mut self) {
        self.go_to(chrono::Local::now().date_naive());
    }

    pub fn go_to(&mut self, date: NaiveDate) {
        if self.controller.is_none() {
            return;
        }
        self.view_state.reveal(date);
        self.status_message = format!("Showing {}", date.format("%B %-d, %Y"));
    }

    /// Select `go_to_date` and scroll to it.
    pub fn go_to_dialog_date(&mut self) {
        let date = self.go_to_date;
        self.go_to(date);
        if let Some(controller) = self.controller.as_mut() {
            // Selection needs the window to contain the date, which reveal
            // only guarantees on the next frame.
            if controller.reveal(date).is_ok() {
                controller.select(date);
            }
        }
    }

    // --- Settings ---

    pub fn set_week_start(&mut self, week_start: Weekday) {
        if self.settings.week_start == week_start {
            return;
        }
        self.settings.week_start = week_start;

        if let Some(controller) = self.controller.as_mut() {
            let anchor = self
                .view_state
                .anchor_date()
                .or_else(|| controller.selected())
                .unwrap_or_else(|| chrono::Local::now().date_naive());
            match controller.replace_calendar(self.settings.calendar(), anchor) {
                Ok(()) => self.view_state.reveal(anchor),
                Err(e) => self.status_message = format!("Error changing week start: {}", e),
            }
        }
        self.save_settings();
    }

    pub fn set_dim_weekends(&mut self, dim: bool) {
        self.settings.dim_weekends = dim;
        self.save_settings();
    }

    fn save_settings(&mut self) {
        if let Err(e) = self.settings.save(&self.settings_path) {
            log::warn!("Failed to save settings: {}", e);
            self.status_message = format!("Error saving settings: {}", e);
        }
    }

    /// Status bar summary of the loaded years.
    pub fn window_summary(&self) -> String {
        let Some(controller) = &self.controller else {
            return String::new();
        };
        let timeline = controller.timeline();
        match (timeline.earliest_year(), timeline.latest_year()) {
            (Some(first), Some(last)) if first != last => {
                format!("Loaded {}–{} ({} months)", first, last, timeline.section_count())
            }
            (Some(year), _) => format!("Loaded {} ({} months)", year, timeline.section_count()),
            _ => String::new(),
        }
    }
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Keyboard shortcuts
        if ctx.input(|i| i.key_pressed(egui::Key::T) && i.modifiers.command) {
            self.go_to_today();
        }
        if ctx.input(|i| i.key_pressed(egui::Key::G) && i.modifiers.command) {
            self.show_go_to = true;
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&self.status_message)
                        .size(11.0)
                        .color(ui::theme::TEXT_SECONDARY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let selected = self
                        .controller
                        .as_ref()
                        .and_then(CalendarController::selected)
                        .map(|date| format!("Selected {}", date.format("%Y-%m-%d")))
                        .unwrap_or_default();
                    ui.label(egui::RichText::new(selected).size(11.0).weak());
                    ui.separator();
                    ui.label(egui::RichText::new(self.window_summary()).size(11.0).weak());
                });
            });
        });

        let frame = egui::Frame::default()
            .fill(ui::theme::BG_DARK)
            .inner_margin(egui::Margin::ZERO);
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            let Some(controller) = self.controller.as_mut() else {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "Calendar unavailable: {}",
                            self.load_error.as_deref().unwrap_or("unknown error")
                        ))
                        .color(ui::theme::ERROR_TEXT),
                    );
                });
                return;
            };

            let interaction = ui::calendar_view::show_calendar(
                controller,
                &mut self.view_state,
                ViewOptions {
                    dim_weekends: self.settings.dim_weekends,
                },
                ui,
            );

            if let Some(date) = interaction.selected {
                self.status_message = format!("Selected {}", date.format("%A, %B %-d, %Y"));
            }
            if let Some(shift) = interaction.grew {
                ctx.request_repaint();
                log::debug!(
                    "Window grew {:?}; anchor {} moved {} -> {}",
                    shift.direction,
                    shift.anchor,
                    shift.from_section,
                    shift.to_section
                );
            }
            if let Some(error) = interaction.error {
                self.status_message = format!("Error: {}", error);
            }
        });

        // Dialogs
        if self.show_go_to {
            ui::dialogs::show_go_to_dialog(self, ctx);
        }
        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }
    }
}
