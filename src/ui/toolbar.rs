use chrono::Weekday;
use egui::{menu, RichText, Ui};
use egui_phosphor::regular as icons;

use crate::app::CalendarApp;
use crate::ui::theme;

/// Render the top toolbar / menu bar.
pub fn show_toolbar(app: &mut CalendarApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  View  ").font(theme::font_menu()), |ui| {
            if ui.button("  Today            Ctrl+T").clicked() {
                app.go_to_today();
                ui.close_menu();
            }
            if ui.button("  Go to Date...   Ctrl+G").clicked() {
                app.show_go_to = true;
                ui.close_menu();
            }
            ui.separator();
            ui.label(RichText::new("Week starts on").small().weak());
            let week_start = app.settings.week_start;
            if ui.radio(week_start == Weekday::Sun, "Sunday").clicked() {
                app.set_week_start(Weekday::Sun);
                ui.close_menu();
            }
            if ui.radio(week_start == Weekday::Mon, "Monday").clicked() {
                app.set_week_start(Weekday::Mon);
                ui.close_menu();
            }
            ui.separator();
            let mut dim = app.settings.dim_weekends;
            if ui.checkbox(&mut dim, "Dim weekends").changed() {
                app.set_dim_weekends(dim);
            }
        });

        ui.menu_button(RichText::new("  Help  ").font(theme::font_menu()), |ui| {
            if ui.button(format!("{} About", icons::INFO)).clicked() {
                app.show_about = true;
                ui.close_menu();
            }
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button(RichText::new(format!("{} Today", icons::CALENDAR_BLANK)).size(12.0))
                .clicked()
            {
                app.go_to_today();
            }
        });
    });
}
