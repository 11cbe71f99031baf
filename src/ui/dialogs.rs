use egui::{Color32, Context, RichText, Window};

use crate::app::CalendarApp;
use crate::ui::theme;

/// Render the "Go to Date" dialog.
pub fn show_go_to_dialog(app: &mut CalendarApp, ctx: &Context) {
    let mut should_close = false;
    let mut should_go = false;

    Window::new(RichText::new("Go to Date").strong().size(14.0))
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("Date").color(theme::TEXT_SECONDARY));
                ui.add(
                    egui_extras::DatePickerButton::new(&mut app.go_to_date)
                        .id_salt("go_to_date_picker"),
                );
            });

            ui.add_space(6.0);
            ui.separator();
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                let go_btn = egui::Button::new(RichText::new("Go").color(theme::TEXT_ON_ACCENT))
                    .fill(theme::ACCENT)
                    .rounding(egui::Rounding::same(4.0));
                if ui.add_sized([80.0, 28.0], go_btn).clicked() {
                    should_go = true;
                }
                if ui.add_sized([80.0, 28.0], egui::Button::new("Cancel")).clicked() {
                    should_close = true;
                }
            });
            ui.add_space(2.0);
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        should_close = true;
    }
    if ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
        should_go = true;
    }

    if should_go {
        app.go_to_dialog_date();
        should_close = true;
    }
    if should_close {
        app.show_go_to = false;
    }
}

/// Render the "About" dialog.
pub fn show_about_dialog(app: &mut CalendarApp, ctx: &Context) {
    let mut open = true;
    Window::new("About")
        .open(&mut open)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(RichText::new("Compositional Calendar").strong().size(18.0));
                ui.label(
                    RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                        .color(theme::TEXT_SECONDARY),
                );
                ui.add_space(8.0);
                ui.label("An endlessly scrolling month calendar.");
                ui.label(
                    RichText::new("Years load as you scroll toward either end.")
                        .color(Color32::GRAY)
                        .small(),
                );
                ui.add_space(8.0);
            });
        });
    if !open {
        app.show_about = false;
    }
}
