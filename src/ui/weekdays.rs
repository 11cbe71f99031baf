use egui::{Pos2, Rect, Sense, Stroke, Ui, Vec2};

use crate::ui::layout::CalendarLayout;
use crate::ui::theme;

/// Render the fixed weekday strip above the month grid, aligned with the
/// grid's columns.
pub fn show_weekdays(symbols: &[String], layout: &CalendarLayout, ui: &mut Ui) {
    let width = ui.available_width();
    let (response, painter) = ui.allocate_painter(
        Vec2::new(width, theme::WEEKDAY_STRIP_HEIGHT),
        Sense::hover(),
    );
    let rect = response.rect;

    painter.rect_filled(rect, 0.0, theme::BG_HEADER);
    painter.line_segment(
        [rect.left_bottom(), rect.right_bottom()],
        Stroke::new(1.0, theme::BORDER_SUBTLE),
    );

    for (column, symbol) in symbols.iter().enumerate().take(layout.columns) {
        let cell = Rect::from_min_size(
            Pos2::new(
                rect.left() + layout.grid_left + column as f32 * layout.cell_size,
                rect.top(),
            ),
            Vec2::new(layout.cell_size, rect.height()),
        );
        painter.text(
            cell.center(),
            egui::Align2::CENTER_CENTER,
            symbol,
            theme::font_weekday(),
            theme::TEXT_SECONDARY,
        );
    }
}
