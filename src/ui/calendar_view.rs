use chrono::NaiveDate;
use egui::{Painter, Pos2, Rounding, Sense, Stroke, Ui, Vec2};

use crate::controller::{AnchorShift, CalendarController};
use crate::model::{CalendarSystem, GridItem, IndexPath, Timeline};
use crate::ui::layout::CalendarLayout;
use crate::ui::theme;
use crate::ui::weekdays::show_weekdays;

/// Scroll position carried between frames.
#[derive(Debug, Clone, Default)]
pub struct CalendarViewState {
    offset: f32,
    viewport_height: f32,
    pending_offset: Option<f32>,
    reveal: Option<NaiveDate>,
    first_visible: Option<NaiveDate>,
}

impl CalendarViewState {
    /// Scroll `date` to the middle of the viewport on the next frame.
    pub fn reveal(&mut self, date: NaiveDate) {
        self.reveal = Some(date);
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// First day of the topmost month painted last frame.
    pub fn first_visible(&self) -> Option<NaiveDate> {
        self.first_visible
    }

    /// Date the view is headed to or showing: a pending reveal wins over the
    /// month currently at the top.
    pub fn anchor_date(&self) -> Option<NaiveDate> {
        self.reveal.or(self.first_visible)
    }
}

/// Display toggles coming from user settings.
#[derive(Debug, Clone, Copy)]
pub struct ViewOptions {
    pub dim_weekends: bool,
}

/// What happened in the calendar this frame.
#[derive(Debug, Default)]
pub struct CalendarInteraction {
    /// Day the user clicked and selected.
    pub selected: Option<NaiveDate>,
    /// Set when the window grew this frame.
    pub grew: Option<AnchorShift>,
    pub error: Option<String>,
}

/// Render the weekday strip and the scrolling month list.
pub fn show_calendar<C: CalendarSystem + Clone>(
    controller: &mut CalendarController<C>,
    state: &mut CalendarViewState,
    options: ViewOptions,
    ui: &mut Ui,
) -> CalendarInteraction {
    let mut interaction = CalendarInteraction::default();
    let columns = controller.timeline().calendar().days_in_week() as usize;
    let layout = CalendarLayout::new(ui.available_width(), columns);

    show_weekdays(&controller.timeline().calendar().weekday_symbols(), &layout, ui);

    if let Some(date) = state.reveal.take() {
        match controller.reveal(date) {
            Ok(path) => {
                let origins = layout.section_origins(controller.timeline());
                let viewport_height = if state.viewport_height > 0.0 {
                    state.viewport_height
                } else {
                    ui.available_height()
                };
                if let Some(offset) = layout.centered_offset(&origins, path, viewport_height) {
                    state.offset = offset;
                    state.pending_offset = Some(offset);
                }
            }
            Err(e) => interaction.error = Some(e.to_string()),
        }
    } else if state.viewport_height > 0.0 {
        // Grow before painting so the corrected offset is used this frame.
        let origins = layout.section_origins(controller.timeline());
        let visible = CalendarLayout::visible_sections(
            &origins,
            state.offset,
            state.offset + state.viewport_height,
        );
        if let Some(shift) = controller.handle_visible_range(visible) {
            let new_origins = layout.section_origins(controller.timeline());
            let offset =
                CalendarLayout::corrected_offset(state.offset, &origins, &new_origins, &shift);
            state.offset = offset;
            state.pending_offset = Some(offset);
            interaction.grew = Some(shift);
        }
    }

    let origins = layout.section_origins(controller.timeline());
    let content_height = CalendarLayout::content_height(&origins);

    let mut area = egui::ScrollArea::vertical()
        .id_salt("calendar_scroll")
        .auto_shrink([false, false]);
    if let Some(offset) = state.pending_offset.take() {
        area = area.vertical_scroll_offset(offset);
    }

    let selected = controller.selected();
    let timeline = controller.timeline();
    let output = area.show_viewport(ui, |ui, viewport| {
        let width = ui.available_width();
        let (response, painter) =
            ui.allocate_painter(Vec2::new(width, content_height), Sense::click());
        let content_min = response.rect.min;

        painter.rect_filled(response.rect, 0.0, theme::BG_DARK);

        let hovered = response
            .hover_pos()
            .and_then(|pos| layout.hit_test(&origins, timeline, pos - content_min));
        let today = chrono::Local::now().date_naive();

        let visible = CalendarLayout::visible_sections(&origins, viewport.min.y, viewport.max.y);
        for section in visible {
            draw_section(
                &painter,
                content_min,
                &layout,
                timeline,
                section,
                origins[section],
                &SectionStyle {
                    selected,
                    hovered,
                    today,
                    dim_weekends: options.dim_weekends,
                },
            );
        }

        if response.clicked() {
            response
                .interact_pointer_pos()
                .and_then(|pos| layout.hit_test(&origins, timeline, pos - content_min))
        } else {
            None
        }
    });

    state.offset = output.state.offset.y;
    state.viewport_height = output.inner_rect.height();
    let top = CalendarLayout::visible_sections(
        &origins,
        state.offset,
        state.offset + state.viewport_height,
    )
    .start;
    state.first_visible = controller.timeline().month(top).map(|m| m.first_date());

    if let Some(path) = output.inner {
        if controller.select_at(path) {
            interaction.selected = controller.selected();
        }
    }

    interaction
}

struct SectionStyle {
    selected: Option<NaiveDate>,
    hovered: Option<IndexPath>,
    today: NaiveDate,
    dim_weekends: bool,
}

fn draw_section<C: CalendarSystem>(
    painter: &Painter,
    content_min: Pos2,
    layout: &CalendarLayout,
    timeline: &Timeline<C>,
    section: usize,
    section_origin: f32,
    style: &SectionStyle,
) {
    if let Some(header) = timeline.header_text(section) {
        painter.text(
            Pos2::new(
                content_min.x + layout.grid_left + 8.0,
                content_min.y + section_origin + layout.header_height * 0.5,
            ),
            egui::Align2::LEFT_CENTER,
            header,
            theme::font_header(),
            theme::ACCENT,
        );
    }

    let item_count = timeline.item_count(section).unwrap_or(0);
    for item in 0..item_count {
        let Some(GridItem::Day(day)) = timeline.item(section, item) else {
            continue;
        };
        let rect = layout.cell_rect(content_min, section_origin, item);
        let radius = (layout.cell_size * 0.5 - theme::SELECTION_INSET).max(4.0);
        let is_selected = style.selected == Some(day.date);

        let text_color = if is_selected {
            painter.circle_filled(rect.center(), radius, theme::ACCENT);
            theme::TEXT_ON_ACCENT
        } else {
            if style.hovered == Some(IndexPath::new(section, item)) {
                painter.rect_filled(rect.shrink(2.0), Rounding::same(6.0), theme::BG_CELL_HOVER);
            }
            if day.is_weekend && style.dim_weekends {
                theme::TEXT_DIM
            } else {
                theme::TEXT_PRIMARY
            }
        };

        if day.date == style.today {
            painter.circle_stroke(rect.center(), radius, Stroke::new(1.5, theme::TODAY_RING));
        }

        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            day.formatted(),
            theme::font_day(),
            text_color,
        );
    }
}
