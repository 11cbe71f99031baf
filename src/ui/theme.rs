use egui::{Color32, FontId, Rounding, Stroke, Visuals};

// ── Palette ──────────────────────────────────────────────────────────────────

pub const BG_DARK: Color32 = Color32::from_rgb(24, 24, 32);
pub const BG_PANEL: Color32 = Color32::from_rgb(30, 30, 40);
pub const BG_HEADER: Color32 = Color32::from_rgb(34, 37, 48);
pub const BG_CELL_HOVER: Color32 = Color32::from_rgba_premultiplied(255, 255, 255, 14);

pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(50, 52, 64);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 232, 240);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(155, 160, 178);
pub const TEXT_DIM: Color32 = Color32::from_rgb(100, 105, 120);
pub const TEXT_ON_ACCENT: Color32 = Color32::from_rgb(24, 24, 32);

/// Section headers and the selected day.
pub const ACCENT: Color32 = Color32::from_rgb(64, 200, 210);
pub const TODAY_RING: Color32 = Color32::from_rgb(240, 75, 75);
pub const ERROR_TEXT: Color32 = Color32::from_rgb(240, 110, 110);

// ── Sizes ────────────────────────────────────────────────────────────────────

pub const HEADER_HEIGHT: f32 = 44.0;
pub const SECTION_SPACING: f32 = 20.0;
pub const WEEKDAY_STRIP_HEIGHT: f32 = 28.0;
pub const MIN_CELL_SIZE: f32 = 24.0;
pub const MAX_CELL_SIZE: f32 = 72.0;
/// Selection circle inset inside its cell.
pub const SELECTION_INSET: f32 = 8.0;

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_header() -> FontId {
    FontId::proportional(17.0)
}

pub fn font_day() -> FontId {
    FontId::proportional(18.0)
}

pub fn font_weekday() -> FontId {
    FontId::proportional(12.0)
}

pub fn font_menu() -> FontId {
    FontId::proportional(13.0)
}

// ── Apply custom visuals ─────────────────────────────────────────────────────

/// Widget fills step up in brightness from idle to pressed.
const WIDGET_FILLS: [Color32; 4] = [
    Color32::from_rgb(36, 38, 50),
    Color32::from_rgb(44, 46, 60),
    Color32::from_rgb(54, 58, 74),
    Color32::from_rgb(40, 70, 78),
];

fn widget(fill: Color32, border: Color32, text: Color32) -> egui::style::WidgetVisuals {
    egui::style::WidgetVisuals {
        bg_fill: fill,
        weak_bg_fill: fill,
        bg_stroke: Stroke::new(1.0, border),
        fg_stroke: Stroke::new(1.0, text),
        rounding: Rounding::same(6.0),
        expansion: 0.0,
    }
}

pub fn apply_theme(ctx: &egui::Context) {
    let [idle, inactive, hovered, active] = WIDGET_FILLS;
    let mut visuals = Visuals::dark();

    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = BG_HEADER;
    visuals.extreme_bg_color = BG_DARK;
    visuals.hyperlink_color = ACCENT;
    visuals.error_fg_color = ERROR_TEXT;

    visuals.widgets.noninteractive = widget(idle, BORDER_SUBTLE, TEXT_SECONDARY);
    visuals.widgets.inactive = widget(inactive, BORDER_SUBTLE, TEXT_PRIMARY);
    visuals.widgets.hovered = widget(hovered, ACCENT, TEXT_PRIMARY);
    visuals.widgets.active = widget(active, ACCENT, Color32::WHITE);
    visuals.widgets.open = widget(hovered, ACCENT, TEXT_PRIMARY);

    // Date picker highlights read as the same teal as a selected day.
    visuals.selection.bg_fill = ACCENT.linear_multiply(0.45);
    visuals.selection.stroke = Stroke::new(1.0, TEXT_ON_ACCENT);

    visuals.window_rounding = Rounding::same(10.0);
    visuals.window_stroke = Stroke::new(1.0, ACCENT.linear_multiply(0.4));
    visuals.menu_rounding = Rounding::same(6.0);

    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        style.spacing.button_padding = egui::vec2(10.0, 5.0);
        style.spacing.menu_margin = egui::Margin::same(8.0);
    });
}
