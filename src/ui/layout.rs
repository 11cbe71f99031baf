use std::ops::Range;

use egui::{Pos2, Rect, Vec2};

use crate::controller::AnchorShift;
use crate::model::{CalendarSystem, IndexPath, Month, Timeline};
use crate::ui::theme;

/// Geometry of the month list: square day cells in `columns` columns, each
/// month preceded by a header and followed by spacing.
///
/// All y values are relative to the top of the scroll content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarLayout {
    pub columns: usize,
    pub cell_size: f32,
    pub header_height: f32,
    pub section_spacing: f32,
    /// Horizontal inset that centres the grid when cells hit their max size.
    pub grid_left: f32,
}

impl CalendarLayout {
    pub fn new(width: f32, columns: usize) -> Self {
        let columns = columns.max(1);
        let cell_size = (width / columns as f32).clamp(theme::MIN_CELL_SIZE, theme::MAX_CELL_SIZE);
        let grid_left = ((width - cell_size * columns as f32) * 0.5).max(0.0);
        Self {
            columns,
            cell_size,
            header_height: theme::HEADER_HEIGHT,
            section_spacing: theme::SECTION_SPACING,
            grid_left,
        }
    }

    pub fn grid_width(&self) -> f32 {
        self.cell_size * self.columns as f32
    }

    pub fn section_height(&self, month: &Month) -> f32 {
        self.header_height
            + month.row_count(self.columns) as f32 * self.cell_size
            + self.section_spacing
    }

    /// Top of every section, plus one trailing entry for the content height.
    pub fn section_origins<C: CalendarSystem>(&self, timeline: &Timeline<C>) -> Vec<f32> {
        let mut origins = Vec::with_capacity(timeline.section_count() + 1);
        let mut y = 0.0;
        origins.push(y);
        for month in timeline.months() {
            y += self.section_height(month);
            origins.push(y);
        }
        origins
    }

    pub fn content_height(origins: &[f32]) -> f32 {
        origins.last().copied().unwrap_or(0.0)
    }

    /// Sections overlapping the band `top..bottom`.
    pub fn visible_sections(origins: &[f32], top: f32, bottom: f32) -> Range<usize> {
        let count = origins.len().saturating_sub(1);
        if count == 0 {
            return 0..0;
        }
        let start = origins[1..].partition_point(|&end| end <= top);
        let end = origins[..count].partition_point(|&origin| origin < bottom);
        start.min(end)..end
    }

    /// Offset of a cell within its section.
    pub fn cell_offset(&self, item: usize) -> Vec2 {
        let row = item / self.columns;
        let column = item % self.columns;
        Vec2::new(
            self.grid_left + column as f32 * self.cell_size,
            self.header_height + row as f32 * self.cell_size,
        )
    }

    /// Screen rect of `item` given the content's top-left corner.
    pub fn cell_rect(&self, content_min: Pos2, section_origin: f32, item: usize) -> Rect {
        let min = content_min + Vec2::new(0.0, section_origin) + self.cell_offset(item);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Cell under a content-relative point, ignoring headers, spacing and
    /// cells past the end of the month.
    pub fn hit_test<C: CalendarSystem>(
        &self,
        origins: &[f32],
        timeline: &Timeline<C>,
        point: Vec2,
    ) -> Option<IndexPath> {
        if origins.len() < 2 {
            return None;
        }
        let section = origins[1..].partition_point(|&end| end <= point.y);
        if section >= origins.len() - 1 {
            return None;
        }
        let local_y = point.y - origins[section] - self.header_height;
        let local_x = point.x - self.grid_left;
        if local_y < 0.0 || local_x < 0.0 {
            return None;
        }
        let row = (local_y / self.cell_size) as usize;
        let column = (local_x / self.cell_size) as usize;
        if column >= self.columns {
            return None;
        }
        let item = row * self.columns + column;
        (item < timeline.item_count(section)?).then_some(IndexPath::new(section, item))
    }

    /// Scroll offset that puts the cell at `path` in the middle of a viewport
    /// of `viewport_height`.
    pub fn centered_offset(&self, origins: &[f32], path: IndexPath, viewport_height: f32) -> Option<f32> {
        let section_origin = *origins.get(path.section)?;
        let cell_center = section_origin + self.cell_offset(path.item).y + self.cell_size * 0.5;
        Some((cell_center - viewport_height * 0.5).max(0.0))
    }

    /// Scroll offset keeping the anchor section stationary on screen after
    /// the window grew. Falls back to `offset` if either origin is unknown.
    pub fn corrected_offset(
        offset: f32,
        old_origins: &[f32],
        new_origins: &[f32],
        shift: &AnchorShift,
    ) -> f32 {
        match (
            old_origins.get(shift.from_section),
            new_origins.get(shift.to_section),
        ) {
            (Some(old), Some(new)) => offset + (new - old),
            _ => offset,
        }
    }
}
