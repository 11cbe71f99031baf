//! Glue between the scroll surface and the timeline: edge detection,
//! window growth, anchor tracking and selection.
//!
//! Keeping a month stationary while the window grows is split in two. The
//! controller mutates the timeline and reports where the anchor month moved
//! to ([`AnchorShift`]); the view converts the old and new sections into
//! pixel origins and corrects its scroll offset.

use std::ops::Range;

use chrono::NaiveDate;

use crate::error::{CalendarError, Result};
use crate::model::{CalendarSystem, Direction, Gregorian, GridItem, IndexPath, Timeline};

/// How many sections from either end count as "near the edge".
pub const DEFAULT_EDGE_THRESHOLD: usize = 1;

/// Largest accepted threshold. It stays below one year's worth of months so
/// a single growth always moves the visible range out of reach of the edge
/// it was near.
pub const MAX_EDGE_THRESHOLD: usize = 11;

/// Clamp a user-supplied threshold into `0..=MAX_EDGE_THRESHOLD`.
pub fn clamp_edge_threshold(threshold: usize) -> usize {
    if threshold > MAX_EDGE_THRESHOLD {
        log::warn!(
            "Edge threshold {} too large, using {}",
            threshold,
            MAX_EDGE_THRESHOLD
        );
    }
    threshold.min(MAX_EDGE_THRESHOLD)
}

/// Implemented by whoever owns the timeline and injected into the scroll
/// surface, which calls it when the visible range nears either end.
pub trait ScrollEdgeDelegate {
    /// Returns `true` if the content changed.
    fn scroll_near_edge(&mut self, direction: Direction) -> bool;
}

/// Which edge, if any, the visible section range is close to.
///
/// Backward wins when both edges are in reach.
pub fn edge_for_visible_range(
    visible: Range<usize>,
    section_count: usize,
    threshold: usize,
) -> Option<Direction> {
    if visible.is_empty() || section_count == 0 {
        return None;
    }
    if visible.start <= threshold {
        Some(Direction::Backward)
    } else if visible.end.saturating_add(threshold) >= section_count {
        Some(Direction::Forward)
    } else {
        None
    }
}

/// Where the anchor month moved after the window grew.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorShift {
    /// First date of the anchor month.
    pub anchor: NaiveDate,
    pub from_section: usize,
    pub to_section: usize,
    pub direction: Direction,
}

/// Owns the timeline for one calendar screen.
#[derive(Debug, Clone)]
pub struct CalendarController<C: CalendarSystem = Gregorian> {
    timeline: Timeline<C>,
    selected: Option<NaiveDate>,
    edge_threshold: usize,
}

impl<C: CalendarSystem + Clone> CalendarController<C> {
    pub fn new(timeline: Timeline<C>) -> Self {
        Self {
            timeline,
            selected: None,
            edge_threshold: DEFAULT_EDGE_THRESHOLD,
        }
    }

    /// Build the controller with a timeline centred on `initial_date`.
    pub fn with_initial_date(initial_date: NaiveDate, calendar: C) -> Result<Self> {
        Ok(Self::new(Timeline::new(initial_date, calendar)?))
    }

    pub fn with_edge_threshold(mut self, threshold: usize) -> Self {
        self.edge_threshold = clamp_edge_threshold(threshold);
        self
    }

    pub fn timeline(&self) -> &Timeline<C> {
        &self.timeline
    }

    pub fn edge_threshold(&self) -> usize {
        self.edge_threshold
    }

    pub fn set_edge_threshold(&mut self, threshold: usize) {
        self.edge_threshold = clamp_edge_threshold(threshold);
    }

    /// Grow the window if `visible` is near an edge.
    ///
    /// The first visible month is the anchor. `None` means nothing changed or
    /// the anchor could not be located again, and the caller should leave
    /// its scroll offset alone.
    ///
    /// Growth is skipped when the corrected range would still sit near an
    /// edge, or when the trim would drop part of the visible range. Either
    /// case would make the next frame grow again without any scrolling.
    pub fn handle_visible_range(&mut self, visible: Range<usize>) -> Option<AnchorShift> {
        let section_count = self.timeline.section_count();
        let direction =
            edge_for_visible_range(visible.clone(), section_count, self.edge_threshold)?;
        let from_section = visible.start;
        let anchor = self.timeline.month(from_section)?.first_date();

        let (added, trimmed) = self.growth_extent(direction)?;
        let new_count = section_count + added - trimmed;
        let corrected = match direction {
            Direction::Forward => {
                visible.start.checked_sub(trimmed)?..visible.end.checked_sub(trimmed)?
            }
            Direction::Backward => visible.start + added..visible.end + added,
        };
        if corrected.end > new_count
            || edge_for_visible_range(corrected.clone(), new_count, self.edge_threshold).is_some()
        {
            log::debug!(
                "Not growing {:?}: sections {:?} would still be near an edge of {}",
                direction,
                corrected,
                new_count
            );
            return None;
        }

        if !self.scroll_near_edge(direction) {
            return None;
        }

        match self.timeline.index_path(anchor) {
            Some(path) => Some(AnchorShift {
                anchor,
                from_section,
                to_section: path.section,
                direction,
            }),
            None => {
                log::warn!("Anchor month {} left the window after growing {:?}", anchor, direction);
                None
            }
        }
    }

    /// Sections that growing toward `direction` would add and trim, or
    /// `None` if the next year cannot be built.
    fn growth_extent(&self, direction: Direction) -> Option<(usize, usize)> {
        let years = self.timeline.years();
        let (incoming, outgoing) = match direction {
            Direction::Forward => (self.timeline.latest_year()?.checked_add(1)?, years.first()?),
            Direction::Backward => (self.timeline.earliest_year()?.checked_sub(1)?, years.last()?),
        };
        let added = self.timeline.calendar().months_in_year(incoming).ok()?.count();
        let trimmed = if years.len() >= Timeline::<C>::MAX_YEARS {
            outgoing.months().len()
        } else {
            0
        };
        Some((added, trimmed))
    }

    // ── Selection ───────────────────────────────────────────────

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn selected_index_path(&self) -> Option<IndexPath> {
        self.selected.and_then(|date| self.timeline.index_path(date))
    }

    /// Only real days can be highlighted or selected; blank cells cannot.
    pub fn is_selectable(&self, path: IndexPath) -> bool {
        matches!(
            self.timeline.item(path.section, path.item),
            Some(GridItem::Day(_))
        )
    }

    /// Select `date` if it is loaded in the window.
    pub fn select(&mut self, date: NaiveDate) -> bool {
        if self.timeline.index_path(date).is_some() {
            self.selected = Some(date);
            true
        } else {
            false
        }
    }

    pub fn select_at(&mut self, path: IndexPath) -> bool {
        match self.timeline.item(path.section, path.item) {
            Some(GridItem::Day(day)) => {
                self.selected = Some(day.date);
                true
            }
            _ => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // ── Navigation ──────────────────────────────────────────────

    /// Coordinate to scroll to for `date`, reloading the window around it if
    /// it is not currently loaded.
    pub fn reveal(&mut self, date: NaiveDate) -> Result<IndexPath> {
        if let Some(path) = self.timeline.index_path(date) {
            return Ok(path);
        }

        log::info!("Jumping to {} outside the loaded window", date);
        let timeline = Timeline::new(date, self.timeline.calendar().clone())?;
        let path = timeline
            .index_path(date)
            .ok_or(CalendarError::EmptyWindow { date })?;
        self.timeline = timeline;
        Ok(path)
    }

    /// Swap the calendar system, rebuilding the window around `anchor`.
    pub fn replace_calendar(&mut self, calendar: C, anchor: NaiveDate) -> Result<()> {
        self.timeline = Timeline::new(anchor, calendar)?;
        Ok(())
    }
}

impl<C: CalendarSystem + Clone> ScrollEdgeDelegate for CalendarController<C> {
    fn scroll_near_edge(&mut self, direction: Direction) -> bool {
        self.timeline.append_year(direction)
    }
}
