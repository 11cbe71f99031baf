use chrono::{Datelike, NaiveDate};

use super::calendar::{CalendarSystem, Gregorian};
use super::index_path::{grid_item, index_path_in, GridItem, IndexPath};
use super::month::Month;
use super::year::Year;
use crate::error::{CalendarError, Result};

/// Which end of the window to extend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

/// A sliding window of consecutive years shown as one continuous list of
/// month sections.
///
/// The window holds two years after construction and never more than
/// [`Timeline::MAX_YEARS`]. Extending it at one end trims the year at the
/// opposite end once the cap is reached.
#[derive(Debug, Clone)]
pub struct Timeline<C: CalendarSystem = Gregorian> {
    years: Vec<Year>,
    calendar: C,
}

impl<C: CalendarSystem> Timeline<C> {
    pub const MAX_YEARS: usize = 3;
    pub const INITIAL_YEARS: usize = 2;

    /// Build a two-year window around `initial_date`.
    ///
    /// Dates after the middle month of their year get the following year
    /// loaded as well; dates up to and including the middle month get the
    /// preceding year. A candidate year that cannot be built is skipped; the
    /// construction only fails when neither can be.
    pub fn new(initial_date: NaiveDate, calendar: C) -> Result<Self> {
        let year = initial_date.year();
        let month_range = calendar.months_in_year(year)?;
        let month_count = month_range.end().saturating_sub(*month_range.start()) + 1;
        let middle_month = month_count / 2;

        let candidates = if initial_date.month() > middle_month {
            [Some(year), year.checked_add(1)]
        } else {
            [year.checked_sub(1), Some(year)]
        };

        let years: Vec<Year> = candidates
            .into_iter()
            .flatten()
            .filter_map(|value| match Year::new(value, &calendar) {
                Ok(year) => Some(year),
                Err(e) => {
                    log::warn!("Skipping year {} in initial window: {}", value, e);
                    None
                }
            })
            .collect();

        if years.is_empty() {
            return Err(CalendarError::EmptyWindow { date: initial_date });
        }

        log::debug!(
            "Timeline around {} loaded years {:?}",
            initial_date,
            years.iter().map(Year::value).collect::<Vec<_>>()
        );
        Ok(Self { years, calendar })
    }

    pub fn years(&self) -> &[Year] {
        &self.years
    }

    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    pub fn earliest_year(&self) -> Option<i32> {
        self.years.first().map(Year::value)
    }

    pub fn latest_year(&self) -> Option<i32> {
        self.years.last().map(Year::value)
    }

    /// Every month in the window, oldest first.
    pub fn months(&self) -> impl Iterator<Item = &Month> + '_ {
        self.years.iter().flat_map(|year| year.months())
    }

    pub fn month(&self, section: usize) -> Option<&Month> {
        let mut remaining = section;
        for year in &self.years {
            let count = year.months().len();
            if remaining < count {
                return year.months().get(remaining);
            }
            remaining -= count;
        }
        None
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.months().next().map(Month::first_date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.years
            .last()
            .and_then(|year| year.months().last())
            .map(Month::last_date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.years.iter().any(|year| year.contains(date))
    }

    /// Coordinate of `date` across the whole window.
    pub fn index_path(&self, date: NaiveDate) -> Option<IndexPath> {
        index_path_in(self.months(), date)
    }

    /// Extend the window by one year in `direction`.
    ///
    /// Returns `false` and leaves the window untouched when the next year
    /// cannot be represented.
    pub fn append_year(&mut self, direction: Direction) -> bool {
        let next = match direction {
            Direction::Forward => self.latest_year().and_then(|value| value.checked_add(1)),
            Direction::Backward => self.earliest_year().and_then(|value| value.checked_sub(1)),
        };
        let Some(value) = next else {
            log::debug!("No year to append {:?}: window is empty or at i32 bounds", direction);
            return false;
        };

        let year = match Year::new(value, &self.calendar) {
            Ok(year) => year,
            Err(e) => {
                log::debug!("Window stops growing {:?} at {}: {}", direction, value, e);
                return false;
            }
        };

        match direction {
            Direction::Forward => {
                self.years.push(year);
                if self.years.len() > Self::MAX_YEARS {
                    let excess = self.years.len() - Self::MAX_YEARS;
                    self.years.drain(..excess);
                }
            }
            Direction::Backward => {
                self.years.insert(0, year);
                self.years.truncate(Self::MAX_YEARS);
            }
        }

        log::debug!(
            "Appended {} {:?}; window is now {:?}",
            value,
            direction,
            self.years.iter().map(Year::value).collect::<Vec<_>>()
        );
        true
    }

    // ── Data source ─────────────────────────────────────────────

    pub fn section_count(&self) -> usize {
        self.years.iter().map(|year| year.months().len()).sum()
    }

    pub fn item_count(&self, section: usize) -> Option<usize> {
        self.month(section).map(Month::grid_item_count)
    }

    pub fn item(&self, section: usize, index: usize) -> Option<GridItem<'_>> {
        self.month(section).and_then(|month| grid_item(month, index))
    }

    pub fn header_text(&self, section: usize) -> Option<String> {
        self.month(section).map(Month::header_text)
    }

    pub fn coordinate(&self, date: NaiveDate) -> Option<IndexPath> {
        self.index_path(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn values<C: CalendarSystem>(timeline: &Timeline<C>) -> Vec<i32> {
        timeline.years().iter().map(Year::value).collect()
    }

    #[test]
    fn early_month_loads_previous_year() {
        let timeline = Timeline::new(ymd(2022, 1, 15), Gregorian::default()).unwrap();
        assert_eq!(values(&timeline), vec![2021, 2022]);
    }

    #[test]
    fn late_month_loads_next_year() {
        let timeline = Timeline::new(ymd(2022, 9, 15), Gregorian::default()).unwrap();
        assert_eq!(values(&timeline), vec![2022, 2023]);
    }

    #[test]
    fn middle_month_ties_toward_previous_year() {
        let june = Timeline::new(ymd(2022, 6, 30), Gregorian::default()).unwrap();
        assert_eq!(values(&june), vec![2021, 2022]);
        let july = Timeline::new(ymd(2022, 7, 1), Gregorian::default()).unwrap();
        assert_eq!(values(&july), vec![2022, 2023]);
    }

    #[test]
    fn forward_appends_then_trims_oldest() {
        let mut timeline = Timeline::new(ymd(2022, 1, 15), Gregorian::default()).unwrap();

        assert!(timeline.append_year(Direction::Forward));
        assert_eq!(values(&timeline), vec![2021, 2022, 2023]);

        assert!(timeline.append_year(Direction::Forward));
        assert_eq!(values(&timeline), vec![2022, 2023, 2024]);
    }

    #[test]
    fn backward_appends_then_trims_newest() {
        let mut timeline = Timeline::new(ymd(2022, 9, 15), Gregorian::default()).unwrap();

        assert!(timeline.append_year(Direction::Backward));
        assert_eq!(values(&timeline), vec![2021, 2022, 2023]);

        assert!(timeline.append_year(Direction::Backward));
        assert_eq!(values(&timeline), vec![2020, 2021, 2022]);
    }

    #[test]
    fn append_past_representable_range_is_a_no_op() {
        let max_year = NaiveDate::MAX.year();
        let mut timeline = Timeline::new(ymd(max_year, 2, 1), Gregorian::default()).unwrap();
        assert_eq!(values(&timeline), vec![max_year - 1, max_year]);

        assert!(!timeline.append_year(Direction::Forward));
        assert_eq!(values(&timeline), vec![max_year - 1, max_year]);
    }

    #[test]
    fn append_before_representable_range_is_a_no_op() {
        let min_year = NaiveDate::MIN.year();
        let mut timeline = Timeline::new(ymd(min_year, 11, 1), Gregorian::default()).unwrap();
        assert_eq!(values(&timeline), vec![min_year, min_year + 1]);

        assert!(!timeline.append_year(Direction::Backward));
        assert_eq!(values(&timeline), vec![min_year, min_year + 1]);
        assert_eq!(timeline.first_date(), Some(NaiveDate::MIN));
    }

    #[test]
    fn initial_window_at_lower_bound_keeps_single_year() {
        let min_year = NaiveDate::MIN.year();
        let timeline = Timeline::new(ymd(min_year, 2, 1), Gregorian::default()).unwrap();
        assert_eq!(values(&timeline), vec![min_year]);
    }

    #[test]
    fn initial_window_at_upper_bound_keeps_single_year() {
        let max_year = NaiveDate::MAX.year();
        let timeline = Timeline::new(ymd(max_year, 11, 1), Gregorian::default()).unwrap();
        assert_eq!(values(&timeline), vec![max_year]);
    }

    #[test]
    fn index_path_across_window() {
        let timeline = Timeline::new(ymd(2022, 9, 15), Gregorian::default()).unwrap();
        let path = timeline.index_path(ymd(2022, 9, 15)).unwrap();
        assert_eq!(path.section, 8);
        assert_eq!(path.item, 18);

        // January 2023 is section 12; 2023-01-01 is a Sunday.
        assert_eq!(
            timeline.coordinate(ymd(2023, 1, 1)),
            Some(IndexPath::new(12, 0))
        );
        assert_eq!(timeline.index_path(ymd(2024, 1, 1)), None);
    }

    #[test]
    fn index_path_shifts_after_backward_append() {
        let mut timeline = Timeline::new(ymd(2022, 9, 15), Gregorian::default()).unwrap();
        let before = timeline.index_path(ymd(2022, 9, 15)).unwrap();
        timeline.append_year(Direction::Backward);
        let after = timeline.index_path(ymd(2022, 9, 15)).unwrap();
        assert_eq!(after.section, before.section + 12);
        assert_eq!(after.item, before.item);
    }

    #[test]
    fn data_source_contract() {
        let timeline = Timeline::new(ymd(2022, 1, 15), Gregorian::default()).unwrap();
        assert_eq!(timeline.section_count(), 24);
        // January 2022 is section 12.
        assert_eq!(timeline.item_count(12), Some(37));
        assert_eq!(timeline.item(12, 5), Some(GridItem::Blank));
        assert_eq!(
            timeline.item(12, 6).and_then(GridItem::day).map(|d| d.date),
            Some(ymd(2022, 1, 1))
        );
        assert_eq!(timeline.item(12, 37), None);
        assert_eq!(timeline.item(24, 0), None);
        assert_eq!(timeline.header_text(0).as_deref(), Some("January 2021"));
        assert_eq!(timeline.header_text(23).as_deref(), Some("December 2022"));
        assert_eq!(timeline.header_text(24), None);
    }

    #[test]
    fn window_bounds() {
        let timeline = Timeline::new(ymd(2022, 1, 15), Gregorian::new(Weekday::Mon)).unwrap();
        assert_eq!(timeline.first_date(), Some(ymd(2021, 1, 1)));
        assert_eq!(timeline.last_date(), Some(ymd(2022, 12, 31)));
        assert!(timeline.contains(ymd(2021, 6, 1)));
        assert!(!timeline.contains(ymd(2023, 1, 1)));
        assert_eq!(timeline.earliest_year(), Some(2021));
        assert_eq!(timeline.latest_year(), Some(2022));
    }
}
