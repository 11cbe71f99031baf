use chrono::{Datelike, NaiveDate};

use super::calendar::CalendarSystem;
use super::day::Day;
use crate::error::Result;

/// One calendar month laid out as a grid of `days_in_week` columns.
///
/// The grid starts with `first_weekday_offset - 1` blank cells so that day 1
/// lands under its weekday column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Month {
    days: Vec<Day>,
    first_date: NaiveDate,
    first_weekday_offset: u32,
}

impl Month {
    /// Build the month containing `base_date`.
    pub fn new<C: CalendarSystem + ?Sized>(base_date: NaiveDate, calendar: &C) -> Result<Self> {
        let day_range = calendar.days_in_month(base_date)?;
        let first_date = calendar.first_of_month(base_date)?;
        let first_weekday_offset = calendar.weekday_ordinal(first_date);

        let days = day_range
            .map(|ordinal| {
                let date = calendar.date(first_date.year(), first_date.month(), ordinal)?;
                Ok(Day::new(date, ordinal, calendar.is_weekend(date)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            days,
            first_date,
            first_weekday_offset,
        })
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn first_date(&self) -> NaiveDate {
        self.first_date
    }

    /// Weekday position (1-based) of the first day of the month.
    pub fn first_weekday_offset(&self) -> u32 {
        self.first_weekday_offset
    }

    pub fn year(&self) -> i32 {
        self.first_date.year()
    }

    pub fn month(&self) -> u32 {
        self.first_date.month()
    }

    pub fn last_date(&self) -> NaiveDate {
        self.days.last().map_or(self.first_date, |day| day.date)
    }

    /// Number of blank cells before day 1.
    pub fn leading_blanks(&self) -> usize {
        self.first_weekday_offset.saturating_sub(1) as usize
    }

    /// Total grid cells, leading blanks included.
    pub fn grid_item_count(&self) -> usize {
        self.days.len() + self.leading_blanks()
    }

    /// Number of grid rows needed for a week of `days_in_week` columns.
    pub fn row_count(&self, days_in_week: usize) -> usize {
        if days_in_week == 0 {
            return 0;
        }
        self.grid_item_count().div_ceil(days_in_week)
    }

    /// The day shown at `grid_index`, or `None` for a leading blank or an
    /// index past the end of the month.
    pub fn day_at(&self, grid_index: usize) -> Option<&Day> {
        grid_index
            .checked_sub(self.leading_blanks())
            .and_then(|index| self.days.get(index))
    }

    /// Grid index of `date`, if it falls in this month.
    pub fn grid_index(&self, date: NaiveDate) -> Option<usize> {
        self.days
            .iter()
            .position(|day| day.date == date)
            .map(|index| index + self.leading_blanks())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first_date <= date && date <= self.last_date()
    }

    /// Section header text, e.g. "January 2022".
    pub fn header_text(&self) -> String {
        self.first_date.format("%B %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::calendar::Gregorian;
    use chrono::Weekday;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn january_2022_sunday_first() {
        let month = Month::new(ymd(2022, 1, 15), &Gregorian::default()).unwrap();

        assert_eq!(month.days().len(), 31);
        assert_eq!(month.first_date(), ymd(2022, 1, 1));
        assert_eq!(month.first_weekday_offset(), 7);
        assert_eq!(month.grid_item_count(), 37);
        assert_eq!(month.day_at(6).map(|d| d.ordinal), Some(1));
        assert!(month.day_at(5).is_none());
        assert!(month.day_at(0).is_none());
        assert_eq!(month.day_at(36).map(|d| d.ordinal), Some(31));
        assert!(month.day_at(37).is_none());
    }

    #[test]
    fn january_2022_monday_first() {
        let month = Month::new(ymd(2022, 1, 1), &Gregorian::new(Weekday::Mon)).unwrap();
        assert_eq!(month.first_weekday_offset(), 6);
        assert_eq!(month.grid_item_count(), 36);
        assert_eq!(month.day_at(5).map(|d| d.ordinal), Some(1));
    }

    #[test]
    fn month_starting_on_first_weekday_has_no_blanks() {
        // 2022-05-01 is a Sunday.
        let month = Month::new(ymd(2022, 5, 20), &Gregorian::default()).unwrap();
        assert_eq!(month.first_weekday_offset(), 1);
        assert_eq!(month.leading_blanks(), 0);
        assert_eq!(month.grid_item_count(), 31);
        assert_eq!(month.day_at(0).map(|d| d.ordinal), Some(1));
    }

    #[test]
    fn ordinals_are_dense_and_weekends_flagged() {
        let month = Month::new(ymd(2024, 2, 1), &Gregorian::default()).unwrap();
        let ordinals: Vec<u32> = month.days().iter().map(|d| d.ordinal).collect();
        assert_eq!(ordinals, (1..=29).collect::<Vec<_>>());

        // 2024-02-03 is a Saturday.
        assert!(month.days()[2].is_weekend);
        assert!(!month.days()[4].is_weekend);
    }

    #[test]
    fn grid_index_round_trips_every_day() {
        let month = Month::new(ymd(2022, 9, 1), &Gregorian::default()).unwrap();
        for index in 0..month.grid_item_count() {
            if let Some(day) = month.day_at(index) {
                assert_eq!(month.grid_index(day.date), Some(index));
            }
        }
        assert_eq!(month.grid_index(ymd(2022, 10, 1)), None);
    }

    #[test]
    fn row_count_rounds_up_partial_weeks() {
        let month = Month::new(ymd(2022, 1, 1), &Gregorian::default()).unwrap();
        assert_eq!(month.row_count(7), 6);
        // February 2015 starts on a Sunday and fills exactly four rows.
        let month = Month::new(ymd(2015, 2, 1), &Gregorian::default()).unwrap();
        assert_eq!(month.row_count(7), 4);
    }

    #[test]
    fn header_text_names_month_and_year() {
        let month = Month::new(ymd(2022, 9, 15), &Gregorian::default()).unwrap();
        assert_eq!(month.header_text(), "September 2022");
        assert_eq!(month.days()[0].formatted(), "1");
    }
}
