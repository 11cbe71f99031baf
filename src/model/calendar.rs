use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, Result};

/// Calendar arithmetic needed to lay out a month grid.
///
/// Weekday positions are 1-based and relative to the calendar's first day of
/// the week, so a Sunday-first calendar reports Sunday as 1 and Saturday as 7.
pub trait CalendarSystem {
    /// Month numbers making up `year`.
    fn months_in_year(&self, year: i32) -> Result<RangeInclusive<u32>>;

    /// Day numbers of the month containing `date`.
    fn days_in_month(&self, date: NaiveDate) -> Result<RangeInclusive<u32>>;

    fn first_of_month(&self, date: NaiveDate) -> Result<NaiveDate>;

    fn date(&self, year: i32, month: u32, day: u32) -> Result<NaiveDate>;

    fn days_in_week(&self) -> u32;

    /// Position of `date` within its week, in `1..=days_in_week()`.
    fn weekday_ordinal(&self, date: NaiveDate) -> u32;

    fn is_weekend(&self, date: NaiveDate) -> bool;

    fn is_same_month(&self, a: NaiveDate, b: NaiveDate) -> bool;

    /// Single-letter weekday labels in week order.
    fn weekday_symbols(&self) -> Vec<String>;
}

/// The proleptic Gregorian calendar with a configurable first weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gregorian {
    first_weekday: Weekday,
}

impl Default for Gregorian {
    fn default() -> Self {
        Self {
            first_weekday: Weekday::Sun,
        }
    }
}

impl Gregorian {
    pub fn new(first_weekday: Weekday) -> Self {
        Self { first_weekday }
    }

    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }
}

fn weekday_symbol(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "M",
        Weekday::Tue | Weekday::Thu => "T",
        Weekday::Wed => "W",
        Weekday::Fri => "F",
        Weekday::Sat | Weekday::Sun => "S",
    }
}

impl CalendarSystem for Gregorian {
    fn months_in_year(&self, year: i32) -> Result<RangeInclusive<u32>> {
        // Both ends of the year must be representable for every month to build.
        self.date(year, 1, 1)?;
        self.date(year, 12, 31)?;
        Ok(1..=12)
    }

    fn days_in_month(&self, date: NaiveDate) -> Result<RangeInclusive<u32>> {
        let (year, month) = (date.year(), date.month());
        // December's successor may lie past chrono's range, so end it directly.
        let last = match month {
            12 => self.date(year, 12, 31)?,
            _ => self
                .date(year, month + 1, 1)?
                .pred_opt()
                .ok_or(CalendarError::InvalidMonth { year, month })?,
        };
        Ok(1..=last.day())
    }

    fn first_of_month(&self, date: NaiveDate) -> Result<NaiveDate> {
        self.date(date.year(), date.month(), 1)
    }

    fn date(&self, year: i32, month: u32, day: u32) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(CalendarError::OutOfRange { year, month, day })
    }

    fn days_in_week(&self) -> u32 {
        7
    }

    fn weekday_ordinal(&self, date: NaiveDate) -> u32 {
        let day = date.weekday().num_days_from_monday();
        let first = self.first_weekday.num_days_from_monday();
        (day + 7 - first) % 7 + 1
    }

    fn is_weekend(&self, date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    fn is_same_month(&self, a: NaiveDate, b: NaiveDate) -> bool {
        a.year() == b.year() && a.month() == b.month()
    }

    fn weekday_symbols(&self) -> Vec<String> {
        let mut day = self.first_weekday;
        let mut symbols = Vec::with_capacity(7);
        for _ in 0..7 {
            symbols.push(weekday_symbol(day).to_string());
            day = day.succ();
        }
        symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekday_ordinal_sunday_first() {
        let cal = Gregorian::default();
        // 2022-01-01 is a Saturday, 2022-01-02 a Sunday.
        assert_eq!(cal.weekday_ordinal(ymd(2022, 1, 1)), 7);
        assert_eq!(cal.weekday_ordinal(ymd(2022, 1, 2)), 1);
        assert_eq!(cal.weekday_ordinal(ymd(2022, 1, 3)), 2);
    }

    #[test]
    fn weekday_ordinal_monday_first() {
        let cal = Gregorian::new(Weekday::Mon);
        assert_eq!(cal.weekday_ordinal(ymd(2022, 1, 1)), 6);
        assert_eq!(cal.weekday_ordinal(ymd(2022, 1, 2)), 7);
        assert_eq!(cal.weekday_ordinal(ymd(2022, 1, 3)), 1);
    }

    #[test]
    fn february_length_follows_leap_rules() {
        let cal = Gregorian::default();
        assert_eq!(cal.days_in_month(ymd(2024, 2, 10)).unwrap(), 1..=29);
        assert_eq!(cal.days_in_month(ymd(2023, 2, 10)).unwrap(), 1..=28);
        assert_eq!(cal.days_in_month(ymd(1900, 2, 1)).unwrap(), 1..=28);
        assert_eq!(cal.days_in_month(ymd(2000, 2, 1)).unwrap(), 1..=29);
    }

    #[test]
    fn days_in_month_covers_every_month() {
        let cal = Gregorian::default();
        let lengths: Vec<u32> = (1..=12)
            .map(|m| *cal.days_in_month(ymd(2023, m, 1)).unwrap().end())
            .collect();
        assert_eq!(lengths, vec![31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]);
    }

    #[test]
    fn december_of_last_representable_year_has_31_days() {
        let cal = Gregorian::default();
        let max_year = NaiveDate::MAX.year();
        assert_eq!(cal.days_in_month(ymd(max_year, 12, 1)).unwrap(), 1..=31);
        assert!(cal.days_in_month(ymd(max_year, 2, 1)).unwrap().count() >= 28);
    }

    #[test]
    fn months_in_year_fails_past_chrono_range() {
        let cal = Gregorian::default();
        assert_eq!(cal.months_in_year(2022).unwrap(), 1..=12);
        let max_year = NaiveDate::MAX.year();
        assert!(cal.months_in_year(max_year).is_ok());
        assert!(matches!(
            cal.months_in_year(max_year + 1),
            Err(CalendarError::OutOfRange { .. })
        ));
    }

    #[test]
    fn weekday_symbols_rotate_with_week_start() {
        assert_eq!(
            Gregorian::default().weekday_symbols().concat(),
            "SMTWTFS"
        );
        assert_eq!(
            Gregorian::new(Weekday::Mon).weekday_symbols().concat(),
            "MTWTFSS"
        );
    }

    #[test]
    fn weekends_are_saturday_and_sunday() {
        let cal = Gregorian::new(Weekday::Mon);
        assert!(cal.is_weekend(ymd(2022, 1, 1)));
        assert!(cal.is_weekend(ymd(2022, 1, 2)));
        assert!(!cal.is_weekend(ymd(2022, 1, 3)));
    }
}
