use chrono::{Datelike, NaiveDate};

use super::calendar::CalendarSystem;
use super::index_path::{index_path_in, IndexPath};
use super::month::Month;
use crate::error::Result;

/// All months of one calendar year, in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Year {
    value: i32,
    months: Vec<Month>,
}

impl Year {
    /// Build every month of `value`. Any month that cannot be built fails
    /// the whole year.
    pub fn new<C: CalendarSystem + ?Sized>(value: i32, calendar: &C) -> Result<Self> {
        let months = calendar
            .months_in_year(value)?
            .map(|month| {
                let base_date = calendar.date(value, month, 1)?;
                Month::new(base_date, calendar)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { value, months })
    }

    /// Build the year containing `date`.
    pub fn from_date<C: CalendarSystem + ?Sized>(date: NaiveDate, calendar: &C) -> Result<Self> {
        Self::new(date.year(), calendar)
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn months(&self) -> &[Month] {
        &self.months
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.months.first(), self.months.last()) {
            (Some(first), Some(last)) => first.first_date() <= date && date <= last.last_date(),
            _ => false,
        }
    }

    /// Coordinate of `date` with `section` counted from January of this year.
    pub fn index_path(&self, date: NaiveDate) -> Option<IndexPath> {
        index_path_in(&self.months, date)
    }
}
