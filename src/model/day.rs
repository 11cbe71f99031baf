use chrono::NaiveDate;

/// A single calendar date within a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Day {
    pub date: NaiveDate,
    /// 1-based day of the month.
    pub ordinal: u32,
    pub is_weekend: bool,
}

impl Day {
    pub fn new(date: NaiveDate, ordinal: u32, is_weekend: bool) -> Self {
        Self {
            date,
            ordinal,
            is_weekend,
        }
    }

    /// Label shown in the day cell.
    pub fn formatted(&self) -> String {
        self.date.format("%-d").to_string()
    }
}
