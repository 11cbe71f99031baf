//! Error types for calendar construction and settings persistence.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, CalendarError>;

#[derive(Error, Debug)]
pub enum CalendarError {
    /// The calendar cannot represent the requested date.
    #[error("date {year:04}-{month:02}-{day:02} is outside the representable range")]
    OutOfRange { year: i32, month: u32, day: u32 },

    /// Month number outside the calendar's month-of-year range.
    #[error("month {month} is not valid for year {year}")]
    InvalidMonth { year: i32, month: u32 },

    /// None of the candidate years around a date could be built.
    #[error("no calendar years could be built around {date}")]
    EmptyWindow { date: NaiveDate },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
