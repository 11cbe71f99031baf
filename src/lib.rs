//! An infinitely scrolling month-grid calendar.
//!
//! [`model`] holds the date windowing core: months laid out on a week grid,
//! grouped into years, and a [`model::Timeline`] that keeps a sliding window of
//! years loaded. [`controller`] connects that window to a scroll surface, and
//! [`ui`] is the egui surface used by the desktop app.

pub mod app;
pub mod controller;
pub mod error;
pub mod model;
pub mod settings;
pub mod ui;

pub use error::{CalendarError, Result};
