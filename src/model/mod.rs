pub mod calendar;
pub mod day;
pub mod index_path;
pub mod month;
pub mod timeline;
pub mod year;

pub use calendar::{CalendarSystem, Gregorian};
pub use day::Day;
pub use index_path::{GridItem, IndexPath};
pub use month::Month;
pub use timeline::{Direction, Timeline};
pub use year::Year;
