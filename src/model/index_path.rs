use chrono::NaiveDate;

use super::day::Day;
use super::month::Month;

/// Position of a grid cell: `section` is the month, `item` the grid index
/// within that month (leading blanks included).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexPath {
    pub section: usize,
    pub item: usize,
}

impl IndexPath {
    pub fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

/// Content of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridItem<'a> {
    Day(&'a Day),
    /// Padding before day 1 of a month.
    Blank,
}

impl<'a> GridItem<'a> {
    pub fn day(self) -> Option<&'a Day> {
        match self {
            GridItem::Day(day) => Some(day),
            GridItem::Blank => None,
        }
    }
}

/// Locate `date` in an ordered run of months.
pub fn index_path_in<'a, I>(months: I, date: NaiveDate) -> Option<IndexPath>
where
    I: IntoIterator<Item = &'a Month>,
{
    months
        .into_iter()
        .enumerate()
        .find(|(_, month)| month.contains(date))
        .and_then(|(section, month)| {
            month
                .grid_index(date)
                .map(|item| IndexPath::new(section, item))
        })
}

/// Content at `index` of `month`, or `None` past the end of the grid.
pub fn grid_item(month: &Month, index: usize) -> Option<GridItem<'_>> {
    if index >= month.grid_item_count() {
        return None;
    }
    Some(month.day_at(index).map_or(GridItem::Blank, GridItem::Day))
}
