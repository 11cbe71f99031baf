pub mod calendar_view;
pub mod dialogs;
pub mod layout;
pub mod theme;
pub mod toolbar;
pub mod weekdays;
