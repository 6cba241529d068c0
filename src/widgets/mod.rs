pub mod base;
pub mod calendar;
pub mod time_picker;
pub mod traits;
