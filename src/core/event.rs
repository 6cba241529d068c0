use crate::core::mode::{DisplayMode, ViewMode};
use chrono::{NaiveDate, NaiveTime};

/// Notifications raised by the calendar widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarEvent {
    DateSelected(NaiveDate),
    DateDeselected(NaiveDate),
    RangeSelected { start: NaiveDate, end: NaiveDate },
    RangeCleared,
    MonthChanged(NaiveDate),
    YearChanged(NaiveDate),
    ViewModeChanged(ViewMode),
    DisplayModeChanged(DisplayMode),
    CultureChanged(String),
    StyleChanged,
}

/// Notifications raised by the time picker widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimePickerEvent {
    TimeSelected(NaiveTime),
    PopupOpened,
    PopupClosed,
}
