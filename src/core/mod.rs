pub mod date;
pub mod event;
pub mod event_queue;
pub mod listeners;
pub mod mode;

pub use event::{CalendarEvent, TimePickerEvent};
pub use listeners::{Listeners, SubscriptionId};
pub use mode::{DisplayMode, ViewMode};
